//! Data API host resolution.
//!
//! The reporting API and the Data API live on different hosts for the hosted
//! service. Self-hosted and test endpoints are used as given.

/// Default reporting endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.honeybadger.io";

const HOST_MAP: [(&str, &str); 2] = [
    ("eu-api.honeybadger.io", "eu-app.honeybadger.io"),
    ("api.honeybadger.io", "app.honeybadger.io"),
];

/// Convert a configured endpoint into the Data API base URL (no trailing `/`).
pub fn data_api_base(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');

    let (scheme, rest) = match trimmed.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, trimmed),
    };
    let (host, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    let host = HOST_MAP
        .iter()
        .find(|(from, _)| *from == host)
        .map(|(_, to)| *to)
        .unwrap_or(host);

    match scheme {
        Some(scheme) => format!("{}://{}{}", scheme, host, path),
        None => format!("{}{}", host, path),
    }
}
