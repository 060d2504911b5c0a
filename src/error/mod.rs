//! Error types.
//!
//! | Type | Raised by | Surfaced as |
//! |------|-----------|-------------|
//! | [`ClientError`] | data client calls inside a view refresh | dismissible error overlay |
//! | [`ConfigError`] | configuration loading before the TUI starts | stderr, exit status 1 |
//!
//! Refresh failures never propagate past the controller; see `app::refresh`.

mod network;

pub use network::{server_message, status_code, status_message};

use std::path::PathBuf;

use crate::traits::HttpError;

/// Failure of one Data API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, bad URL).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("{}", describe_status(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// The body did not match the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

fn describe_status(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("{}: {} (HTTP {})", status_message(*status), detail, status),
        None => format!("{} (HTTP {})", status_message(*status), status),
    }
}

impl ClientError {
    /// Short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Http(HttpError::Timeout(_)) => "E_NET_TIMEOUT",
            ClientError::Http(HttpError::ConnectionFailed(_)) => "E_NET_CONN",
            ClientError::Http(_) => "E_NET_OTHER",
            ClientError::Status { status, .. } => status_code(*status),
            ClientError::Decode(_) => "E_API_DECODE",
        }
    }
}

/// Failure to assemble a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("auth token is required. Set it using --auth-token flag or HONEYBADGER_AUTH_TOKEN environment variable")]
    MissingAuthToken,
}
