//! HTTP status classification for Data API failures.

/// Get a user-facing explanation for a non-2xx status.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid",
        401 => "Authentication failed. Check your auth token",
        403 => "Access denied. Your token lacks permission for this resource",
        404 => "The requested resource was not found",
        408 => "The server timed out waiting for the request",
        422 => "The request was rejected by the server",
        429 => "Too many requests. Wait a moment and refresh",
        500..=599 => "The server is experiencing issues. Try again later",
        _ => "The server returned an unexpected response",
    }
}

/// Get a short error code for logging.
pub fn status_code(status: u16) -> &'static str {
    match status {
        401 | 403 => "E_API_AUTH",
        404 => "E_API_NOT_FOUND",
        408 | 429 => "E_API_RATE",
        500..=599 => "E_API_SERVER",
        _ => "E_API_HTTP",
    }
}

/// Pull a server-provided message out of an error body.
///
/// Honeybadger answers with `{"errors": "..."}`; other servers may use
/// `{"error": "..."}`. Anything else yields `None`.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let field = value.get("errors").or_else(|| value.get("error"))?;
    match field {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert!(status_message(401).contains("auth token"));
        assert!(status_message(404).contains("not found"));
        assert!(status_message(503).contains("server"));
        assert_eq!(status_message(418), "The server returned an unexpected response");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(status_code(401), "E_API_AUTH");
        assert_eq!(status_code(429), "E_API_RATE");
        assert_eq!(status_code(502), "E_API_SERVER");
        assert_eq!(status_code(400), "E_API_HTTP");
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(br#"{"errors": "Invalid token"}"#),
            Some("Invalid token".to_string())
        );
        assert_eq!(
            server_message(br#"{"error": "Unauthorized"}"#),
            Some("Unauthorized".to_string())
        );
        assert_eq!(
            server_message(br#"{"errors": ["a", "b"]}"#),
            Some("a, b".to_string())
        );
        assert_eq!(server_message(b"<html>"), None);
        assert_eq!(server_message(br#"{"errors": ""}"#), None);
    }
}
