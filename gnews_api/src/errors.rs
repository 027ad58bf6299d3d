//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP call itself could not be completed (network, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status. `body` is the raw
    /// response text, truncated.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered 2xx but the body was not the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl Error {
    /// Returns the most specific error detail available: the upstream error
    /// body (parsed as JSON when possible) for status failures, otherwise the
    /// error description.
    pub fn detail(&self) -> Value {
        match self {
            Error::HttpStatus { body, .. } if !body.trim().is_empty() => {
                serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.clone()))
            }
            _ => Value::String(self.to_string()),
        }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Error;

    #[test]
    fn detail_prefers_json_body() {
        let err = Error::HttpStatus {
            status: 401,
            body: r#"{"errors":["invalid api key"]}"#.to_string(),
        };
        assert_eq!(err.detail(), json!({"errors": ["invalid api key"]}));
    }

    #[test]
    fn detail_keeps_plain_text_body() {
        let err = Error::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.detail(), json!("Bad Gateway"));
    }

    #[test]
    fn detail_falls_back_to_description() {
        let err = Error::HttpStatus {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.detail(), json!("Request failed with status 503"));

        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.detail(), json!("Request failed: connection refused"));
        assert!(err.is_transport());
    }
}
