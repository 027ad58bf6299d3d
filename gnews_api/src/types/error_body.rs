use serde::{Deserialize, Serialize};

/// Error payload returned by the API in place of an article list.
///
/// The API reports failures either as `{"errors": [..]}` or as
/// `{"message": ".."}`; both are accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorBody {
    /// Human readable message, preferring `message` over the `errors` list.
    pub fn text(&self) -> Option<String> {
        match &self.message {
            Some(message) if !message.is_empty() => Some(message.clone()),
            _ if !self.errors.is_empty() => Some(self.errors.join("; ")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorBody;

    #[test]
    fn text_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"invalid api key","errors":["x"]}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("invalid api key"));
    }

    #[test]
    fn text_joins_errors() {
        let body: ErrorBody = serde_json::from_str(r#"{"errors":["a","b"]}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("a; b"));
        assert_eq!(ErrorBody::default().text(), None);
    }
}
