//! Errors surfaced by the hosted table.

/// Shown when a remote error carries no message of its own.
pub const GENERIC_MESSAGE: &str = "An error occurred";

/// A failed call to the remote table. Rendered inline as a flat message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The service answered with a structured error body.
    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
        details: Option<String>,
        hint: Option<String>,
    },
    /// The service answered with an error status and no readable body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// The response body did not match the expected rows.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Build an API error that only carries a message.
    pub fn message(message: impl Into<String>) -> Self {
        RemoteError::Api {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    /// Text for the inline error banner.
    pub fn display_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            text
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_uses_error_text() {
        assert_eq!(RemoteError::message("network down").display_message(), "network down");
        assert_eq!(
            RemoteError::Status(503).display_message(),
            "request failed with status 503"
        );
    }

    #[test]
    fn test_display_message_falls_back_when_empty() {
        assert_eq!(RemoteError::message("").display_message(), GENERIC_MESSAGE);
        assert_eq!(RemoteError::Transport("  ".into()).display_message(), GENERIC_MESSAGE);
    }
}
