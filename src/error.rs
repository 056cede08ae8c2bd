//! Error types for loading inspection data.

use thiserror::Error;

/// The single message shown to the user whenever the data file is unavailable.
pub const DATA_UNAVAILABLE: &str = "Could not load inspection data file. Showing no results.";

/// Reasons the inspection data could not be loaded.
///
/// The variants exist for logging only; the user sees [`DATA_UNAVAILABLE`]
/// for all of them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response status {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("malformed inspection data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read inspection data: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// The user-visible message; identical for every variant.
    pub fn user_message(&self) -> &'static str {
        DATA_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_share_user_message() {
        let errors = vec![
            LoadError::Network("offline".to_string()),
            LoadError::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            },
            LoadError::Parse(serde_json::from_str::<Vec<u8>>("{").unwrap_err()),
            LoadError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];
        for e in &errors {
            assert_eq!(e.user_message(), DATA_UNAVAILABLE);
        }
    }

    #[test]
    fn test_display_keeps_cause() {
        let e = LoadError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unexpected response status 500 Internal Server Error"
        );
    }
}
