use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Export write failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl ContentError {
    pub(crate) fn empty_topic() -> Self {
        ContentError::Validation {
            field: "topic",
            reason: "topic must not be empty".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ContentError::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// Rejects empty and whitespace-only topics.
pub(crate) fn require_topic(topic: &str) -> Result<()> {
    if topic.trim().is_empty() {
        return Err(ContentError::empty_topic());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_topic_rejects_blank() {
        assert!(require_topic("").unwrap_err().is_validation());
        assert!(require_topic("   \t\n").unwrap_err().is_validation());
        assert!(require_topic("rust").is_ok());
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = ContentError::empty_topic();
        assert_eq!(err.to_string(), "Invalid topic: topic must not be empty");
    }
}
