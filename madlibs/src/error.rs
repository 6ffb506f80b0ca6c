//! Error types for the game pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while playing a round
#[derive(Debug, Error)]
pub enum MadLibError {
    #[error("Failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input closed")]
    InputClosed,

    #[error("Readline error: {0}")]
    Readline(String),

    #[error("No answer left for placeholder <{name}> on line {line}")]
    MissingAnswer { line: usize, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for game operations
pub type Result<T> = std::result::Result<T, MadLibError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_read_message() {
        let err = MadLibError::TemplateRead {
            path: PathBuf::from("/tmp/story.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/tmp/story.txt"));
    }

    #[test]
    fn test_missing_answer_message() {
        let err = MadLibError::MissingAnswer {
            line: 3,
            name: "noun".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("<noun>"));
        assert!(msg.contains("3"));
    }
}
