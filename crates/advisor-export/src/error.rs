//! Error types for conversation export operations

use thiserror::Error;

/// Export pipeline specific errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PDF assembly failed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::Pdf("font missing".to_string());
        assert_eq!(err.to_string(), "PDF error: font missing");
    }
}
