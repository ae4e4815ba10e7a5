//! Error types for the documentation generation crate.

use thiserror::Error;
use vellum_schema::SchemaError;

/// Errors that can occur during documentation generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to serialize the document to JSON.
    #[error("Failed to serialize documentation document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A validation schema could not be converted to a fragment.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error() {
        let err: DocsError = serde_json::from_str::<String>("invalid")
            .unwrap_err()
            .into();
        assert!(matches!(err, DocsError::Serialization(_)));
        assert!(err.to_string().contains("serialize"));
    }

    #[test]
    fn test_schema_error_passes_through() {
        let err: DocsError = SchemaError::Conversion {
            reason: "unsupported type".to_string(),
        }
        .into();
        assert!(err.to_string().contains("unsupported type"));
    }
}
