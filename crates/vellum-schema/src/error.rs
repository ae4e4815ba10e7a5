//! Error type for validation-schema conversion.

use thiserror::Error;

/// Errors raised by [`DocumentSchema`](crate::DocumentSchema) implementations.
///
/// Conversion runs at startup, on the documentation path only, so failures
/// are surfaced to the caller unchanged rather than recovered from.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The validation schema could not be converted to a fragment.
    #[error("Failed to convert validation schema: {reason}")]
    Conversion {
        /// Why the conversion failed.
        reason: String,
    },

    /// The validation library uses a construct with no documentation shape.
    #[error("Unsupported validation construct: {construct}")]
    Unsupported {
        /// The construct that has no fragment representation.
        construct: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_message() {
        let err = SchemaError::Conversion {
            reason: "circular reference".to_string(),
        };
        assert!(err.to_string().contains("circular reference"));
    }

    #[test]
    fn test_unsupported_error_message() {
        let err = SchemaError::Unsupported {
            construct: "alternatives".to_string(),
        };
        assert!(err.to_string().contains("alternatives"));
    }
}
