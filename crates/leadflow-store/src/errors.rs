//! Error handling for leadflow-store
//!
//! Wraps leadflow-core ExError with store-specific helpers

use leadflow_core::errors::{ExError, ExErrorKind, LeadFlowError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Lift a domain error raised while loading a seed
pub fn from_domain(operation: &str, err: LeadFlowError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}

/// Create a serialization error
pub fn serialization(operation: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_validation_kind() {
        let err = seed_validation("bad");
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("seed_parse"));
    }

    #[test]
    fn test_from_domain_keeps_kind() {
        let err = from_domain(
            "seed_load",
            LeadFlowError::RuleAlreadyExists {
                rule_id: "r1".to_string(),
            },
        );
        assert_eq!(err.code(), "ERR_ALREADY_EXISTS");
        assert_eq!(err.op(), Some("seed_load"));
        assert_eq!(err.entity_id(), Some("r1"));
    }
}
