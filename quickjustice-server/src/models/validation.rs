//! Validation error types

use std::fmt;

/// Validation error for caller input
///
/// Presence and type of body fields are enforced by deserialization; any
/// required string, including an empty one, is accepted.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// String doesn't match required format (e.g., UUID)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded (missing field, wrong type, bad JSON)
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Malformed { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "invalid UUID format",
        };
        assert_eq!(err.to_string(), "id: invalid UUID format");

        let err = ValidationError::Malformed {
            reason: "missing field `names`".into(),
        };
        assert_eq!(err.to_string(), "invalid request body: missing field `names`");
    }
}
