//! Error types for HotelForge

use thiserror::Error;

/// Main error type for a solve call.
///
/// All variants are terminal for the call that produced them; callers may
/// resubmit the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed or missing request data, detected before any solving work.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A constraint template or tenant override failed validation.
    #[error("Configuration error in constraint '{code}': {message}")]
    Configuration { code: String, message: String },

    /// Unexpected failure during scoring or search.
    #[error("Internal solver error: {0}")]
    Internal(String),
}

impl SolverError {
    pub fn validation(message: impl Into<String>) -> Self {
        SolverError::Validation(message.into())
    }

    pub fn configuration(code: impl Into<String>, message: impl Into<String>) -> Self {
        SolverError::Configuration {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        SolverError::Internal(message.into())
    }

    /// HTTP-equivalent status for boundary layers.
    pub fn http_status(&self) -> u16 {
        match self {
            SolverError::Validation(_) | SolverError::Configuration { .. } => 400,
            SolverError::Internal(_) => 500,
        }
    }
}

/// Result type alias for HotelForge operations
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_code() {
        let err = SolverError::configuration("high_floor_preference", "min_floor out of range");
        assert_eq!(
            err.to_string(),
            "Configuration error in constraint 'high_floor_preference': min_floor out of range"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(SolverError::validation("rooms empty").http_status(), 400);
        assert_eq!(SolverError::configuration("x", "y").http_status(), 400);
        assert_eq!(SolverError::internal("boom").http_status(), 500);
    }
}
