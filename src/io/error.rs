//! Error types for wall queries and driver operations

use std::fmt;

/// Main error type for all wall counting operations
///
/// An untileable width is not an error: it is reported as
/// [`WallCount::Unsatisfiable`](crate::algorithm::executor::WallCount::Unsatisfiable).
#[derive(Debug)]
pub enum WallError {
    /// Query parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },

    /// Writing a result line failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write result: {source}")
            }
        }
    }
}

impl std::error::Error for WallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WallError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for wall counting results
pub type Result<T> = std::result::Result<T, WallError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallError {
    WallError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> WallError {
    WallError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
