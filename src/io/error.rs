//! Error types for the command-line driver
//!
//! The sampler itself never fails: running out of room is reported as
//! [`Draw::Exhausted`](crate::algorithm::sampler::Draw::Exhausted). Errors
//! only arise from validating user input and summarising runs.

use std::fmt;

/// Main error type for driver operations
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Driver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A summary could not be computed from the collected samples
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SamplerError {
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
        }
    }
}

impl std::error::Error for SamplerError {}

/// Convenience type alias for driver results
pub type Result<T> = std::result::Result<T, SamplerError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SamplerError {
    SamplerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SamplerError {
    SamplerError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
