//! Parameter store errors

use core::fmt;

/// Errors raised while registering or overriding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name does not fit the key buffer
    NameTooLong,
    /// No parameter registered under this name
    Unknown,
    /// No room left for another parameter
    StoreFull,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NameTooLong => write!(f, "Parameter name too long"),
            ParameterError::Unknown => write!(f, "Unknown parameter"),
            ParameterError::StoreFull => write!(f, "Parameter store full"),
        }
    }
}
