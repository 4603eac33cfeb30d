//! Navigation configuration errors
//!
//! The navigation core itself has no runtime error path: bad geographic input
//! propagates as NaN. The only failure is a misconfigured target catalog,
//! reported once at construction before any tick runs.

use core::fmt;

/// Errors raised while building the navigation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Catalog was constructed without any targets
    EmptyCatalog,
    /// Catalog holds more targets than it has room for
    CatalogFull {
        /// Maximum number of targets
        capacity: usize,
    },
    /// Target name does not fit the name buffer
    NameTooLong {
        /// Length of the rejected name in bytes
        len: usize,
        /// Maximum name length in bytes
        max: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyCatalog => write!(f, "Target catalog is empty"),
            ConfigurationError::CatalogFull { capacity } => {
                write!(f, "Target catalog full ({} targets max)", capacity)
            }
            ConfigurationError::NameTooLong { len, max } => {
                write!(f, "Target name is {} bytes (max {})", len, max)
            }
        }
    }
}
