//! Registry error types
//!
//! Error types for slot registry operations.

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// All slots are allocated. Slots are never freed, so this is permanent.
    CapacityExceeded {
        /// The configured maximum, reported back to the caller
        max: u32,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::CapacityExceeded { max } => {
                write!(f, "stream capacity exceeded (max {})", max)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
