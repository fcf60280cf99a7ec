//! Contract error types for the ward profile service
//!
//! These errors are transport-agnostic and used for in-process communication.

/// Ward profile domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Record, facility or media item not found
    NotFound {
        /// Resource type (record, facility, media)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// A record with the same (ward, dimensions) key already exists
    Conflict {
        /// Human-readable conflict description
        reason: String,
    },
    /// Validation error on submitted fields
    Validation {
        /// Validation error message
        message: String,
    },
    /// Unknown survey domain code
    UnknownDomain {
        /// The offending code
        code: String,
    },
    /// Internal error
    Internal,
}

impl ProfileError {
    /// Conflict against an existing record, described by its key.
    pub fn duplicate(key: &crate::contract::RecordKey) -> Self {
        Self::Conflict {
            reason: format!(
                "a {} record already exists for {}",
                key.domain.code(),
                key.describe()
            ),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Conflict { reason } => {
                write!(f, "Conflict: {}", reason)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::UnknownDomain { code } => {
                write!(f, "Unknown survey domain: {}", code)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for ProfileError {}
