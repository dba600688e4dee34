use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// The backing world state could not be read or written.
    Store,
    NotFound,
    AlreadyExists,
    /// The caller's organization may not perform the requested operation.
    Unauthorized,
    /// A payload could not be encoded or decoded. Treated as a data-integrity fault.
    Serialization,
    /// The caller's organization could not be resolved.
    Identity,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Store => write!(f, "Failed to access world state"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::AlreadyExists => write!(f, "Entity already exists"),
            KernelError::Unauthorized => write!(f, "Caller is not authorized"),
            KernelError::Serialization => write!(f, "Failed to (de)serialize world state data"),
            KernelError::Identity => write!(f, "Failed to resolve caller identity"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
