//! Error types for Tessera core.

use crate::registry::ControlId;

/// Errors raised by the control registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The control handle is unknown or the control has been destroyed.
    #[error("Invalid or destroyed control handle {0:?}")]
    InvalidControlId(ControlId),
}

/// A specialized Result type for Tessera core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
