//! Error types for Tessera controls.

use tessera_core::CoreError;

/// Result type alias for control operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the (infallible) value operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Control registry error.
    #[error("Control error: {0}")]
    Core(#[from] CoreError),

    /// The configuration text could not be parsed.
    #[error("Failed to parse slider configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize slider configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configuration field holds a value the control cannot use.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },
}

impl Error {
    /// Create a configuration value error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
