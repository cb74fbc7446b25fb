//! Declarative slider configuration.
//!
//! A [`SliderConfig`] describes a slider's initial state and can be loaded
//! from TOML:
//!
//! ```
//! use tessera::widgets::{Slider, SliderConfig};
//!
//! let config = SliderConfig::from_toml_str(r#"
//!     minimum = -10
//!     maximum = 10
//!     value = 3
//!     has_tool_tip = false
//! "#).unwrap();
//!
//! let slider = Slider::from_config(&config).unwrap();
//! assert_eq!(slider.value(), 3);
//! assert!(!slider.has_tool_tip());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Initial state for a [`Slider`](super::Slider).
///
/// Missing fields take their defaults: range `0..=100`, value at the lower
/// bound, tooltip on, single step 1, page step 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Lower bound (swapped with `maximum` if greater).
    pub minimum: i32,
    /// Upper bound.
    pub maximum: i32,
    /// Initial value, clamped into the range. Defaults to the lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    /// Whether the value tooltip is shown.
    pub has_tool_tip: bool,
    /// Single step size, at least 1.
    pub single_step: i32,
    /// Page step size, at least 1.
    pub page_step: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            value: None,
            has_tool_tip: true,
            single_step: 1,
            page_step: 10,
        }
    }
}

impl SliderConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check the fields a slider cannot clamp on its own.
    pub fn validate(&self) -> Result<()> {
        if self.single_step < 1 {
            return Err(Error::invalid_config(
                "single_step",
                format!("must be at least 1, got {}", self.single_step),
            ));
        }
        if self.page_step < 1 {
            return Err(Error::invalid_config(
                "page_step",
                format!("must be at least 1, got {}", self.page_step),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SliderConfig::from_toml_str("").unwrap();
        assert_eq!(config, SliderConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = SliderConfig::from_toml_str("maximum = 1").unwrap();
        assert_eq!(config.minimum, 0);
        assert_eq!(config.maximum, 1);
        assert_eq!(config.value, None);
        assert!(config.has_tool_tip);
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = SliderConfig::from_toml_str("single_step = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig {
                field: "single_step",
                ..
            }
        ));

        let err = SliderConfig::from_toml_str("page_step = -1").unwrap_err();
        assert!(err.to_string().contains("page_step"));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = SliderConfig::from_toml_str("orientation = \"vertical\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err = SliderConfig::from_toml_str("minimum = \"zero\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_serialize_then_parse() {
        let config = SliderConfig {
            minimum: -2,
            maximum: 2,
            value: Some(1),
            has_tool_tip: false,
            single_step: 1,
            page_step: 2,
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("value = 1"));
        assert_eq!(SliderConfig::from_toml_str(&text).unwrap(), config);
    }
}
