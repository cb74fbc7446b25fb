//! Control base and trait.
//!
//! Every Tessera control embeds a [`ControlBase`], which registers the
//! control in the global registry on construction and unregisters it when
//! the control is destroyed or dropped. The [`Control`] trait exposes the
//! state shared by all controls.
//!
//! # Example
//!
//! ```
//! use tessera::control::{Control, ControlBase};
//! use tessera_core::global_registry;
//!
//! struct Knob {
//!     base: ControlBase,
//! }
//!
//! impl Control for Knob {
//!     fn control_base(&self) -> &ControlBase {
//!         &self.base
//!     }
//!
//!     fn control_base_mut(&mut self) -> &mut ControlBase {
//!         &mut self.base
//!     }
//! }
//!
//! let knob = Knob { base: ControlBase::new::<Knob>() };
//! let id = knob.control_id();
//! assert!(global_registry().contains(id));
//!
//! knob.destroy();
//! assert!(!global_registry().contains(id));
//! ```

use tessera_core::{ControlId, global_registry, logging::targets};

use crate::error::Result;

const TARGET: &str = targets::CONTROL;

/// State shared by every control.
#[derive(Debug)]
pub struct ControlBase {
    id: ControlId,
    enabled: bool,
    visible: bool,
    registered: bool,
}

impl ControlBase {
    /// Register a new control of type `T` and return its base.
    pub fn new<T: 'static>() -> Self {
        let id = global_registry().register::<T>();
        Self {
            id,
            enabled: true,
            visible: true,
            registered: true,
        }
    }

    /// The control's registry handle.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The control's debug name (empty if never set or already destroyed).
    pub fn name(&self) -> String {
        global_registry().name(self.id).unwrap_or_default()
    }

    /// Set the control's debug name.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        global_registry().set_name(self.id, name)?;
        Ok(())
    }

    /// Whether the control accepts user interaction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable user interaction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the control is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the control.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Unregister the control. Safe to call more than once.
    fn release(&mut self) {
        if !self.registered {
            return;
        }
        self.registered = false;
        if let Err(err) = global_registry().unregister(self.id) {
            tracing::warn!(target: TARGET, id = ?self.id, %err, "control was already unregistered");
        }
    }
}

impl Drop for ControlBase {
    fn drop(&mut self) {
        self.release();
    }
}

/// Behaviour common to all controls.
pub trait Control: Send + Sync {
    /// Get the control base.
    fn control_base(&self) -> &ControlBase;

    /// Get the control base mutably.
    fn control_base_mut(&mut self) -> &mut ControlBase;

    /// The control's registry handle.
    fn control_id(&self) -> ControlId {
        self.control_base().id()
    }

    /// Whether the control accepts user interaction.
    fn is_enabled(&self) -> bool {
        self.control_base().is_enabled()
    }

    /// Enable or disable user interaction.
    fn set_enabled(&mut self, enabled: bool) {
        self.control_base_mut().set_enabled(enabled);
    }

    /// Whether the control is shown.
    fn is_visible(&self) -> bool {
        self.control_base().is_visible()
    }

    /// Show or hide the control.
    fn set_visible(&mut self, visible: bool) {
        self.control_base_mut().set_visible(visible);
    }

    /// Show the control.
    fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the control.
    fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Destroy the control, releasing its registry handle.
    fn destroy(mut self)
    where
        Self: Sized,
    {
        tracing::debug!(target: TARGET, id = ?self.control_id(), "destroying control");
        self.control_base_mut().release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        base: ControlBase,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                base: ControlBase::new::<Self>(),
            }
        }
    }

    impl Control for Probe {
        fn control_base(&self) -> &ControlBase {
            &self.base
        }

        fn control_base_mut(&mut self) -> &mut ControlBase {
            &mut self.base
        }
    }

    #[test]
    fn test_defaults() {
        let probe = Probe::new();
        assert!(probe.is_enabled());
        assert!(probe.is_visible());
        assert!(global_registry().contains(probe.control_id()));
    }

    #[test]
    fn test_enable_and_visibility() {
        let mut probe = Probe::new();
        probe.set_enabled(false);
        probe.hide();
        assert!(!probe.is_enabled());
        assert!(!probe.is_visible());

        probe.show();
        assert!(probe.is_visible());
    }

    #[test]
    fn test_drop_unregisters() {
        let id = {
            let probe = Probe::new();
            probe.control_id()
        };
        assert!(!global_registry().contains(id));
    }

    #[test]
    fn test_destroy_unregisters_once() {
        let probe = Probe::new();
        let id = probe.control_id();
        probe.destroy();
        assert!(!global_registry().contains(id));
    }

    #[test]
    fn test_name_roundtrip() {
        let probe = Probe::new();
        probe.base.set_name("volume").unwrap();
        assert_eq!(probe.base.name(), "volume");
        assert!(global_registry()
            .type_name(probe.control_id())
            .unwrap()
            .ends_with("Probe"));
    }
}
