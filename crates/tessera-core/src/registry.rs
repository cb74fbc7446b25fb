//! Control registry for Tessera.
//!
//! Every control created by the toolkit is registered here and receives a
//! [`ControlId`], a stable handle that stays valid until the control is
//! destroyed. The registry is how the toolkit answers "does this control
//! still exist?" without holding a reference to it.
//!
//! # Key Types
//!
//! - [`ControlId`] - Unique stable identifier for each control
//! - [`ControlRegistry`] - Arena of live controls
//! - [`SharedControlRegistry`] - Thread-safe wrapper around [`ControlRegistry`]
//!
//! # Example
//!
//! ```
//! use tessera_core::registry::SharedControlRegistry;
//!
//! struct Knob;
//!
//! let registry = SharedControlRegistry::new();
//! let id = registry.register::<Knob>();
//! assert!(registry.contains(id));
//!
//! registry.unregister(id).unwrap();
//! assert!(!registry.contains(id));
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::error::{CoreError, Result};

const TARGET: &str = crate::logging::targets::REGISTRY;

new_key_type! {
    /// A unique identifier for a control in the registry.
    ///
    /// `ControlId`s become invalid once the control is destroyed. A destroyed
    /// slot may be reused, but the old id will never match the new occupant.
    pub struct ControlId;
}

impl ControlId {
    /// Convert the id to a raw u64 value for interop with external systems.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Rebuild an id from a raw u64 value produced by [`ControlId::as_raw`].
    ///
    /// This does not check that the control is still registered.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Internal data stored for each live control.
#[derive(Debug)]
struct ControlEntry {
    /// Human-readable name for debugging.
    name: String,
    /// The concrete control type.
    type_name: &'static str,
}

/// The arena of live controls.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: SlotMap<ControlId, ControlEntry>,
}

impl ControlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control of type `T`, returning its handle.
    pub fn register<T: 'static>(&mut self) -> ControlId {
        let type_name = std::any::type_name::<T>();
        let id = self.controls.insert(ControlEntry {
            name: String::new(),
            type_name,
        });
        tracing::debug!(target: TARGET, ?id, type_name, "control registered");
        id
    }

    /// Remove a control from the registry.
    pub fn unregister(&mut self, id: ControlId) -> Result<()> {
        let entry = self
            .controls
            .remove(id)
            .ok_or(CoreError::InvalidControlId(id))?;
        tracing::debug!(target: TARGET, ?id, type_name = entry.type_name, "control unregistered");
        Ok(())
    }

    /// Whether the control is still registered.
    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(id)
    }

    /// The concrete type name the control was registered with.
    pub fn type_name(&self, id: ControlId) -> Result<&'static str> {
        self.entry(id).map(|e| e.type_name)
    }

    /// The control's debug name (empty if never set).
    pub fn name(&self, id: ControlId) -> Result<&str> {
        self.entry(id).map(|e| e.name.as_str())
    }

    /// Set the control's debug name.
    pub fn set_name(&mut self, id: ControlId, name: impl Into<String>) -> Result<()> {
        let entry = self
            .controls
            .get_mut(id)
            .ok_or(CoreError::InvalidControlId(id))?;
        entry.name = name.into();
        Ok(())
    }

    /// Number of live controls.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Handles of all live controls.
    pub fn live_controls(&self) -> Vec<ControlId> {
        self.controls.keys().collect()
    }

    fn entry(&self, id: ControlId) -> Result<&ControlEntry> {
        self.controls.get(id).ok_or(CoreError::InvalidControlId(id))
    }
}

/// A thread-safe, shareable [`ControlRegistry`].
#[derive(Debug, Default)]
pub struct SharedControlRegistry {
    inner: RwLock<ControlRegistry>,
}

impl SharedControlRegistry {
    /// Create an empty shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control of type `T`.
    pub fn register<T: 'static>(&self) -> ControlId {
        self.inner.write().register::<T>()
    }

    /// Remove a control from the registry.
    pub fn unregister(&self, id: ControlId) -> Result<()> {
        self.inner.write().unregister(id)
    }

    /// Whether the control is still registered.
    pub fn contains(&self, id: ControlId) -> bool {
        self.inner.read().contains(id)
    }

    /// The concrete type name the control was registered with.
    pub fn type_name(&self, id: ControlId) -> Result<&'static str> {
        self.inner.read().type_name(id)
    }

    /// The control's debug name.
    pub fn name(&self, id: ControlId) -> Result<String> {
        self.inner.read().name(id).map(str::to_owned)
    }

    /// Set the control's debug name.
    pub fn set_name(&self, id: ControlId, name: impl Into<String>) -> Result<()> {
        self.inner.write().set_name(id, name)
    }

    /// Number of live controls.
    pub fn control_count(&self) -> usize {
        self.inner.read().control_count()
    }

    /// Handles of all live controls.
    pub fn live_controls(&self) -> Vec<ControlId> {
        self.inner.read().live_controls()
    }

    /// Run a closure with read access to the underlying registry.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ControlRegistry) -> R,
    {
        f(&self.inner.read())
    }
}

static GLOBAL_REGISTRY: OnceLock<SharedControlRegistry> = OnceLock::new();

/// The process-wide control registry, created on first use.
pub fn global_registry() -> &'static SharedControlRegistry {
    GLOBAL_REGISTRY.get_or_init(SharedControlRegistry::new)
}

static_assertions::assert_impl_all!(SharedControlRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;
    struct Other;

    #[test]
    fn test_register_and_unregister() {
        let mut registry = ControlRegistry::new();
        let id = registry.register::<Dummy>();

        assert!(registry.contains(id));
        assert_eq!(registry.control_count(), 1);

        registry.unregister(id).unwrap();
        assert!(!registry.contains(id));
        assert_eq!(registry.control_count(), 0);
    }

    #[test]
    fn test_double_unregister_fails() {
        let mut registry = ControlRegistry::new();
        let id = registry.register::<Dummy>();
        registry.unregister(id).unwrap();

        assert_eq!(registry.unregister(id), Err(CoreError::InvalidControlId(id)));
    }

    #[test]
    fn test_stale_id_not_reused() {
        let mut registry = ControlRegistry::new();
        let old = registry.register::<Dummy>();
        registry.unregister(old).unwrap();

        let new = registry.register::<Other>();
        assert_ne!(old, new);
        assert!(!registry.contains(old));
        assert!(registry.type_name(old).is_err());
    }

    #[test]
    fn test_type_name_and_name() {
        let mut registry = ControlRegistry::new();
        let id = registry.register::<Dummy>();

        assert!(registry.type_name(id).unwrap().ends_with("Dummy"));
        assert_eq!(registry.name(id).unwrap(), "");

        registry.set_name(id, "volume").unwrap();
        assert_eq!(registry.name(id).unwrap(), "volume");
    }

    #[test]
    fn test_raw_roundtrip() {
        let mut registry = ControlRegistry::new();
        let id = registry.register::<Dummy>();
        assert_eq!(ControlId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_shared_registry_live_controls() {
        let registry = SharedControlRegistry::new();
        let a = registry.register::<Dummy>();
        let b = registry.register::<Other>();

        let live = registry.live_controls();
        assert_eq!(live.len(), 2);
        assert!(live.contains(&a));
        assert!(live.contains(&b));

        registry.set_name(b, "b").unwrap();
        assert_eq!(registry.name(b).unwrap(), "b");
        assert_eq!(registry.with_read(|r| r.control_count()), 2);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let id = global_registry().register::<Dummy>();
        assert!(global_registry().contains(id));
        global_registry().unregister(id).unwrap();
        assert!(!global_registry().contains(id));
    }
}
