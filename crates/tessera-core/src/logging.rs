//! Logging facilities for Tessera.
//!
//! Tessera is instrumented with the `tracing` crate. Nothing is printed unless
//! the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tessera=trace,tessera_core=debug")
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] name the subsystems so they can be filtered
//! individually.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "tessera_core";
    /// Control registry target.
    pub const REGISTRY: &str = "tessera_core::registry";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tessera_core::signal";
    /// Single-slot callback target.
    pub const CALLBACK: &str = "tessera_core::callback";
    /// Control lifecycle target (`tessera` crate).
    pub const CONTROL: &str = "tessera::control";
    /// Slider control target (`tessera` crate).
    pub const SLIDER: &str = "tessera::slider";
    /// Performance spans.
    pub const PERF: &str = "tessera::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring how long an operation, including the callbacks it
/// fires, takes.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span named `name`.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
