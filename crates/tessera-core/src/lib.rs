//! Core systems for Tessera.
//!
//! This crate provides the foundational pieces the Tessera controls are built on:
//!
//! - **Control Registry**: Stable handles for live controls and their lifecycle
//! - **Signal/Slot System**: Multi-subscriber change notification
//! - **Callbacks**: Single replaceable handlers such as a slider's `on_changed`
//! - **Logging**: Per-subsystem `tracing` targets and timing spans
//!
//! # Signal Example
//!
//! ```
//! use tessera_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod callback;
mod error;
pub mod logging;
pub mod registry;
pub mod signal;

pub use callback::Callback;
pub use error::{CoreError, Result};
pub use logging::PerfSpan;
pub use registry::{ControlId, ControlRegistry, SharedControlRegistry, global_registry};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
