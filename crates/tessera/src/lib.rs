//! Tessera: bounded value controls.
//!
//! The main type is [`Slider`](widgets::Slider), an integer control whose
//! value always stays inside its `[minimum, maximum]` range. Writes are
//! clamped rather than rejected, and observers are told about every real
//! change through a single replaceable `on_changed` callback and the
//! multi-subscriber `value_changed` signal.
//!
//! # Example
//!
//! ```
//! use tessera::prelude::*;
//!
//! let mut slider = Slider::new(0, 10);
//! slider.set_on_changed(|s| println!("now {}", s.value()));
//!
//! slider.set_value(42);
//! assert_eq!(slider.value(), 10);
//!
//! slider.set_range(-5, -1);
//! assert_eq!(slider.value(), -1);
//! ```

pub mod control;
mod error;
pub mod widgets;

pub use control::{Control, ControlBase};
pub use error::{Error, Result};

/// Commonly used types.
pub mod prelude {
    pub use crate::control::{Control, ControlBase};
    pub use crate::widgets::{Slider, SliderAction, SliderConfig};
    pub use crate::{Error, Result};
    pub use tessera_core::{Callback, ControlId, Signal};
}
