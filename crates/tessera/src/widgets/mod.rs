//! Concrete controls.

mod slider;
mod slider_config;

pub use slider::{Slider, SliderAction};
pub use slider_config::SliderConfig;
