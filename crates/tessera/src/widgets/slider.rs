//! Slider control implementation.
//!
//! This module provides [`Slider`], an integer control whose value is kept
//! inside a closed `[minimum, maximum]` range.
//!
//! # Example
//!
//! ```
//! use tessera::widgets::Slider;
//!
//! let mut slider = Slider::new(0, 100).with_value(50);
//!
//! slider.set_on_changed(|s| {
//!     println!("Value: {}", s.value());
//! });
//!
//! slider.set_value(150);
//! assert_eq!(slider.value(), 100);
//! ```

use tessera_core::{Callback, PerfSpan, Signal, logging::targets};

use crate::control::{Control, ControlBase};
use crate::error::Result;

use super::SliderConfig;

const TARGET: &str = targets::SLIDER;

/// A user-level step a backend forwards to the slider (arrow keys, page
/// keys, Home/End).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderAction {
    /// Increase by one single step.
    SingleStepAdd,
    /// Decrease by one single step.
    SingleStepSub,
    /// Increase by one page step.
    PageStepAdd,
    /// Decrease by one page step.
    PageStepSub,
    /// Jump to the minimum.
    ToMinimum,
    /// Jump to the maximum.
    ToMaximum,
}

/// An integer-valued control constrained to a closed range.
///
/// The value always satisfies `minimum <= value <= maximum`. Writes outside
/// the range are clamped, never rejected. If a range is given with
/// `maximum < minimum` the bounds are swapped.
///
/// # Notifications
///
/// The `on_changed` callback and the `value_changed` signal fire only when
/// the stored value actually changes. Setting the current value, or a value
/// that clamps onto the current value, is silent.
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the value changes
/// - `range_changed((i32, i32))`: Emitted when the bounds change
/// - `slider_pressed()`: Emitted when a drag starts
/// - `slider_moved(i32)`: Emitted when a drag moves the value
/// - `slider_released()`: Emitted when a drag ends
pub struct Slider {
    /// Control base.
    base: ControlBase,

    /// Minimum value.
    minimum: i32,

    /// Maximum value.
    maximum: i32,

    /// Current value.
    value: i32,

    /// Whether the value is shown in a tooltip while interacting.
    has_tool_tip: bool,

    /// Single step size (for arrow keys).
    single_step: i32,

    /// Page step size (for Page Up/Down).
    page_step: i32,

    /// Whether a drag is in progress.
    slider_down: bool,

    /// Handler fired when the value changes.
    on_changed: Callback<Slider>,

    /// Handler fired when a drag ends.
    on_released: Callback<Slider>,

    /// Signal emitted when value changes.
    pub value_changed: Signal<i32>,

    /// Signal emitted when range changes.
    pub range_changed: Signal<(i32, i32)>,

    /// Signal emitted when a drag starts.
    pub slider_pressed: Signal<()>,

    /// Signal emitted while the slider is being dragged.
    pub slider_moved: Signal<i32>,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,
}

/// Order a pair of bounds.
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

impl Slider {
    /// Create a slider over `[minimum, maximum]`.
    ///
    /// The value starts at the lower bound and the tooltip is enabled.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        let (minimum, maximum) = ordered(minimum, maximum);
        let base = ControlBase::new::<Self>();
        tracing::debug!(target: TARGET, id = ?base.id(), minimum, maximum, "slider created");

        Self {
            base,
            minimum,
            maximum,
            value: minimum,
            has_tool_tip: true,
            single_step: 1,
            page_step: 10,
            slider_down: false,
            on_changed: Callback::new(),
            on_released: Callback::new(),
            value_changed: Signal::new(),
            range_changed: Signal::new(),
            slider_pressed: Signal::new(),
            slider_moved: Signal::new(),
            slider_released: Signal::new(),
        }
    }

    /// Create a slider from a configuration.
    pub fn from_config(config: &SliderConfig) -> Result<Self> {
        config.validate()?;
        let mut slider = Self::new(config.minimum, config.maximum)
            .with_single_step(config.single_step)
            .with_page_step(config.page_step)
            .with_has_tool_tip(config.has_tool_tip);
        if let Some(value) = config.value {
            slider.set_value_silent(value);
        }
        Ok(slider)
    }

    /// Snapshot the slider's state as a configuration.
    pub fn to_config(&self) -> SliderConfig {
        SliderConfig {
            minimum: self.minimum,
            maximum: self.maximum,
            value: Some(self.value),
            has_tool_tip: self.has_tool_tip(),
            single_step: self.single_step,
            page_step: self.page_step,
        }
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Set the minimum value.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.set_range(minimum, self.maximum);
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Set the maximum value.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.set_range(self.minimum, maximum);
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current value.
    ///
    /// The value is clamped to `[minimum, maximum]`. Notifications fire only
    /// if the stored value changed.
    pub fn set_value(&mut self, value: i32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        if self.store_value(clamped) {
            self.notify_value_changed();
        }
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the current value without notifying anyone.
    pub fn set_value_silent(&mut self, value: i32) {
        self.store_value(value.clamp(self.minimum, self.maximum));
    }

    /// Set the value range and re-clamp the current value into it.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (min, max) = ordered(minimum, maximum);
        if self.minimum == min && self.maximum == max {
            return;
        }

        self.minimum = min;
        self.maximum = max;
        tracing::trace!(target: TARGET, id = ?self.base.id(), min, max, "range changed");
        self.range_changed.emit((min, max));

        if self.store_value(self.value.clamp(min, max)) {
            self.notify_value_changed();
        }
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    fn store_value(&mut self, value: i32) -> bool {
        if self.value == value {
            return false;
        }
        tracing::trace!(target: TARGET, id = ?self.base.id(), old = self.value, new = value, "value changed");
        self.value = value;
        true
    }

    fn notify_value_changed(&self) {
        let _span = PerfSpan::new("slider.notify_value_changed");
        self.value_changed.emit(self.value);
        self.on_changed.invoke(self);
    }

    // =========================================================================
    // Tooltip
    // =========================================================================

    /// Whether the slider shows its value in a tooltip.
    pub fn has_tool_tip(&self) -> bool {
        self.has_tool_tip
    }

    /// Enable or disable the value tooltip.
    pub fn set_has_tool_tip(&mut self, has_tool_tip: bool) {
        if self.has_tool_tip != has_tool_tip {
            self.has_tool_tip = has_tool_tip;
            tracing::trace!(target: TARGET, id = ?self.base.id(), has_tool_tip, "tooltip toggled");
        }
    }

    /// Set tooltip flag using builder pattern.
    pub fn with_has_tool_tip(mut self, has_tool_tip: bool) -> Self {
        self.set_has_tool_tip(has_tool_tip);
        self
    }

    /// The text the tooltip shows, or `None` when the tooltip is disabled.
    pub fn tool_tip_text(&self) -> Option<String> {
        self.has_tool_tip().then(|| self.value.to_string())
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Register the change handler, replacing any previous one.
    ///
    /// The handler is not called at registration. Context the handler needs
    /// is captured by the closure.
    pub fn set_on_changed<F>(&mut self, handler: F)
    where
        F: Fn(&Slider) + Send + Sync + 'static,
    {
        self.on_changed.set(handler);
    }

    /// Remove the change handler.
    pub fn clear_on_changed(&mut self) {
        self.on_changed.clear();
    }

    /// Register the handler fired when a drag ends, replacing any previous one.
    pub fn set_on_released<F>(&mut self, handler: F)
    where
        F: Fn(&Slider) + Send + Sync + 'static,
    {
        self.on_released.set(handler);
    }

    /// Remove the release handler.
    pub fn clear_on_released(&mut self) {
        self.on_released.clear();
    }

    // =========================================================================
    // Step Sizes
    // =========================================================================

    /// Get the single step size.
    pub fn single_step(&self) -> i32 {
        self.single_step
    }

    /// Set the single step size (at least 1).
    pub fn set_single_step(&mut self, step: i32) {
        self.single_step = step.max(1);
    }

    /// Set single step using builder pattern.
    pub fn with_single_step(mut self, step: i32) -> Self {
        self.set_single_step(step);
        self
    }

    /// Get the page step size.
    pub fn page_step(&self) -> i32 {
        self.page_step
    }

    /// Set the page step size (at least 1).
    pub fn set_page_step(&mut self, step: i32) {
        self.page_step = step.max(1);
    }

    /// Set page step using builder pattern.
    pub fn with_page_step(mut self, step: i32) -> Self {
        self.set_page_step(step);
        self
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Apply a user step. Returns `false` if the slider is disabled.
    pub fn trigger_action(&mut self, action: SliderAction) -> bool {
        if !self.is_enabled() {
            return false;
        }

        let target = match action {
            SliderAction::SingleStepAdd => self.value.saturating_add(self.single_step),
            SliderAction::SingleStepSub => self.value.saturating_sub(self.single_step),
            SliderAction::PageStepAdd => self.value.saturating_add(self.page_step),
            SliderAction::PageStepSub => self.value.saturating_sub(self.page_step),
            SliderAction::ToMinimum => self.minimum,
            SliderAction::ToMaximum => self.maximum,
        };
        self.set_value(target);
        true
    }

    /// Whether a drag is in progress.
    pub fn is_slider_down(&self) -> bool {
        self.slider_down
    }

    /// Start a drag. Returns `false` if disabled or already dragging.
    pub fn press(&mut self) -> bool {
        if !self.is_enabled() || self.slider_down {
            return false;
        }
        self.slider_down = true;
        self.slider_pressed.emit(());
        true
    }

    /// Move the thumb during a drag. Ignored when no drag is in progress.
    pub fn drag_to(&mut self, value: i32) {
        if !self.slider_down {
            return;
        }
        let clamped = value.clamp(self.minimum, self.maximum);
        if self.store_value(clamped) {
            self.slider_moved.emit(clamped);
            self.notify_value_changed();
        }
    }

    /// End a drag, firing `slider_released` and the release handler.
    ///
    /// Returns `false` if no drag was in progress.
    pub fn release(&mut self) -> bool {
        if !self.slider_down {
            return false;
        }
        self.slider_down = false;
        self.slider_released.emit(());
        self.on_released.invoke(self);
        true
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("id", &self.base.id())
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("value", &self.value)
            .field("has_tool_tip", &self.has_tool_tip())
            .finish_non_exhaustive()
    }
}

impl Control for Slider {
    fn control_base(&self) -> &ControlBase {
        &self.base
    }

    fn control_base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider: Send, Sync);
