//! Shared fixture for slider integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tessera::prelude::*;
use tessera_core::global_registry;

/// Install a test subscriber once so `RUST_LOG`-style output shows up with
/// `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Per-test scope owning at most one slider. Dropping the fixture destroys
/// the slider and checks its handle was released.
#[derive(Default)]
pub struct SliderFixture {
    slider: Option<Slider>,
}

impl SliderFixture {
    pub fn setup() -> Self {
        init_tracing();
        Self::default()
    }

    /// Create the slider under test, destroying any previous one.
    pub fn create(&mut self, minimum: i32, maximum: i32) -> &mut Slider {
        self.teardown();
        self.slider.insert(Slider::new(minimum, maximum))
    }

    /// The slider under test.
    pub fn slider(&mut self) -> &mut Slider {
        self.slider.as_mut().expect("create() must be called first")
    }

    fn teardown(&mut self) {
        if let Some(slider) = self.slider.take() {
            let id = slider.control_id();
            slider.destroy();
            if !std::thread::panicking() {
                assert!(!global_registry().contains(id), "slider handle leaked");
            }
        }
    }
}

impl Drop for SliderFixture {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Counts how often a slider handler ran.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> impl Fn(&Slider) + Send + Sync + use<> {
        let count = self.0.clone();
        move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
