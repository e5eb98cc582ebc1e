//! Browser clock and frame scheduler
//!
//! `performance.now()` as the monotonic clock, `requestAnimationFrame` as
//! the display-refresh scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

use crate::playback::{Clock, FrameHandle, FrameScheduler, PlayerError};
use crate::renderers::RenderError;

/// Callback invoked by `requestAnimationFrame` with the frame timestamp
pub type FrameCallback = Closure<dyn FnMut(f64)>;

fn window() -> Result<Window, RenderError> {
    web_sys::window().ok_or_else(|| RenderError::HostUnavailable("no global window".to_string()))
}

pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn from_window() -> Result<Self, PlayerError> {
        let performance = window()?
            .performance()
            .ok_or_else(|| RenderError::HostUnavailable("window.performance missing".to_string()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}

/// `requestAnimationFrame` scheduler.
///
/// The callback is installed after the player exists, since it has to reach
/// back into it.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrameScheduler {
    pub fn from_window() -> Result<Self, PlayerError> {
        Ok(Self {
            window: window()?,
            callback: Rc::new(RefCell::new(None)),
        })
    }

    pub fn install(&self, callback: FrameCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, PlayerError> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| PlayerError::Schedule("no frame callback installed".to_string()))?;

        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| PlayerError::Schedule(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}
