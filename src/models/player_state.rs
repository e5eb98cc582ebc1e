//! Playback state
//!
//! Times are monotonic clock readings in milliseconds, elapsed values are
//! in seconds.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    /// Whether the frame loop is running
    pub is_playing: bool,

    /// Clock reading such that `elapsed = (now - start_time) / 1000`
    pub start_time: Option<f64>,

    /// Elapsed seconds recorded by the last pause or seek
    pub paused_elapsed: Option<f64>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed seconds at clock reading `now_ms`, if playback was ever started
    pub fn elapsed_at(&self, now_ms: f64) -> Option<f64> {
        self.start_time.map(|start| (now_ms - start) / 1000.0)
    }

    /// Move the start reference so that elapsed equals `seconds` at `now_ms`
    pub fn anchor(&mut self, now_ms: f64, seconds: f64) {
        self.start_time = Some(now_ms - seconds * 1000.0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
