//! LRC Player WASM API
//!
//! The JavaScript-facing surface of the player.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and JsValue conversions
//! - `browser`: `performance.now()` clock and `requestAnimationFrame` scheduler
//! - `player`: the exported `LrcPlayer` class

pub mod helpers;
pub mod browser;
pub mod player;

pub use browser::{AnimationFrameScheduler, PerformanceClock};
pub use player::WasmLrcPlayer;
