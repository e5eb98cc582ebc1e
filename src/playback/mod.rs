//! Playback engine
//!
//! Tracks elapsed time against a monotonic clock, drives a per-frame
//! update loop and maps elapsed time to the active lyric line.

pub mod clock;
pub mod scheduler;
pub mod listener;
pub mod errors;
pub mod player;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, PlaybackClock};
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, ManualScheduler};
pub use listener::LyricListener;
pub use errors::PlayerError;
pub use player::LyricPlayer;
