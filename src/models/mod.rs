//! Models module for the LRC player
//!
//! This module contains the data models shared by the parser, the
//! renderer and the playback engine.

pub mod lyric;
pub mod config;
pub mod player_state;

// Re-export commonly used types
pub use lyric::LyricLine;
pub use config::PlayerConfig;
pub use player_state::PlayerState;
