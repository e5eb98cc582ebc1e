//! Lyric text parsing
//!
//! Converts raw LRC-style text into time-ordered `LyricLine`s.

pub mod lrc;

pub use lrc::{parse_lrc, parse_time_tag};
