//! Lyric line model

use serde::{Deserialize, Serialize};

/// A single cue: one timestamped line of lyric text.
///
/// Lines are produced by the parser and never mutated afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LyricLine {
    /// Cue time in seconds from the logical start of playback
    pub time: f64,

    /// Line text with the time tag removed and whitespace trimmed
    pub text: String,
}

impl LyricLine {
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Index of the active line at `elapsed` seconds.
///
/// The active line is the last one whose `time <= elapsed`. Returns `None`
/// before the first cue. `lines` must be sorted by time.
pub fn active_index(lines: &[LyricLine], elapsed: f64) -> Option<usize> {
    lines
        .partition_point(|line| line.time <= elapsed)
        .checked_sub(1)
}
