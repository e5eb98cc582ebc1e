//! Lyric change listener

use crate::models::LyricLine;

/// Receives the active line once per update while a line is active.
///
/// Called every tick, not only when the active line changes.
pub trait LyricListener {
    fn on_lyric_change(&mut self, text: &str, line: &LyricLine);
}

impl<F> LyricListener for F
where
    F: FnMut(&str, &LyricLine),
{
    fn on_lyric_change(&mut self, text: &str, line: &LyricLine) {
        self(text, line)
    }
}
