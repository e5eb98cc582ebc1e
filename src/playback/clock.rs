//! Playback clock
//!
//! Elapsed time is derived from a monotonic millisecond source and a start
//! reference, so pausing only has to remember the elapsed value and resuming
//! only has to move the reference.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::PlayerState;

/// Monotonic time source in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: f64) -> Self {
        let clock = Self::new();
        clock.set_ms(ms);
        clock
    }

    pub fn set_ms(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance_ms(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn advance_secs(&self, seconds: f64) {
        self.advance_ms(seconds * 1000.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Playback position bookkeeping on top of a `Clock`
#[derive(Debug, Clone)]
pub struct PlaybackClock<C> {
    source: C,
    state: PlayerState,
}

impl<C: Clock> PlaybackClock<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            state: PlayerState::new(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Elapsed seconds, or `None` if playback never started.
    ///
    /// A stopped clock reports its pause point, which does not move.
    pub fn elapsed(&self) -> Option<f64> {
        if !self.state.is_playing {
            if let Some(paused) = self.state.paused_elapsed {
                return Some(paused);
            }
        }
        self.state.elapsed_at(self.source.now_ms())
    }

    /// Start from zero. Returns `false` if already playing.
    pub fn start(&mut self) -> bool {
        if self.state.is_playing {
            return false;
        }
        self.state.is_playing = true;
        self.state.anchor(self.source.now_ms(), 0.0);
        true
    }

    /// Stop and remember the elapsed value.
    ///
    /// A stopped clock keeps its earlier pause point.
    pub fn pause(&mut self) -> Option<f64> {
        if self.state.is_playing {
            self.state.paused_elapsed = self.elapsed();
        }
        self.state.is_playing = false;
        self.state.paused_elapsed
    }

    /// Continue from the pause point, even if already running. Returns
    /// `false` only when there is nothing to resume (never paused).
    pub fn resume(&mut self) -> bool {
        let Some(paused) = self.state.paused_elapsed else {
            return false;
        };
        self.state.is_playing = true;
        self.state.anchor(self.source.now_ms(), paused);
        true
    }

    /// Jump so that elapsed equals `seconds` now; the play state is kept
    /// and the new position becomes the pause point.
    pub fn seek(&mut self, seconds: f64) {
        self.state.anchor(self.source.now_ms(), seconds);
        self.state.paused_elapsed = Some(seconds);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.map_or(false, |a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_elapsed_is_none_before_start() {
        let clock = PlaybackClock::new(ManualClock::starting_at(5_000.0));
        assert_eq!(clock.elapsed(), None);
    }

    #[test]
    fn test_start_counts_from_zero() {
        let source = ManualClock::starting_at(12_345.0);
        let mut clock = PlaybackClock::new(source.clone());

        assert!(clock.start());
        assert!(approx(clock.elapsed(), 0.0));

        source.advance_ms(1_500.0);
        assert!(approx(clock.elapsed(), 1.5));

        // second start is ignored and does not rewind
        assert!(!clock.start());
        assert!(approx(clock.elapsed(), 1.5));
    }

    #[test]
    fn test_pause_resume_continues_from_pause_point() {
        let source = ManualClock::new();
        let mut clock = PlaybackClock::new(source.clone());
        clock.start();
        source.advance_secs(3.0);

        assert_eq!(clock.pause(), Some(3.0));
        source.advance_secs(10.0);
        // a second pause keeps the first pause point
        assert_eq!(clock.pause(), Some(3.0));

        assert!(clock.resume());
        assert!(approx(clock.elapsed(), 3.0));
        source.advance_secs(1.0);
        assert!(approx(clock.elapsed(), 4.0));
    }

    #[test]
    fn test_elapsed_stays_fixed_while_paused() {
        let source = ManualClock::new();
        let mut clock = PlaybackClock::new(source.clone());
        clock.start();
        source.advance_secs(2.0);
        clock.pause();

        source.advance_secs(5.0);
        assert_eq!(clock.elapsed(), Some(2.0));
    }

    #[test]
    fn test_resume_while_running_rewinds_to_pause_point() {
        let source = ManualClock::new();
        let mut clock = PlaybackClock::new(source.clone());
        clock.start();
        source.advance_secs(2.0);
        clock.pause();
        assert!(clock.resume());

        source.advance_secs(5.0);
        assert!(clock.resume());
        assert!(clock.is_playing());
        assert!(approx(clock.elapsed(), 2.0));
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut clock = PlaybackClock::new(ManualClock::new());
        assert!(!clock.resume());
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_seek_sets_elapsed_and_pause_point() {
        let source = ManualClock::starting_at(100.0);
        let mut clock = PlaybackClock::new(source.clone());

        clock.seek(42.0);
        assert!(approx(clock.elapsed(), 42.0));
        assert!(!clock.is_playing());

        source.advance_secs(5.0);
        assert!(clock.resume());
        assert!(approx(clock.elapsed(), 42.0));
    }
}
