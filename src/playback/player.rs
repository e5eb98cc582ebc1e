//! Lyric player
//!
//! Owns the parsed lines, the element subtree built for them, the playback
//! clock and the frame loop. Every frame while playing it maps elapsed time
//! to the active line, scrolls that line into place, highlights it and
//! notifies the listener.
//!
//! # Lifecycle
//!
//! - `play` starts from zero, `pause`/`resume` keep the position,
//!   `replay` is `pause` followed by `play`.
//! - `set_time_seconds`/`set_time_milliseconds` jump without changing the
//!   play state. While stopped they refresh the view once.
//! - `destroy` is terminal: later calls are logged and ignored.

use crate::models::lyric::active_index;
use crate::models::{LyricLine, PlayerConfig, PlayerState};
use crate::parse::parse_lrc;
use crate::playback::clock::{Clock, PlaybackClock};
use crate::playback::errors::PlayerError;
use crate::playback::listener::LyricListener;
use crate::playback::scheduler::{FrameLoop, FrameScheduler};
use crate::renderers::{LyricsView, RenderTarget};

pub struct LyricPlayer<R: RenderTarget, C: Clock, S: FrameScheduler> {
    config: PlayerConfig,
    lines: Vec<LyricLine>,
    target: R,
    view: Option<LyricsView<R::Element>>,
    clock: PlaybackClock<C>,
    frames: FrameLoop<S>,
    listener: Option<Box<dyn LyricListener>>,
    /// Index of the line currently highlighted in the view
    active: Option<usize>,
    destroyed: bool,
}

impl<R: RenderTarget, C: Clock, S: FrameScheduler> LyricPlayer<R, C, S> {
    /// Parse `lrc_text` and render it into `target`.
    ///
    /// Empty or untagged input gives a player with no lines, which still
    /// renders its container and accepts every operation.
    pub fn new(
        lrc_text: &str,
        config: PlayerConfig,
        target: R,
        clock: C,
        scheduler: S,
    ) -> Result<Self, PlayerError> {
        Self::from_lines(parse_lrc(lrc_text), config, target, clock, scheduler)
    }

    /// Render already-parsed lines. `lines` must be sorted by time.
    pub fn from_lines(
        lines: Vec<LyricLine>,
        config: PlayerConfig,
        mut target: R,
        clock: C,
        scheduler: S,
    ) -> Result<Self, PlayerError> {
        let view = LyricsView::build(&mut target, &config, &lines)?;
        log::debug!(
            "lyric player '{}' created with {} lines",
            config.container_id,
            lines.len()
        );

        Ok(Self {
            config,
            lines,
            target,
            view: Some(view),
            clock: PlaybackClock::new(clock),
            frames: FrameLoop::new(scheduler),
            listener: None,
            active: None,
            destroyed: false,
        })
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn scheduler(&self) -> &S {
        self.frames.scheduler()
    }

    pub fn view(&self) -> Option<&LyricsView<R::Element>> {
        self.view.as_ref()
    }

    pub fn state(&self) -> &PlayerState {
        self.clock.state()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether a frame is currently requested
    pub fn is_looping(&self) -> bool {
        self.frames.is_armed()
    }

    /// Elapsed seconds, or `None` before the first start or seek
    pub fn elapsed(&self) -> Option<f64> {
        self.clock.elapsed()
    }

    /// Index of the highlighted line
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_line(&self) -> Option<&LyricLine> {
        self.active.and_then(|index| self.lines.get(index))
    }

    pub fn set_listener(&mut self, listener: impl LyricListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Start from zero. Ignored while already playing.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        if self.ignore_after_destroy("play") {
            return Ok(());
        }
        if !self.clock.start() {
            return Ok(());
        }
        log::debug!("play '{}'", self.config.container_id);
        self.tick()
    }

    /// Stop the loop and remember the current position
    pub fn pause(&mut self) {
        self.frames.cancel();
        let paused_at = self.clock.pause();
        log::debug!("pause '{}' at {:?}s", self.config.container_id, paused_at);
    }

    /// Continue from the last pause or seek position.
    ///
    /// Ignored if the player was never paused. While playing it jumps back
    /// to that position and restarts the loop.
    pub fn resume(&mut self) -> Result<(), PlayerError> {
        if self.ignore_after_destroy("resume") {
            return Ok(());
        }
        if !self.clock.resume() {
            log::debug!("resume '{}' ignored: nothing to resume", self.config.container_id);
            return Ok(());
        }
        log::debug!("resume '{}' at {:?}s", self.config.container_id, self.clock.elapsed());
        // the restarted loop supersedes any pending frame
        self.frames.cancel();
        self.tick()
    }

    /// Jump to `seconds` of elapsed time
    pub fn set_time_seconds(&mut self, seconds: f64) -> Result<(), PlayerError> {
        if self.ignore_after_destroy("seek") {
            return Ok(());
        }
        self.clock.seek(seconds);
        log::debug!("seek '{}' to {}s", self.config.container_id, seconds);

        if self.clock.is_playing() {
            // the new loop supersedes the pending frame
            self.frames.cancel();
            self.tick()
        } else {
            self.frames.cancel();
            self.update_position().map(|_| ())
        }
    }

    pub fn set_time_milliseconds(&mut self, milliseconds: f64) -> Result<(), PlayerError> {
        self.set_time_seconds(milliseconds / 1000.0)
    }

    /// Restart the clock from zero (not from the pause position)
    pub fn replay(&mut self) -> Result<(), PlayerError> {
        self.pause();
        self.play()
    }

    /// Stop the loop, remove the container and reset all state
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.frames.cancel();

        match self.target.remove_element(&self.config.container_id) {
            Ok(true) => {}
            Ok(false) => log::debug!("container '{}' already gone", self.config.container_id),
            Err(e) => log::warn!("failed to remove '{}': {}", self.config.container_id, e),
        }

        self.view = None;
        self.clock.reset();
        self.listener = None;
        self.active = None;
        self.destroyed = true;
        log::debug!("destroyed '{}'", self.config.container_id);
    }

    /// Handle a fired frame from the scheduler.
    ///
    /// Stale frames (cancelled or superseded) are ignored.
    pub fn run_frame(&mut self) -> Result<(), PlayerError> {
        if !self.frames.fire() {
            log::trace!("ignoring stale frame for '{}'", self.config.container_id);
            return Ok(());
        }
        if !self.clock.is_playing() {
            return Ok(());
        }
        self.tick()
    }

    /// Bring the view in line with the current elapsed time.
    ///
    /// Returns the active index, or `None` before the first cue (in which
    /// case nothing is redrawn and the listener is not called).
    pub fn update_position(&mut self) -> Result<Option<usize>, PlayerError> {
        let Some(elapsed) = self.clock.elapsed() else {
            return Ok(None);
        };
        let Some(index) = active_index(&self.lines, elapsed) else {
            return Ok(None);
        };
        log::trace!("elapsed {:.3}s -> line {}", elapsed, index);

        if let Some(view) = &self.view {
            view.show_active(&mut self.target, &self.config, index)?;
        }
        self.active = Some(index);

        if let Some(listener) = self.listener.as_mut() {
            let line = &self.lines[index];
            listener.on_lyric_change(&line.text, line);
        }

        Ok(Some(index))
    }

    /// One loop iteration: update, then re-arm while playing
    fn tick(&mut self) -> Result<(), PlayerError> {
        let updated = self.update_position();
        if self.clock.is_playing() {
            self.frames.arm()?;
        }
        updated.map(|_| ())
    }

    fn ignore_after_destroy(&self, operation: &str) -> bool {
        if self.destroyed {
            log::warn!(
                "{} ignored: player '{}' was destroyed",
                operation,
                self.config.container_id
            );
        }
        self.destroyed
    }
}
