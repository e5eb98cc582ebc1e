//! Frame scheduling
//!
//! The update loop is an explicit task: `FrameLoop` owns the one pending
//! frame request (its cancellation token) and re-arms only when the player
//! asks it to. Hosts deliver a fired frame back through
//! `LyricPlayer::run_frame`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::playback::errors::PlayerError;

/// Token for one requested display-refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host mechanism that calls back on the next display refresh
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, PlayerError>;

    /// Cancel a request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// At most one pending frame at a time
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Request the next frame, replacing any pending request
    pub fn arm(&mut self) -> Result<(), PlayerError> {
        self.cancel();
        let handle = self.scheduler.request_frame()?;
        self.pending = Some(handle);
        Ok(())
    }

    /// Drop the pending request, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Consume the pending request when its frame fires.
    ///
    /// Returns `false` for a frame nobody is waiting for (cancelled or
    /// superseded), which the caller must ignore.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Default)]
struct ManualFrames {
    next_id: i32,
    pending: Vec<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

/// Scheduler driven by hand. Clones share the same queue, so a caller can
/// keep one to inspect requests made by a player that owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    frames: Rc<RefCell<ManualFrames>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that have neither fired nor been cancelled
    pub fn pending(&self) -> Vec<FrameHandle> {
        self.frames.borrow().pending.clone()
    }

    pub fn has_pending(&self) -> bool {
        !self.frames.borrow().pending.is_empty()
    }

    pub fn requested_count(&self) -> usize {
        self.frames.borrow().requested
    }

    pub fn cancelled_count(&self) -> usize {
        self.frames.borrow().cancelled
    }

    /// Mark the oldest pending request as fired and return it
    pub fn take_next(&self) -> Option<FrameHandle> {
        let mut frames = self.frames.borrow_mut();
        if frames.pending.is_empty() {
            None
        } else {
            Some(frames.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, PlayerError> {
        let mut frames = self.frames.borrow_mut();
        frames.next_id += 1;
        let handle = FrameHandle(frames.next_id);
        frames.pending.push(handle);
        frames.requested += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut frames = self.frames.borrow_mut();
        let before = frames.pending.len();
        frames.pending.retain(|h| *h != handle);
        if frames.pending.len() != before {
            frames.cancelled += 1;
        }
    }
}
