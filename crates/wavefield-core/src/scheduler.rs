//! "Run before next repaint" scheduling.
//!
//! The host decides when a requested frame actually runs; the field only
//! holds the token of the single pending request and ignores any callback
//! carrying a different one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use thiserror::Error;

/// Identifies one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i64);

/// The host refused to schedule a frame.
#[derive(Debug, Error, PartialEq)]
#[error("frame request failed: {0}")]
pub struct ScheduleError(pub String);

/// Host primitive that runs a callback before the next repaint.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, ScheduleError>;

    /// Cancel a pending request. Unknown or already-run tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// A scheduler driven by the caller.
///
/// Requests queue up until `next_due` pops them; cloning shares the queue,
/// so a test can keep one handle while the field owns the other.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualQueue>>,
}

#[derive(Debug, Default)]
struct ManualQueue {
    next_id: i64,
    pending: VecDeque<FrameToken>,
    cancelled: usize,
    refuse: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, as the host would when it repaints.
    pub fn next_due(&self) -> Option<FrameToken> {
        self.inner.borrow_mut().pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn cancelled(&self) -> usize {
        self.inner.borrow().cancelled
    }

    /// Make every subsequent `request_frame` fail.
    pub fn refuse_requests(&self) {
        self.inner.borrow_mut().refuse = true;
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, ScheduleError> {
        let mut q = self.inner.borrow_mut();
        if q.refuse {
            return Err(ScheduleError("manual scheduler refusing requests".into()));
        }
        q.next_id += 1;
        let token = FrameToken(q.next_id);
        q.pending.push_back(token);
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let mut q = self.inner.borrow_mut();
        let before = q.pending.len();
        q.pending.retain(|t| *t != token);
        if q.pending.len() != before {
            q.cancelled += 1;
        }
    }
}
