//! Wave field lifecycle: `Uninitialized → Running → Disposed`.
//!
//! A `WaveField` owns its surface, its scheduler, the animation clock, and
//! the token of the one pending frame request. Hosts forward frame
//! callbacks to [`WaveField::on_frame`]; anything that arrives after
//! disposal, or carries a stale token, is dropped without drawing.

use crate::config::WaveConfig;
use crate::model::Viewport;
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::surface::{Surface, render_frame};

/// Monotonic animation clock, advanced once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    time: f64,
    step: f64,
    frames: u64,
}

impl AnimationClock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step,
            frames: 0,
        }
    }

    /// Advance by one step and return the new time.
    pub fn tick(&mut self) -> f64 {
        self.time += self.step;
        self.frames += 1;
        self.time
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Not attached yet, or attached without a usable drawing context.
    Uninitialized,
    Running,
    Disposed,
}

/// An animated wave field bound to one surface for one mount.
pub struct WaveField<S: Surface, F: FrameScheduler> {
    config: WaveConfig,
    clock: AnimationClock,
    state: FieldState,
    surface: Option<S>,
    scheduler: F,
    pending: Option<FrameToken>,
    /// Set by the first `attach`, even when no surface was available.
    attach_attempted: bool,
}

impl<S: Surface, F: FrameScheduler> WaveField<S, F> {
    pub fn new(config: WaveConfig, scheduler: F) -> Self {
        Self {
            clock: AnimationClock::new(config.time_step),
            config,
            state: FieldState::Uninitialized,
            surface: None,
            scheduler,
            pending: None,
            attach_attempted: false,
        }
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Token of the frame request currently outstanding, if any.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Bind the drawing context and start the loop.
    ///
    /// `None` means the host could not provide a 2D context: the field
    /// stays `Uninitialized` for the rest of this mount. Only the first
    /// call has any effect.
    pub fn attach(&mut self, surface: Option<S>) -> FieldState {
        if self.attach_attempted || self.state != FieldState::Uninitialized {
            log::debug!("wave field already attached ({:?}), ignoring", self.state);
            return self.state;
        }
        self.attach_attempted = true;

        let Some(surface) = surface else {
            log::debug!("no 2D context available, wave field stays idle");
            return self.state;
        };

        let size = surface.size();
        self.surface = Some(surface);
        self.state = FieldState::Running;
        log::debug!("wave field running on {}x{}", size.width, size.height);

        self.advance();
        self.state
    }

    /// Host callback for a scheduled frame. Returns whether a frame was
    /// painted.
    pub fn on_frame(&mut self, token: FrameToken) -> bool {
        if self.state != FieldState::Running {
            log::trace!("frame {token:?} after {:?}, skipped", self.state);
            return false;
        }
        if self.pending != Some(token) {
            log::trace!("stale frame {token:?} (pending {:?}), skipped", self.pending);
            return false;
        }
        self.pending = None;
        self.advance()
    }

    /// Apply a new viewport size. The next frame samples with it.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            log::trace!("resize to {}x{}", viewport.width, viewport.height);
            surface.resize(viewport);
        }
    }

    /// Stop the loop for good and hand the surface back.
    ///
    /// Cancels the pending frame request; any callback the host still
    /// delivers is ignored. Safe to call more than once.
    pub fn dispose(&mut self) -> Option<S> {
        if self.state == FieldState::Disposed {
            return None;
        }
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        log::debug!(
            "wave field disposed after {} frames (t={:.3})",
            self.clock.frames(),
            self.clock.time()
        );
        self.state = FieldState::Disposed;
        self.surface.take()
    }

    fn advance(&mut self) -> bool {
        if self.surface.is_none() {
            return false;
        }

        // Request before painting: a panic mid-frame leaves the token for
        // `Drop` to cancel.
        match self.scheduler.request_frame() {
            Ok(token) => self.pending = Some(token),
            Err(e) => {
                log::warn!("{e}; stopping wave field");
                self.dispose();
                return false;
            }
        }

        let time = self.clock.tick();
        let alpha = self.config.fade_in.alpha(self.clock.frames());
        match self.surface.as_mut() {
            Some(surface) => {
                render_frame(surface, &self.config, time, alpha);
                true
            }
            None => false,
        }
    }
}

impl<S: Surface, F: FrameScheduler> Drop for WaveField<S, F> {
    fn drop(&mut self) {
        self.dispose();
    }
}
