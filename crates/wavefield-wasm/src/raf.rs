//! `requestAnimationFrame` scheduler.
//!
//! One closure is created up front and handed to every request. The token
//! of the outstanding request is kept in a shared cell so the callback can
//! tell the field which request it is answering.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wavefield_core::{FrameScheduler, FrameToken, ScheduleError};
use web_sys::Window;

pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
    requested: Rc<Cell<Option<FrameToken>>>,
}

impl RafScheduler {
    /// `on_frame` runs inside the animation-frame callback with the token
    /// of the request being served.
    pub fn new(window: Window, mut on_frame: impl FnMut(FrameToken) + 'static) -> Self {
        let requested: Rc<Cell<Option<FrameToken>>> = Rc::new(Cell::new(None));
        let slot = requested.clone();
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            if let Some(token) = slot.take() {
                on_frame(token);
            }
        });
        Self {
            window,
            callback,
            requested,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, ScheduleError> {
        let id = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| ScheduleError(format!("{e:?}")))?;
        let token = FrameToken(id as i64);
        self.requested.set(Some(token));
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.requested.get() == Some(token) {
            self.requested.set(None);
        }
        if let Err(e) = self.window.cancel_animation_frame(token.0 as i32) {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
}
