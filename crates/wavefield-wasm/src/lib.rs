//! WASM bridge — runs the wave field behind a page's hero section.
//!
//! Compiled via `wasm-pack build --target web`. The page creates a
//! `<canvas>`, calls `WaveFieldHandle.mount(canvas)` when the view mounts,
//! and `unmount()` (or `free()`) when it goes away.

mod canvas;
mod raf;

pub use canvas::CanvasSurface;
pub use raf::RafScheduler;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wavefield_core::{FieldState, Viewport, WaveConfig, WaveField};
use web_sys::{HtmlCanvasElement, Window};

type CanvasField = WaveField<CanvasSurface, RafScheduler>;

/// One mounted wave field.
///
/// Owns the animation loop and the window resize listener. Dropping the
/// handle (JS `free()`) unmounts it.
#[wasm_bindgen]
pub struct WaveFieldHandle {
    field: Rc<RefCell<CanvasField>>,
    window: Window,
    on_resize: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl WaveFieldHandle {
    /// Start animating on `canvas`.
    ///
    /// `config_json` may override any subset of the defaults; invalid JSON
    /// falls back to the defaults with a console warning. If the canvas
    /// has no 2D context the handle stays idle.
    pub fn mount(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<WaveFieldHandle, JsValue> {
        console_error_panic_hook_setup();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let config = parse_config(config_json.as_deref());

        let field = Rc::new_cyclic(|weak: &Weak<RefCell<CanvasField>>| {
            let weak = weak.clone();
            let scheduler = RafScheduler::new(window.clone(), move |token| {
                if let Some(field) = weak.upgrade() {
                    if let Ok(mut field) = field.try_borrow_mut() {
                        field.on_frame(token);
                    }
                }
            });
            RefCell::new(WaveField::new(config, scheduler))
        });

        canvas::style_as_background(&canvas);
        canvas::set_canvas_size(&canvas, window_viewport(&window));
        let state = field.borrow_mut().attach(CanvasSurface::acquire(canvas));

        let mut handle = WaveFieldHandle {
            field,
            window,
            on_resize: None,
        };
        if state == FieldState::Running {
            handle.listen_for_resize()?;
        }
        Ok(handle)
    }

    /// Stop the loop and detach the resize listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(on_resize) = self.on_resize.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                log::warn!("removing resize listener failed: {e:?}");
            }
        }
        match self.field.try_borrow_mut() {
            Ok(mut field) => {
                field.dispose();
            }
            Err(_) => log::warn!("unmount during a frame callback; disposal deferred to drop"),
        }
    }

    /// `"uninitialized"`, `"running"`, or `"disposed"`.
    pub fn state(&self) -> String {
        state_name(self.field.borrow().state()).to_string()
    }

    /// Frames painted since mount.
    pub fn frames(&self) -> f64 {
        self.field.borrow().clock().frames() as f64
    }

    /// Current animation clock value.
    pub fn time(&self) -> f64 {
        self.field.borrow().clock().time()
    }
}

impl WaveFieldHandle {
    fn listen_for_resize(&mut self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.field);
        let window = self.window.clone();
        let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(field) = weak.upgrade() {
                if let Ok(mut field) = field.try_borrow_mut() {
                    field.resize(window_viewport(&window));
                }
            }
        });
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);
        Ok(())
    }
}

impl Drop for WaveFieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

fn parse_config(json: Option<&str>) -> WaveConfig {
    match json.map(str::trim) {
        None | Some("") => WaveConfig::default(),
        Some(json) => WaveConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("{e}; using default wave config");
            WaveConfig::default()
        }),
    }
}

fn state_name(state: FieldState) -> &'static str {
    match state {
        FieldState::Uninitialized => "uninitialized",
        FieldState::Running => "running",
        FieldState::Disposed => "disposed",
    }
}

// ─── Panic hook and console logging ──────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("wavefield panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

/// Route crate logs to the console at `level` (`"error"` … `"trace"`).
/// Returns `false` for an unknown level or if a logger is already set.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let Ok(level) = level.parse::<log::Level>() else {
        return false;
    };
    console_log::init_with_level(level).is_ok()
}

// ─── Standalone config helpers (no canvas needed) ────────────────────────

/// Default configuration as JSON, for hosts that want to tweak a copy.
#[wasm_bindgen]
pub fn default_config_json() -> String {
    WaveConfig::default().to_json()
}

/// Validate a config override. Returns JSON: `{"ok":true}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config(json: &str) -> String {
    let value = match WaveConfig::from_json(json) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    value.to_string()
}

/// SVG snapshot of one frame, e.g. a static fallback for reduced motion.
#[wasm_bindgen]
pub fn render_svg_snapshot(width: f64, height: f64, time: f64, config_json: Option<String>) -> String {
    let config = parse_config(config_json.as_deref());
    wavefield_render::render_svg(&config, Viewport::new(width, height), time)
}
