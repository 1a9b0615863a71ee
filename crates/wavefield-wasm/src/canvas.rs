//! `Surface` over an HTML `<canvas>` 2D context.

use wasm_bindgen::JsCast;
use wavefield_core::{Color, Surface, Viewport};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Inline styles that make the canvas a full-size, non-interactive
/// background layer.
pub const BACKGROUND_LAYER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("inset", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "10"),
];

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context. `None` if the browser refuses one.
    pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

/// Apply [`BACKGROUND_LAYER_STYLE`]. Failures are logged, never fatal.
pub fn style_as_background(canvas: &HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in BACKGROUND_LAYER_STYLE {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("could not set canvas style {name}: {e:?}");
        }
    }
}

/// Set the canvas backing-store size. Negative and NaN sizes become 0.
pub fn set_canvas_size(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(0.0) as u32);
    canvas.set_height(viewport.height.max(0.0) as u32);
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, viewport: Viewport) {
        set_canvas_size(&self.canvas, viewport);
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cx, cy, x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
