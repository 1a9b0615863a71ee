//! Drawing surface abstraction and the frame painter.
//!
//! A `Surface` exposes only the 2D primitives the wave field needs, so any
//! backend (HTML canvas, kurbo paths, Vello scenes) can host it.

use crate::config::WaveConfig;
use crate::model::{Color, PathCmd, Viewport};
use crate::path::smooth_path;
use crate::wave::sample_frame;

/// A 2D drawing target.
pub trait Surface {
    /// Current pixel size. Read once at the start of every frame.
    fn size(&self) -> Viewport;

    /// Change the pixel size. Takes effect from the next frame.
    fn resize(&mut self, viewport: Viewport);

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);

    /// Stroke the current path with the current style.
    fn stroke(&mut self);
}

/// Replay path commands onto a surface.
pub fn trace_path<S: Surface + ?Sized>(surface: &mut S, cmds: &[PathCmd]) {
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => surface.move_to(p.x, p.y),
            PathCmd::QuadTo(c, e) => surface.quadratic_curve_to(c.x, c.y, e.x, e.y),
        }
    }
}

/// Paint one complete frame: clear, then stroke every line.
///
/// `alpha` scales every line's opacity (used by the fade-in). Returns the
/// number of lines stroked.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    config: &WaveConfig,
    time: f64,
    alpha: f64,
) -> usize {
    let viewport = surface.size();
    surface.clear();

    let mut stroked = 0;
    for line in sample_frame(config, viewport, time) {
        let cmds = smooth_path(&line.points);
        if cmds.is_empty() {
            continue;
        }
        let opacity = line.opacity.clamp(0.0, 1.0) * alpha;
        surface.begin_path();
        surface.set_stroke_style(config.color.with_alpha(opacity));
        surface.set_line_width(config.line_width);
        trace_path(surface, &cmds);
        surface.stroke();
        stroked += 1;
    }

    log::trace!(
        "frame t={time:.3} {}x{} stroked {stroked} lines",
        viewport.width,
        viewport.height
    );
    stroked
}
