//! Wave field → Vello scene.
//!
//! `SceneSurface` lets a `WaveField` paint straight into a Vello `Scene`;
//! the caller presents the scene via wgpu after each frame.

use crate::record::{Pen, StrokedPath};
use kurbo::{Affine, BezPath, Stroke as KurboStroke};
use peniko::Color as PenikoColor;
use vello::Scene;
use wavefield_core::{Color, Surface, Viewport};

/// A [`Surface`] backed by a Vello scene.
pub struct SceneSurface {
    scene: Scene,
    size: Viewport,
    pen: Pen,
}

impl SceneSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            size,
            pen: Pen::default(),
        }
    }

    /// The scene holding the most recent frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl Surface for SceneSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn clear(&mut self) {
        self.scene.reset();
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.pen.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.pen.width = width;
    }

    fn begin_path(&mut self) {
        self.pen.path = BezPath::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.pen.move_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.pen.quad_to(cx, cy, x, y);
    }

    fn stroke(&mut self) {
        if let Some(stroked) = self.pen.snapshot() {
            paint_stroke(&mut self.scene, &stroked);
        }
    }
}

/// Replay recorded strokes into a scene, e.g. a frame captured by a
/// `RecordingSurface`.
pub fn paint_strokes(scene: &mut Scene, strokes: &[StrokedPath]) {
    log::trace!("replaying {} strokes", strokes.len());
    for stroked in strokes {
        paint_stroke(scene, stroked);
    }
}

fn paint_stroke(scene: &mut Scene, stroked: &StrokedPath) {
    log::trace!(
        "stroke {} segments, width {}, {}",
        stroked.path.elements().len(),
        stroked.width,
        stroked.color.to_css()
    );
    let style = KurboStroke::new(stroked.width);
    scene.stroke(
        &style,
        Affine::IDENTITY,
        to_peniko(stroked.color),
        None,
        &stroked.path,
    );
}

fn to_peniko(color: Color) -> PenikoColor {
    let [r, g, b, a] = color.to_rgba8();
    PenikoColor::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordingSurface;
    use wavefield_core::{ManualScheduler, WaveConfig, WaveField, render_frame};

    #[test]
    fn field_paints_into_scene() {
        let mut field = WaveField::new(WaveConfig::default(), ManualScheduler::new());
        field.attach(Some(SceneSurface::new(Viewport::new(320.0, 200.0))));
        let surface = field.dispose().expect("surface handed back");
        // Encoding is opaque; it only has to be non-empty after a frame.
        assert!(!surface.into_scene().encoding().is_empty());
    }

    #[test]
    fn recorded_frame_replays_into_scene() {
        let config = WaveConfig::default();
        let mut recording = RecordingSurface::new(Viewport::new(320.0, 200.0));
        let lines = render_frame(&mut recording, &config, 0.5, 1.0);
        assert_eq!(lines, config.line_count);
        assert_eq!(recording.strokes().len(), lines);

        let mut scene = Scene::new();
        assert!(scene.encoding().is_empty());
        paint_strokes(&mut scene, recording.strokes());
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn replaying_nothing_leaves_scene_empty() {
        let mut scene = Scene::new();
        paint_strokes(&mut scene, &[]);
        assert!(scene.encoding().is_empty());
    }
}
