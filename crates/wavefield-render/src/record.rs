//! Surface that records strokes as kurbo paths.
//!
//! Used for headless rendering, SVG snapshots, and tests: every `stroke()`
//! freezes the current path and style into a [`StrokedPath`].

use kurbo::{BezPath, PathEl, Point};
use wavefield_core::{Color, PathCmd, Surface, Viewport};

/// One stroked curve.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub path: BezPath,
    pub color: Color,
    pub width: f64,
}

/// Convert smoother output to a kurbo path.
pub fn path_to_bez(cmds: &[PathCmd]) -> BezPath {
    let mut bez = BezPath::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => bez.move_to((p.x, p.y)),
            PathCmd::QuadTo(c, e) => bez.quad_to((c.x, c.y), (e.x, e.y)),
        }
    }
    bez
}

/// The in-progress path plus the current stroke style.
#[derive(Debug, Clone)]
pub(crate) struct Pen {
    pub(crate) path: BezPath,
    pub(crate) color: Color,
    pub(crate) width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            path: BezPath::new(),
            color: Color::rgba(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
        }
    }
}

impl Pen {
    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y));
    }

    pub(crate) fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        // Canvas semantics: a curve with no current point starts at its control point.
        if self.path.elements().is_empty() {
            self.path.move_to((cx, cy));
        }
        self.path.quad_to((cx, cy), (x, y));
    }

    /// Snapshot for stroking. `None` when the path has nothing to draw.
    pub(crate) fn snapshot(&self) -> Option<StrokedPath> {
        let drawable = self
            .path
            .elements()
            .iter()
            .any(|el| !matches!(el, PathEl::MoveTo(_)));
        drawable.then(|| StrokedPath {
            path: self.path.clone(),
            color: self.color,
            width: self.width,
        })
    }
}

/// Records every stroke made during the frames painted onto it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Viewport,
    pen: Pen,
    strokes: Vec<StrokedPath>,
    clears: usize,
    /// Strokes across all frames, including cleared ones.
    total_strokes: usize,
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            pen: Pen::default(),
            strokes: Vec::new(),
            clears: 0,
            total_strokes: 0,
        }
    }

    /// Strokes since the last clear, i.e. the visible frame.
    pub fn strokes(&self) -> &[StrokedPath] {
        &self.strokes
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn total_strokes(&self) -> usize {
        self.total_strokes
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.clears += 1;
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
            self.strokes.push(stroked);
            self.total_strokes += 1;
        }
    }
}

/// End point of a recorded path.
pub fn end_point(path: &BezPath) -> Option<Point> {
    path.elements().last().and_then(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
            Some(p)
        }
        PathEl::ClosePath => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavefield_core::{Point as WavePoint, smooth_path};

    #[test]
    fn path_to_bez_preserves_commands() {
        let cmds = smooth_path(&[
            WavePoint::new(0.0, 0.0),
            WavePoint::new(10.0, 5.0),
            WavePoint::new(20.0, 5.0),
            WavePoint::new(30.0, 0.0),
        ]);
        let bez = path_to_bez(&cmds);
        assert_eq!(
            bez.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::QuadTo(Point::new(10.0, 5.0), Point::new(15.0, 5.0)),
                PathEl::QuadTo(Point::new(20.0, 5.0), Point::new(30.0, 0.0)),
            ]
        );
        assert_eq!(end_point(&bez), Some(Point::new(30.0, 0.0)));
    }

    #[test]
    fn move_only_path_is_not_recorded() {
        let mut s = RecordingSurface::new(Viewport::new(10.0, 10.0));
        s.begin_path();
        s.move_to(1.0, 1.0);
        s.stroke();
        assert!(s.strokes().is_empty());
        assert_eq!(s.total_strokes(), 0);
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut s = RecordingSurface::new(Viewport::new(10.0, 10.0));
        s.begin_path();
        s.move_to(0.0, 0.0);
        s.quadratic_curve_to(1.0, 1.0, 2.0, 0.0);
        s.stroke();
        s.clear();
        assert!(s.strokes().is_empty());
        assert_eq!(s.total_strokes(), 1);
        assert_eq!(s.clears(), 1);
    }
}
