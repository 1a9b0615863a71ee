//! Sample points → smooth path.
//!
//! Each interior sample becomes a quadratic control point whose end point
//! is the midpoint to the next sample, so the stroked curve has no corners.

use crate::model::{PathCmd, Point};

/// Successive-midpoint quadratic smoothing.
///
/// Empty input yields an empty path; one or two points yield only the
/// initial `MoveTo`.
pub fn smooth_path(points: &[Point]) -> Vec<PathCmd> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut cmds = Vec::with_capacity(points.len());
    cmds.push(PathCmd::MoveTo(first));

    let n = points.len();
    if n > 2 {
        for j in 1..n - 2 {
            cmds.push(PathCmd::QuadTo(points[j], points[j].midpoint(points[j + 1])));
        }
        cmds.push(PathCmd::QuadTo(points[n - 2], points[n - 1]));
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_and_short_inputs() {
        assert!(smooth_path(&[]).is_empty());
        assert_eq!(
            smooth_path(&pts(&[(0.0, 1.0)])),
            vec![PathCmd::MoveTo(Point::new(0.0, 1.0))]
        );
        assert_eq!(smooth_path(&pts(&[(0.0, 1.0), (10.0, 2.0)])).len(), 1);
    }

    #[test]
    fn three_points_use_final_segment_only() {
        let p = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        assert_eq!(
            smooth_path(&p),
            vec![PathCmd::MoveTo(p[0]), PathCmd::QuadTo(p[1], p[2])]
        );
    }

    #[test]
    fn interior_points_end_at_midpoints() {
        let p = pts(&[(0.0, 0.0), (10.0, 4.0), (20.0, 8.0), (30.0, 0.0), (40.0, 2.0)]);
        assert_eq!(
            smooth_path(&p),
            vec![
                PathCmd::MoveTo(p[0]),
                PathCmd::QuadTo(p[1], Point::new(15.0, 6.0)),
                PathCmd::QuadTo(p[2], Point::new(25.0, 4.0)),
                PathCmd::QuadTo(p[3], p[4]),
            ]
        );
    }
}
