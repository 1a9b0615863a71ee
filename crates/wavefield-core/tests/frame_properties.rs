//! Integration tests: wave geometry invariants across lines, times, and
//! viewport sizes.

use pretty_assertions::assert_eq;
use wavefield_core::wave::anchor_y;
use wavefield_core::{Viewport, WaveConfig, line_opacity, sample_frame};

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

const TIMES: [f64; 6] = [0.0, 0.01, 0.5, 3.7, 42.0, 1234.56];

// ─── Determinism ─────────────────────────────────────────────────────────

#[test]
fn same_inputs_give_identical_samples() {
    let config = WaveConfig::default();
    for &t in &TIMES {
        let a = sample_frame(&config, VIEWPORT, t);
        let b = sample_frame(&config, VIEWPORT, t);
        assert_eq!(a, b, "frame at t={t} differs between runs");
    }
}

#[test]
fn different_times_give_different_curves() {
    let config = WaveConfig::default();
    let a = sample_frame(&config, VIEWPORT, 1.0);
    let b = sample_frame(&config, VIEWPORT, 1.01);
    assert_ne!(a[0].points, b[0].points);
}

// ─── Edge convergence ────────────────────────────────────────────────────

#[test]
fn every_line_meets_the_anchor_at_both_edges() {
    let config = WaveConfig::default();
    // Widths that are and are not multiples of the sample stride.
    for viewport in [VIEWPORT, Viewport::new(1366.0, 768.0), Viewport::new(375.5, 812.0)] {
        let anchor = anchor_y(&config, viewport.height);
        for &t in &TIMES {
            for line in sample_frame(&config, viewport, t) {
                let first = line.points.first().expect("no samples");
                let last = line.points.last().expect("no samples");
                assert_eq!(first.x, 0.0);
                assert_eq!(last.x, viewport.width);
                assert_eq!(first.y, anchor, "line {} left edge at t={t}", line.index);
                assert_eq!(last.y, anchor, "line {} right edge at t={t}", line.index);
            }
        }
    }
}

#[test]
fn lines_fan_out_in_the_middle() {
    let config = WaveConfig::default();
    let frame = sample_frame(&config, VIEWPORT, 0.0);
    let mid_ys: Vec<f64> = frame
        .iter()
        .map(|l| l.points.iter().find(|p| p.x == 640.0).expect("no mid sample").y)
        .collect();
    let spread = mid_ys.iter().cloned().fold(f64::MIN, f64::max)
        - mid_ys.iter().cloned().fold(f64::MAX, f64::min);
    assert!(spread > 50.0, "expected visible fan-out, got spread {spread}");
}

// ─── Opacity bounds ──────────────────────────────────────────────────────

#[test]
fn opacity_stays_within_base_plus_minus_amplitude() {
    let config = WaveConfig::default();
    for line in 0..config.line_count {
        for step in 0..2_000 {
            let t = step as f64 * 0.37;
            let o = line_opacity(&config, line, t);
            assert!(
                (0.15 - 1e-12..=0.45 + 1e-12).contains(&o),
                "opacity {o} out of range for line {line} at t={t}"
            );
        }
    }
}

// ─── Degenerate sizes ────────────────────────────────────────────────────

#[test]
fn extreme_aspect_ratios_stay_finite() {
    let config = WaveConfig::default();
    for viewport in [
        Viewport::new(1.0, 10_000.0),
        Viewport::new(10_000.0, 1.0),
        Viewport::new(0.5, 0.5),
    ] {
        for line in sample_frame(&config, viewport, 7.0) {
            assert!(!line.points.is_empty());
            assert!(line.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}

#[test]
fn zero_sized_surface_produces_no_lines() {
    let config = WaveConfig::default();
    assert!(sample_frame(&config, Viewport::new(0.0, 720.0), 1.0).is_empty());
    assert!(sample_frame(&config, Viewport::new(1280.0, 0.0), 1.0).is_empty());
}
