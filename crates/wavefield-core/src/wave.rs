//! Per-frame wave field geometry.
//!
//! Everything here is a pure function of the configuration, the clock
//! value, and the viewport, so the same inputs always yield the same
//! samples. No drawing happens in this module.

use crate::config::WaveConfig;
use crate::model::{Point, Viewport};
use serde::Serialize;
use std::f64::consts::PI;

/// The sampled curve for one line in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSamples {
    pub index: usize,
    /// Unclamped; may leave [0, 1] if the config allows it.
    pub opacity: f64,
    pub points: Vec<Point>,
}

/// Breathing opacity for line `line` at clock `time`.
pub fn line_opacity(config: &WaveConfig, line: usize, time: f64) -> f64 {
    let o = &config.opacity;
    o.base + (line as f64 * o.line_frequency + time * o.speed).sin() * o.amplitude
}

/// `sin(nx·π)`, pinned to exactly zero at and beyond both edges.
pub fn edge_factor(normalized_x: f64) -> f64 {
    if normalized_x <= 0.0 || normalized_x >= 1.0 {
        0.0
    } else {
        (normalized_x * PI).sin()
    }
}

/// Upper bound on samples per line; denser requests yield no samples.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Horizontal sample positions: every `stride` pixels from 0, always ending
/// exactly at `width`.
pub fn sample_xs(width: f64, stride: f64) -> Vec<f64> {
    if !(width.is_finite() && width > 0.0 && stride.is_finite() && stride > 0.0) {
        return Vec::new();
    }
    let steps = (width / stride).floor();
    if steps >= MAX_SAMPLES as f64 {
        log::trace!("{width}px at stride {stride} exceeds {MAX_SAMPLES} samples");
        return Vec::new();
    }
    let steps = steps as usize;
    let mut xs: Vec<f64> = (0..=steps).map(|k| (k as f64 * stride).min(width)).collect();
    if xs.last().is_some_and(|&last| last < width) {
        xs.push(width);
    }
    xs
}

/// Baseline y for a surface of `height` pixels.
pub fn anchor_y(config: &WaveConfig, height: f64) -> f64 {
    height * config.anchor_fraction
}

/// Vertical offset from the anchor at pixel `x` for line `line`.
pub fn vertical_offset(config: &WaveConfig, width: f64, x: f64, time: f64, line: usize) -> f64 {
    let edge = edge_factor(x / width);
    let spacing = config.spacing_offset(line);
    let spacing = if config.pin_spacing_at_edges {
        spacing * edge
    } else {
        spacing
    };
    let waves: f64 = config
        .waves
        .iter()
        .map(|w| w.value(x, time, line) * edge)
        .sum();
    spacing + waves
}

/// Sample one line across the full viewport width.
pub fn sample_line(config: &WaveConfig, viewport: Viewport, time: f64, line: usize) -> LineSamples {
    let anchor = anchor_y(config, viewport.height);
    let points = sample_xs(viewport.width, config.sample_stride)
        .into_iter()
        .map(|x| Point::new(x, anchor + vertical_offset(config, viewport.width, x, time, line)))
        .collect();

    LineSamples {
        index: line,
        opacity: line_opacity(config, line, time),
        points,
    }
}

/// Sample every line for one frame. Degenerate viewports yield no lines.
pub fn sample_frame(config: &WaveConfig, viewport: Viewport, time: f64) -> Vec<LineSamples> {
    if viewport.is_degenerate() {
        log::trace!("degenerate viewport {viewport:?}, no lines");
        return Vec::new();
    }
    (0..config.line_count)
        .map(|line| sample_line(config, viewport, time, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Oscillator, WaveTerm};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn edge_factor_shape() {
        assert_eq!(edge_factor(0.0), 0.0);
        assert_eq!(edge_factor(1.0), 0.0);
        assert_eq!(edge_factor(-0.3), 0.0);
        assert_eq!(edge_factor(1.2), 0.0);
        assert!(approx(edge_factor(0.5), 1.0));
        assert!(approx(edge_factor(0.25), edge_factor(0.75)));
    }

    #[test]
    fn sample_xs_ends_at_width() {
        assert_eq!(sample_xs(30.0, 10.0), vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(sample_xs(25.0, 10.0), vec![0.0, 10.0, 20.0, 25.0]);
        assert_eq!(sample_xs(4.0, 10.0), vec![0.0, 4.0]);
        assert!(sample_xs(0.0, 10.0).is_empty());
        assert!(sample_xs(100.0, 0.0).is_empty());
        assert!(sample_xs(f64::INFINITY, 10.0).is_empty());
    }

    #[test]
    fn sample_xs_refuses_huge_counts() {
        assert!(sample_xs(1280.0, 1e-300).is_empty());
        assert!(sample_xs(1e300, 10.0).is_empty());
        assert_eq!(sample_xs(65_535.0, 1.0).len(), 65_536);
    }

    #[test]
    fn opacity_matches_formula() {
        let config = WaveConfig::default();
        let expected = 0.3 + (4.0_f64 * 0.3 + 2.0 * 0.5).sin() * 0.15;
        assert!(approx(line_opacity(&config, 4, 2.0), expected));
    }

    #[test]
    fn unpinned_spacing_keeps_parallel_edges() {
        let config = WaveConfig {
            pin_spacing_at_edges: false,
            ..WaveConfig::default()
        };
        let viewport = Viewport::new(400.0, 300.0);
        let line = sample_line(&config, viewport, 1.0, 0);
        let first = line.points.first().unwrap();
        // Waves vanish at the edge, the spacing does not.
        assert!(approx(first.y, 210.0 + config.spacing_offset(0)));
    }

    #[test]
    fn single_term_centre_value() {
        let config = WaveConfig {
            line_count: 1,
            line_spacing: 0.0,
            waves: vec![WaveTerm::new(Oscillator::Cos, 10.0, 0.0, 0.0, 0.0)],
            ..WaveConfig::default()
        };
        let viewport = Viewport::new(200.0, 100.0);
        let line = sample_line(&config, viewport, 0.0, 0);
        let mid = line.points.iter().find(|p| p.x == 100.0).unwrap();
        // cos(0)·10 at full edge factor.
        assert!(approx(mid.y, 70.0 + 10.0));
    }

    #[test]
    fn degenerate_viewport_has_no_lines() {
        let config = WaveConfig::default();
        assert!(sample_frame(&config, Viewport::new(0.0, 0.0), 1.0).is_empty());
        assert!(sample_frame(&config, Viewport::new(1920.0, 0.0), 1.0).is_empty());
        assert!(sample_frame(&config, Viewport::new(1e300, 720.0), 1.0).is_empty());
    }

    #[test]
    fn unvalidated_tiny_stride_does_not_allocate() {
        let config = WaveConfig {
            sample_stride: 1e-300,
            ..WaveConfig::default()
        };
        let frame = sample_frame(&config, Viewport::new(1280.0, 720.0), 1.0);
        assert!(frame.iter().all(|line| line.points.is_empty()));
    }

    #[test]
    fn frame_has_one_entry_per_line() {
        let config = WaveConfig::default();
        let frame = sample_frame(&config, Viewport::new(1000.0, 800.0), 0.5);
        assert_eq!(frame.len(), 18);
        assert!(frame.iter().enumerate().all(|(i, l)| l.index == i));
        assert_eq!(frame[0].points.len(), 101);
    }
}
