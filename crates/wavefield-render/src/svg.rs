//! SVG snapshots of single wave field frames.

use crate::record::{RecordingSurface, StrokedPath};
use wavefield_core::{Viewport, WaveConfig, render_frame};

fn stroke_attrs(stroked: &StrokedPath) -> String {
    let [r, g, b, _] = stroked.color.to_rgba8();
    format!(
        r##"stroke="#{r:02X}{g:02X}{b:02X}" stroke-opacity="{}" stroke-width="{}""##,
        stroked.color.a, stroked.width
    )
}

/// Static SVG snapshot of the frame at clock `time`, at full opacity.
pub fn render_svg(config: &WaveConfig, viewport: Viewport, time: f64) -> String {
    let mut surface = RecordingSurface::new(viewport);
    render_frame(&mut surface, config, time, 1.0);
    strokes_to_svg(surface.strokes(), viewport)
}

/// Serialize already-recorded strokes.
pub fn strokes_to_svg(strokes: &[StrokedPath], viewport: Viewport) -> String {
    let (w, h) = (viewport.width.max(0.0), viewport.height.max(0.0));
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    out.push('\n');
    for stroked in strokes {
        out.push_str(&format!(
            r#"  <path d="{}" fill="none" {} />"#,
            stroked.path.to_svg(),
            stroke_attrs(stroked)
        ));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_path_per_line() {
        let config = WaveConfig::default();
        let svg = render_svg(&config, Viewport::new(300.0, 150.0), 0.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), config.line_count);
        assert!(svg.contains(r##"stroke="#8A9A8C""##));
        assert!(svg.contains(r#"stroke-width="1.5""#));
    }

    #[test]
    fn empty_viewport_gives_empty_document() {
        let svg = render_svg(&WaveConfig::default(), Viewport::new(0.0, 0.0), 1.0);
        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains(r#"width="0""#));
    }
}
