//! Backends for the wave field: kurbo path recording, Vello scenes, SVG.

pub mod record;
pub mod scene;
pub mod svg;

pub use record::{RecordingSurface, StrokedPath, end_point, path_to_bez};
pub use scene::{SceneSurface, paint_strokes};
pub use svg::{render_svg, strokes_to_svg};
