//! Floating-lines wave field: a decorative background of translucent
//! curves that breathe, flow, and converge at the left and right edges.
//!
//! The crate is platform-free. Backends implement [`Surface`] and
//! [`FrameScheduler`]; [`WaveField`] drives them.

pub mod config;
pub mod field;
pub mod model;
pub mod path;
pub mod scheduler;
pub mod surface;
pub mod wave;

pub use config::{
    ConfigError, FadeIn, MIN_SAMPLE_STRIDE, OpacityConfig, Oscillator, WaveConfig, WaveTerm,
};
pub use field::{AnimationClock, FieldState, WaveField};
pub use model::{Color, PathCmd, Point, Viewport};
pub use path::smooth_path;
pub use scheduler::{FrameScheduler, FrameToken, ManualScheduler, ScheduleError};
pub use surface::{Surface, render_frame, trace_path};
pub use wave::{LineSamples, edge_factor, line_opacity, sample_frame, sample_line};
