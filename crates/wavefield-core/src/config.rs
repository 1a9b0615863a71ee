//! Wave field configuration.
//!
//! Every value is fixed when a field is mounted. `Default` reproduces the
//! portfolio hero background; hosts may override any subset through JSON
//! (`#[serde(default)]` fills the rest).

use crate::model::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted `sample_stride`, in pixels.
pub const MIN_SAMPLE_STRIDE: f64 = 1.0;

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line_count must be at least 1")]
    NoLines,
    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("sample_stride must be at least 1 px, got {0}")]
    StrideTooSmall(f64),
    #[error("anchor_fraction must be within [0, 1], got {0}")]
    AnchorOutOfRange(f64),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which periodic function a wave term uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Oscillator {
    Sin,
    Cos,
}

impl Oscillator {
    pub fn eval(self, phase: f64) -> f64 {
        match self {
            Oscillator::Sin => phase.sin(),
            Oscillator::Cos => phase.cos(),
        }
    }
}

/// One superimposed wave: `osc(x·spatial + t·speed + i·line_phase) × amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTerm {
    pub oscillator: Oscillator,
    pub amplitude: f64,
    /// Radians per pixel.
    pub spatial_frequency: f64,
    /// Radians per clock unit. Negative values travel the other way.
    pub speed: f64,
    /// Phase offset per line index.
    pub line_phase: f64,
}

impl WaveTerm {
    pub const fn new(
        oscillator: Oscillator,
        amplitude: f64,
        spatial_frequency: f64,
        speed: f64,
        line_phase: f64,
    ) -> Self {
        Self {
            oscillator,
            amplitude,
            spatial_frequency,
            speed,
            line_phase,
        }
    }

    /// Unscaled contribution at pixel `x` for line `i`.
    pub fn value(&self, x: f64, time: f64, line: usize) -> f64 {
        let phase = x * self.spatial_frequency + time * self.speed + line as f64 * self.line_phase;
        self.oscillator.eval(phase) * self.amplitude
    }
}

/// Per-line breathing opacity: `base + sin(i·line_frequency + t·speed) × amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityConfig {
    pub base: f64,
    pub amplitude: f64,
    pub line_frequency: f64,
    pub speed: f64,
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self {
            base: 0.3,
            amplitude: 0.15,
            line_frequency: 0.3,
            speed: 0.5,
        }
    }
}

/// Global fade-in applied over the first frames after mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeIn {
    /// Frames until full opacity. `0` disables the fade.
    pub frames: u32,
}

impl Default for FadeIn {
    fn default() -> Self {
        // 2 s at 60 Hz.
        Self { frames: 120 }
    }
}

impl FadeIn {
    /// Global alpha after `elapsed` rendered frames, eased with `power2.out`.
    pub fn alpha(&self, elapsed: u64) -> f64 {
        if self.frames == 0 {
            return 1.0;
        }
        let t = (elapsed as f64 / self.frames as f64).min(1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }
}

/// Full wave field configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub line_count: usize,
    /// Baseline y as a fraction of surface height.
    pub anchor_fraction: f64,
    /// Vertical gap between neighbouring lines at the centre.
    pub line_spacing: f64,
    /// Horizontal distance between samples, in pixels.
    pub sample_stride: f64,
    /// Clock advance per rendered frame.
    pub time_step: f64,
    pub line_width: f64,
    /// Stroke color, `"#RRGGBB"` in JSON. Its alpha is replaced by the
    /// per-line opacity.
    #[serde(with = "hex_color")]
    pub color: Color,
    pub opacity: OpacityConfig,
    pub waves: Vec<WaveTerm>,
    /// Scale the per-line spacing by the edge factor too, so every line
    /// meets the baseline at both edges.
    pub pin_spacing_at_edges: bool,
    pub fade_in: FadeIn,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            line_count: 18,
            anchor_fraction: 0.7,
            line_spacing: 8.0,
            sample_stride: 10.0,
            time_step: 0.01,
            line_width: 1.5,
            color: Color::from_rgb8(138, 154, 140),
            opacity: OpacityConfig::default(),
            waves: vec![
                WaveTerm::new(Oscillator::Sin, 30.0, 0.003, 1.0, 0.2),
                WaveTerm::new(Oscillator::Sin, 20.0, 0.001, -0.5, 0.1),
                WaveTerm::new(Oscillator::Cos, 15.0, 0.002, 0.3, 0.0),
            ],
            pin_spacing_at_edges: true,
            fade_in: FadeIn::default(),
        }
    }
}

impl WaveConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WaveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Only plain numbers, strings, and bools; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_count == 0 {
            return Err(ConfigError::NoLines);
        }
        positive("sample_stride", self.sample_stride)?;
        if self.sample_stride < MIN_SAMPLE_STRIDE {
            return Err(ConfigError::StrideTooSmall(self.sample_stride));
        }
        positive("time_step", self.time_step)?;
        positive("line_width", self.line_width)?;

        finite("line_spacing", self.line_spacing)?;
        finite("opacity.base", self.opacity.base)?;
        finite("opacity.amplitude", self.opacity.amplitude)?;
        finite("opacity.line_frequency", self.opacity.line_frequency)?;
        finite("opacity.speed", self.opacity.speed)?;
        for wave in &self.waves {
            finite("waves.amplitude", wave.amplitude)?;
            finite("waves.spatial_frequency", wave.spatial_frequency)?;
            finite("waves.speed", wave.speed)?;
            finite("waves.line_phase", wave.line_phase)?;
        }

        if !(0.0..=1.0).contains(&self.anchor_fraction) {
            return Err(ConfigError::AnchorOutOfRange(self.anchor_fraction));
        }
        Ok(())
    }

    /// Spread of the spacing term about the anchor: line `i` sits at
    /// `(i − N/2) × spacing`.
    pub fn spacing_offset(&self, line: usize) -> f64 {
        (line as f64 - self.line_count as f64 / 2.0) * self.line_spacing
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

mod hex_color {
    use crate::model::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| de::Error::custom(format!("color must be #RRGGBB or #RRGGBBAA, got {hex:?}")))
    }
}
