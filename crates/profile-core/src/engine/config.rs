use thiserror::Error;

pub const DEFAULT_MARKER_WIDTH: f64 = 0.6;
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 50;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Marker width must be positive and finite, got {0}")]
    InvalidMarkerWidth(f64),

    #[error("At least 2 samples per segment are required, got {0}")]
    TooFewSamples(usize),
}

/// Geometry knobs shared by validation and assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    /// Full width of a level marker, in reaction-coordinate units.
    pub marker_width: f64,
    /// Sample count per half of a transition-state curve.
    pub samples_per_segment: usize,
}

impl AssemblyConfig {
    /// Half of the marker width; connectors and curves are inset by this
    /// amount so they start and end at marker edges.
    pub fn half_width(&self) -> f64 {
        self.marker_width / 2.0
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            marker_width: DEFAULT_MARKER_WIDTH,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        }
    }
}

#[derive(Debug, Default)]
pub struct AssemblyConfigBuilder {
    marker_width: Option<f64>,
    samples_per_segment: Option<usize>,
}

impl AssemblyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_width(mut self, width: f64) -> Self {
        self.marker_width = Some(width);
        self
    }

    pub fn samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = Some(samples);
        self
    }

    pub fn build(self) -> Result<AssemblyConfig, ConfigError> {
        let marker_width = self.marker_width.unwrap_or(DEFAULT_MARKER_WIDTH);
        if !marker_width.is_finite() || marker_width <= 0.0 {
            return Err(ConfigError::InvalidMarkerWidth(marker_width));
        }

        let samples_per_segment = self
            .samples_per_segment
            .unwrap_or(DEFAULT_SAMPLES_PER_SEGMENT);
        if samples_per_segment < 2 {
            return Err(ConfigError::TooFewSamples(samples_per_segment));
        }

        Ok(AssemblyConfig {
            marker_width,
            samples_per_segment,
        })
    }
}
