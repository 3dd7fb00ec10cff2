use rxnprofile::core::models::style::Color;
use rxnprofile::engine::config::{DEFAULT_MARKER_WIDTH, DEFAULT_SAMPLES_PER_SEGMENT};

pub struct DefaultsConfig {
    pub width: u32,
    pub height: u32,
    pub y_min: f64,
    pub y_max: f64,
    pub x_label: String,
    pub y_label: String,
    pub marker_width: f64,
    pub samples_per_segment: usize,
    pub primary_label: String,
    pub primary_color: Color,
    pub secondary_label: String,
    pub secondary_color: Color,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 300,
            y_min: -0.5,
            y_max: 0.75,
            x_label: "Reaction coordinate".to_string(),
            y_label: "∆G [eV]".to_string(),
            marker_width: DEFAULT_MARKER_WIDTH,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            primary_label: "Mechanism 1".to_string(),
            primary_color: Color::BLACK,
            secondary_label: "Mechanism 2".to_string(),
            secondary_color: Color::GRAY,
        }
    }
}
