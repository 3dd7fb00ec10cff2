use rxnprofile::core::models::style::Color;
use rxnprofile::engine::config::AssemblyConfig;
use std::path::PathBuf;

/// Figure-level presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
    pub y_min: f64,
    pub y_max: f64,
    pub x_label: String,
    pub y_label: String,
}

/// Display styling for one of the two bundled mechanisms.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanismStyle {
    pub label: String,
    pub color: Color,
}

/// The fully merged configuration the `render` command runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub output: PathBuf,
    pub figure: FigureConfig,
    pub assembly: AssemblyConfig,
    pub styles: [MechanismStyle; 2],
}
