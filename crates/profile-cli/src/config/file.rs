use crate::error::{CliError, Result};
use rxnprofile::core::models::style::Color;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub figure: Option<FileFigureConfig>,
    pub style: Option<FileStyleConfig>,
    #[serde(rename = "mechanism-1")]
    pub mechanism_1: Option<FileMechanismStyle>,
    #[serde(rename = "mechanism-2")]
    pub mechanism_2: Option<FileMechanismStyle>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileFigureConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(rename = "y-min")]
    pub y_min: Option<f64>,
    #[serde(rename = "y-max")]
    pub y_max: Option<f64>,
    #[serde(rename = "x-label")]
    pub x_label: Option<String>,
    #[serde(rename = "y-label")]
    pub y_label: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileStyleConfig {
    #[serde(rename = "marker-width")]
    pub marker_width: Option<f64>,
    #[serde(rename = "samples-per-segment")]
    pub samples_per_segment: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileMechanismStyle {
    pub label: Option<String>,
    pub color: Option<Color>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        debug!("Loaded figure configuration from {:?}", path);
        Ok(config)
    }
}
