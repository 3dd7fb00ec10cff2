use rxnprofile::engine::config::ConfigError;
use rxnprofile::engine::error::AssemblyError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("Assembly configuration error: {0}")]
    AssemblyConfig(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
