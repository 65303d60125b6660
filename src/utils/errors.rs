use std::io;
use thiserror::Error;

use crate::resources::AxisName;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid flight configuration: {0}")]
    ValidationError(String),

    #[error("No bindings for input axis {0}")]
    MissingAxis(AxisName),
}
