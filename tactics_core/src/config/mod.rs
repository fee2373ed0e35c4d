//! Configuration loading from TOML files

mod moves;
mod personalities;
mod tuning;

pub use moves::{default_moves, load_move_set, parse_move_set};
pub use personalities::{default_personalities, load_personalities, parse_personalities};
pub use tuning::*;

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate tuning from a TOML file
pub fn load_tuning(path: &Path) -> Result<TacticsTuning, ConfigError> {
    let tuning: TacticsTuning = load_toml(path)?;
    tuning.validate()?;
    Ok(tuning)
}

/// Parse and validate tuning from a TOML string
pub fn parse_tuning(content: &str) -> Result<TacticsTuning, ConfigError> {
    let tuning: TacticsTuning = parse_toml(content)?;
    tuning.validate()?;
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tuning_validates() {
        let err = parse_tuning("[selection]\nmin_weight = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_parse_tuning_reports_bad_toml() {
        let err = parse_tuning("[selection\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_sample_tuning_matches_defaults() {
        let tuning = parse_tuning(include_str!("../../config/tuning.toml")).unwrap();
        assert_eq!(tuning, TacticsTuning::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tuning(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
