//! Personality preset loading

use super::ConfigError;
use crate::store::PersonalityProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for named personality presets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalitiesConfig {
    #[serde(default)]
    pub presets: HashMap<String, PersonalityProfile>,
}

fn into_presets(config: PersonalitiesConfig) -> HashMap<String, PersonalityProfile> {
    config
        .presets
        .into_iter()
        .map(|(name, mut profile)| {
            profile.sanitize();
            (name, profile)
        })
        .collect()
}

/// Load personality presets from a TOML file
pub fn load_personalities(path: &Path) -> Result<HashMap<String, PersonalityProfile>, ConfigError> {
    let config: PersonalitiesConfig = super::load_toml(path)?;
    Ok(into_presets(config))
}

/// Load personality presets from a TOML string
pub fn parse_personalities(content: &str) -> Result<HashMap<String, PersonalityProfile>, ConfigError> {
    let config: PersonalitiesConfig = super::parse_toml(content)?;
    Ok(into_presets(config))
}

/// Get the built-in personality presets
pub fn default_personalities() -> HashMap<String, PersonalityProfile> {
    let toml = include_str!("../../config/personalities.toml");
    parse_personalities(toml).unwrap_or_else(|err| {
        tracing::warn!("Embedded personality presets failed to load ({}), using balanced only", err);
        let mut map = HashMap::new();
        map.insert("balanced".to_string(), PersonalityProfile::default());
        map
    })
}
