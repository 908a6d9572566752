//! Scene configuration (parsed from TOML)

use crate::firework::PALETTE;
use ember_core::{Color4, EmberError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for generating one burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub flares_per_firework: usize,
    pub palette: Vec<Color4>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            flares_per_firework: 400,
            palette: PALETTE.to_vec(),
        }
    }
}

/// Top-level configuration for a fireworks scene and its frame buffers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    /// Byte length of each of the vertex and color regions
    pub buffer_bytes: usize,
    /// Rolling window size; the oldest burst is evicted beyond this
    pub max_fireworks: usize,
    pub launch_interval_min_us: u64,
    pub launch_interval_max_us: u64,
    pub stats_interval_us: u64,
    /// Fixed RNG seed; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub burst: BurstConfig,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            buffer_bytes: 10_000_000,
            max_fireworks: 10,
            launch_interval_min_us: 100_000,
            launch_interval_max_us: 700_000,
            stats_interval_us: 1_000_000,
            seed: None,
            burst: BurstConfig::default(),
        }
    }
}

impl FireworksConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: "config", "loaded {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_bytes < std::mem::size_of::<f32>() {
            return Err(EmberError::ConfigError(format!(
                "buffer_bytes must hold at least one float, got {}",
                self.buffer_bytes
            )));
        }
        if self.max_fireworks == 0 {
            return Err(EmberError::ConfigError(
                "max_fireworks must be at least 1".into(),
            ));
        }
        if self.burst.flares_per_firework == 0 {
            return Err(EmberError::ConfigError(
                "flares_per_firework must be at least 1".into(),
            ));
        }
        if self.launch_interval_min_us > self.launch_interval_max_us {
            return Err(EmberError::ConfigError(format!(
                "launch interval min {} exceeds max {}",
                self.launch_interval_min_us, self.launch_interval_max_us
            )));
        }
        if self.stats_interval_us == 0 {
            return Err(EmberError::ConfigError(
                "stats_interval_us must be positive".into(),
            ));
        }
        if self.burst.palette.is_empty() {
            return Err(EmberError::ConfigError("palette is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = FireworksConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_fireworks, 10);
        assert_eq!(config.burst.flares_per_firework, 400);
        assert_eq!(config.burst.palette.len(), 7);
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
max_fireworks = 4
flares_per_firework = 50
seed = 7
palette = [{ r = 1.0, g = 1.0, b = 1.0, a = 1.0 }]
"#;
        let config = FireworksConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.max_fireworks, 4);
        assert_eq!(config.burst.flares_per_firework, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.burst.palette, vec![Color4::WHITE]);
        assert_eq!(config.buffer_bytes, 10_000_000);
    }

    #[test]
    fn rejects_inverted_interval() {
        let toml_str = "launch_interval_min_us = 9\nlaunch_interval_max_us = 3";
        assert!(matches!(
            FireworksConfig::from_toml_str(toml_str),
            Err(EmberError::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_empty_palette_and_tiny_buffer() {
        assert!(FireworksConfig::from_toml_str("palette = []").is_err());
        assert!(FireworksConfig::from_toml_str("buffer_bytes = 3").is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            FireworksConfig::from_toml_str("max_fireworks = \"ten\""),
            Err(EmberError::TomlParseError(_))
        ));
    }

    #[test]
    fn default_survives_toml_roundtrip() {
        let config = FireworksConfig {
            seed: Some(11),
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(FireworksConfig::from_toml_str(&text).unwrap(), config);
    }
}
