//! Optional `.mutuikan.toml` configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Tool configuration, all fields optional with sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutuikanConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub usage: UsageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format when --format is not given.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Free-tier analyses per user per day.
    #[serde(default = "default_free_tier_limit")]
    pub free_tier_limit: u32,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            free_tier_limit: default_free_tier_limit(),
        }
    }
}

fn default_free_tier_limit() -> u32 {
    10
}

static CONFIG: OnceLock<MutuikanConfig> = OnceLock::new();

/// Load `.mutuikan.toml` from the current directory, once. Missing or
/// unreadable files fall back to defaults; a malformed file is reported on
/// stderr and ignored rather than aborting the run.
pub fn get_config() -> &'static MutuikanConfig {
    CONFIG.get_or_init(|| load_from(Path::new(".mutuikan.toml")))
}

fn load_from(path: &Path) -> MutuikanConfig {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("warning: ignoring malformed {}: {err}", path.display());
                MutuikanConfig::default()
            }
        },
        Err(_) => MutuikanConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = MutuikanConfig::default();
        assert_eq!(config.output.format, "terminal");
        assert_eq!(config.usage.free_tier_limit, 10);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: MutuikanConfig = toml::from_str("[usage]\nfree_tier_limit = 3\n").unwrap();
        assert_eq!(config.usage.free_tier_limit, 3);
        assert_eq!(config.output.format, "terminal");
    }

    #[test]
    fn empty_toml_is_fine() {
        let config: MutuikanConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, "terminal");
    }
}
