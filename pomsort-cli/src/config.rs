//! Configuration file loading for pomsort.
//!
//! Discovers and loads `pomsort.toml` from the manifest's directory.
//! CLI arguments take precedence over config file settings.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "pomsort.toml";

/// Top-level configuration from pomsort.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PomsortConfig {
    pub check: CheckConfig,
    pub fix: FixConfig,
}

/// `[check]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Default output format ("text" or "json").
    pub format: Option<String>,
}

/// `[fix]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Keep a copy of the original manifest next to it when writing.
    pub backup: bool,

    /// Suffix for the backup copy.
    pub backup_suffix: String,

    /// Enforce the sha256 staleness precondition at apply time.
    pub require_clean_hashes: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            backup: false,
            backup_suffix: ".bak".to_string(),
            require_clean_hashes: true,
        }
    }
}

/// Load `pomsort.toml` from `dir`, falling back to defaults when absent.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<PomsortConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(path = %path, "no config file, using defaults");
        return Ok(PomsortConfig::default());
    }

    let contents = fs::read_to_string(&path).with_context(|| format!("read {}", path))?;
    let config: PomsortConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path))?;
    debug!(path = %path, "loaded config file");
    Ok(config)
}
