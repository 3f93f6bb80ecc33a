use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::reference::Template;

/// How the CLI renders parsed references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON document per reference.
    #[default]
    Json,
    /// Column table (or `key=value` lines for templated output).
    Text,
}

/// Global configuration loaded from `~/.config/repolink/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepolinkConfig {
    /// Template applied when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<Template>,
    /// Output rendering: "json" (default) or "text".
    pub output: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Fail when a parsed reference has no browse URL.
    pub strict: bool,
}

impl Default for RepolinkConfig {
    fn default() -> Self {
        Self {
            default_template: None,
            output: OutputFormat::Json,
            pretty: true,
            strict: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("repolink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RepolinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RepolinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RepolinkConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RepolinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
