use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::sink::FileSink;

/// Global configuration loaded from `~/.config/linkmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkmapConfig {
    /// Run the mapping suggester right after a URL is parsed.
    #[serde(default = "default_true")]
    pub auto_suggest: bool,
    /// Pretty-print saved template JSON.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
    /// Scheme prepended to pasted URLs that have none.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Directory for saved templates; if missing, the XDG data dir is used.
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_scheme() -> String {
    "https".to_string()
}

impl Default for LinkmapConfig {
    fn default() -> Self {
        Self {
            auto_suggest: true,
            pretty_json: true,
            default_scheme: default_scheme(),
            template_dir: None,
        }
    }
}

impl LinkmapConfig {
    /// Where templates are saved: `template_dir`, else `~/.local/share/linkmap/templates`.
    pub fn resolved_template_dir(&self) -> Result<PathBuf> {
        match &self.template_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileSink::default_dir(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkmapConfig = toml::from_str(&data)?;
    Ok(cfg)
}
