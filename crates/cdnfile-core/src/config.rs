use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::library::{FileType, SOURCE_PREFIX};
use crate::request::{LibraryRequest, DEFAULT_LIBRARY, DEFAULT_THEME, DEFAULT_VERSION};

/// Existence check parameters (`[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole HEAD request.
    pub timeout_secs: u64,
    /// Follow redirects before reading the status. Off: the first status line decides.
    pub follow_redirects: bool,
    /// Status codes that count as "file exists".
    pub accepted_statuses: Vec<u32>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: false,
            accepted_statuses: vec![200, 304],
        }
    }
}

/// Request values used when the caller does not specify them (`[defaults]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub library: String,
    pub version: String,
    pub file_type: FileType,
    pub theme: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_string(),
            version: DEFAULT_VERSION.to_string(),
            file_type: FileType::Script,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/cdnfile/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// URL prefix every library path is appended to.
    pub source_prefix: String,
    /// Reject library/version/theme values that are not path-safe.
    pub strict: bool,
    pub probe: ProbeConfig,
    pub defaults: RequestDefaults,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            source_prefix: SOURCE_PREFIX.to_string(),
            strict: false,
            probe: ProbeConfig::default(),
            defaults: RequestDefaults::default(),
        }
    }
}

impl CdnConfig {
    /// Request built from `[defaults]` on the configured prefix.
    pub fn default_request(&self) -> LibraryRequest {
        let d = &self.defaults;
        LibraryRequest::new(&d.library, &d.version, d.file_type, &d.theme)
            .with_prefix(&self.source_prefix)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cdnfile")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdnConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<CdnConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: CdnConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
