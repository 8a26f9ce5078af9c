use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A dependency that lives in the deployments checkout, under `subdir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalChart {
    /// Dependency name as it appears in `Chart.yaml`.
    pub name: String,
    /// Directory of the chart, relative to the deployments dir.
    pub subdir: String,
}

impl LocalChart {
    pub fn new(name: impl Into<String>, subdir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdir: subdir.into(),
        }
    }
}

fn default_local_charts() -> Vec<LocalChart> {
    vec![
        LocalChart::new("model-manager-server", "server"),
        LocalChart::new("model-manager-loader", "loader"),
    ]
}

/// Global configuration loaded from `~/.config/chartloc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartlocConfig {
    /// Charts to point at the local deployments dir; if missing, the
    /// model-manager server and loader charts are used.
    #[serde(default = "default_local_charts")]
    pub local_charts: Vec<LocalChart>,
}

impl Default for ChartlocConfig {
    fn default() -> Self {
        Self {
            local_charts: default_local_charts(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chartloc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChartlocConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ChartlocConfig::default();
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

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<ChartlocConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ChartlocConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
