use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::classify::StrategyKey;
use crate::domain::{DEFAULT_FRESHNESS_SECS, DEFAULT_WINDOW_DAYS};
use crate::errors::ConfigError;

const APP_DIR: &str = "bill_calendar";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const MAX_FRESHNESS_SECS: u64 = 60 * 60 * 24 * 365;

/// Host-side preferences for the bill dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rolling window, in days, requested from the entry fetch.
    #[serde(default = "DashboardConfig::default_window_days")]
    pub window_days: u32,
    /// How long a fetched snapshot stays fresh before a refetch.
    #[serde(default = "DashboardConfig::default_freshness_secs")]
    pub freshness_secs: u64,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_strategy: Option<StrategyKey>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: Self::default_window_days(),
            freshness_secs: Self::default_freshness_secs(),
            dark_mode: false,
            default_strategy: None,
        }
    }
}

impl DashboardConfig {
    pub fn default_window_days() -> u32 {
        DEFAULT_WINDOW_DAYS
    }

    pub fn default_freshness_secs() -> u64 {
        DEFAULT_FRESHNESS_SECS
    }

    pub fn freshness(&self) -> Duration {
        let secs = self.freshness_secs.min(MAX_FRESHNESS_SECS);
        Duration::seconds(secs as i64)
    }
}

/// Handles persistence of [`DashboardConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager rooted at the platform configuration directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_dir(base.join(APP_DIR))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    /// Loads the stored configuration, or defaults when none exists yet.
    pub fn load(&self) -> Result<DashboardConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(DashboardConfig::default())
        }
    }

    pub fn save(&self, config: &DashboardConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved dashboard config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
