use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

use crate::application::ResultExt;
use habitual_domain::DomainError;

const CONFIG_FILE: &str = "app_config.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// `EnvFilter` directive applying this level to the whole app
    pub fn filter_directive(&self) -> String {
        format!("{0},habitual={0}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(DomainError::InvalidInput(format!("Unknown log level: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AppConfig {
    #[serde(default)]
    log_level: LogLevel,
}

/// Process configuration persisted next to the user data
pub struct ConfigService {
    log_level: AtomicU8,
    config_path: PathBuf,
}

impl ConfigService {
    pub fn new(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;
        let config_path = config_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<AppConfig>(&content).unwrap_or_default()
        } else {
            AppConfig::default()
        };

        info!("📁 Config loaded from: {:?}", config_path);
        info!("🔧 Initial log level: {}", config.log_level.as_str());

        Ok(Self {
            log_level: AtomicU8::new(config.log_level as u8),
            config_path,
        })
    }

    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Persist a new level; it applies from the next start
    pub fn set_log_level(&self, level: LogLevel) -> Result<(), DomainError> {
        self.log_level.store(level as u8, Ordering::Relaxed);

        let content = serde_json::to_string_pretty(&AppConfig { log_level: level }).to_infra_err()?;
        std::fs::write(&self.config_path, content).to_infra_err()?;

        info!(
            "💾 Log level '{}' saved to {:?}, effective after restart",
            level.as_str(),
            self.config_path
        );
        Ok(())
    }
}
