use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const API_URL_ENV: &str = "FEEDBACK_DESK_API_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Post carousel behaviour on the home screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub rotate_secs: u64,
    /// Pixels attributed to one terminal column when applying breakpoints
    pub column_width_px: u32,
    pub small_breakpoint: u32,
    pub medium_breakpoint: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rotate_secs: 5,
            column_width_px: 8,
            small_breakpoint: 640,
            medium_breakpoint: 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(&url);
        }
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn apply_api_url_override(&mut self, url: &str) {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            self.api.base_url = trimmed.to_string();
        }
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "feedback-desk")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory holding the log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }
}
