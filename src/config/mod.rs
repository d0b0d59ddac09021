use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing scraper settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Results site root, including the scheme.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory the bouts and leaderboard files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for page fetches. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_output_dir() -> String {
    constants::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    constants::DEFAULT_USER_AGENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    ///
    /// # Environment Variables
    /// - `SUMO_BASE_URL` - Override results site
    /// - `SUMO_OUTPUT_DIR` - Override output directory
    /// - `SUMO_LOG_FILE` - Override log file path
    /// - `SUMO_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// Environment variables take precedence over the config file.
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads from `path` (if present), applies environment overrides and validates.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.base_url,
            &self.output_dir,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        match &config.log_file_path {
            Some(custom_path) => println!("{custom_path}"),
            None => {
                println!("{log_dir}/{}", constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips any
    /// trailing slash from the base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
