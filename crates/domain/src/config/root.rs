use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::poll::PollConfig;
use super::provision::ProvisionConfig;
use super::radarr::RadarrConfig;
use super::registration::RegistrationConfig;

const LOCAL_CONFIG_PATH: &str = "radarr-kodi.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/radarr-kodi/config.toml";

/// Main configuration structure for the registrar
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// How to find and reach Radarr
    #[serde(default)]
    pub radarr: RadarrConfig,

    /// The custom-script notification to register
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Readiness polling
    #[serde(default)]
    pub poll: PollConfig,

    /// First-run provisioning of the script
    #[serde(default)]
    pub provision: ProvisionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. radarr-kodi.toml in current directory
    /// 3. /etc/radarr-kodi/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line (and environment) overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.config_xml {
            self.radarr.config_xml = path;
        }
        if let Some(url) = overrides.url {
            self.radarr.url = Some(url);
        }
        if let Some(key) = overrides.api_key {
            self.radarr.api_key = Some(key);
        }
        if let Some(name) = overrides.instance_name {
            self.radarr.instance_name = Some(name);
        }
        if let Some(path) = overrides.script_path {
            self.registration.script_path = path;
        }
        if let Some(secs) = overrides.poll_interval_secs {
            self.poll.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registration.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Notification name cannot be empty".to_string(),
            ));
        }

        if self.registration.script_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Script path cannot be empty".to_string(),
            ));
        }

        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Poll interval must be at least 1 second".to_string(),
            ));
        }

        if let Some(url) = &self.radarr.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "Radarr URL '{}' must start with http:// or https://",
                    url
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub config_xml: Option<String>,
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub instance_name: Option<String>,
    pub script_path: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
