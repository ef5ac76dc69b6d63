use async_trait::async_trait;
use radarr_kodi_application::ports::AppConfigReader;
use radarr_kodi_domain::{AppConfigFile, DomainError};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

/// Reads `Config.Port`, `Config.UrlBase`, `Config.ApiKey` and
/// `Config.InstanceName` from Radarr's `config.xml`.
pub struct XmlAppConfigReader;

impl XmlAppConfigReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(content: &str) -> Result<AppConfigFile, DomainError> {
        let raw: RawConfig = quick_xml::de::from_str(content)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse config.xml: {}", e)))?;

        let port = match non_blank(raw.port) {
            Some(port) => Some(port.parse::<u16>().map_err(|_| {
                DomainError::ConfigError(format!("Invalid Port in config.xml: '{}'", port))
            })?),
            None => None,
        };

        Ok(AppConfigFile {
            port,
            url_base: non_blank(raw.url_base),
            api_key: non_blank(raw.api_key),
            instance_name: non_blank(raw.instance_name),
        })
    }
}

impl Default for XmlAppConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppConfigReader for XmlAppConfigReader {
    async fn read_app_config(&self, path: &str) -> Result<AppConfigFile, DomainError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", path, e)))?;

        let file = Self::parse(&content)?;
        debug!(
            path,
            port = ?file.port,
            has_api_key = file.api_key.is_some(),
            "Read application config"
        );
        Ok(file)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "Port", default)]
    port: Option<String>,
    #[serde(rename = "UrlBase", default)]
    url_base: Option<String>,
    #[serde(rename = "ApiKey", default)]
    api_key: Option<String>,
    #[serde(rename = "InstanceName", default)]
    instance_name: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
