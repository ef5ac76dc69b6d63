use async_trait::async_trait;
use radarr_kodi_domain::{AppConfigFile, DomainError};

/// Port for reading the target application's own configuration file.
#[async_trait]
pub trait AppConfigReader: Send + Sync {
    async fn read_app_config(&self, path: &str) -> Result<AppConfigFile, DomainError>;
}
