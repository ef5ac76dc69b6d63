use async_trait::async_trait;
use radarr_kodi_domain::DomainError;

/// Port for the filesystem side of provisioning the notification script.
#[async_trait]
pub trait ScriptProvisioner: Send + Sync {
    /// Copies `template` to `target` unless `target` exists.
    /// Returns true when a copy was made.
    async fn seed_file(&self, template: &str, target: &str) -> Result<bool, DomainError>;

    /// Adds the execute bits to `path`. Returns true when the mode changed.
    async fn ensure_executable(&self, path: &str) -> Result<bool, DomainError>;
}
