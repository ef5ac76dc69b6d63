use async_trait::async_trait;
use radarr_kodi_domain::{DomainError, NotificationEntry, NotificationSummary, SystemStatus};
use serde_json::Value;

/// Port for the parts of the Radarr REST API the registrar talks to.
///
/// Implementations are bound to one `AppEndpoint`.
#[async_trait]
pub trait RadarrApiPort: Send + Sync {
    /// `GET /api/{version}/system/status?apikey=...`
    async fn system_status(&self) -> Result<SystemStatus, DomainError>;

    /// `GET /api/v3/notification`
    async fn list_notifications(&self) -> Result<Vec<NotificationSummary>, DomainError>;

    /// `GET /api/v3/filesystem?path=...`; the response body is not used.
    async fn probe_path(&self, path: &str) -> Result<(), DomainError>;

    /// `POST /api/v3/notification`. Returns the JSON body whatever the HTTP
    /// status, since validation failures arrive as 400 with an array body.
    async fn create_notification(&self, entry: &NotificationEntry) -> Result<Value, DomainError>;
}
