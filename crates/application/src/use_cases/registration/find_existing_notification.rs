use radarr_kodi_domain::{DomainError, NotificationSummary};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RadarrApiPort;

/// Use case: look for an already registered notification before creating one.
///
/// The match is a substring test on names, so an unrelated entry whose
/// name contains the target also counts as "already registered".
pub struct FindExistingNotificationUseCase {
    api: Arc<dyn RadarrApiPort>,
}

impl FindExistingNotificationUseCase {
    pub fn new(api: Arc<dyn RadarrApiPort>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<Option<NotificationSummary>, DomainError> {
        let notifications = self.api.list_notifications().await?;

        debug!(
            configured = notifications.len(),
            "Fetched configured notifications"
        );

        Ok(notifications.into_iter().find(|n| n.matches(name)))
    }
}
