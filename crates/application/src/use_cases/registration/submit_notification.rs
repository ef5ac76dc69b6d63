use radarr_kodi_domain::{FailureReason, NotificationEntry, RegistrationOutcome};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::RadarrApiPort;

/// Use case: the one side-effecting call. Probes the script path, then
/// POSTs the entry exactly once and classifies the answer.
pub struct SubmitNotificationUseCase {
    api: Arc<dyn RadarrApiPort>,
}

impl SubmitNotificationUseCase {
    pub fn new(api: Arc<dyn RadarrApiPort>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn execute(&self, entry: &NotificationEntry) -> RegistrationOutcome {
        if let Some(path) = entry.script_path() {
            // Radarr resolves the path here before the POST validates it.
            match self.api.probe_path(path).await {
                Ok(()) => debug!(path, "Filesystem probe sent"),
                Err(e) => warn!(error = %e, path, "Filesystem probe failed, submitting anyway"),
            }
        }

        let outcome = match self.api.create_notification(entry).await {
            Ok(body) => RegistrationOutcome::from_response(&body),
            Err(e) => RegistrationOutcome::failed(FailureReason::Unknown, e.to_string()),
        };

        match &outcome {
            RegistrationOutcome::Failed { reason, message } => {
                error!(reason = %reason, error = %message, "{}", reason.hint());
                error!("Failed to register {} notification", entry.name);
            }
            _ => info!("Registered {} notification", entry.name),
        }

        outcome
    }
}
