use radarr_kodi_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RadarrApiPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// The API answered, but with another (or no) instance name.
    WrongInstance { reported: Option<String> },
}

/// Use case: one status query, compared against the expected instance name.
/// The polling loop around it lives in the registrar job.
pub struct CheckReadinessUseCase {
    api: Arc<dyn RadarrApiPort>,
}

impl CheckReadinessUseCase {
    pub fn new(api: Arc<dyn RadarrApiPort>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, expected_instance: &str) -> Result<Readiness, DomainError> {
        let status = self.api.system_status().await?;

        if status.is_instance(expected_instance) {
            debug!(
                app_name = status.app_name.as_deref().unwrap_or("unknown"),
                version = status.version.as_deref().unwrap_or("unknown"),
                "Radarr API is ready"
            );
            Ok(Readiness::Ready)
        } else {
            Ok(Readiness::WrongInstance {
                reported: status.instance_name,
            })
        }
    }
}
