use radarr_kodi_domain::config::ProvisionConfig;
use radarr_kodi_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ScriptProvisioner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub config_seeded: bool,
    pub made_executable: bool,
}

/// Use case: first-run preparation of the notification script.
///
/// Seeds the script's configuration from its shipped template when absent
/// and makes the script executable. Fetching the script itself is left to
/// the container image.
pub struct ProvisionScriptUseCase {
    provisioner: Arc<dyn ScriptProvisioner>,
}

impl ProvisionScriptUseCase {
    pub fn new(provisioner: Arc<dyn ScriptProvisioner>) -> Self {
        Self { provisioner }
    }

    #[instrument(skip(self, provision))]
    pub async fn execute(
        &self,
        script_path: &str,
        provision: &ProvisionConfig,
    ) -> Result<ProvisionReport, DomainError> {
        let made_executable = self.provisioner.ensure_executable(script_path).await?;

        let config_seeded = self
            .provisioner
            .seed_file(&provision.default_config_template, &provision.config_path)
            .await?;

        if config_seeded {
            info!(
                template = %provision.default_config_template,
                target = %provision.config_path,
                "Seeded default script configuration"
            );
        } else {
            info!(target = %provision.config_path, "Script configuration already present");
        }

        Ok(ProvisionReport {
            config_seeded,
            made_executable,
        })
    }
}
