use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvisionConfig {
    /// Template shipped with the script repository.
    #[serde(default = "default_config_template")]
    pub default_config_template: String,

    /// Where the script expects its configuration.
    #[serde(default = "default_config_path")]
    pub config_path: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            default_config_template: default_config_template(),
            config_path: default_config_path(),
        }
    }
}

fn default_config_template() -> String {
    "/config/scripts/Radarr_Kodi/src/config/default_config.yaml".to_string()
}

fn default_config_path() -> String {
    "/config/scripts/Radarr_Kodi/config.yaml".to_string()
}
