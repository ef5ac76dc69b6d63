use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RadarrConfig {
    /// Radarr's own configuration, read when no URL/API key pair is given.
    #[serde(default = "default_config_xml")]
    pub config_xml: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Instance name the status endpoint must report before registering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
}

impl Default for RadarrConfig {
    fn default() -> Self {
        Self {
            config_xml: default_config_xml(),
            host: default_host(),
            url: None,
            api_key: None,
            instance_name: None,
        }
    }
}

fn default_config_xml() -> String {
    "/config/config.xml".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}
