use serde::{Deserialize, Serialize};

use crate::notification::{NotificationEntry, NotificationEvent, NotificationEvents};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_script_path")]
    pub script_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,

    #[serde(default = "default_events")]
    pub events: Vec<NotificationEvent>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            script_path: default_script_path(),
            arguments: None,
            events: default_events(),
        }
    }
}

impl RegistrationConfig {
    pub fn to_entry(&self) -> NotificationEntry {
        NotificationEntry::custom_script(
            self.name.clone(),
            self.script_path.clone(),
            self.arguments.clone(),
            self.events.iter().copied().collect::<NotificationEvents>(),
        )
    }
}

fn default_name() -> String {
    "Radarr_Kodi".to_string()
}

fn default_script_path() -> String {
    "/config/scripts/Radarr_Kodi/main.py".to_string()
}

fn default_events() -> Vec<NotificationEvent> {
    NotificationEvent::ALL.to_vec()
}
