use serde::{Deserialize, Serialize};

pub const CUSTOM_SCRIPT_IMPLEMENTATION: &str = "CustomScript";
pub const CUSTOM_SCRIPT_IMPLEMENTATION_NAME: &str = "Custom Script";
pub const CUSTOM_SCRIPT_CONFIG_CONTRACT: &str = "CustomScriptSettings";

/// Lifecycle events Radarr can hand to a custom script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    Grab,
    Download,
    Upgrade,
    Rename,
    MovieAdded,
    MovieDelete,
    MovieFileDelete,
    MovieFileDeleteForUpgrade,
    HealthIssue,
    HealthRestored,
    ApplicationUpdate,
    ManualInteractionRequired,
}

impl NotificationEvent {
    pub const ALL: [NotificationEvent; 12] = [
        NotificationEvent::Grab,
        NotificationEvent::Download,
        NotificationEvent::Upgrade,
        NotificationEvent::Rename,
        NotificationEvent::MovieAdded,
        NotificationEvent::MovieDelete,
        NotificationEvent::MovieFileDelete,
        NotificationEvent::MovieFileDeleteForUpgrade,
        NotificationEvent::HealthIssue,
        NotificationEvent::HealthRestored,
        NotificationEvent::ApplicationUpdate,
        NotificationEvent::ManualInteractionRequired,
    ];

    /// Name Radarr puts in `Radarr_EventType` when it runs the script.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationEvent::Grab => "Grab",
            NotificationEvent::Download => "Download",
            NotificationEvent::Upgrade => "Upgrade",
            NotificationEvent::Rename => "Rename",
            NotificationEvent::MovieAdded => "MovieAdded",
            NotificationEvent::MovieDelete => "MovieDelete",
            NotificationEvent::MovieFileDelete => "MovieFileDelete",
            NotificationEvent::MovieFileDeleteForUpgrade => "MovieFileDeleteForUpgrade",
            NotificationEvent::HealthIssue => "HealthIssue",
            NotificationEvent::HealthRestored => "HealthRestored",
            NotificationEvent::ApplicationUpdate => "ApplicationUpdate",
            NotificationEvent::ManualInteractionRequired => "ManualInteractionRequired",
        }
    }
}

/// Event flags as they appear on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvents {
    pub on_grab: bool,
    pub on_download: bool,
    pub on_upgrade: bool,
    pub on_rename: bool,
    pub on_movie_added: bool,
    pub on_movie_delete: bool,
    pub on_movie_file_delete: bool,
    pub on_movie_file_delete_for_upgrade: bool,
    pub on_health_issue: bool,
    pub include_health_warnings: bool,
    pub on_health_restored: bool,
    pub on_application_update: bool,
    pub on_manual_interaction_required: bool,
}

impl NotificationEvents {
    pub fn all() -> Self {
        NotificationEvent::ALL.iter().copied().collect()
    }

    pub fn enable(&mut self, event: NotificationEvent) {
        match event {
            NotificationEvent::Grab => self.on_grab = true,
            NotificationEvent::Download => self.on_download = true,
            NotificationEvent::Upgrade => self.on_upgrade = true,
            NotificationEvent::Rename => self.on_rename = true,
            NotificationEvent::MovieAdded => self.on_movie_added = true,
            NotificationEvent::MovieDelete => self.on_movie_delete = true,
            NotificationEvent::MovieFileDelete => self.on_movie_file_delete = true,
            NotificationEvent::MovieFileDeleteForUpgrade => {
                self.on_movie_file_delete_for_upgrade = true
            }
            NotificationEvent::HealthIssue => {
                self.on_health_issue = true;
                self.include_health_warnings = true;
            }
            NotificationEvent::HealthRestored => self.on_health_restored = true,
            NotificationEvent::ApplicationUpdate => self.on_application_update = true,
            NotificationEvent::ManualInteractionRequired => {
                self.on_manual_interaction_required = true
            }
        }
    }

    pub fn is_enabled(&self, event: NotificationEvent) -> bool {
        match event {
            NotificationEvent::Grab => self.on_grab,
            NotificationEvent::Download => self.on_download,
            NotificationEvent::Upgrade => self.on_upgrade,
            NotificationEvent::Rename => self.on_rename,
            NotificationEvent::MovieAdded => self.on_movie_added,
            NotificationEvent::MovieDelete => self.on_movie_delete,
            NotificationEvent::MovieFileDelete => self.on_movie_file_delete,
            NotificationEvent::MovieFileDeleteForUpgrade => self.on_movie_file_delete_for_upgrade,
            NotificationEvent::HealthIssue => self.on_health_issue,
            NotificationEvent::HealthRestored => self.on_health_restored,
            NotificationEvent::ApplicationUpdate => self.on_application_update,
            NotificationEvent::ManualInteractionRequired => self.on_manual_interaction_required,
        }
    }
}

impl FromIterator<NotificationEvent> for NotificationEvents {
    fn from_iter<I: IntoIterator<Item = NotificationEvent>>(iter: I) -> Self {
        let mut events = NotificationEvents::default();
        for event in iter {
            events.enable(event);
        }
        events
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The custom-script notification submitted to `POST /api/v3/notification`.
///
/// Built once and sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEntry {
    pub name: String,
    #[serde(flatten)]
    pub events: NotificationEvents,
    pub fields: Vec<NotificationField>,
    pub implementation_name: String,
    pub implementation: String,
    pub config_contract: String,
    pub tags: Vec<i64>,
}

impl NotificationEntry {
    pub fn custom_script(
        name: impl Into<String>,
        script_path: impl Into<String>,
        arguments: Option<String>,
        events: NotificationEvents,
    ) -> Self {
        Self {
            name: name.into(),
            events,
            fields: vec![
                NotificationField {
                    name: "path".to_string(),
                    value: Some(script_path.into()),
                },
                NotificationField {
                    name: "arguments".to_string(),
                    value: arguments.filter(|a| !a.trim().is_empty()),
                },
            ],
            implementation_name: CUSTOM_SCRIPT_IMPLEMENTATION_NAME.to_string(),
            implementation: CUSTOM_SCRIPT_IMPLEMENTATION.to_string(),
            config_contract: CUSTOM_SCRIPT_CONFIG_CONTRACT.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn script_path(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == "path")
            .and_then(|f| f.value.as_deref())
    }
}

/// One element of `GET /api/v3/notification`; only the name is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub implementation: Option<String>,
}

impl NotificationSummary {
    /// Coarse match: a configured name that merely contains `target` counts
    /// as the same registration.
    pub fn matches(&self, target: &str) -> bool {
        self.name.contains(target)
    }
}
