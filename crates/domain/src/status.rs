use serde::Deserialize;

/// Fields of `GET /api/{version}/system/status` the registrar looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    #[serde(default)]
    pub instance_name: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl SystemStatus {
    pub fn is_instance(&self, expected: &str) -> bool {
        self.instance_name.as_deref() == Some(expected)
    }
}
