use serde_json::Value;
use std::fmt;

const SCRIPT_NOT_FOUND_MESSAGE: &str = "File does not exist";
const PERMISSION_DENIED_MARKER: &str = "Permission denied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    ScriptNotFound,
    PermissionError,
    ScriptTestFailed,
    Unknown,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::ScriptNotFound => "script_not_found",
            FailureReason::PermissionError => "permission_error",
            FailureReason::ScriptTestFailed => "script_test_failed",
            FailureReason::Unknown => "unknown",
        }
    }

    /// Operator-facing hint logged next to the raw error.
    pub fn hint(&self) -> &'static str {
        match self {
            FailureReason::ScriptNotFound => {
                "The script was not found. The script repository was probably not cloned."
            }
            FailureReason::PermissionError => {
                "Radarr cannot execute the script. Check ownership and the execute bit."
            }
            FailureReason::ScriptTestFailed => {
                "Radarr ran the script's test event and it failed. Check the script's configuration."
            }
            FailureReason::Unknown => "Registration failed for an unknown reason.",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    AlreadyConfigured,
    Configured,
    Failed { reason: FailureReason, message: String },
}

impl RegistrationOutcome {
    pub fn failed(reason: FailureReason, message: impl Into<String>) -> Self {
        RegistrationOutcome::Failed {
            reason,
            message: message.into(),
        }
    }

    /// Error signal of a `POST /notification` response body.
    ///
    /// Validation failures come back as an array; the first element's
    /// `errorMessage` is the signal. A non-object first element is itself
    /// the signal. Non-string values are rendered as JSON text, so only a
    /// missing, null or empty message reads as success. Any other body
    /// shape carries no signal.
    pub fn error_signal(body: &Value) -> String {
        let first = match body {
            Value::Array(items) => items.first(),
            _ => None,
        };

        match first {
            Some(Value::Object(item)) => item.get("errorMessage").map(render).unwrap_or_default(),
            Some(other) => render(other),
            None => String::new(),
        }
    }

    /// Maps an error signal to an outcome. The rules follow Radarr's
    /// free-text messages, so this is the one place to adjust when they change.
    pub fn classify(signal: &str) -> Self {
        if signal.is_empty() {
            RegistrationOutcome::Configured
        } else if signal == SCRIPT_NOT_FOUND_MESSAGE {
            Self::failed(FailureReason::ScriptNotFound, signal)
        } else if signal.contains(PERMISSION_DENIED_MARKER) {
            Self::failed(FailureReason::PermissionError, signal)
        } else {
            Self::failed(FailureReason::ScriptTestFailed, signal)
        }
    }

    pub fn from_response(body: &Value) -> Self {
        Self::classify(&Self::error_signal(body))
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, RegistrationOutcome::Failed { .. })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            RegistrationOutcome::Failed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::AlreadyConfigured => f.write_str("already configured"),
            RegistrationOutcome::Configured => f.write_str("configured"),
            RegistrationOutcome::Failed { reason, message } => {
                write!(f, "failed ({}): {}", reason, message)
            }
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
