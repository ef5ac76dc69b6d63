//! Radarr Kodi Hook Domain Layer
pub mod app_config;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod notification;
pub mod outcome;
pub mod status;

pub use app_config::AppConfigFile;
pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use endpoint::{ApiVersion, AppEndpoint};
pub use errors::DomainError;
pub use notification::{
    NotificationEntry, NotificationEvent, NotificationEvents, NotificationField,
    NotificationSummary, CUSTOM_SCRIPT_IMPLEMENTATION,
};
pub use outcome::{FailureReason, RegistrationOutcome};
pub use status::SystemStatus;
