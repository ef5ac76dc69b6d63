pub mod errors;
pub mod logging;
pub mod poll;
pub mod provision;
pub mod radarr;
pub mod registration;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use poll::PollConfig;
pub use provision::ProvisionConfig;
pub use radarr::RadarrConfig;
pub use registration::RegistrationConfig;
pub use root::{CliOverrides, Config};
