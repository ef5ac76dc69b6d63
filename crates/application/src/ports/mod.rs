mod app_config_reader;
mod radarr_api;
mod script_provisioner;

pub use app_config_reader::AppConfigReader;
pub use radarr_api::RadarrApiPort;
pub use script_provisioner::ScriptProvisioner;
