mod provision_script;

pub use provision_script::{ProvisionReport, ProvisionScriptUseCase};
