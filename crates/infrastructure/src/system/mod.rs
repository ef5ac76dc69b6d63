pub mod script_provisioner;

pub use script_provisioner::FsScriptProvisioner;
