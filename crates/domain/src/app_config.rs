/// Values read from the target application's own `config.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfigFile {
    pub port: Option<u16>,
    pub url_base: Option<String>,
    pub api_key: Option<String>,
    pub instance_name: Option<String>,
}
