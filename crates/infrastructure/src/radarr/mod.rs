pub mod api_client;
pub mod config_xml;

pub use api_client::HttpRadarrApi;
pub use config_xml::XmlAppConfigReader;
