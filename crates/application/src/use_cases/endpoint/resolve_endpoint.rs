use radarr_kodi_domain::config::RadarrConfig;
use radarr_kodi_domain::{AppEndpoint, ConfigError, DomainError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::AppConfigReader;

/// Instance name Radarr reports when `InstanceName` was never changed.
pub const DEFAULT_INSTANCE_NAME: &str = "Radarr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    /// URL and API key were both supplied; `config.xml` was not read.
    Explicit,
    ConfigXml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub endpoint: AppEndpoint,
    pub instance_name: String,
    pub source: EndpointSource,
}

/// Use case: work out where Radarr listens and which instance to expect.
/// Runs once at startup; the result is handed to the registrar.
pub struct ResolveEndpointUseCase {
    reader: Arc<dyn AppConfigReader>,
}

impl ResolveEndpointUseCase {
    pub fn new(reader: Arc<dyn AppConfigReader>) -> Self {
        Self { reader }
    }

    #[instrument(skip(self, radarr), fields(config_xml = %radarr.config_xml))]
    pub async fn execute(&self, radarr: &RadarrConfig) -> Result<ResolvedEndpoint, DomainError> {
        let url = non_blank(radarr.url.as_deref());
        let api_key = non_blank(radarr.api_key.as_deref());
        let explicit_name = non_blank(radarr.instance_name.as_deref());

        if let (Some(url), Some(api_key)) = (url, api_key) {
            info!(url = %url, "Using supplied Radarr endpoint, skipping config.xml");
            return Ok(ResolvedEndpoint {
                endpoint: AppEndpoint::from_url(url, api_key),
                instance_name: explicit_name.unwrap_or(DEFAULT_INSTANCE_NAME).to_string(),
                source: EndpointSource::Explicit,
            });
        }

        let file = self.reader.read_app_config(&radarr.config_xml).await?;

        let api_key = match api_key.or(non_blank(file.api_key.as_deref())) {
            Some(key) => key.to_string(),
            None => return Err(missing(&radarr.config_xml, "ApiKey")),
        };

        let endpoint = match url {
            Some(url) => AppEndpoint::from_url(url, api_key),
            None => {
                let port = file
                    .port
                    .ok_or_else(|| missing(&radarr.config_xml, "Port"))?;
                AppEndpoint::from_parts(
                    &radarr.host,
                    port,
                    file.url_base.as_deref().unwrap_or_default(),
                    api_key,
                )
            }
        };

        if !endpoint.api_version.is_mapped() {
            warn!(
                base_url = %endpoint.base_url,
                "Port has no known API version, status URL will have an empty version segment"
            );
        }

        let instance_name = explicit_name
            .or(non_blank(file.instance_name.as_deref()))
            .unwrap_or(DEFAULT_INSTANCE_NAME)
            .to_string();

        info!(
            base_url = %endpoint.base_url,
            api_version = %endpoint.api_version,
            instance_name = %instance_name,
            "Resolved Radarr endpoint from config.xml"
        );

        Ok(ResolvedEndpoint {
            endpoint,
            instance_name,
            source: EndpointSource::ConfigXml,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn missing(file: &str, key: &str) -> DomainError {
    ConfigError::MissingValue {
        file: file.to_string(),
        key: key.to_string(),
    }
    .into()
}
