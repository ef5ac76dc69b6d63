use radarr_kodi_domain::{AppEndpoint, Config};
use radarr_kodi_infrastructure::radarr::HttpRadarrApi;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Adapters {
    pub radarr_api: Arc<HttpRadarrApi>,
}

impl Adapters {
    pub fn new(config: &Config, endpoint: AppEndpoint) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.poll.request_timeout_secs);
        info!(
            base_url = %endpoint.base_url,
            api_version = %endpoint.api_version,
            timeout_secs = config.poll.request_timeout_secs,
            "Initializing Radarr API client"
        );

        let radarr_api = HttpRadarrApi::new(endpoint, timeout)
            .map_err(|e| anyhow::anyhow!("Failed to create Radarr API client: {}", e))?;

        Ok(Self {
            radarr_api: Arc::new(radarr_api),
        })
    }
}
