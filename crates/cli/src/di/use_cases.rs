use super::Adapters;
use radarr_kodi_application::use_cases::{
    CheckReadinessUseCase, FindExistingNotificationUseCase, ProvisionScriptUseCase,
    ResolveEndpointUseCase, SubmitNotificationUseCase,
};
use radarr_kodi_infrastructure::radarr::XmlAppConfigReader;
use radarr_kodi_infrastructure::system::FsScriptProvisioner;
use std::sync::Arc;

pub struct UseCases {
    pub check_readiness: Arc<CheckReadinessUseCase>,
    pub find_existing: Arc<FindExistingNotificationUseCase>,
    pub submit: Arc<SubmitNotificationUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            check_readiness: Arc::new(CheckReadinessUseCase::new(adapters.radarr_api.clone())),
            find_existing: Arc::new(FindExistingNotificationUseCase::new(
                adapters.radarr_api.clone(),
            )),
            submit: Arc::new(SubmitNotificationUseCase::new(adapters.radarr_api.clone())),
        }
    }

    /// Needed before the API client exists, so it is built on its own.
    pub fn resolve_endpoint() -> ResolveEndpointUseCase {
        ResolveEndpointUseCase::new(Arc::new(XmlAppConfigReader::new()))
    }

    pub fn provision() -> ProvisionScriptUseCase {
        ProvisionScriptUseCase::new(Arc::new(FsScriptProvisioner::new()))
    }
}
