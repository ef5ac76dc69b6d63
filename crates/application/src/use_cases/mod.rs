pub mod endpoint;
pub mod provision;
pub mod registration;

// Re-export use cases
pub use endpoint::{
    EndpointSource, ResolveEndpointUseCase, ResolvedEndpoint, DEFAULT_INSTANCE_NAME,
};
pub use provision::{ProvisionReport, ProvisionScriptUseCase};
pub use registration::{
    CheckReadinessUseCase, FindExistingNotificationUseCase, Readiness, SubmitNotificationUseCase,
};
