mod resolve_endpoint;

pub use resolve_endpoint::{
    EndpointSource, ResolveEndpointUseCase, ResolvedEndpoint, DEFAULT_INSTANCE_NAME,
};
