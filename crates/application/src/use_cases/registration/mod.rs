mod check_readiness;
mod find_existing_notification;
mod submit_notification;

pub use check_readiness::{CheckReadinessUseCase, Readiness};
pub use find_existing_notification::FindExistingNotificationUseCase;
pub use submit_notification::SubmitNotificationUseCase;
