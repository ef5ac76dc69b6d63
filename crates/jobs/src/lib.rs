pub mod registrar;

pub use registrar::{RegistrarJob, RegistrarState};
