mod fake_radarr;

pub use fake_radarr::*;
