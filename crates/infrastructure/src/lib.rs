//! Radarr Kodi Hook Infrastructure Layer
pub mod radarr;
pub mod system;
