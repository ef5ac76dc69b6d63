use std::fmt;

/// API version segment used by the `*arr` family of applications.
///
/// Only the status endpoint is versioned this way; the notification and
/// filesystem endpoints always use `v3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V3,
    /// Port with no known application. Renders as an empty segment.
    Unmapped,
}

impl ApiVersion {
    /// Fixed mapping from listening port to API version:
    /// Sonarr (8989) and Radarr (7878) speak v3, Lidarr (8686) and
    /// Readarr (8787) speak v1.
    pub fn from_port(port: u16) -> Self {
        match port {
            8989 | 7878 => ApiVersion::V3,
            8686 | 8787 => ApiVersion::V1,
            _ => ApiVersion::Unmapped,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V3 => "v3",
            ApiVersion::Unmapped => "",
        }
    }

    pub fn is_mapped(&self) -> bool {
        !matches!(self, ApiVersion::Unmapped)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Where and how to reach the target application.
#[derive(Clone, PartialEq, Eq)]
pub struct AppEndpoint {
    pub base_url: String,
    pub api_key: String,
    pub api_version: ApiVersion,
}

impl AppEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, api_version: ApiVersion) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            api_key: api_key.into(),
            api_version,
        }
    }

    /// Builds `http://{host}:{port}{url_base}` and picks the version from the port.
    pub fn from_parts(host: &str, port: u16, url_base: &str, api_key: impl Into<String>) -> Self {
        let url_base = url_base.trim();
        let url_base = if url_base.is_empty() || url_base.starts_with('/') {
            url_base.to_string()
        } else {
            format!("/{}", url_base)
        };

        Self::new(
            format!("http://{}:{}{}", host, port, url_base),
            api_key,
            ApiVersion::from_port(port),
        )
    }

    /// Endpoint for a URL supplied from outside; the version follows the
    /// URL's port when it is a known one and defaults to v3 otherwise.
    pub fn from_url(url: &str, api_key: impl Into<String>) -> Self {
        let api_version = match port_of(url).map(ApiVersion::from_port) {
            Some(version) if version.is_mapped() => version,
            _ => ApiVersion::V3,
        };
        Self::new(url, api_key, api_version)
    }

    /// `GET {base}/api/{version}/system/status`, without the query string.
    pub fn status_url(&self) -> String {
        format!("{}/api/{}/system/status", self.base_url, self.api_version.as_tag())
    }

    pub fn notification_url(&self) -> String {
        format!("{}/api/v3/notification", self.base_url)
    }

    pub fn filesystem_url(&self) -> String {
        format!("{}/api/v3/filesystem", self.base_url)
    }
}

// The API key never ends up in logs.
impl fmt::Debug for AppEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn port_of(url: &str) -> Option<u16> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = without_scheme.split('/').next()?;
    let (_, port) = authority.rsplit_once(':')?;
    port.parse().ok()
}
