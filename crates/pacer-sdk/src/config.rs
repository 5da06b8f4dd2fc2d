//! Client configuration.
//!
//! [`ClientOptions`] bundles the endpoint URLs and an optional
//! pre-built HTTP client.  The defaults target the production PACER
//! services; overriding them exists so tests and staging deployments
//! can point the client elsewhere.

/// Default URL of the PACER authentication service.
pub const PACER_AUTH_URL: &str = "https://pacer.login.uscourts.gov/services/cso-auth";

/// Default base URL of the Public Case Locator.
pub const PACER_PCL_URL: &str = "https://pcl.uscourts.gov";

/// Path of the case-search endpoint, relative to the PCL base URL.
pub const PCL_FIND_PATH: &str = "/pcl-public-api/rest/cases/find";

/// Endpoint and transport configuration for a [`PacerClient`](crate::PacerClient).
///
/// | Field      | Default             | Description                          |
/// |------------|---------------------|--------------------------------------|
/// | `auth_url` | [`PACER_AUTH_URL`]  | Full URL of the token endpoint       |
/// | `pcl_url`  | [`PACER_PCL_URL`]   | PCL base URL (search path appended)  |
/// | `http`     | `None`              | Pre-built `reqwest::Client` to reuse |
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Override for the authentication endpoint URL.
    pub auth_url: Option<String>,
    /// Override for the PCL base URL.
    pub pcl_url: Option<String>,
    /// HTTP client to use instead of a freshly built one.
    pub http: Option<reqwest::Client>,
}

impl ClientOptions {
    /// Point both endpoints at a single base URL.
    ///
    /// Intended for stub servers that host the authentication and
    /// search routes under one origin.
    pub fn with_base_url(base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        Self {
            auth_url: Some(format!("{base}/services/cso-auth")),
            pcl_url: Some(base.to_string()),
            http: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_absent() {
        let options = ClientOptions::default();
        assert!(options.auth_url.is_none());
        assert!(options.pcl_url.is_none());
        assert!(options.http.is_none());
    }

    #[test]
    fn base_url_builds_both_endpoints() {
        let options = ClientOptions::with_base_url("http://127.0.0.1:4201/");
        assert_eq!(
            options.auth_url.as_deref(),
            Some("http://127.0.0.1:4201/services/cso-auth")
        );
        assert_eq!(options.pcl_url.as_deref(), Some("http://127.0.0.1:4201"));
    }

    #[test]
    fn production_constants_are_stable() {
        assert_eq!(
            PACER_AUTH_URL,
            "https://pacer.login.uscourts.gov/services/cso-auth"
        );
        assert_eq!(PACER_PCL_URL, "https://pcl.uscourts.gov");
        assert_eq!(PCL_FIND_PATH, "/pcl-public-api/rest/cases/find");
    }
}
