//! High-level client for the PACER case lookup services.
//!
//! [`PacerClient`] handles authentication against the PACER login
//! service and case-number searches against the Public Case Locator
//! (PCL) on behalf of a single account.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use pacer_sdk::{CaseQuery, PacerClient, PartialCredentials};
//!
//! # async fn run() -> Result<(), pacer_sdk::PacerError> {
//! let client = PacerClient::new(PartialCredentials::new("myuser", "mypassword"))?;
//! let results = client.find_case(&CaseQuery::number("1:2002bk20340")).await?;
//!
//! println!("{results:#}");
//! # Ok(())
//! # }
//! ```

use reqwest::header;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::case::CaseQuery;
use crate::config::{ClientOptions, PACER_AUTH_URL, PACER_PCL_URL, PCL_FIND_PATH};
use crate::credentials::{CredentialProvider, Credentials, EnvCredentials, PartialCredentials};
use crate::error::PacerError;

/// Header carrying the session token on PCL requests.
pub const NEXT_GEN_CSO_HEADER: &str = "X-NEXT-GEN-CSO";

/// Field of the authentication response holding the session token.
pub const NEXT_GEN_CSO_FIELD: &str = "nextGenCSO";

/// A PACER account session.
///
/// Holds the resolved account credentials and at most one cached
/// session token.  The token is acquired lazily: the first
/// [`find_case`](Self::find_case) on an instance without a token runs
/// one authentication round-trip before issuing the search.  Concurrent
/// callers racing on that first search share a single authentication
/// attempt; the token mutex is held across the token request but never
/// across the search itself.
#[derive(Debug)]
pub struct PacerClient {
    http: reqwest::Client,
    credentials: Credentials,
    auth_url: String,
    pcl_url: String,
    token: Mutex<Option<String>>,
}

impl PacerClient {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build a client from explicit credentials, falling back to the
    /// process environment ([`EnvCredentials`]) for absent fields.
    ///
    /// Fails with [`PacerError::Config`] when either field is still
    /// empty after fallback; no instance is produced in that case.
    pub fn new(credentials: PartialCredentials) -> Result<Self, PacerError> {
        Self::with_provider(credentials, &EnvCredentials)
    }

    /// Build a client entirely from the process environment.
    pub fn from_env() -> Result<Self, PacerError> {
        Self::new(PartialCredentials::default())
    }

    /// Build a client with an explicit fallback provider.
    pub fn with_provider(
        credentials: PartialCredentials,
        provider: &impl CredentialProvider,
    ) -> Result<Self, PacerError> {
        Self::with_options(credentials, ClientOptions::default(), provider)
    }

    /// Build a client with full control over endpoints and transport.
    pub fn with_options(
        credentials: PartialCredentials,
        options: ClientOptions,
        provider: &impl CredentialProvider,
    ) -> Result<Self, PacerError> {
        let credentials = Credentials::resolve(credentials, provider)?;

        Ok(Self {
            http: options.http.unwrap_or_default(),
            credentials,
            auth_url: options.auth_url.unwrap_or_else(|| PACER_AUTH_URL.to_string()),
            pcl_url: options.pcl_url.unwrap_or_else(|| PACER_PCL_URL.to_string()),
            token: Mutex::new(None),
        })
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Request a session token from the PACER authentication service
    /// and cache it on this instance.
    ///
    /// The previous token, if any, is overwritten unconditionally —
    /// including when the response carries no `nextGenCSO` field, in
    /// which case the cache is cleared.  Validation of the token is
    /// deferred to [`find_case`](Self::find_case).
    pub async fn authenticate(&self) -> Result<(), PacerError> {
        let token = self.request_token().await?;
        *self.token.lock().await = token;
        Ok(())
    }

    /// One authentication round-trip; returns the token field of the
    /// response, if present.
    async fn request_token(&self) -> Result<Option<String>, PacerError> {
        debug!(username = %self.credentials.username, "requesting session token");

        let res = self
            .http
            .post(&self.auth_url)
            .header(header::ACCEPT, "application/json")
            .json(&serde_json::json!({
                "loginId": self.credentials.username,
                "password": self.credentials.password,
            }))
            .send()
            .await?
            .error_for_status()?;

        let text = res.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        let token = body
            .get(NEXT_GEN_CSO_FIELD)
            .and_then(Value::as_str)
            .map(str::to_owned);

        if token.is_none() {
            debug!("authentication response carried no {NEXT_GEN_CSO_FIELD} field");
        }

        Ok(token)
    }

    /// Return a usable cached token, authenticating once if needed.
    ///
    /// A token is usable when it is present and non-empty.  The mutex
    /// guard is held across the implicit authentication so concurrent
    /// callers share one attempt.
    async fn ensure_token(&self) -> Result<String, PacerError> {
        let mut cached = self.token.lock().await;

        if !cached.as_deref().is_some_and(|t| !t.is_empty()) {
            *cached = self.request_token().await?;
        }

        match cached.as_deref() {
            Some(token) if !token.is_empty() => Ok(token.to_owned()),
            _ => Err(PacerError::Authorization("credentials invalid".into())),
        }
    }

    // ------------------------------------------------------------------
    // Case search
    // ------------------------------------------------------------------

    /// Search the Public Case Locator by case number.
    ///
    /// Authenticates first when no token is cached (a single implicit
    /// attempt); fails with [`PacerError::Authorization`] when no
    /// usable token exists after that attempt, without issuing the
    /// search request.  The response document is returned verbatim —
    /// no schema validation and no interpretation of remote error
    /// payloads.
    pub async fn find_case(&self, query: &CaseQuery) -> Result<Value, PacerError> {
        let token = self.ensure_token().await?;

        debug!(case_number = ?query.case_number, "searching PCL");

        let res = self
            .http
            .post(format!("{}{}", self.pcl_url, PCL_FIND_PATH))
            .header(header::ACCEPT, "application/json")
            .header(NEXT_GEN_CSO_HEADER, &token)
            .json(query)
            .send()
            .await?
            .error_for_status()?;

        let text = res.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        Ok(body)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The resolved account credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The currently cached session token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// URL of the authentication endpoint this client targets.
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Base URL of the PCL service this client targets.
    pub fn pcl_url(&self) -> &str {
        &self.pcl_url
    }
}
