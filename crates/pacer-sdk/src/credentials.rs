//! PACER account credentials and their resolution.
//!
//! A [`PacerClient`](crate::PacerClient) is constructed from
//! [`PartialCredentials`] (what the caller chose to pass explicitly) plus
//! a [`CredentialProvider`] collaborator that supplies fallback values,
//! typically [`EnvCredentials`].  Explicit values always win; the
//! provider only fills the gaps.

use crate::error::PacerError;

/// Environment variable consulted by [`EnvCredentials`] for the username.
pub const PACER_USERNAME_VAR: &str = "PACER_USERNAME";

/// Environment variable consulted by [`EnvCredentials`] for the password.
pub const PACER_PASSWORD_VAR: &str = "PACER_PASSWORD";

/// Fully resolved PACER account credentials.
///
/// Both fields are guaranteed non-empty by [`Credentials::resolve`] and
/// are immutable for the lifetime of the client that holds them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    /// PACER website username.
    pub username: String,
    /// PACER website password.
    pub password: String,
}

impl Credentials {
    /// Resolve explicit credentials against a fallback provider.
    ///
    /// Each field prefers the explicit value; when that is absent the
    /// provider's value is used.  Fails with [`PacerError::Config`] when
    /// either field is still empty after fallback.
    pub fn resolve(
        explicit: PartialCredentials,
        provider: &impl CredentialProvider,
    ) -> Result<Self, PacerError> {
        let fallback = provider.credentials();
        // An empty explicit value is treated as absent and falls
        // through to the provider.
        let username = explicit
            .username
            .filter(|v| !v.is_empty())
            .or(fallback.username)
            .unwrap_or_default();
        let password = explicit
            .password
            .filter(|v| !v.is_empty())
            .or(fallback.password)
            .unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(PacerError::Config(
                "username and password are required".into(),
            ));
        }

        Ok(Self { username, password })
    }
}

/// Credentials as supplied by a caller, before fallback resolution.
///
/// Either field may be absent; [`Credentials::resolve`] fills the gaps
/// from a [`CredentialProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCredentials {
    /// Explicit username, if any.
    pub username: Option<String>,
    /// Explicit password, if any.
    pub password: Option<String>,
}

impl PartialCredentials {
    /// Build from explicit username and password values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Source of fallback credential values.
///
/// This is the seam through which the hosting environment supplies
/// default credentials; injecting it keeps the client free of ambient
/// global state and lets tests substitute fixed values.
pub trait CredentialProvider {
    /// The provider's credential values, any of which may be absent.
    fn credentials(&self) -> PartialCredentials;
}

/// Fallback provider backed by the process environment.
///
/// Reads [`PACER_USERNAME_VAR`] and [`PACER_PASSWORD_VAR`]; unset or
/// empty variables yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> PartialCredentials {
        PartialCredentials {
            username: std::env::var(PACER_USERNAME_VAR)
                .ok()
                .filter(|v| !v.is_empty()),
            password: std::env::var(PACER_PASSWORD_VAR)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

/// A provider with nothing to offer.  Useful in tests that must not
/// pick up ambient environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn credentials(&self) -> PartialCredentials {
        PartialCredentials::default()
    }
}

// A PartialCredentials value can itself act as a fixed provider.
impl CredentialProvider for PartialCredentials {
    fn credentials(&self) -> PartialCredentials {
        self.clone()
    }
}
