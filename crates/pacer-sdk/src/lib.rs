//! # PACER SDK
//!
//! Client library for the **PACER** federal court records system:
//! authentication against the PACER login service and case-number
//! searches against the Public Case Locator (PCL).
//!
//! The SDK provides:
//!
//! * [`PacerClient`] — credential-holding client with lazy session
//!   token acquisition.
//! * [`CaseQuery`] — typed search input for the PCL `cases/find`
//!   endpoint; responses stay untyped (`serde_json::Value`).
//! * [`Credentials`] / [`PartialCredentials`] / [`CredentialProvider`]
//!   — explicit credentials with environment fallback.
//! * [`PacerError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pacer_sdk::{CaseQuery, PacerClient};
//!
//! # async fn run() -> Result<(), pacer_sdk::PacerError> {
//! // Credentials from PACER_USERNAME / PACER_PASSWORD
//! let client = PacerClient::from_env()?;
//!
//! // Authenticates automatically on first use
//! let results = client.find_case(&CaseQuery::number("1:2002bk20340")).await?;
//! println!("{results:#}");
//! # Ok(())
//! # }
//! ```

pub mod case;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;

pub use case::CaseQuery;
pub use client::{PacerClient, NEXT_GEN_CSO_FIELD, NEXT_GEN_CSO_HEADER};
pub use config::{ClientOptions, PACER_AUTH_URL, PACER_PCL_URL, PCL_FIND_PATH};
pub use credentials::{
    CredentialProvider, Credentials, EnvCredentials, NoCredentials, PartialCredentials,
};
pub use error::PacerError;
