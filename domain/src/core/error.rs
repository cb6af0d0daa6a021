//! Validation error types
//!
//! These errors are raised before any network call is attempted. None of
//! them carry the credential value, so they are safe to display and log.

use thiserror::Error;

/// Environment variable that supplies the assistant credential.
pub const CREDENTIAL_ENV_VAR: &str = "DIFY_API_KEY";

/// Fatal configuration errors discovered at startup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("assistant credential is not set")]
    Missing,

    #[error("assistant credential is malformed (expected a single `app-` prefix followed by the key)")]
    MalformedPrefix,
}

impl ConfigError {
    /// Actionable instructions for fixing the configuration.
    ///
    /// Names the variable and the expected format, never the value.
    pub fn remediation(&self) -> String {
        match self {
            ConfigError::Missing => format!(
                "Set {CREDENTIAL_ENV_VAR} in the environment (or in a .env file) to the \
                 application API key, in the form `app-<key>`."
            ),
            ConfigError::MalformedPrefix => format!(
                "Check {CREDENTIAL_ENV_VAR}: it must start with `app-` exactly once \
                 (not `app-app-...`), followed by the key with no spaces."
            ),
        }
    }
}

/// Errors that block a query from being sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("question is blank")]
    BlankQuestion,
}
