//! Configuration value objects for the domain layer
//!
//! The credential and endpoint are validated once at startup and then
//! carried as an immutable [`AssistantConfig`].

mod assistant_config;
mod credential;
mod output_format;

pub use assistant_config::{AssistantConfig, DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
pub use credential::{CREDENTIAL_PREFIX, Credential, MIN_KEY_LEN, validate_config};
pub use output_format::OutputFormat;
