//! Configuration loading for dental-assist
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DENTAL_ASSIST_*` environment variables, then `DIFY_URL`
//! 2. `--config <path>` specified file
//! 3. Project root: `./dental-assist.toml` or `./.dental-assist.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dental-assist/config.toml`
//! 5. Default values
//!
//! The credential is handled separately by [`secrets`].

mod file_config;
mod loader;
pub mod secrets;

pub use file_config::{ConfigValidationError, FileAssistantConfig, FileConfig, FileOutputConfig};
pub use loader::{ConfigLoader, ENDPOINT_ENV_VAR, ENV_PREFIX};
