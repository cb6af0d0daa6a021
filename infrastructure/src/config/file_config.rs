//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! The credential is not part of this structure; it only ever comes from
//! the environment (see [`crate::config::secrets`]).

use assist_application::AssistantSettings;
use assist_domain::OutputFormat;
use assist_domain::config::{DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("assistant.endpoint is not a valid http(s) URL: {reason}")]
    InvalidEndpoint { reason: String },

    #[error("assistant.user cannot be empty")]
    EmptyClientId,
}

impl ConfigValidationError {
    pub fn remediation(&self) -> &'static str {
        match self {
            ConfigValidationError::InvalidEndpoint { .. } => {
                "Set [assistant] endpoint (or DIFY_URL) to the full chat-messages URL, \
                 e.g. https://api.dify.ai/v1/chat-messages"
            }
            ConfigValidationError::EmptyClientId => {
                "Remove [assistant] user to use the default client id, or set it to a non-empty string"
            }
        }
    }
}

/// Raw assistant configuration from TOML (`[assistant]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Chat-messages endpoint of the hosted assistant
    pub endpoint: String,
    /// Client identifier sent as `user`
    pub user: String,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub assistant: FileAssistantConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = reqwest::Url::parse(self.assistant.endpoint.trim()).map_err(|e| {
            ConfigValidationError::InvalidEndpoint {
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::InvalidEndpoint {
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.assistant.user.trim().is_empty() {
            return Err(ConfigValidationError::EmptyClientId);
        }

        Ok(())
    }

    /// Non-secret settings for the ask use case.
    pub fn assistant_settings(&self) -> AssistantSettings {
        AssistantSettings::default()
            .with_endpoint(self.assistant.endpoint.trim())
            .with_client_id(self.assistant.user.trim())
    }
}
