//! Non-secret assistant settings.
//!
//! [`AssistantSettings`] carries what the configuration file controls
//! (endpoint and client id). The credential is kept separate and is only
//! combined with these settings after it has been validated.

use assist_domain::config::{DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
use assist_domain::{AssistantConfig, Credential};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    /// Fixed endpoint for the session.
    pub endpoint: String,
    /// Client identifier sent as `user`.
    pub client_id: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

impl AssistantSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Combine with a validated credential.
    pub fn into_config(self, credential: Credential) -> AssistantConfig {
        AssistantConfig::new(credential)
            .with_endpoint(self.endpoint)
            .with_client_id(self.client_id)
    }
}
