//! Immutable per-session assistant configuration.

use super::credential::Credential;

/// Hosted assistant endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.dify.ai/v1/chat-messages";

/// Client identifier sent as `user` when none is configured.
pub const DEFAULT_CLIENT_ID: &str = "dental-assist-cli";

/// Everything the gateway needs to reach the assistant.
///
/// Built once at startup and passed by reference into every call; there is
/// no global copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    credential: Credential,
    endpoint: String,
    client_id: String,
}

impl AssistantConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
