//! Assistant Gateway port
//!
//! Defines the interface for the single round trip to the hosted assistant.

use assist_domain::{AssistantConfig, AssistantResponse, Query};
use async_trait::async_trait;

/// Gateway to the hosted retrieval-augmented assistant.
///
/// Implementations (adapters) live in the infrastructure layer. Callers must
/// have validated the configuration and question already; the gateway does
/// not re-check them.
///
/// `ask` never fails at the type level: remote and transport problems are
/// reported as [`AssistantResponse`] variants. Each call is one attempt with
/// no retries and no state kept between calls.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    async fn ask(&self, config: &AssistantConfig, query: &Query) -> AssistantResponse;
}
