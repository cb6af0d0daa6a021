//! Hosted assistant adapter
//!
//! [`gateway::HttpAssistantGateway`] implements the application's
//! [`AssistantGateway`](assist_application::AssistantGateway) port over HTTP.

pub mod gateway;
