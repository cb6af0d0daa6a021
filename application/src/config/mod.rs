//! Application-level configuration.
//!
//! - [`AssistantSettings`]: endpoint and client id, combined with the
//!   validated credential into an [`AssistantConfig`](assist_domain::AssistantConfig)

pub mod assistant_settings;

pub use assistant_settings::AssistantSettings;
