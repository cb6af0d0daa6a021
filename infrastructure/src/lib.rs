//! Infrastructure layer for dental-assist
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod assistant;
pub mod config;

// Re-export commonly used types
pub use assistant::gateway::{HttpAssistantGateway, REQUEST_TIMEOUT};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAssistantConfig, FileConfig, FileOutputConfig,
    secrets::{credential_from_env, load_dotenv},
};
