//! Application layer for dental-assist
//!
//! This crate contains the ask use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AssistantSettings;
pub use ports::{
    assistant_gateway::AssistantGateway,
    progress::{AskProgressNotifier, NoAskProgress},
};
pub use use_cases::ask_assistant::{
    AskAssistantInput, AskAssistantOutput, AskAssistantUseCase, AskError,
};
