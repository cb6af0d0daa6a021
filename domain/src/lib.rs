//! Domain layer for dental-assist
//!
//! This crate contains the value objects, validation rules and response
//! classification for the dental assistant client. It performs no I/O and
//! has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Credential**: an `app-<key>` secret, validated once at startup
//! - **Query**: audience + non-blank question + optional raw findings
//! - **FindingsCheck**: `Absent` / `Valid` / `Invalid`, warning-only
//! - **AssistantResponse**: `Answered`, `EmptyAnswer`, `RemoteError` or
//!   `TransportFailure`

pub mod config;
pub mod core;
pub mod exchange;
pub mod findings;

// Re-export commonly used types
pub use config::{AssistantConfig, Credential, OutputFormat, validate_config};
pub use self::core::{
    audience::Audience,
    error::{CREDENTIAL_ENV_VAR, ConfigError, QueryError},
    query::Query,
    question::{Question, validate_query},
};
pub use exchange::{
    request::{AssistantRequest, RequestInputs, ResponseMode},
    response::{AssistantResponse, TransportCause},
};
pub use findings::{Findings, FindingsCheck, FindingsIssue, check_findings_syntax};
