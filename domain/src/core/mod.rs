//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-blank question
//! - [`audience::Audience`]: who the answer is written for
//! - [`query::Query`]: the full user submission
//! - [`error`]: validation errors raised before any network call

pub mod audience;
pub mod error;
pub mod query;
pub mod question;
pub mod text;
