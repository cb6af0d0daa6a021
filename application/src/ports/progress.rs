//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is asked.

use assist_domain::{AssistantResponse, FindingsCheck, Query};

/// Callback for progress updates during an ask.
///
/// Implementations live in the presentation layer (spinner, plain text).
pub trait AskProgressNotifier: Send + Sync {
    /// Called after the findings check, before the request is sent.
    fn on_findings_checked(&self, _check: &FindingsCheck) {}

    /// Called right before the request goes out.
    fn on_request_start(&self, query: &Query);

    /// Called once the outcome is known.
    fn on_request_complete(&self, response: &AssistantResponse);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoAskProgress;

impl AskProgressNotifier for NoAskProgress {
    fn on_request_start(&self, _query: &Query) {}
    fn on_request_complete(&self, _response: &AssistantResponse) {}
}
