//! Assistant outcome and response classification
//!
//! Every round trip ends in exactly one [`AssistantResponse`]. Remote and
//! transport failures are values here, not errors, so callers always have
//! something to render.

use serde::Serialize;
use thiserror::Error;

/// Why the request never produced an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransportCause {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("could not connect: {message}")]
    Connect { message: String },

    #[error("transport error: {message}")]
    Other { message: String },
}

/// Classified result of one `ask` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssistantResponse {
    /// 2xx with a non-empty `answer` string.
    Answered { answer: String },
    /// 2xx without a usable `answer`; the whole body is kept for inspection.
    EmptyAnswer { body: String },
    /// Non-2xx status; body kept verbatim.
    RemoteError { status: u16, body: String },
    /// No HTTP response at all.
    TransportFailure { cause: TransportCause },
}

impl AssistantResponse {
    /// Classify an HTTP response that did arrive.
    ///
    /// Error bodies are never parsed. Success bodies are parsed only to look
    /// for `answer`; any other shape (including non-JSON) is `EmptyAnswer`.
    pub fn from_http(status: u16, body: String) -> Self {
        if !(200..300).contains(&status) {
            return AssistantResponse::RemoteError { status, body };
        }

        match extract_answer(&body) {
            Some(answer) => AssistantResponse::Answered { answer },
            None => AssistantResponse::EmptyAnswer { body },
        }
    }

    pub fn transport(cause: TransportCause) -> Self {
        AssistantResponse::TransportFailure { cause }
    }

    /// The remote side replied successfully (with or without an answer).
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            AssistantResponse::Answered { .. } | AssistantResponse::EmptyAnswer { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssistantResponse::Answered { .. } => "answered",
            AssistantResponse::EmptyAnswer { .. } => "empty_answer",
            AssistantResponse::RemoteError { .. } => "remote_error",
            AssistantResponse::TransportFailure { .. } => "transport_failure",
        }
    }
}

fn extract_answer(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let answer = value.get("answer")?.as_str()?;
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}
