//! Outbound request payload

use crate::core::audience::Audience;
use crate::core::query::Query;
use serde::{Deserialize, Serialize};

/// Response mode requested from the assistant. Only blocking is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    #[default]
    Blocking,
}

/// The `inputs` mapping. Exactly two keys go on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInputs {
    pub audience: Audience,
    /// Findings text exactly as entered; never re-serialized.
    pub findings_json: String,
}

/// JSON body of a single assistant call.
///
/// ```json
/// {
///   "inputs": { "audience": "clinician", "findings_json": "" },
///   "query": "What defines periodontitis according to AAP 2018?",
///   "response_mode": "blocking",
///   "user": "dental-assist-cli"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub inputs: RequestInputs,
    pub query: String,
    pub response_mode: ResponseMode,
    pub user: String,
}

impl AssistantRequest {
    pub fn from_query(query: &Query, client_id: &str) -> Self {
        Self {
            inputs: RequestInputs {
                audience: query.audience,
                findings_json: query.findings.as_str().to_string(),
            },
            query: query.question.content().to_string(),
            response_mode: ResponseMode::Blocking,
            user: client_id.to_string(),
        }
    }
}
