//! Query aggregate: everything the user submits for one round trip.

use super::audience::Audience;
use super::question::Question;
use crate::findings::Findings;

/// A validated submission.
///
/// Construction requires a [`Question`], so a blank question can never
/// reach the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub audience: Audience,
    pub question: Question,
    pub findings: Findings,
}

impl Query {
    pub fn new(question: Question) -> Self {
        Self {
            audience: Audience::default(),
            question,
            findings: Findings::none(),
        }
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn with_findings(mut self, findings: Findings) -> Self {
        self.findings = findings;
        self
    }
}
