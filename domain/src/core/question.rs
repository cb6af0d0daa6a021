//! Question value object

use super::error::QueryError;
use serde::{Deserialize, Serialize};

/// A non-blank question for the assistant (Value Object)
///
/// The text is kept verbatim; trimming is only used to decide blankness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Validate and wrap the question text.
    pub fn try_new(content: impl Into<String>) -> Result<Self, QueryError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(QueryError::BlankQuestion)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Gate a raw question before anything is sent.
pub fn validate_query(question: &str) -> Result<Question, QueryError> {
    Question::try_new(question)
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
