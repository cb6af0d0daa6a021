//! Audience the answer is written for

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Who the assistant should address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Dental professional (default)
    #[default]
    Clinician,
    /// Patient-facing explanation
    Patient,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Clinician => "clinician",
            Audience::Patient => "patient",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clinician" => Ok(Audience::Clinician),
            "patient" => Ok(Audience::Patient),
            other => Err(format!(
                "unknown audience '{}' (expected 'clinician' or 'patient')",
                other
            )),
        }
    }
}
