//! JSON output for scripting

use assist_application::AskAssistantOutput;

/// Formats outcomes as a single JSON object
pub struct JsonFormatter;

impl JsonFormatter {
    /// `{"findings": {...}, "response": {"outcome": ..., ...}}`
    pub fn format(output: &AskAssistantOutput) -> String {
        let value = serde_json::json!({
            "findings": output.findings,
            "response": output.response,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// `{"error": {"kind": ..., "message": ..., "remediation": ...}}`
    pub fn format_error(kind: &str, message: &str, remediation: Option<&str>) -> String {
        let value = serde_json::json!({
            "error": {
                "kind": kind,
                "message": message,
                "remediation": remediation,
            }
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
