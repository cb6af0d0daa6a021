//! Console output formatter for assistant outcomes

use assist_application::AskAssistantOutput;
use assist_domain::{AssistantResponse, ConfigError, FindingsCheck, QueryError, TransportCause};
use colored::Colorize;

/// Formats assistant outcomes and validation failures for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title, disclaimer and grounding sources, shown before a query.
    pub fn banner() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Dental Disease Assistant (Prototype)"));
        output.push_str(&format!(
            "{} AAP 2018 (Periodontology), AAE 2013 (Endodontics), \
             ADA 2024 (Caries & Restorative), patient education materials\n",
            "Grounding sources:".cyan().bold()
        ));
        output.push_str(&format!(
            "{}\n",
            "This tool is educational and does not diagnose or prescribe.".yellow()
        ));
        output
    }

    /// Format a completed round trip
    pub fn format(output: &AskAssistantOutput) -> String {
        let mut text = String::new();

        if let Some(notice) = Self::format_findings(&output.findings) {
            text.push_str(&notice);
            text.push('\n');
        }

        text.push_str(&Self::format_response(&output.response));
        text
    }

    /// One-line findings feedback; `None` when no findings were given.
    pub fn format_findings(check: &FindingsCheck) -> Option<String> {
        match check {
            FindingsCheck::Absent => None,
            FindingsCheck::Valid { entries } => Some(format!(
                "{} {} record(s) parsed",
                "Findings:".cyan().bold(),
                entries
            )),
            FindingsCheck::Invalid { issue } => Some(format!(
                "{} {}\n  The findings text was sent unchanged; the assistant will interpret it.",
                "Warning:".yellow().bold(),
                issue
            )),
        }
    }

    pub fn format_response(response: &AssistantResponse) -> String {
        match response {
            AssistantResponse::Answered { answer } => {
                format!("{}\n\n{}\n", Self::section("Assistant Response"), answer)
            }
            AssistantResponse::EmptyAnswer { body } => format!(
                "{}\n{}\n\n{}\n{}\n",
                Self::section("No Answer Produced"),
                "The assistant replied successfully but returned no answer \
                 (for example, insufficient evidence in its sources)."
                    .yellow(),
                "Full response:".bold(),
                body
            ),
            AssistantResponse::RemoteError { status, body } => {
                let mut text = format!(
                    "{}\n{} {}\n\n{}\n{}\n",
                    Self::section("Assistant Error"),
                    "HTTP status:".red().bold(),
                    status,
                    "Response body:".bold(),
                    body
                );
                if let Some(hint) = Self::status_hint(*status) {
                    text.push_str(&format!("\n{} {}\n", "Hint:".cyan().bold(), hint));
                }
                text
            }
            AssistantResponse::TransportFailure { cause } => format!(
                "{}\n{} {}\n\n{} {}\n",
                Self::section("Could Not Reach Assistant"),
                "Cause:".red().bold(),
                cause,
                "Hint:".cyan().bold(),
                Self::transport_hint(cause)
            ),
        }
    }

    pub fn format_config_error(error: &ConfigError) -> String {
        Self::error_block("Configuration error", &error.to_string(), Some(error.remediation().as_str()))
    }

    pub fn format_query_error(error: &QueryError) -> String {
        match error {
            QueryError::BlankQuestion => Self::error_block(
                "Please enter a question",
                &error.to_string(),
                Some("Pass the question as the first argument, e.g. dental-assist \"Stage and grade?\""),
            ),
        }
    }

    /// Labeled error with optional remediation line.
    pub fn error_block(title: &str, detail: &str, remediation: Option<&str>) -> String {
        let mut text = format!("{} {}\n", format!("{}:", title).red().bold(), detail);
        if let Some(fix) = remediation {
            text.push_str(&format!("  {} {}\n", "->".cyan(), fix));
        }
        text
    }

    fn status_hint(status: u16) -> Option<&'static str> {
        match status {
            401 | 403 => Some("The credential was rejected. Check DIFY_API_KEY."),
            404 => Some("The endpoint was not found. Check [assistant] endpoint or DIFY_URL."),
            429 => Some("The assistant is rate limiting requests. Wait and try again."),
            500..=599 => Some("The assistant service had a problem. Try again later."),
            _ => None,
        }
    }

    fn transport_hint(cause: &TransportCause) -> &'static str {
        match cause {
            TransportCause::Timeout { .. } => {
                "The assistant did not answer in time. Try again, or shorten the question."
            }
            TransportCause::Connect { .. } => {
                "Check the network connection and the endpoint ([assistant] endpoint or DIFY_URL)."
            }
            TransportCause::Other { .. } => "Check the network connection and try again.",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n  {}\n{}\n",
            line.cyan(),
            title.bold(),
            line.cyan()
        )
    }

    fn section(title: &str) -> String {
        format!("── {} ──", title).yellow().bold().to_string()
    }
}
