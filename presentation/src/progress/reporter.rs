//! Progress reporting while the assistant is working

use assist_application::AskProgressNotifier;
use assist_domain::{AssistantResponse, Query};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner on stderr while the single request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for ProgressReporter {
    fn on_request_start(&self, query: &Query) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Asking the assistant ({})...", query.audience));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _response: &AssistantResponse) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AskProgressNotifier for SimpleProgress {
    fn on_request_start(&self, query: &Query) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("Asking the assistant ({})", query.audience).bold()
        );
    }

    fn on_request_complete(&self, response: &AssistantResponse) {
        if response.is_success() {
            eprintln!("  {} {}", "v".green(), response.label());
        } else {
            eprintln!("  {} {}", "x".red(), response.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_domain::Question;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        let query = Query::new(Question::try_new("Stage?").unwrap());

        reporter.on_request_start(&query);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_complete(&AssistantResponse::Answered {
            answer: "ok".to_string(),
        });
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
