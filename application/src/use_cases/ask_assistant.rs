//! Ask Assistant use case.
//!
//! Gates network access on local correctness, then performs a single
//! round trip through the [`AssistantGateway`]:
//!
//! 1. Validate the credential (fatal: [`ConfigError`])
//! 2. Validate the question (fatal: [`QueryError`])
//! 3. Check findings syntax (warning only; text forwarded unchanged)
//! 4. Call the gateway and return the classified outcome
//!
//! Steps 1 and 2 short-circuit: when either fails the gateway is never
//! called.

use crate::config::AssistantSettings;
use crate::ports::assistant_gateway::AssistantGateway;
use crate::ports::progress::AskProgressNotifier;
use assist_domain::core::text::preview;
use assist_domain::{
    Audience, AssistantResponse, ConfigError, Credential, Findings, FindingsCheck, Query,
    QueryError, Question, validate_config, validate_query,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that block an ask before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid question: {0}")]
    Query(#[from] QueryError),
}

/// Raw user submission plus the secret, before validation.
///
/// `Debug` never prints the credential value.
#[derive(Clone)]
pub struct AskAssistantInput {
    /// Credential as supplied by the environment, if any.
    pub credential: Option<String>,
    pub settings: AssistantSettings,
    pub audience: Audience,
    pub question: String,
    pub findings: Findings,
}

impl AskAssistantInput {
    pub fn new(credential: Option<String>, question: impl Into<String>) -> Self {
        Self {
            credential,
            settings: AssistantSettings::default(),
            audience: Audience::default(),
            question: question.into(),
            findings: Findings::none(),
        }
    }

    pub fn with_settings(mut self, settings: AssistantSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn with_findings(mut self, findings: Findings) -> Self {
        self.findings = findings;
        self
    }

    /// Check the credential, then the question.
    ///
    /// Callers that still have expensive input to gather (e.g. findings read
    /// from stdin) can run this first; [`AskAssistantUseCase::execute`] runs it
    /// again before sending.
    pub fn validate(&self) -> Result<(Credential, Question), AskError> {
        let credential = validate_config(self.credential.as_deref())?;
        let question = validate_query(&self.question)?;
        Ok((credential, question))
    }
}

impl std::fmt::Debug for AskAssistantInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskAssistantInput")
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "<redacted>"),
            )
            .field("settings", &self.settings)
            .field("audience", &self.audience)
            .field("question", &self.question)
            .field("findings", &self.findings)
            .finish()
    }
}

/// Result of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskAssistantOutput {
    /// Local findings feedback, shown alongside the outcome.
    pub findings: FindingsCheck,
    pub response: AssistantResponse,
}

/// Use case for asking the hosted assistant one question.
#[derive(Clone)]
pub struct AskAssistantUseCase {
    gateway: Arc<dyn AssistantGateway>,
}

impl AskAssistantUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the input and, if it passes, ask the assistant.
    pub async fn execute(
        &self,
        input: AskAssistantInput,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AskAssistantOutput, AskError> {
        let (credential, question) = input.validate()?;

        let findings = input.findings.check();
        if let Some(issue) = findings.issue() {
            warn!("Findings will be sent unparsed: {}", issue);
        }
        progress.on_findings_checked(&findings);

        let config = input.settings.into_config(credential);
        let query = Query::new(question)
            .with_audience(input.audience)
            .with_findings(input.findings);

        info!(
            "Asking assistant ({}): {}",
            query.audience,
            preview(query.question.content(), 100)
        );
        debug!("Endpoint: {}", config.endpoint());

        progress.on_request_start(&query);
        let response = self.gateway.ask(&config, &query).await;
        progress.on_request_complete(&response);

        info!("Assistant outcome: {}", response.label());

        Ok(AskAssistantOutput { findings, response })
    }
}
