//! CLI entrypoint for dental-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use assist_application::{
    AskAssistantInput, AskAssistantOutput, AskAssistantUseCase, AskError, AskProgressNotifier,
    AssistantSettings, NoAskProgress,
};
use assist_domain::{Findings, OutputFormat};
use assist_infrastructure::{
    ConfigLoader, FileConfig, HttpAssistantGateway, credential_from_env, load_dotenv,
};
use assist_presentation::{
    Cli, ConsoleFormatter, JsonFormatter, ProgressReporter, SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Configuration or blank-question failure; nothing was sent.
const EXIT_INVALID_INPUT: u8 = 2;
/// Remote error or transport failure.
const EXIT_ASSISTANT_FAILED: u8 = 1;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting dental-assist");

    if let Err(e) = load_dotenv() {
        let format = cli.output.map(OutputFormat::from).unwrap_or_default();
        report_error(
            format,
            "Configuration error",
            "config",
            &format!(".env could not be loaded: {}", e),
            Some("Fix or remove the .env file; each line must be KEY=value"),
        );
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }

    let file_config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprint!(
                "{}",
                ConsoleFormatter::error_block(
                    "Configuration error",
                    &e,
                    Some("Fix the configuration file, or run with --no-config"),
                )
            );
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    if let Err(e) = file_config.validate() {
        report_error(
            format,
            "Configuration error",
            "config",
            &e.to_string(),
            Some(e.remediation()),
        );
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }

    let input = match prepare_input(&cli, credential_from_env(), file_config.assistant_settings())
    {
        Ok(input) => input,
        Err(Rejected::Ask(e)) => {
            report_ask_error(format, &e);
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
        Err(Rejected::Findings(e)) => {
            report_error(
                format,
                "Findings error",
                "findings",
                &format!("{:#}", e),
                Some("Check the --findings-file path, or pass the findings with --findings"),
            );
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let show_chrome = !cli.quiet && format == OutputFormat::Text;
    if show_chrome {
        println!("{}", ConsoleFormatter::banner());
    }

    // === Dependency Injection ===
    let gateway =
        Arc::new(HttpAssistantGateway::new().context("Failed to create HTTP client")?);
    debug!("Request timeout: {}s", gateway.timeout().as_secs());
    let use_case = AskAssistantUseCase::new(gateway);

    let progress: Box<dyn AskProgressNotifier> = if !show_chrome {
        Box::new(NoAskProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match use_case.execute(input, progress.as_ref()).await {
        Ok(output) => {
            print_output(format, &output);
            if output.response.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_ASSISTANT_FAILED))
            }
        }
        Err(e) => {
            report_ask_error(format, &e);
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig, String> {
    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    loaded.map_err(|e| e.to_string())
}

/// Why the input was rejected before anything was sent.
#[derive(Debug)]
enum Rejected {
    Ask(AskError),
    Findings(anyhow::Error),
}

/// Gate credential and question before touching `--findings-file`, so a
/// missing key is reported before stdin is read or a bad path is opened.
fn prepare_input(
    cli: &Cli,
    credential: Option<String>,
    settings: AssistantSettings,
) -> Result<AskAssistantInput, Rejected> {
    let input = AskAssistantInput::new(credential, cli.question.clone().unwrap_or_default())
        .with_settings(settings)
        .with_audience(cli.audience);
    input.validate().map_err(Rejected::Ask)?;

    let findings = read_findings(cli).map_err(Rejected::Findings)?;
    Ok(input.with_findings(findings))
}

/// Findings text from `--findings` or `--findings-file`, unmodified.
fn read_findings(cli: &Cli) -> Result<Findings> {
    if let Some(raw) = &cli.findings {
        return Ok(Findings::new(raw.clone()));
    }

    let Some(path) = &cli.findings_file else {
        return Ok(Findings::none());
    };

    let raw = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read findings from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read findings file {}", path.display()))?
    };
    Ok(Findings::new(raw))
}

fn print_output(format: OutputFormat, output: &AskAssistantOutput) {
    match format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format(output)),
        OutputFormat::Json => println!("{}", JsonFormatter::format(output)),
    }
}

fn report_error(
    format: OutputFormat,
    title: &str,
    kind: &str,
    message: &str,
    remediation: Option<&str>,
) {
    match format {
        OutputFormat::Text => eprint!(
            "{}",
            ConsoleFormatter::error_block(title, message, remediation)
        ),
        OutputFormat::Json => {
            println!("{}", JsonFormatter::format_error(kind, message, remediation))
        }
    }
}

fn report_ask_error(format: OutputFormat, error: &AskError) {
    match (format, error) {
        (OutputFormat::Text, AskError::Config(e)) => {
            eprint!("{}", ConsoleFormatter::format_config_error(e))
        }
        (OutputFormat::Text, AskError::Query(e)) => {
            eprint!("{}", ConsoleFormatter::format_query_error(e))
        }
        (OutputFormat::Json, AskError::Config(e)) => println!(
            "{}",
            JsonFormatter::format_error("config", &e.to_string(), Some(e.remediation().as_str()))
        ),
        (OutputFormat::Json, AskError::Query(e)) => {
            println!("{}", JsonFormatter::format_error("query", &e.to_string(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_domain::{ConfigError, QueryError};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dental-assist").chain(args.iter().copied())).unwrap()
    }

    fn credential() -> Option<String> {
        Some("app-abc123XYZ".to_string())
    }

    #[test]
    fn test_missing_credential_reported_before_findings_file_is_read() {
        let cli = cli(&["--findings-file", "/nonexistent/findings.json", "Stage?"]);

        let rejected = prepare_input(&cli, None, AssistantSettings::default()).unwrap_err();

        assert!(matches!(
            rejected,
            Rejected::Ask(AskError::Config(ConfigError::Missing))
        ));
    }

    #[test]
    fn test_blank_question_reported_before_findings_file_is_read() {
        let cli = cli(&["--findings-file", "/nonexistent/findings.json", "  "]);

        let rejected = prepare_input(&cli, credential(), AssistantSettings::default()).unwrap_err();

        assert!(matches!(
            rejected,
            Rejected::Ask(AskError::Query(QueryError::BlankQuestion))
        ));
    }

    #[test]
    fn test_unreadable_findings_file_is_rejected() {
        let cli = cli(&["--findings-file", "/nonexistent/findings.json", "Stage?"]);

        let rejected = prepare_input(&cli, credential(), AssistantSettings::default()).unwrap_err();

        match rejected {
            Rejected::Findings(e) => {
                assert!(format!("{:#}", e).contains("/nonexistent/findings.json"))
            }
            other => panic!("expected findings error, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_findings_forwarded_unchanged() {
        let raw = "{\"tooth\": \"30\", bone_loss_pct: 40";
        let cli = cli(&["--findings", raw, "Stage?"]);

        let input = prepare_input(&cli, credential(), AssistantSettings::default()).unwrap();

        assert_eq!(input.findings.as_str(), raw);
        assert_eq!(input.question, "Stage?");
    }
}
