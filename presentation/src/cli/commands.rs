//! CLI command definitions

use assist_domain::Audience;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assistant outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for assist_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => assist_domain::OutputFormat::Text,
            OutputFormat::Json => assist_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for dental-assist
#[derive(Parser, Debug)]
#[command(name = "dental-assist")]
#[command(author, version, about = "Ask a hosted dental knowledge assistant one question")]
#[command(long_about = r#"
dental-assist sends your question, plus optional clinical findings, to a hosted
retrieval-augmented assistant and prints its answer.

The assistant is educational and does not diagnose or prescribe.

The credential is read from DIFY_API_KEY (a .env file in the working directory
is loaded first). It must look like `app-<key>`.

Configuration files are loaded from (in priority order):
1. DENTAL_ASSIST_* environment variables, DIFY_URL
2. --config <path>              Explicit config file
3. ./dental-assist.toml         Project-level config
4. ~/.config/dental-assist/config.toml   Global config

Example:
  dental-assist "What defines periodontitis according to AAP 2018?"
  dental-assist --audience patient "What does Stage III mean for me?"
  dental-assist --findings '[{"tooth":"30","bone_loss_pct":40,"furcation_class":"II"}]' \
      "Map this bone loss to Stage/Grade and explain why."
  dental-assist --findings-file chart.json -o json "Stage and grade?"
"#)]
pub struct Cli {
    /// The question to ask the assistant
    pub question: Option<String>,

    /// Who the answer is for: clinician or patient
    #[arg(short, long, value_name = "AUDIENCE", default_value = "clinician")]
    pub audience: Audience,

    /// Clinical findings as JSON (forwarded as-is)
    #[arg(short, long, value_name = "JSON", conflicts_with = "findings_file")]
    pub findings: Option<String>,

    /// Read findings from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub findings_file: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
