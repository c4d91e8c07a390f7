//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use duet_domain::{CategorySelection, ModelCategory};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned, human-readable output
    Full,
    /// Pretty-printed JSON result
    Json,
}

impl From<OutputFormat> for duet_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => duet_domain::OutputFormat::Full,
            OutputFormat::Json => duet_domain::OutputFormat::Json,
        }
    }
}

/// Category for `ask --model-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelTypeArg {
    /// Route by keywords in the question
    Auto,
    General,
    Code,
}

impl From<ModelTypeArg> for CategorySelection {
    fn from(arg: ModelTypeArg) -> Self {
        match arg {
            ModelTypeArg::Auto => CategorySelection::Auto,
            ModelTypeArg::General => CategorySelection::Category(ModelCategory::General),
            ModelTypeArg::Code => CategorySelection::Category(ModelCategory::Code),
        }
    }
}

/// CLI arguments for duet
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(author, version)]
#[command(about = "Dual Model Coordinator - route questions between a general and a code model")]
#[command(long_about = r#"
Duet coordinates two locally hosted models: a general model for explanations
and a code model for implementation details.

Without a subcommand it serves three tools over stdio (JSON-RPC):
  ask_single_model         route a question to the better-suited model
  ask_both_models          ask both, then have the general model compare
  create_learning_content  concept -> practice -> integrated guide

Configuration files are loaded from (in priority order):
1. DUET_* environment variables (e.g. DUET_OLLAMA__BASE_URL)
2. --config <path>     Explicit config file
3. ./duet.toml         Project-level config
4. ~/.config/dual-model-coordinator/config.toml   Global config

Example:
  duet ask "How do I reverse a list in Python?"
  duet both "What is a closure?"
  duet learn "binary search" -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to [output] format, then full)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Record every backend request and response as JSONL
    #[arg(long, value_name = "PATH", global = true)]
    pub transcript: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the tools over stdin/stdout (default)
    Serve,

    /// Ask one model, chosen by keywords or --model-type
    Ask {
        /// The question to ask
        question: String,

        /// Which model to use
        #[arg(short = 't', long, value_enum, default_value = "auto")]
        model_type: ModelTypeArg,
    },

    /// Ask both models and synthesize their answers
    Both {
        /// The question to ask both models
        question: String,
    },

    /// Compose learning content for a topic
    Learn {
        /// The topic to create learning content for
        topic: String,
    },

    /// Print the tool catalog
    Tools,
}

impl Cli {
    /// The subcommand to run; `serve` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
