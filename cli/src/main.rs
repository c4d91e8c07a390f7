//! CLI entrypoint for duet
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use duet_application::{
    AskBothModelsUseCase, AskSingleModelInput, AskSingleModelUseCase, BackendClient,
    CreateLearningContentUseCase, DispatchToolUseCase, NoProgress, ProgressNotifier,
};
use duet_domain::{ModelRegistry, OutputFormat as DomainOutputFormat, Question, Topic};
use duet_infrastructure::mcp::protocol::tool_descriptor;
use duet_infrastructure::{
    ConfigLoader, FileConfig, JsonlTranscriptLogger, McpServer, OllamaGateway,
};
use duet_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let result = runtime.block_on(run(cli));
    // A stdin read may still be parked on a blocking thread after the
    // server stops; dropping the runtime normally would wait for it.
    runtime.shutdown_background();
    result
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting duet");

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let registry = Arc::new(config.models.to_registry()?);
    info!(
        "Models: general={}, code={}",
        registry.general(),
        registry.code()
    );

    let gateway = Arc::new(
        OllamaGateway::new(&config.ollama.base_url, config.ollama.timeout())
            .context("Failed to initialize Ollama gateway")?,
    );

    let mut client = BackendClient::new(gateway);
    if let Some(path) = &cli.transcript {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Recording transcript to {}", logger.path().display());
                client = client.with_transcript(Arc::new(logger));
            }
            None => warn!("Transcript disabled: could not open {}", path.display()),
        }
    }

    let (single, both, learning) = build_use_cases(client, registry, &config);

    let format = resolve_output_format(cli.output, config.output.format);
    let command = cli.subcommand();
    let progress: Box<dyn ProgressNotifier> =
        match progress_mode(&cli, &command, std::io::stderr().is_terminal()) {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Bars => Box::new(ProgressReporter::new()),
            ProgressMode::Lines => Box::new(SimpleProgress::new()),
        };
    let progress = progress.as_ref();

    match command {
        Command::Serve => {
            let dispatcher = DispatchToolUseCase::new(single, both, learning);
            serve(dispatcher).await?;
        }
        Command::Tools => {
            let dispatcher = DispatchToolUseCase::new(single, both, learning);
            let output = match format {
                DomainOutputFormat::Json => {
                    let tools: Vec<_> = dispatcher.catalog().all().map(tool_descriptor).collect();
                    ConsoleFormatter::format_json(&tools)
                }
                DomainOutputFormat::Full => ConsoleFormatter::format_tools(dispatcher.catalog()),
            };
            println!("{}", output);
        }
        Command::Ask {
            question,
            model_type,
        } => {
            let input = AskSingleModelInput::new(Question::new(question)?)
                .with_selection(model_type.into());
            let result = single.execute_with_progress(input, progress).await;
            println!(
                "{}",
                match format {
                    DomainOutputFormat::Json => ConsoleFormatter::format_json(&result),
                    DomainOutputFormat::Full => ConsoleFormatter::format_single(&result),
                }
            );
        }
        Command::Both { question } => {
            let result = both
                .execute_with_progress(Question::new(question)?, progress)
                .await;
            println!(
                "{}",
                match format {
                    DomainOutputFormat::Json => ConsoleFormatter::format_json(&result),
                    DomainOutputFormat::Full => ConsoleFormatter::format_dual(&result),
                }
            );
        }
        Command::Learn { topic } => {
            let content = learning
                .execute_with_progress(Topic::new(topic)?, progress)
                .await;
            println!(
                "{}",
                match format {
                    DomainOutputFormat::Json => ConsoleFormatter::format_json(&content),
                    DomainOutputFormat::Full => ConsoleFormatter::format_learning(&content),
                }
            );
        }
    }

    Ok(())
}

/// `-o` wins over `[output] format`; `full` when neither is set
fn resolve_output_format(
    flag: Option<OutputFormat>,
    configured: Option<DomainOutputFormat>,
) -> DomainOutputFormat {
    flag.map(Into::into).or(configured).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressMode {
    Off,
    /// indicatif bars, redrawn in place
    Bars,
    /// one line per event
    Lines,
}

/// The tool server owns stdout and never shows progress
fn progress_mode(cli: &Cli, command: &Command, interactive: bool) -> ProgressMode {
    if cli.quiet || matches!(command, Command::Serve) {
        ProgressMode::Off
    } else if interactive {
        ProgressMode::Bars
    } else {
        ProgressMode::Lines
    }
}

/// Install the tracing subscriber.
///
/// Logs always go to stderr or a file: stdout carries the tool protocol.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;
    Ok(config)
}

fn build_use_cases(
    client: BackendClient,
    registry: Arc<ModelRegistry>,
    config: &FileConfig,
) -> (
    AskSingleModelUseCase,
    AskBothModelsUseCase,
    CreateLearningContentUseCase,
) {
    let single = AskSingleModelUseCase::new(client.clone(), registry.clone());
    let both = AskBothModelsUseCase::new(client.clone(), registry.clone());
    let learning = CreateLearningContentUseCase::new(client, registry)
        .with_params(config.coordinator_params());
    (single, both, learning)
}

async fn serve(dispatcher: DispatchToolUseCase) -> Result<()> {
    let shutdown = CancellationToken::new();
    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received");
            ctrl_c_token.cancel();
        }
    });

    McpServer::new(dispatcher).serve_stdio(shutdown).await?;
    info!("Tool server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_flag_overrides_config() {
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Full), Some(DomainOutputFormat::Json)),
            DomainOutputFormat::Full
        );
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Json), None),
            DomainOutputFormat::Json
        );
    }

    #[test]
    fn test_output_falls_back_to_config_then_full() {
        assert_eq!(
            resolve_output_format(None, Some(DomainOutputFormat::Json)),
            DomainOutputFormat::Json
        );
        assert_eq!(resolve_output_format(None, None), DomainOutputFormat::Full);
    }

    #[test]
    fn test_progress_mode() {
        let cli = Cli::parse_from(["duet", "ask", "hi"]);
        let command = cli.subcommand();
        assert_eq!(progress_mode(&cli, &command, true), ProgressMode::Bars);
        assert_eq!(progress_mode(&cli, &command, false), ProgressMode::Lines);

        let quiet = Cli::parse_from(["duet", "-q", "learn", "graphs"]);
        assert_eq!(progress_mode(&quiet, &quiet.subcommand(), true), ProgressMode::Off);

        let serve = Cli::parse_from(["duet"]);
        assert_eq!(progress_mode(&serve, &serve.subcommand(), true), ProgressMode::Off);
    }
}
