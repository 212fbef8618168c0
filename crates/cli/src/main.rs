//! clinical-transcript-analyzer: CLI binary entrypoint.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_analyzer::config::Config;
use transcript_analyzer::{AppError, TranscriptInput};

#[derive(Parser)]
#[command(
    name = "clinical-transcript-analyzer",
    about = "CLI tool to analyze clinical transcripts using GPT-4",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the model with the OASIS manual
    Train,

    /// Analyze a clinical transcript
    Analyze {
        /// Path to the transcript file or transcript text
        transcript: String,

        /// Treat the argument as a file path
        #[arg(short, long)]
        file: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(raw) = e.raw_response() {
                tracing::error!(raw_response = raw, "Unparseable model response");
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let analyzer = transcript_analyzer::build_analyzer(&config);

    match command {
        Commands::Train => {
            analyzer.train().await?;
            println!("Training completed successfully");
        }
        Commands::Analyze { transcript, file } => {
            let input = if file {
                let cwd = std::env::current_dir().map_err(|source| AppError::TranscriptFile {
                    path: PathBuf::from(&transcript),
                    source,
                })?;
                TranscriptInput::File(cwd.join(transcript))
            } else {
                TranscriptInput::Text(transcript)
            };

            let result = analyzer.process_input(input).await?;
            let rendered = serde_json::Value::Object(result);
            println!("{rendered:#}");
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only command output
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json");
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
