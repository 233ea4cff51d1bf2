//! call-summarizer - Transcript summarization service
//!
//! Entry point for the call-summarizer binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use call_summarizer::cli::{Cli, Commands};
use call_summarizer::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            call_summarizer::cli::commands::print_completions(shell);
        }
        Commands::Prompt { input, context } => {
            call_summarizer::cli::commands::print_prompt(&input, context.into_context())?;
        }
        Commands::Render { input } => {
            call_summarizer::cli::commands::render_output(&input)?;
        }
        command => {
            // Settings (and .env) only matter for commands that talk to the model.
            dotenvy::dotenv().ok();
            let settings = Settings::load()?;

            match command {
                Commands::Serve { addr } => {
                    call_summarizer::cli::commands::serve(&settings, addr).await?;
                }
                Commands::Summarize {
                    input,
                    context,
                    json,
                } => {
                    call_summarizer::cli::commands::summarize_transcript(
                        &settings,
                        &input,
                        context.into_context(),
                        json,
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    call_summarizer::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Prompt { .. } | Commands::Render { .. } => {
                    unreachable!()
                }
            }
        }
    }

    Ok(())
}
