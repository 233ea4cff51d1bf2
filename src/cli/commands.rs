//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;
use crate::llm::{build_provider, build_summary_prompt};
use crate::summary::{summarize_raw, CaseContext, SummarizeRequest, Summarizer};

/// Run the HTTP service
pub async fn serve(settings: &Settings, addr: Option<String>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(addr) = addr {
        settings.server.bind_addr = addr;
    }

    crate::server::serve(&settings).await
}

/// Summarize one transcript through the configured provider.
pub async fn summarize_transcript(
    settings: &Settings,
    input: &Path,
    context: Option<CaseContext>,
    json: bool,
) -> Result<()> {
    let transcript = read_input(input)?;
    let provider = build_provider(settings)?;
    let summarizer = Summarizer::new(Arc::from(provider));

    let response = summarizer
        .summarize(&SummarizeRequest {
            transcript,
            context,
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.pretty_text());
    }

    Ok(())
}

/// Print the prompt for a transcript without calling the model.
pub fn print_prompt(input: &Path, context: Option<CaseContext>) -> Result<()> {
    let transcript = read_input(input)?;
    println!("{}", build_summary_prompt(&transcript, context.as_ref()));
    Ok(())
}

/// Validate a saved model reply and print the rendered text.
pub fn render_output(input: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let response = summarize_raw(&raw)?;
    println!("{}", response.pretty_text());
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

// Helper functions

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))
}
