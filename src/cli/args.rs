//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::summary::{Age, CaseContext};

/// call-summarizer - Structured clinical summaries of call transcripts
#[derive(Parser, Debug)]
#[command(name = "call-summarizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP summarization service
    Serve {
        /// Listen address (overrides server.bind_addr)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Summarize a transcript file through the configured LLM
    Summarize {
        /// Transcript file, or "-" for stdin
        input: PathBuf,

        #[command(flatten)]
        context: ContextArgs,

        /// Print the full JSON response instead of the text block
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent for a transcript
    Prompt {
        /// Transcript file, or "-" for stdin
        input: PathBuf,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Validate raw model output and print the rendered summary
    Render {
        /// File holding the model's JSON reply, or "-" for stdin
        input: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Optional patient context
#[derive(Args, Debug, Default)]
pub struct ContextArgs {
    /// Patient name
    #[arg(long)]
    pub name: Option<String>,

    /// Patient age
    #[arg(long)]
    pub age: Option<String>,

    /// Patient sex
    #[arg(long)]
    pub sex: Option<String>,
}

impl ContextArgs {
    pub fn into_context(self) -> Option<CaseContext> {
        if self.name.is_none() && self.age.is_none() && self.sex.is_none() {
            return None;
        }

        Some(CaseContext {
            patient_name: self.name,
            age: self.age.as_deref().map(Age::parse),
            sex: self.sex,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration (API key masked)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
