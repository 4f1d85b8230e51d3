//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command line configuration for Storyloom.
#[derive(Debug, Clone, Parser)]
#[command(name = "storyloom", version, about, long_about = None)]
pub struct Config {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Storyloom subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve @Name and #N references in a prompt against a story
    Resolve {
        /// Story file (.story JSON document)
        story: PathBuf,

        /// Prompt text with reference markers
        prompt: String,

        /// Chapter open in the editor, 1-based
        #[arg(short, long)]
        chapter: Option<usize>,

        /// Print the generation context bundle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a markdown file to HTML
    Render {
        /// Markdown file, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the fragment in a complete HTML page
        #[arg(long)]
        page: bool,

        /// Page title used with --page
        #[arg(long, default_value = "Preview")]
        title: String,
    },

    /// Export a static preview site for a story
    Export {
        /// Story file (.story JSON document)
        story: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Open the exported index in the default browser
        #[arg(long)]
        open: bool,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist or the chapter number
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Resolve { story, chapter, .. } => {
                require_file(story, "Story file")?;
                if *chapter == Some(0) {
                    bail!("Chapter numbers start at 1");
                }
            }
            Command::Render { input, .. } => {
                if !is_stdin(input) {
                    require_file(input, "Markdown file")?;
                }
            }
            Command::Export { story, .. } => require_file(story, "Story file")?,
        }

        Ok(())
    }

    /// Default log filter when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Whether `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{} does not exist: {}", what, path.display());
    }
    Ok(())
}
