//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `hints`: Inline translation annotations for source files
//! - `hover`: Translations of the key at a source position
//! - `languages`: List language directories under the locales path
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Hints(cmd)) => cmd.common.verbose,
            Some(Command::Hover(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start the config file search from (default: current directory)
    #[arg(long, env = "I18N_LENS_ROOT")]
    pub root: Option<PathBuf>,

    /// Locales base directory (overrides config file)
    #[arg(long)]
    pub locales_path: Option<String>,

    /// Namespace used when none can be determined (overrides config file)
    #[arg(long)]
    pub default_namespace: Option<String>,

    /// Language used for inline annotations (overrides config file)
    #[arg(long)]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn start_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            locales_path: self.locales_path.clone(),
            default_namespace: self.default_namespace.clone(),
            inline_language: self.language.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct HintsCommand {
    /// Files or directories to annotate, relative to the current directory (default: the configured includes)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HoverCommand {
    /// Source file containing the call-site, relative to the current directory
    pub file: PathBuf,

    /// 1-based line number
    #[arg(long)]
    pub line: usize,

    /// 1-based column (in characters)
    #[arg(long)]
    pub column: usize,

    /// Print the hover documentation as HTML
    #[arg(long)]
    pub html: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the resolved translation next to every translation call
    Hints(HintsCommand),
    /// Show the translations of the key at a source position in every language
    Hover(HoverCommand),
    /// List the language directories found under the locales path
    Languages(LanguagesCommand),
    /// Initialize a new .i18nlensrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
