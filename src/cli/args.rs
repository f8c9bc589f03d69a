//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Compile translation bundles into per-locale modules
//! - `check`: Audit translation completeness without writing artifacts
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

/// Common arguments shared by build and check.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Default locale used as merge fallback (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Translation sources root directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Destination root for compiled output (overrides config file)
    #[arg(long)]
    pub dest_dir: Option<PathBuf>,

    /// Path under the destination root for compiled modules (overrides config file)
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile per-locale translation bundles into ES modules
    Build(BuildArgs),
    /// Report unreadable sources and missing key paths without writing output
    Check(CheckArgs),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
