//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use guidepost_content::ValidationConfig;
use std::path::PathBuf;

/// Branching step-by-step guides and slide decks in the terminal.
#[derive(Parser, Debug)]
#[command(name = "guidepost")]
#[command(version, about)]
pub struct Cli {
    /// Settings file (defaults to ./guidepost.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a guide or deck in the terminal viewer
    View {
        /// Guide file or directory of guides (defaults to the configured guide_path)
        path: Option<PathBuf>,

        /// Guide id to open when PATH is a directory holding several guides
        #[arg(short, long)]
        guide: Option<String>,

        /// Enter this section directly instead of showing the hub
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Check guide files for structural problems
    Validate {
        /// Guide file or directory of guides
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ValidationOutputFormat::Human)]
        format: ValidationOutputFormat,

        /// Treat warnings as errors (exit code 2)
        #[arg(long)]
        strict: bool,

        /// Only show errors, not warnings
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        warnings: WarningArgs,
    },

    /// Print the section and step tree of a guide
    Outline {
        /// Guide file (defaults to the configured guide_path)
        path: Option<PathBuf>,
    },
}

/// Switches for individual validation warnings.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningArgs {
    /// Don't warn about steps no path can reach
    #[arg(long)]
    pub no_warn_unreachable: bool,

    /// Don't warn about info panel trigger words missing from content
    #[arg(long)]
    pub no_warn_triggers: bool,

    /// Don't warn about unknown icon names
    #[arg(long)]
    pub no_warn_icons: bool,
}

impl WarningArgs {
    /// Validator settings with the switched-off warnings disabled.
    pub fn to_config(self) -> ValidationConfig {
        ValidationConfig {
            warn_unreachable: !self.no_warn_unreachable,
            warn_unmatched_triggers: !self.no_warn_triggers,
            warn_unknown_icons: !self.no_warn_icons,
        }
    }
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationOutputFormat {
    /// Human-readable report
    Human,
    /// Machine-readable JSON
    Json,
}
