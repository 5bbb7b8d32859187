//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use siteconf::config::SocialPlatform;
use std::path::PathBuf;

/// Validate and inspect the blog configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file to read instead of the built-in definitions
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Only print one section
        #[arg(long, value_enum)]
        section: Option<Section>,
    },

    /// List social links (active ones unless --all)
    #[command(visible_alias = "l")]
    Socials {
        /// Include inactive links
        #[arg(short, long)]
        all: bool,

        /// Only list this platform (case-insensitive, e.g. "github")
        #[arg(short, long)]
        platform: Option<SocialPlatform>,
    },

    /// Write a commented configuration template
    #[command(visible_alias = "i")]
    Init {
        /// Target file (default: blog.toml)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Site,
    Locale,
    Logo,
    Socials,
}

impl Section {
    /// Key of the section in the serialized store.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Locale => "locale",
            Self::Logo => "logo",
            Self::Socials => "socials",
        }
    }
}
