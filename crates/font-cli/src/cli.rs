//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Font Manager - Manage @font-face rules and font files of a web install
#[derive(Parser, Debug)]
#[command(name = "fontctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of ./config.{toml,jsonc,json,yaml}
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root of the web app install, overriding every config source
    #[arg(long, global = true, env = "FONT_MANAGER_INSTALL_PATH", value_name = "PATH")]
    pub install_path: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the registered font rules
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Install a font file and register its @font-face rule
    ///
    /// Examples:
    ///   fontctl add ./Brand.woff2 --family "Brand Sans"
    ///   fontctl add ./b.ttf --family Brand --weight 700 --style italic
    Add {
        /// Font file to upload
        font_file: PathBuf,

        /// CSS font-family name
        #[arg(short, long)]
        family: String,

        /// CSS font-weight, written verbatim
        #[arg(short, long, default_value = "400")]
        weight: String,

        /// CSS font-style, written verbatim
        #[arg(short, long, default_value = "normal")]
        style: String,

        /// Stored file name (defaults to the name of FONT_FILE)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Remove a font rule and its font file
    Delete {
        /// CSS font-family name of the rule
        #[arg(short, long)]
        family: String,

        /// Stored file name of the font
        file_name: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Rename the family of a font rule
    Edit {
        /// Current font-family name
        #[arg(long)]
        from: String,

        /// New font-family name
        #[arg(long)]
        to: String,

        /// Stored file name of the font
        file_name: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the resolved configuration
    Config {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
