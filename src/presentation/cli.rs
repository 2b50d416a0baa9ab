//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--root, --config, --json, --color, --verbose) are inherited by all subcommands
//! - Running `sweep` without a subcommand is the same as `sweep run`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::FailurePolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sweep - delete a manifest of files and directories from a checkout
#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Working root that manifest paths are relative to [default: current directory]
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Config file [default: <root>/sweep.toml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit status when an entry fails to delete
    #[arg(long, global = true, value_enum, value_name = "POLICY")]
    pub on_failure: Option<FailurePolicy>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Delete every manifest entry (default)
    Run,

    /// Print the resolved root, failure policy and manifest without deleting anything
    Show,

    /// Write a sweep.toml containing the built-in manifest into the root
    Init {
        /// Overwrite an existing sweep.toml
        #[arg(short, long)]
        force: bool,
    },
}
