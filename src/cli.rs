// src/cli.rs
//! CLI definitions for sbshift
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sbshift::Direction;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sbshift")]
#[command(author = "sbshift Contributors")]
#[command(version)]
#[command(about = "Convert Scratch-derived project archives between PenguinMod and TurboWarp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a project archive to the other dialect
    Convert {
        /// Path to the project archive (.pmp / .sb3)
        file: PathBuf,

        /// Conversion direction
        #[arg(short, long, value_enum)]
        mode: ConvertMode,

        /// Output path (default: TurboWarp_/PenguinMod_ prefix on the input name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rename-only conversion: skip the meta reset and block removal
        #[arg(long)]
        simple: bool,

        /// Convert and report without writing the output archive
        #[arg(long)]
        dry_run: bool,
    },

    /// Show dialect, metadata, extensions and block counts of a project archive
    Inspect {
        /// Path to the project archive (.pmp / .sb3)
        file: PathBuf,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Conversion direction as exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConvertMode {
    /// PenguinMod -> TurboWarp
    PmToTw,
    /// TurboWarp -> PenguinMod
    TwToPm,
}

impl From<ConvertMode> for Direction {
    fn from(mode: ConvertMode) -> Self {
        match mode {
            ConvertMode::PmToTw => Direction::PmToTw,
            ConvertMode::TwToPm => Direction::TwToPm,
        }
    }
}
