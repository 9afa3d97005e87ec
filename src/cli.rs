// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "codegroom")]
#[command(version)]
#[command(about = "Python source cleanup and transformation toolkit", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Operation to apply (see `codegroom ops`)
    pub operation: Option<String>,

    /// Input file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Write the code artifact to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the available operations
    Ops,
    /// Check availability of the external tools
    Doctor,
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
