// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use diagnostics::log_info;
use memfs::{FileSystem, Limits};

use cmd::Shell;
use cmd::config::load_limits;

/// Interactive shell over an in-memory file system
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "memfs")]
struct Cli {
    /// YAML file with size limits (max_file_size, max_read_len)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print the prompt before each command
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();

    let limits = match &cli.config {
        Some(path) => load_limits(path)?,
        None => Limits::default(),
    };
    log_info!(
        "starting memfs shell, max_file_size={max_file_size} max_read_len={max_read_len}",
        max_file_size: limits.max_file_size,
        max_read_len: limits.max_read_len
    );

    let mut shell = Shell::new(FileSystem::with_limits(limits)).quiet(cli.quiet);
    shell.run(io::stdin().lock(), io::stdout().lock())
}
