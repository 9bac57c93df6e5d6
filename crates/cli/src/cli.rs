// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Gate firmware builds on the size budget of an OTA update slot
#[derive(Parser)]
#[command(name = "otabudget")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Firmware binary to check [default: build/main_app.bin]
    #[arg(value_name = "ARTIFACT")]
    pub artifact: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = crate::env::OTABUDGET_CONFIG)]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
