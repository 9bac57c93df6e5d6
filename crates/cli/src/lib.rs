// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Firmware size gate for OTA update slots.

pub mod artifact;
pub mod budget;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod output;

pub use artifact::{DEFAULT_ARTIFACT_PATH, measure};
pub use budget::{BudgetConfig, CheckResult, MAX_APP_BYTES, evaluate};
pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
