// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size check implementation.

use otabudget::artifact::{measure, resolve_artifact};
use otabudget::budget::{BudgetConfig, evaluate};
use otabudget::cli::{Cli, OutputFormat};
use otabudget::color::resolve_color;
use otabudget::config::{self, Config};
use otabudget::discovery;
use otabudget::error::ExitCode;
use otabudget::output::json::JsonFormatter;
use otabudget::output::text::TextFormatter;

/// Measure the artifact, print the report, and pick the exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let configured = config
        .artifact
        .path
        .as_deref()
        .zip(config_path.as_deref().and_then(|p| p.parent()));
    let artifact = resolve_artifact(cli.artifact.as_deref(), configured, &cwd);
    tracing::debug!("checking artifact {}", artifact.display());

    // Fails before any report line is printed
    let size = measure(&artifact)?;
    let result = evaluate(size, &BudgetConfig::DEFAULT);
    tracing::debug!(
        "verdict: within_budget={} headroom={} bytes",
        result.within_budget,
        result.headroom_bytes()
    );

    let format = cli.output.or(config.output.format).unwrap_or_default();
    match format {
        OutputFormat::Text => {
            let color = resolve_color(cli.color, cli.no_color);
            TextFormatter::new(color).write_report(&result)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_report(&artifact, &result)?;
        }
    }

    Ok(if result.within_budget {
        ExitCode::Success
    } else {
        ExitCode::BudgetExceeded
    })
}
