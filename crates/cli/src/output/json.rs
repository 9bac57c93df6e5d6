// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written as a single pretty-printed object.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::budget::CheckResult;

/// Budget section of the JSON report.
#[derive(Debug, Serialize)]
pub struct BudgetOutput {
    pub slot_bytes: u64,
    pub margin_bytes: u64,
    pub max_app_bytes: u64,
}

/// Top-level JSON report.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub artifact: String,
    pub size_bytes: u64,
    pub budget: BudgetOutput,
    /// Negative when over budget.
    pub headroom_bytes: i64,
    pub passed: bool,
}

impl JsonReport {
    pub fn new(artifact: &Path, result: &CheckResult) -> Self {
        let headroom = result.headroom_bytes();
        Self {
            timestamp: Utc::now().to_rfc3339(),
            artifact: artifact.display().to_string(),
            size_bytes: result.actual_size_bytes,
            budget: BudgetOutput {
                slot_bytes: result.budget.slot_bytes(),
                margin_bytes: result.budget.margin_bytes(),
                max_app_bytes: result.max_app_bytes,
            },
            headroom_bytes: i64::try_from(headroom).unwrap_or(if headroom < 0 {
                i64::MIN
            } else {
                i64::MAX
            }),
            passed: result.within_budget,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_report(&mut self, artifact: &Path, result: &CheckResult) -> anyhow::Result<()> {
        let report = JsonReport::new(artifact, result);
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
