// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! App binary: <size> bytes
//! Budget:     <max> bytes (slot <slot> - margin <margin>)
//! OK: app binary within OTA slot budget.
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::budget::CheckResult;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    out: W,
}

impl TextFormatter {
    /// Create a formatter writing to stdout.
    pub fn new(color_choice: ColorChoice) -> Self {
        Self::with_writer(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Write the size, budget and verdict lines.
    pub fn write_report(&mut self, result: &CheckResult) -> std::io::Result<()> {
        let budget = &result.budget;
        writeln!(self.out, "App binary: {} bytes", result.actual_size_bytes)?;
        writeln!(
            self.out,
            "Budget:     {} bytes (slot {} - margin {})",
            result.max_app_bytes,
            budget.slot_bytes(),
            budget.margin_bytes()
        )?;

        if result.within_budget {
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "OK")?;
            self.out.reset()?;
            writeln!(self.out, ": app binary within OTA slot budget.")?;
        } else {
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "ERROR")?;
            self.out.reset()?;
            writeln!(self.out, ": app binary exceeds OTA slot budget.")?;
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
