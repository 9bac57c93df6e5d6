// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! OTA slot budget and the size verdict.
//!
//! The budget is compiled in:
//! - slot: 0x4C0000 bytes (4,980,736)
//! - margin: 256 KiB (262,144)
//! - max app image: slot - margin (4,718,592)

/// Total bytes in the OTA update partition.
pub const OTA_SLOT_BYTES: u64 = 0x4C_0000;

/// Headroom withheld from the application image.
pub const SAFETY_MARGIN_BYTES: u64 = 256 * 1024;

/// Largest application image that fits the slot with the margin intact.
pub const MAX_APP_BYTES: u64 = OTA_SLOT_BYTES - SAFETY_MARGIN_BYTES;

// 0 <= max < slot
const _: () = assert!(SAFETY_MARGIN_BYTES > 0 && SAFETY_MARGIN_BYTES <= OTA_SLOT_BYTES);

/// Slot size and safety margin a binary is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetConfig {
    slot_bytes: u64,
    margin_bytes: u64,
}

impl BudgetConfig {
    /// The compiled-in OTA budget.
    pub const DEFAULT: Self = Self {
        slot_bytes: OTA_SLOT_BYTES,
        margin_bytes: SAFETY_MARGIN_BYTES,
    };

    pub const fn slot_bytes(&self) -> u64 {
        self.slot_bytes
    }

    pub const fn margin_bytes(&self) -> u64 {
        self.margin_bytes
    }

    /// Usable bytes for the application image.
    pub const fn max_app_bytes(&self) -> u64 {
        self.slot_bytes - self.margin_bytes
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of comparing a measured artifact against a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    /// Measured artifact size.
    pub actual_size_bytes: u64,
    /// Budget the size was compared against.
    pub max_app_bytes: u64,
    /// True when `actual_size_bytes <= max_app_bytes`.
    pub within_budget: bool,
    /// Budget the result was evaluated against.
    pub budget: BudgetConfig,
}

impl CheckResult {
    /// Bytes left before the budget is hit; negative when over budget.
    pub fn headroom_bytes(&self) -> i128 {
        i128::from(self.max_app_bytes) - i128::from(self.actual_size_bytes)
    }
}

/// Compare a measured size against the budget. The bound is inclusive.
pub fn evaluate(actual_size_bytes: u64, config: &BudgetConfig) -> CheckResult {
    let max_app_bytes = config.max_app_bytes();
    CheckResult {
        actual_size_bytes,
        max_app_bytes,
        within_budget: actual_size_bytes <= max_app_bytes,
        budget: *config,
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
