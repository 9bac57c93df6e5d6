// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by otabudget.

include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
