//! Output formatting for size check results.

pub mod json;
pub mod text;
