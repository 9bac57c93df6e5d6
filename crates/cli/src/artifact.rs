// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact measurement and size formatting.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Build output checked when no artifact is given.
pub const DEFAULT_ARTIFACT_PATH: &str = "build/main_app.bin";

/// Size of the artifact at `path` in bytes.
///
/// Directories, FIFOs and other non-regular files are rejected before the
/// file is opened, since opening a FIFO blocks until a writer appears. The
/// regular file is then opened so an unreadable artifact fails here instead
/// of passing as a size.
pub fn measure(path: &Path) -> Result<u64> {
    let unreadable = |source: io::Error| Error::ArtifactUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(unreadable)?;
    if !metadata.is_file() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    File::open(path).map_err(unreadable)?;

    tracing::debug!(
        "measured {}: {} bytes ({})",
        path.display(),
        metadata.len(),
        human_size(metadata.len())
    );
    Ok(metadata.len())
}

/// Resolve which artifact to measure.
///
/// Priority:
/// 1. Positional CLI argument (relative to `cwd`)
/// 2. `artifact.path` from config (relative to the config file's directory)
/// 3. [`DEFAULT_ARTIFACT_PATH`] (relative to `cwd`)
pub fn resolve_artifact(
    explicit: Option<&Path>,
    configured: Option<(&Path, &Path)>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return cwd.join(path);
    }
    if let Some((path, config_dir)) = configured {
        return config_dir.join(path);
    }
    cwd.join(DEFAULT_ARTIFACT_PATH)
}

/// Format file size for human-readable output (e.g., "1.0 MB").
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
