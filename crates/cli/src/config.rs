// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles otabudget.toml parsing with version validation and unknown key warnings.
//! The OTA budget itself is compiled in and never read from config.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "otabudget.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "artifact", "output"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<toml::Value>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    artifact: Option<toml::Value>,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration. `version` is validated during parsing and not kept.
#[derive(Debug, Default)]
pub struct Config {
    /// Artifact location.
    pub artifact: ArtifactConfig,

    /// Output preferences.
    pub output: OutputConfig,
}

/// `[artifact]` section.
#[derive(Debug, Default)]
pub struct ArtifactConfig {
    /// Artifact path, relative to the directory holding the config file.
    pub path: Option<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Default output format when `--output` is not given.
    pub format: Option<OutputFormat>,
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("failed to read: {}", e),
        path: path.to_path_buf(),
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: path.to_path_buf(),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = match version_check.version {
        None => return Err(config_error("missing required field: version".to_string())),
        Some(toml::Value::Integer(v)) => v,
        Some(other) => {
            return Err(config_error(format!(
                "version must be an integer, found {}",
                other.type_str()
            )));
        }
    };

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade otabudget to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let artifact = match flexible.artifact {
        Some(toml::Value::Table(t)) => {
            let path_value = match t.get("path") {
                None => None,
                Some(toml::Value::String(s)) if !s.is_empty() => Some(PathBuf::from(s)),
                Some(_) => {
                    return Err(config_error(
                        "artifact.path must be a non-empty string".to_string(),
                    ));
                }
            };

            for key in t.keys() {
                if key != "path" {
                    warn_unknown_key(path, &format!("artifact.{}", key));
                }
            }

            ArtifactConfig { path: path_value }
        }
        Some(_) => return Err(config_error("artifact must be a table".to_string())),
        None => ArtifactConfig::default(),
    };

    let output = match flexible.output {
        Some(toml::Value::Table(t)) => {
            let format = match t.get("format") {
                None => None,
                Some(toml::Value::String(s)) => Some(parse_format(s).ok_or_else(|| {
                    config_error(format!(
                        "unknown output.format `{}` (expected: text, json)",
                        s
                    ))
                })?),
                Some(_) => {
                    return Err(config_error("output.format must be a string".to_string()));
                }
            };

            for key in t.keys() {
                if key != "format" {
                    warn_unknown_key(path, &format!("output.{}", key));
                }
            }

            OutputConfig { format }
        }
        Some(_) => return Err(config_error("output must be a table".to_string())),
        None => OutputConfig::default(),
    };

    tracing::debug!(
        "parsed {}: artifact={:?} format={:?}",
        path.display(),
        artifact.path,
        output.format
    );

    Ok(Config {
        artifact,
        output,
    })
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "otabudget: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
