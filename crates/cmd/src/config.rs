// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result, bail};
use memfs::Limits;

/// Load filesystem limits from a YAML file. Fields left out keep their
/// defaults.
pub fn load_limits<P: AsRef<Path>>(path: P) -> Result<Limits> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let limits = parse_limits(&content)
        .with_context(|| format!("Failed to parse YAML configuration: {}", path.display()))?;

    diagnostics::log_info!("loaded limits from {path}", path: path.display().to_string());
    Ok(limits)
}

/// Parse and validate a YAML limits document
pub fn parse_limits(content: &str) -> Result<Limits> {
    // An empty document means all defaults
    if content.trim().is_empty() {
        return Ok(Limits::default());
    }
    let limits: Limits = serde_yaml_ng::from_str(content)?;
    validate_limits(&limits)?;
    Ok(limits)
}

fn validate_limits(limits: &Limits) -> Result<()> {
    if limits.max_read_len == 0 {
        bail!("max_read_len must be greater than zero");
    }
    Ok(())
}
