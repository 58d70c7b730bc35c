use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load a class description document (YAML, or JSON when the extension is `.json`).
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| {
        format!("Failed to read class description at {}", path.display())
    })?;
    let doc = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_slice(&bytes).context("Failed to parse class description JSON")?
    } else {
        serde_yaml::from_slice(&bytes).context("Failed to parse class description YAML")?
    };
    Ok(doc)
}

/// Parse a decimal or `0x`-prefixed hexadecimal offset.
pub fn parse_offset(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|e| format!("Invalid offset '{value}': {e}"))
}

/// Parse the first annotation directory offset. Zero is the "unassigned" offset
/// sentinel, so it is rejected here rather than at layout time.
pub fn parse_annotation_base(value: &str) -> Result<u32, String> {
    match parse_offset(value)? {
        0 => Err(format!("Invalid annotation base '{value}': offset 0 is reserved for 'unassigned'")),
        base => Ok(base),
    }
}
