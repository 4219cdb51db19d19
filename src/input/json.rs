use anyhow::{Context, Result};
use std::path::Path;
use crate::core::TrackedPosition;

/// Load a route from a JSON file containing an array of position records
pub fn load_json(path: &Path) -> Result<Vec<TrackedPosition>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents).context("Failed to parse route JSON")
}
