pub mod csv;
pub mod json;

pub use csv::load_csv;
pub use json::load_json;

use anyhow::Result;
use std::path::Path;
use crate::core::TrackedPosition;

/// Route file format detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFormat {
    Csv,
    Json,
    Unknown,
}

/// Detect the format of a route file from its leading bytes
pub fn detect_format(data: &[u8]) -> RouteFormat {
    if is_json(data) {
        return RouteFormat::Json;
    }

    if is_csv(data) {
        return RouteFormat::Csv;
    }

    RouteFormat::Unknown
}

fn is_json(data: &[u8]) -> bool {
    // A route document is a JSON array; tolerate leading whitespace
    data.iter()
        .find(|b| !b.is_ascii_whitespace())
        .map(|&b| b == b'[')
        .unwrap_or(false)
}

fn is_csv(data: &[u8]) -> bool {
    if data.len() < 10 {
        return false;
    }

    let sample = std::str::from_utf8(&data[..data.len().min(500)]);
    match sample {
        Ok(text) => {
            // Header plus coordinates means at least two commas per line
            text.lines()
                .take(5)
                .any(|line| line.chars().filter(|&c| c == ',').count() >= 2)
        }
        Err(_) => false,
    }
}

/// Load a route from a file, auto-detecting the format
pub fn load_route(path: &Path) -> Result<Vec<TrackedPosition>> {
    let data = std::fs::read(path)?;

    match detect_format(&data) {
        RouteFormat::Csv => load_csv(path),
        RouteFormat::Json => load_json(path),
        RouteFormat::Unknown => anyhow::bail!("Unknown route file format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json_array() {
        assert_eq!(detect_format(b"  [{\"latitude\": 1.0}]"), RouteFormat::Json);
    }

    #[test]
    fn test_detect_csv() {
        assert_eq!(
            detect_format(b"lat,lon,status\n12.97,77.59,Started\n"),
            RouteFormat::Csv
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format(b"<xml/>"), RouteFormat::Unknown);
    }
}
