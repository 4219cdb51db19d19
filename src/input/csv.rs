use anyhow::{Context, Result};
use std::path::Path;
use crate::core::TrackedPosition;
use chrono::Utc;

/// Load a route from a CSV file
///
/// Supports flexible column names:
/// - lat,lon,status
/// - latitude,longitude,message
/// - time,lat,lng,milestone
///
/// An optional time column holds relative seconds from the start of the
/// route and is mapped onto wall-clock timestamps.
pub fn load_csv(path: &Path) -> Result<Vec<TrackedPosition>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers = rdr.headers()?;
    let lat_idx = find_column(headers, &["lat", "latitude"])?;
    let lon_idx = find_column(headers, &["lon", "lng", "long", "longitude"])?;
    let status_idx = find_column(headers, &["status", "message", "milestone"])?;
    let time_idx = find_optional_column(headers, &["time", "timestamp", "t", "ts"]);

    let base_time = Utc::now();
    let mut route = Vec::new();

    for result in rdr.records() {
        let record = result.context("Failed to read CSV row")?;

        let latitude = record
            .get(lat_idx)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .context("Failed to parse latitude")?;

        let longitude = record
            .get(lon_idx)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .context("Failed to parse longitude")?;

        let status = record
            .get(status_idx)
            .context("Missing status column")?
            .trim()
            .to_string();

        // Relative seconds from the start of the route, when present
        let recorded_at = time_idx
            .and_then(|idx| record.get(idx))
            .and_then(|s| s.trim().parse::<f64>().ok())
            .map(|relative_secs| {
                base_time + chrono::Duration::milliseconds((relative_secs * 1000.0) as i64)
            });

        route.push(TrackedPosition {
            latitude,
            longitude,
            status,
            recorded_at,
        });
    }

    Ok(route)
}

/// Find a column by checking possible names
fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize> {
    find_optional_column(headers, names)
        .with_context(|| format!("Could not find column with names: {:?}", names))
}

fn find_optional_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header_lower = header.to_lowercase();
        names.iter().any(|&name| header_lower == name)
    })
}
