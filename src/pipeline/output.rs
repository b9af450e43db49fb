use std::fs;
use std::path::Path;

use crate::domain::CanonicalTrialPoint;
use crate::error::Result;

/// Serialize the fused, sorted points to one JSON array, creating parent
/// directories as needed. Output is a pure function of the input
/// sequence, so unchanged inputs reproduce the file byte for byte.
pub fn write_points(points: &[CanonicalTrialPoint], path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json_content = if pretty {
        serde_json::to_string_pretty(points)?
    } else {
        serde_json::to_string(points)?
    };
    fs::write(path, json_content)?;

    Ok(())
}
