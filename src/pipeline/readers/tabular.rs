use std::path::Path;
use tracing::debug;

use super::{ReadOutcome, TrialReader};
use crate::domain::{RawGeo, RawTrialRecord, SourceTag};
use crate::error::{AtlasError, Result};

const ID_COLUMN: &str = "NCT Number";
const TITLE_COLUMN: &str = "Study Title";
const DATE_COLUMN: &str = "Start Date";
const LOCATIONS_COLUMN: &str = "Locations";
const STATUS_COLUMN: &str = "Study Status";
const ENROLLMENT_COLUMN: &str = "Enrollment";
const PHASES_COLUMN: &str = "Phases";

/// Reads the flat CSV trial export. One row per record; the location
/// column carries a pipe-delimited multi-site string that is parsed
/// later by the gazetteer.
#[derive(Debug, Default)]
pub struct TabularReader;

impl TabularReader {
    pub fn new() -> Self {
        Self
    }
}

/// Enrollment column tolerates integer and float renditions; empty means
/// unknown (zero). Anything else makes the row malformed.
fn parse_enrollment(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return u32::try_from(n).ok();
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => Some(f as u32),
        _ => None,
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl TrialReader for TabularReader {
    fn source(&self) -> SourceTag {
        SourceTag::Tabular
    }

    fn read(&self, path: &Path) -> Result<ReadOutcome> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let column = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                AtlasError::MissingField(format!("column '{}' in {}", name, path.display()))
            })
        };
        let id_idx = column(ID_COLUMN)?;
        let title_idx = column(TITLE_COLUMN)?;
        let date_idx = column(DATE_COLUMN)?;
        let locations_idx = column(LOCATIONS_COLUMN)?;
        let status_idx = column(STATUS_COLUMN)?;
        let enrollment_idx = column(ENROLLMENT_COLUMN)?;
        let phases_idx = column(PHASES_COLUMN)?;

        let mut records = Vec::new();
        let mut malformed = 0u64;

        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipping unreadable row: {}", e);
                    malformed += 1;
                    continue;
                }
            };
            let field = |idx: usize| row.get(idx).unwrap_or("").trim();

            let id = field(id_idx);
            if id.is_empty() {
                debug!("Skipping row without an identifier");
                malformed += 1;
                continue;
            }

            let enrollment = match parse_enrollment(field(enrollment_idx)) {
                Some(n) => n,
                None => {
                    debug!("Skipping row {}: unparsable enrollment", id);
                    malformed += 1;
                    continue;
                }
            };

            records.push(RawTrialRecord {
                id: id.to_string(),
                title: field(title_idx).to_string(),
                date_raw: optional(field(date_idx)),
                geo: RawGeo::Composite(field(locations_idx).to_string()),
                status: optional(field(status_idx)),
                phase: optional(field(phases_idx)),
                enrollment,
            });
        }

        Ok(ReadOutcome { records, malformed })
    }
}
