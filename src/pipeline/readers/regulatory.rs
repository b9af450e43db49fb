use std::path::Path;
use tracing::debug;

use crate::domain::RegulatoryRating;
use crate::error::{AtlasError, Result};

const COUNTRY_COLUMN: &str = "Country_Region";
const METRIC_COLUMN: &str = "Metric";
const VALUE_COLUMN: &str = "Value";

/// What the regulatory source contributed.
#[derive(Debug, Default)]
pub struct RegulatoryOutcome {
    pub ratings: Vec<RegulatoryRating>,
    pub malformed: u64,
}

/// Reads the country-level regulatory rating table. Its rows are not
/// trial records, so this reader stands outside the `TrialReader` seam;
/// the ratings feed only the coverage augmenter.
#[derive(Debug, Default)]
pub struct RegulatoryReader;

impl RegulatoryReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<RegulatoryOutcome> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let column = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                AtlasError::MissingField(format!("column '{}' in {}", name, path.display()))
            })
        };
        let country_idx = column(COUNTRY_COLUMN)?;
        let metric_idx = column(METRIC_COLUMN)?;
        let value_idx = column(VALUE_COLUMN)?;

        let mut ratings = Vec::new();
        let mut malformed = 0u64;

        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipping unreadable rating row: {}", e);
                    malformed += 1;
                    continue;
                }
            };

            let country = row.get(country_idx).unwrap_or("").trim();
            let value_raw = row.get(value_idx).unwrap_or("").trim();
            if country.is_empty() {
                malformed += 1;
                continue;
            }
            let value: f64 = match value_raw.parse() {
                Ok(v) => v,
                Err(_) => {
                    debug!("Skipping rating row for {}: unparsable value", country);
                    malformed += 1;
                    continue;
                }
            };

            ratings.push(RegulatoryRating {
                country: country.to_string(),
                metric: row.get(metric_idx).unwrap_or("").trim().to_string(),
                value,
            });
        }

        Ok(RegulatoryOutcome { ratings, malformed })
    }
}
