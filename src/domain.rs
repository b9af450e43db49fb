use serde::{Deserialize, Serialize};

use crate::constants;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Which reader (or synthetic process) produced a fused record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    #[serde(rename = "CSV")]
    Tabular,
    #[serde(rename = "JSON")]
    Hierarchical,
    #[serde(rename = "Regulations")]
    Regulatory,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Tabular => constants::TABULAR_SOURCE,
            SourceTag::Hierarchical => constants::HIERARCHICAL_SOURCE,
            SourceTag::Regulatory => constants::REGULATORY_SOURCE,
        }
    }
}

/// The unit of fused output. Created exactly once, never mutated; field
/// order here is the serialized wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalTrialPoint {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub status: String,
    pub enrollment: u32,
    pub phase: String,
    pub source: SourceTag,
}

/// Location payload of a raw record: either one composite pipe-delimited
/// string (tabular export) or an explicit site list (hierarchical export).
#[derive(Debug, Clone)]
pub enum RawGeo {
    Composite(String),
    Sites(Vec<RawSite>),
}

/// One site from the hierarchical export. A present `point` is
/// authoritative and bypasses the location resolver.
#[derive(Debug, Clone)]
pub struct RawSite {
    pub city: String,
    pub country: String,
    pub point: Option<GeoPoint>,
}

/// Common intermediate shape every trial reader produces. Transient:
/// never persisted past the reader stage.
#[derive(Debug, Clone)]
pub struct RawTrialRecord {
    pub id: String,
    pub title: String,
    pub date_raw: Option<String>,
    pub geo: RawGeo,
    pub status: Option<String>,
    pub phase: Option<String>,
    pub enrollment: u32,
}

/// One site segment parsed out of a composite location string. The state
/// portion is kept for display but never used for coordinate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

/// One (country, metric, value) row from the regulatory rating table.
/// Not a trial record; consumed only by the coverage augmenter.
#[derive(Debug, Clone)]
pub struct RegulatoryRating {
    pub country: String,
    pub metric: String,
    pub value: f64,
}

/// Truncate a title to a bounded display length, appending an ellipsis
/// when anything was cut. Counts characters, not bytes.
pub fn truncate_title(raw: &str, max_chars: usize) -> String {
    if raw.chars().count() <= max_chars {
        return raw.to_string();
    }
    let mut truncated: String = raw.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(truncate_title("A short title", 100), "A short title");
    }

    #[test]
    fn test_title_at_boundary_unchanged() {
        let title = "x".repeat(100);
        assert_eq!(truncate_title(&title, 100), title);
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let title = "y".repeat(101);
        let out = truncate_title(&title, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
        assert!(out.starts_with("yyy"));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let title = "é".repeat(101);
        let out = truncate_title(&title, 100);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 103);
    }

    #[test]
    fn test_source_tag_wire_names() {
        assert_eq!(serde_json::to_string(&SourceTag::Tabular).unwrap(), "\"CSV\"");
        assert_eq!(serde_json::to_string(&SourceTag::Hierarchical).unwrap(), "\"JSON\"");
        assert_eq!(
            serde_json::to_string(&SourceTag::Regulatory).unwrap(),
            "\"Regulations\""
        );
    }
}
