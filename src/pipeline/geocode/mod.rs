//! Composite location parsing, country-alias canonicalization, and the
//! tiered coordinate lookup (exact city, then country centroid, then
//! failure).

mod tables;

use crate::constants::MULTI_SITE_DELIMITER;
use crate::domain::{GeoPoint, LocationEntry};

/// Which tier satisfied a lookup. Carried on the result so callers never
/// silently blend exact and approximate coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    City,
    CountryCentroid,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedSite {
    pub point: GeoPoint,
    pub tier: ResolutionTier,
}

/// Read-only gazetteer over the static coordinate tables.
#[derive(Debug, Default)]
pub struct Gazetteer;

impl Gazetteer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a composite location string into site entries.
    ///
    /// Sites are pipe-delimited; each site splits on commas. Two parts
    /// are (city, country); with three or more, the middle parts form a
    /// state/region kept for display only. Fewer than two parts make a
    /// site unusable and it is discarded.
    pub fn parse_location_list(&self, raw: &str) -> Vec<LocationEntry> {
        let mut entries = Vec::new();

        for site in raw.split(MULTI_SITE_DELIMITER) {
            let parts: Vec<&str> = site.split(',').map(str::trim).collect();
            if parts.len() < 2 {
                continue;
            }

            let city = parts[0].to_string();
            let country = parts[parts.len() - 1].to_string();
            if city.is_empty() || country.is_empty() {
                continue;
            }

            let state = if parts.len() > 2 {
                Some(parts[1..parts.len() - 1].join(", "))
            } else {
                None
            };

            entries.push(LocationEntry { city, state, country });
        }

        entries
    }

    /// Collapse abbreviation variants to the canonical country name.
    ///
    /// Matches whole tokens only, so "Ukraine" is never mistaken for
    /// "UK". Already-canonical names pass through unchanged.
    pub fn canonical_country(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match trimmed {
            "USA" | "U.S." | "U.S.A." | "US" => "United States".to_string(),
            "UK" | "U.K." => "United Kingdom".to_string(),
            other => other.to_string(),
        }
    }

    /// Tiered resolution: exact city match in the country's city table,
    /// then country centroid, then failure.
    pub fn resolve(&self, city: &str, country: &str) -> Option<ResolvedSite> {
        let country = self.canonical_country(country);
        let city = city.trim();

        if !city.is_empty() {
            if let Some(point) = tables::CITY_COORDS
                .get(country.as_str())
                .and_then(|cities| cities.get(city))
            {
                return Some(ResolvedSite {
                    point: *point,
                    tier: ResolutionTier::City,
                });
            }
        }

        tables::COUNTRY_COORDS
            .get(country.as_str())
            .map(|point| ResolvedSite {
                point: *point,
                tier: ResolutionTier::CountryCentroid,
            })
    }

    /// Country-level lookup for the coverage augmenter; never consults
    /// the city tier.
    pub fn country_centroid(&self, country: &str) -> Option<GeoPoint> {
        let country = self.canonical_country(country);
        tables::COUNTRY_COORDS.get(country.as_str()).copied()
    }
}
