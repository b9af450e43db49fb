use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::debug;

use crate::constants;
use crate::domain::{CanonicalTrialPoint, RegulatoryRating, SourceTag};
use crate::pipeline::geocode::Gazetteer;
use crate::pipeline::temporal::YearRange;

/// Synthesizes country-level coverage markers for countries that carry
/// regulatory ratings but little or no trial-level geodata.
///
/// Jitter is an explicit deterministic contract: the offset for a given
/// (country, year) comes from a SHA-256 digest of that key, so repeated
/// runs produce identical coordinates on every platform.
pub struct CoverageAugmenter {
    years: YearRange,
    jitter_degrees: f64,
}

impl CoverageAugmenter {
    pub fn new(years: YearRange, jitter_degrees: f64) -> Self {
        Self { years, jitter_degrees }
    }

    /// One synthetic point per (resolvable country, year). Countries are
    /// visited in first-seen rating order; countries without a centroid
    /// entry are skipped.
    pub fn synthesize(
        &self,
        ratings: &[RegulatoryRating],
        gazetteer: &Gazetteer,
    ) -> Vec<CanonicalTrialPoint> {
        let mut seen = HashSet::new();
        let mut countries = Vec::new();
        for rating in ratings {
            let country = gazetteer.canonical_country(&rating.country);
            if seen.insert(country.clone()) {
                countries.push(country);
            }
        }

        let mut points = Vec::new();
        for country in countries {
            let centroid = match gazetteer.country_centroid(&country) {
                Some(centroid) => centroid,
                None => {
                    debug!("No centroid for rated country {}, skipping", country);
                    continue;
                }
            };

            for year in self.years.iter() {
                let (lat_offset, lon_offset) = jitter_offsets(&country, year, self.jitter_degrees);
                points.push(CanonicalTrialPoint {
                    id: format!("{}{}-{}", constants::SYNTHETIC_ID_PREFIX, country, year),
                    title: format!("Research activity in {}", country),
                    year,
                    city: String::new(),
                    country: country.clone(),
                    lat: centroid.lat + lat_offset,
                    lon: centroid.lon + lon_offset,
                    status: constants::SYNTHETIC_STATUS.to_string(),
                    enrollment: 0,
                    phase: constants::SYNTHETIC_PHASE.to_string(),
                    source: SourceTag::Regulatory,
                });
            }
        }

        points
    }
}

/// Deterministic pseudo-random offsets in [-magnitude, +magnitude],
/// keyed by (country, year). First eight digest bytes drive latitude,
/// the next eight longitude.
fn jitter_offsets(country: &str, year: i32, magnitude: f64) -> (f64, f64) {
    let mut hasher = Sha256::new();
    hasher.update(country.as_bytes());
    hasher.update(b"|");
    hasher.update(year.to_string().as_bytes());
    let digest = hasher.finalize();

    (
        offset_from(&digest[0..8], magnitude),
        offset_from(&digest[8..16], magnitude),
    )
}

fn offset_from(bytes: &[u8], magnitude: f64) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    let unit = u64::from_be_bytes(buf) as f64 / u64::MAX as f64;
    (unit * 2.0 - 1.0) * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(country: &str) -> RegulatoryRating {
        RegulatoryRating {
            country: country.to_string(),
            metric: "Regulation_Index".to_string(),
            value: 1.0,
        }
    }

    #[test]
    fn test_jitter_is_deterministic() {
        let first = jitter_offsets("Kenya", 2020, 5.0);
        let second = jitter_offsets("Kenya", 2020, 5.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_jitter_varies_by_key() {
        assert_ne!(jitter_offsets("Kenya", 2020, 5.0), jitter_offsets("Kenya", 2021, 5.0));
        assert_ne!(jitter_offsets("Kenya", 2020, 5.0), jitter_offsets("Chile", 2020, 5.0));
    }

    #[test]
    fn test_jitter_is_bounded() {
        for year in 2015..=2025 {
            let (lat, lon) = jitter_offsets("Germany", year, 5.0);
            assert!(lat.abs() <= 5.0);
            assert!(lon.abs() <= 5.0);
        }
    }

    #[test]
    fn test_one_point_per_country_per_year() {
        let augmenter = CoverageAugmenter::new(YearRange::new(2015, 2025), 5.0);
        let ratings = vec![rating("Kenya"), rating("Kenya"), rating("Chile")];
        let points = augmenter.synthesize(&ratings, &Gazetteer::new());

        assert_eq!(points.len(), 22);
        let kenya: Vec<_> = points.iter().filter(|p| p.country == "Kenya").collect();
        assert_eq!(kenya.len(), 11);
        assert_eq!(kenya[0].id, "REG-Kenya-2015");
        assert_eq!(kenya[10].id, "REG-Kenya-2025");
        assert_eq!(kenya[0].source, SourceTag::Regulatory);
        assert_eq!(kenya[0].status, "Active");
        assert_eq!(kenya[0].phase, "Research");
        assert_eq!(kenya[0].enrollment, 0);
        assert!((kenya[0].lat - -0.0236).abs() <= 5.0);
        assert!((kenya[0].lon - 37.9062).abs() <= 5.0);
    }

    #[test]
    fn test_unknown_country_is_skipped() {
        let augmenter = CoverageAugmenter::new(YearRange::new(2015, 2025), 5.0);
        let points = augmenter.synthesize(&[rating("Atlantis")], &Gazetteer::new());
        assert!(points.is_empty());
    }

    #[test]
    fn test_rated_aliases_collapse_to_one_country() {
        let augmenter = CoverageAugmenter::new(YearRange::new(2020, 2020), 5.0);
        let ratings = vec![rating("USA"), rating("United States")];
        let points = augmenter.synthesize(&ratings, &Gazetteer::new());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, "REG-United States-2020");
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let augmenter = CoverageAugmenter::new(YearRange::new(2015, 2025), 5.0);
        let ratings = vec![rating("Kenya"), rating("Germany")];
        let gazetteer = Gazetteer::new();

        let first = augmenter.synthesize(&ratings, &gazetteer);
        let second = augmenter.synthesize(&ratings, &gazetteer);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.lat, b.lat);
            assert_eq!(a.lon, b.lon);
        }
    }
}
