pub mod augment;
pub mod geocode;
pub mod identity;
pub mod output;
pub mod readers;
pub mod temporal;

use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::constants;
use crate::domain::{
    truncate_title, CanonicalTrialPoint, GeoPoint, RawGeo, RawTrialRecord, SourceTag,
};
use crate::error::Result;
use augment::CoverageAugmenter;
use geocode::Gazetteer;
use identity::IdentityTracker;
use readers::{HierarchicalReader, RegulatoryReader, TabularReader, TrialReader};
use temporal::{extract_year, YearRange};

/// What one source contributed to a run.
#[derive(Debug, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub contributed: usize,
    pub failed: bool,
}

/// Per-reason counts of records dropped during a run.
#[derive(Debug, Default, Serialize)]
pub struct DropCounts {
    pub malformed: u64,
    pub out_of_range_year: u64,
    pub unresolvable_location: u64,
    pub duplicate_identity: u64,
}

/// Result of a complete fusion run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
    pub drops: DropCounts,
    pub synthetic_points: usize,
    pub total_points: usize,
    pub output_file: String,
}

pub struct FusionPipeline {
    config: PipelineConfig,
    gazetteer: Gazetteer,
}

impl FusionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            gazetteer: Gazetteer::new(),
        }
    }

    /// Run the whole pipeline once: read trial sources in priority
    /// order, gate each record through the temporal, location, and
    /// identity stages, append synthetic coverage markers, sort, and
    /// write the fused output.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<RunSummary> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("🚀 Starting fusion run {}", run_id);
        counter!("atlas_pipeline_runs_total").increment(1);
        let t_run = std::time::Instant::now();

        let accepted_years = YearRange::new(self.config.years.min, self.config.years.max);
        let mut tracker = IdentityTracker::new();
        let mut drops = DropCounts::default();
        let mut points: Vec<CanonicalTrialPoint> = Vec::new();
        let mut sources = Vec::new();

        // Trial-level sources, fixed priority order: tabular first, so it
        // wins cross-source identifier ties.
        let trial_sources: Vec<(Box<dyn TrialReader>, &str)> = vec![
            (Box::new(TabularReader::new()), self.config.sources.tabular.as_str()),
            (
                Box::new(HierarchicalReader::new()),
                self.config.sources.hierarchical.as_str(),
            ),
        ];

        for (reader, path) in trial_sources {
            let tag = reader.source();
            info!("📡 Reading {} source from {}", tag.as_str(), path);
            let before = points.len();

            match reader.read(Path::new(path)) {
                Ok(outcome) => {
                    info!(
                        "✅ Read {} records from {} ({} malformed rows skipped)",
                        outcome.records.len(),
                        tag.as_str(),
                        outcome.malformed
                    );
                    counter!("atlas_records_read_total", "source" => tag.as_str())
                        .increment(outcome.records.len() as u64);
                    drops.malformed += outcome.malformed;

                    for record in outcome.records {
                        self.fuse_record(
                            record,
                            tag,
                            accepted_years,
                            &mut tracker,
                            &mut drops,
                            &mut points,
                        );
                    }
                    sources.push(SourceReport {
                        source: tag.as_str().to_string(),
                        contributed: points.len() - before,
                        failed: false,
                    });
                }
                Err(e) => {
                    warn!("Source {} unreadable, contributing nothing: {}", tag.as_str(), e);
                    sources.push(SourceReport {
                        source: tag.as_str().to_string(),
                        contributed: 0,
                        failed: true,
                    });
                }
            }
        }

        // Regulatory ratings feed only the coverage augmenter.
        let regulatory_path = self.config.sources.regulatory.as_str();
        info!("📡 Reading regulatory ratings from {}", regulatory_path);
        let (ratings, regulatory_failed) =
            match RegulatoryReader::new().read(Path::new(regulatory_path)) {
                Ok(outcome) => {
                    info!(
                        "✅ Read {} rating rows ({} malformed rows skipped)",
                        outcome.ratings.len(),
                        outcome.malformed
                    );
                    drops.malformed += outcome.malformed;
                    (outcome.ratings, false)
                }
                Err(e) => {
                    warn!("Regulatory source unreadable, contributing nothing: {}", e);
                    (Vec::new(), true)
                }
            };

        let augmenter = CoverageAugmenter::new(
            YearRange::new(self.config.augment.min_year, self.config.augment.max_year),
            self.config.augment.jitter_degrees,
        );
        let synthetic = augmenter.synthesize(&ratings, &self.gazetteer);
        let synthetic_points = synthetic.len();
        info!("🧩 Synthesized {} coverage markers", synthetic_points);
        sources.push(SourceReport {
            source: SourceTag::Regulatory.as_str().to_string(),
            contributed: synthetic_points,
            failed: regulatory_failed,
        });
        points.extend(synthetic);

        // Stable sort: year ties keep source-priority-then-insertion order.
        points.sort_by_key(|p| p.year);

        let output_path = Path::new(self.config.output.path.as_str());
        output::write_points(&points, output_path, self.config.output.pretty)?;
        info!("💾 Saved {} points to {}", points.len(), output_path.display());

        counter!("atlas_points_total").increment(points.len() as u64);
        counter!("atlas_records_dropped_total", "reason" => "malformed")
            .increment(drops.malformed);
        counter!("atlas_records_dropped_total", "reason" => "out_of_range_year")
            .increment(drops.out_of_range_year);
        counter!("atlas_records_dropped_total", "reason" => "unresolvable_location")
            .increment(drops.unresolvable_location);
        counter!("atlas_records_dropped_total", "reason" => "duplicate_identity")
            .increment(drops.duplicate_identity);
        histogram!("atlas_pipeline_duration_seconds").record(t_run.elapsed().as_secs_f64());

        Ok(RunSummary {
            run_id,
            started_at,
            finished_at: Utc::now(),
            sources,
            drops,
            synthetic_points,
            total_points: points.len(),
            output_file: self.config.output.path.clone(),
        })
    }

    /// Gate one raw record through the temporal, location, and identity
    /// stages; push the canonical point when every stage accepts it.
    fn fuse_record(
        &self,
        record: RawTrialRecord,
        tag: SourceTag,
        accepted_years: YearRange,
        tracker: &mut IdentityTracker,
        drops: &mut DropCounts,
        points: &mut Vec<CanonicalTrialPoint>,
    ) {
        let year = match record.date_raw.as_deref().and_then(extract_year) {
            Some(year) => year,
            None => {
                debug!("Dropping {}: unresolvable date", record.id);
                drops.malformed += 1;
                return;
            }
        };
        if !accepted_years.contains(year) {
            debug!("Dropping {}: year {} out of range", record.id, year);
            drops.out_of_range_year += 1;
            return;
        }

        let (city, country, point) = match self.resolve_primary_site(&record.geo) {
            Some(resolved) => resolved,
            None => {
                debug!("Dropping {}: no resolvable site", record.id);
                drops.unresolvable_location += 1;
                return;
            }
        };

        // First-writer-wins across sources; a record only claims its id
        // once it actually contributes a point.
        if !tracker.admit(&record.id) {
            debug!("Dropping {}: duplicate identifier", record.id);
            drops.duplicate_identity += 1;
            return;
        }

        points.push(CanonicalTrialPoint {
            id: record.id,
            title: truncate_title(&record.title, self.config.title_max_chars),
            year,
            city,
            country,
            lat: point.lat,
            lon: point.lon,
            status: record
                .status
                .unwrap_or_else(|| constants::UNKNOWN_STATUS.to_string()),
            enrollment: record.enrollment,
            phase: record
                .phase
                .unwrap_or_else(|| constants::UNKNOWN_PHASE.to_string()),
            source: tag,
        });
    }

    /// Primary-site rule: the first site (in source order) that resolves
    /// wins; an authoritative coordinate pair wins immediately. Failing
    /// sites are skipped individually.
    fn resolve_primary_site(&self, geo: &RawGeo) -> Option<(String, String, GeoPoint)> {
        match geo {
            RawGeo::Composite(raw) => {
                for entry in self.gazetteer.parse_location_list(raw) {
                    if let Some(resolved) = self.gazetteer.resolve(&entry.city, &entry.country) {
                        return Some((
                            entry.city,
                            self.gazetteer.canonical_country(&entry.country),
                            resolved.point,
                        ));
                    }
                }
                None
            }
            RawGeo::Sites(sites) => {
                for site in sites {
                    if let Some(point) = site.point {
                        return Some((
                            site.city.clone(),
                            self.gazetteer.canonical_country(&site.country),
                            point,
                        ));
                    }
                    if let Some(resolved) = self.gazetteer.resolve(&site.city, &site.country) {
                        return Some((
                            site.city.clone(),
                            self.gazetteer.canonical_country(&site.country),
                            resolved.point,
                        ));
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawSite;

    fn pipeline() -> FusionPipeline {
        FusionPipeline::new(PipelineConfig::default())
    }

    fn record(id: &str, date: &str, geo: RawGeo) -> RawTrialRecord {
        RawTrialRecord {
            id: id.to_string(),
            title: "Test Study".to_string(),
            date_raw: Some(date.to_string()),
            geo,
            status: None,
            phase: None,
            enrollment: 0,
        }
    }

    #[test]
    fn test_primary_site_falls_back_past_unresolvable_sites() {
        let pipeline = pipeline();
        let geo = RawGeo::Composite("X, Atlantis|Boston, MA, United States".to_string());
        let (city, country, point) = pipeline.resolve_primary_site(&geo).unwrap();
        assert_eq!(city, "Boston");
        assert_eq!(country, "United States");
        assert!((point.lat - 42.3601).abs() < 1e-9);
    }

    #[test]
    fn test_authoritative_point_bypasses_resolver() {
        let pipeline = pipeline();
        let geo = RawGeo::Sites(vec![RawSite {
            city: "Oulu".to_string(),
            country: "Finland".to_string(),
            point: Some(GeoPoint { lat: 65.0121, lon: 25.4651 }),
        }]);
        let (city, country, point) = pipeline.resolve_primary_site(&geo).unwrap();
        assert_eq!(city, "Oulu");
        assert_eq!(country, "Finland");
        assert!((point.lat - 65.0121).abs() < 1e-9);
    }

    #[test]
    fn test_site_without_point_goes_through_the_tiers() {
        let pipeline = pipeline();
        let geo = RawGeo::Sites(vec![RawSite {
            city: "Toronto".to_string(),
            country: "Canada".to_string(),
            point: None,
        }]);
        let (_, _, point) = pipeline.resolve_primary_site(&geo).unwrap();
        assert!((point.lat - 43.6532).abs() < 1e-9);
    }

    #[test]
    fn test_all_sites_failing_resolves_nothing() {
        let pipeline = pipeline();
        let geo = RawGeo::Composite("X, Atlantis|Y, Lemuria".to_string());
        assert!(pipeline.resolve_primary_site(&geo).is_none());
    }

    #[test]
    fn test_failed_resolution_does_not_claim_the_id() {
        let pipeline = pipeline();
        let mut tracker = IdentityTracker::new();
        let mut drops = DropCounts::default();
        let mut points = Vec::new();
        let years = YearRange::new(2010, 2025);

        // Unresolvable location: the id stays free for a later source
        pipeline.fuse_record(
            record("NCT001", "2019-01-01", RawGeo::Composite("X, Atlantis".to_string())),
            SourceTag::Tabular,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );
        assert_eq!(drops.unresolvable_location, 1);
        assert_eq!(tracker.admitted(), 0);

        pipeline.fuse_record(
            record(
                "NCT001",
                "2020-01-01",
                RawGeo::Sites(vec![RawSite {
                    city: "Toronto".to_string(),
                    country: "Canada".to_string(),
                    point: None,
                }]),
            ),
            SourceTag::Hierarchical,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].source, SourceTag::Hierarchical);
    }

    #[test]
    fn test_duplicate_identifier_is_dropped() {
        let pipeline = pipeline();
        let mut tracker = IdentityTracker::new();
        let mut drops = DropCounts::default();
        let mut points = Vec::new();
        let years = YearRange::new(2010, 2025);
        let geo = || RawGeo::Composite("Boston, MA, United States".to_string());

        pipeline.fuse_record(
            record("NCT001", "2019-01-01", geo()),
            SourceTag::Tabular,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );
        pipeline.fuse_record(
            record("NCT001", "2020-01-01", geo()),
            SourceTag::Hierarchical,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 2019);
        assert_eq!(points[0].source, SourceTag::Tabular);
        assert_eq!(drops.duplicate_identity, 1);
    }

    #[test]
    fn test_year_gates() {
        let pipeline = pipeline();
        let mut tracker = IdentityTracker::new();
        let mut drops = DropCounts::default();
        let mut points = Vec::new();
        let years = YearRange::new(2010, 2025);
        let geo = || RawGeo::Composite("Boston, MA, United States".to_string());

        pipeline.fuse_record(
            record("NCT001", "2027", geo()),
            SourceTag::Tabular,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );
        let mut no_date = record("NCT002", "", geo());
        no_date.date_raw = None;
        pipeline.fuse_record(
            no_date,
            SourceTag::Tabular,
            years,
            &mut tracker,
            &mut drops,
            &mut points,
        );

        assert!(points.is_empty());
        assert_eq!(drops.out_of_range_year, 1);
        assert_eq!(drops.malformed, 1);
    }

    #[test]
    fn test_sentinels_fill_missing_classification() {
        let pipeline = pipeline();
        let mut tracker = IdentityTracker::new();
        let mut drops = DropCounts::default();
        let mut points = Vec::new();

        pipeline.fuse_record(
            record(
                "NCT001",
                "2019-01-01",
                RawGeo::Composite("Boston, MA, United States".to_string()),
            ),
            SourceTag::Tabular,
            YearRange::new(2010, 2025),
            &mut tracker,
            &mut drops,
            &mut points,
        );

        assert_eq!(points[0].status, "Unknown");
        assert_eq!(points[0].phase, "N/A");
    }
}
