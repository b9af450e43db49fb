use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{ReadOutcome, TrialReader};
use crate::constants;
use crate::domain::{GeoPoint, RawGeo, RawSite, RawTrialRecord, SourceTag};
use crate::error::Result;

/// Reads the nested JSON trial export. Every field is optional on the
/// wire; `#[serde(default)]` gives each missing level a clean default
/// instead of scattering lookups through untyped values.
#[derive(Debug, Default)]
pub struct HierarchicalReader;

impl HierarchicalReader {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StudyWire {
    protocol_section: ProtocolSectionWire,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProtocolSectionWire {
    identification_module: IdentificationWire,
    status_module: StatusWire,
    contacts_locations_module: ContactsLocationsWire,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct IdentificationWire {
    nct_id: String,
    brief_title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StatusWire {
    overall_status: String,
    start_date_struct: StartDateWire,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StartDateWire {
    date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ContactsLocationsWire {
    locations: Vec<SiteWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SiteWire {
    city: String,
    country: String,
    geo_point: Option<GeoPointWire>,
}

#[derive(Debug, Deserialize)]
struct GeoPointWire {
    lat: f64,
    lon: f64,
}

fn convert(value: serde_json::Value) -> Option<RawTrialRecord> {
    let study: StudyWire = serde_json::from_value(value).ok()?;
    let protocol = study.protocol_section;

    let id = protocol.identification_module.nct_id.trim().to_string();
    if id.is_empty() {
        return None;
    }

    let title = if protocol.identification_module.brief_title.trim().is_empty() {
        constants::UNKNOWN_TITLE.to_string()
    } else {
        protocol.identification_module.brief_title
    };

    let date = protocol.status_module.start_date_struct.date.trim().to_string();
    let status = protocol.status_module.overall_status.trim().to_string();

    let sites = protocol
        .contacts_locations_module
        .locations
        .into_iter()
        .map(|site| RawSite {
            city: site.city.trim().to_string(),
            country: if site.country.trim().is_empty() {
                constants::UNKNOWN_COUNTRY.to_string()
            } else {
                site.country.trim().to_string()
            },
            point: site.geo_point.map(|g| GeoPoint { lat: g.lat, lon: g.lon }),
        })
        .collect();

    Some(RawTrialRecord {
        id,
        title,
        date_raw: if date.is_empty() { None } else { Some(date) },
        geo: RawGeo::Sites(sites),
        status: if status.is_empty() { None } else { Some(status) },
        phase: None,
        enrollment: 0,
    })
}

impl TrialReader for HierarchicalReader {
    fn source(&self) -> SourceTag {
        SourceTag::Hierarchical
    }

    fn read(&self, path: &Path) -> Result<ReadOutcome> {
        let content = fs::read_to_string(path)?;
        let studies: Vec<serde_json::Value> = serde_json::from_str(&content)?;

        let mut records = Vec::new();
        let mut malformed = 0u64;

        for study in studies {
            match convert(study) {
                Some(record) => records.push(record),
                None => {
                    debug!("Skipping study without a usable identifier");
                    malformed += 1;
                }
            }
        }

        Ok(ReadOutcome { records, malformed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_converts_full_study() {
        let record = convert(json!({
            "protocolSection": {
                "identificationModule": {"nctId": "NCT100", "briefTitle": "CRISPR Trial"},
                "statusModule": {
                    "overallStatus": "RECRUITING",
                    "startDateStruct": {"date": "2021-06-15"}
                },
                "contactsLocationsModule": {
                    "locations": [
                        {"city": "Boston", "country": "United States",
                         "geoPoint": {"lat": 42.36, "lon": -71.06}},
                        {"city": "Toronto", "country": "Canada"}
                    ]
                }
            }
        }))
        .unwrap();

        assert_eq!(record.id, "NCT100");
        assert_eq!(record.title, "CRISPR Trial");
        assert_eq!(record.date_raw.as_deref(), Some("2021-06-15"));
        assert_eq!(record.status.as_deref(), Some("RECRUITING"));
        match &record.geo {
            RawGeo::Sites(sites) => {
                assert_eq!(sites.len(), 2);
                let point = sites[0].point.unwrap();
                assert!((point.lat - 42.36).abs() < 1e-9);
                assert!(sites[1].point.is_none());
            }
            other => panic!("unexpected geo: {:?}", other),
        }
    }

    #[test]
    fn test_missing_levels_default_cleanly() {
        let record = convert(json!({
            "protocolSection": {
                "identificationModule": {"nctId": "NCT101"}
            }
        }))
        .unwrap();

        assert_eq!(record.title, constants::UNKNOWN_TITLE);
        assert_eq!(record.date_raw, None);
        assert_eq!(record.status, None);
        match &record.geo {
            RawGeo::Sites(sites) => assert!(sites.is_empty()),
            other => panic!("unexpected geo: {:?}", other),
        }
    }

    #[test]
    fn test_site_without_country_gets_sentinel() {
        let record = convert(json!({
            "protocolSection": {
                "identificationModule": {"nctId": "NCT102"},
                "contactsLocationsModule": {"locations": [{"city": "Somewhere"}]}
            }
        }))
        .unwrap();

        match &record.geo {
            RawGeo::Sites(sites) => assert_eq!(sites[0].country, constants::UNKNOWN_COUNTRY),
            other => panic!("unexpected geo: {:?}", other),
        }
    }

    #[test]
    fn test_study_without_id_is_rejected() {
        assert!(convert(json!({"protocolSection": {}})).is_none());
        assert!(convert(json!({
            "protocolSection": {"identificationModule": {"nctId": "  "}}
        }))
        .is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = HierarchicalReader::new().read(Path::new("/no/such/export.json"));
        assert!(result.is_err());
    }
}
