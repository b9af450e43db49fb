/// Source tag wire names and record sentinels shared across the pipeline.
/// The wire names are what downstream visualizations key on, so they must
/// stay stable across releases.

// Source tags as they appear in the fused output
pub const TABULAR_SOURCE: &str = "CSV";
pub const HIERARCHICAL_SOURCE: &str = "JSON";
pub const REGULATORY_SOURCE: &str = "Regulations";

// Sentinels for fields a source did not supply
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const UNKNOWN_PHASE: &str = "N/A";
pub const UNKNOWN_COUNTRY: &str = "Unknown";
pub const UNKNOWN_TITLE: &str = "Unknown Study";

// Fixed values carried by synthetic coverage markers
pub const SYNTHETIC_STATUS: &str = "Active";
pub const SYNTHETIC_PHASE: &str = "Research";

// Synthetic ids start with this prefix so they can never collide with
// registry identifiers (NCT...)
pub const SYNTHETIC_ID_PREFIX: &str = "REG-";

// Composite location strings separate sites with this delimiter
pub const MULTI_SITE_DELIMITER: char = '|';

// Default input/output locations, overridable via config or CLI
pub const DEFAULT_TABULAR_PATH: &str = "data/raw/ctg-studies.csv";
pub const DEFAULT_HIERARCHICAL_PATH: &str = "data/raw/ctg-studies.json";
pub const DEFAULT_REGULATORY_PATH: &str = "data/raw/regulations.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/temporal_map.json";
pub const DEFAULT_CONFIG_PATH: &str = "atlas.toml";
