use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::error::{AtlasError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub title_max_chars: usize,
    pub sources: SourcesConfig,
    pub years: YearsConfig,
    pub augment: AugmentConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub tabular: String,
    pub hierarchical: String,
    pub regulatory: String,
}

/// Accepted year range for trial-level records, inclusive on both ends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YearsConfig {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub min_year: i32,
    pub max_year: i32,
    /// Maximum jitter applied to synthetic markers, in degrees.
    pub jitter_degrees: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub pretty: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            title_max_chars: 100,
            sources: SourcesConfig::default(),
            years: YearsConfig::default(),
            augment: AugmentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            tabular: constants::DEFAULT_TABULAR_PATH.to_string(),
            hierarchical: constants::DEFAULT_HIERARCHICAL_PATH.to_string(),
            regulatory: constants::DEFAULT_REGULATORY_PATH.to_string(),
        }
    }
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self { min: 2010, max: 2025 }
    }
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            min_year: 2015,
            max_year: 2025,
            jitter_degrees: 5.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: constants::DEFAULT_OUTPUT_PATH.to_string(),
            pretty: true,
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            AtlasError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: PipelineConfig = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load from an explicitly given path (missing file is a hard error),
    /// or from the default path, falling back to built-in defaults when
    /// no config file exists.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.years.min, 2010);
        assert_eq!(config.years.max, 2025);
        assert_eq!(config.augment.min_year, 2015);
        assert_eq!(config.augment.max_year, 2025);
        assert_eq!(config.augment.jitter_degrees, 5.0);
        assert_eq!(config.title_max_chars, 100);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            [years]
            min = 2015

            [output]
            path = "out/fused.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.years.min, 2015);
        assert_eq!(config.years.max, 2025);
        assert_eq!(config.output.path, "out/fused.json");
        assert_eq!(config.sources.tabular, constants::DEFAULT_TABULAR_PATH);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let result = PipelineConfig::load_or_default(Some(Path::new("/no/such/atlas.toml")));
        assert!(matches!(result, Err(AtlasError::Config(_))));
    }
}
