//! # Engine Configuration
//!
//! `EngineConfig` gathers every tunable the engine consults during validation
//! and generation: resource-limit ceilings, default numeric ranges, the default
//! null probability, and an optional RNG seed for deterministic tests. All
//! defaults live here rather than scattered through the generators, so a single
//! value threaded through `Engine::new` controls the whole run.
//!
//! An optional `mocksmith.toml` file can override the ceilings and generation
//! defaults:
//!
//! ```toml
//! [limits]
//! max_fields = 500
//! max_projected_items = 50000
//!
//! [generate]
//! count = 250
//! nullable_rate = 0.05
//! seed = 42
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{MocksmithError, Result};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "mocksmith.toml";

/// Ceiling on total (recursively counted) schema fields.
pub const DEFAULT_MAX_FIELDS: usize = 200;
/// Ceiling on projected generated items across the whole request.
pub const DEFAULT_MAX_PROJECTED_ITEMS: usize = 10_000;
/// Null probability applied when a field is nullable but gives no rate.
pub const DEFAULT_NULLABLE_RATE: f64 = 0.1;
/// Items produced by an `array` descriptor that omits `count`.
pub const DEFAULT_ARRAY_COUNT: usize = 3;

/// Everything the engine needs to know that is not part of the schema itself.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Reject schemas whose recursive field count exceeds this.
    pub max_fields: usize,
    /// Reject requests whose projected item count exceeds this.
    pub max_projected_items: usize,
    /// Null probability for nullable fields without an explicit `nullableRate`.
    pub default_nullable_rate: f64,
    /// Element count for `array` descriptors without an explicit `count`.
    pub default_array_count: usize,
    /// Default `int` range when `min`/`max` are omitted.
    pub default_int_min: i64,
    pub default_int_max: i64,
    /// Default `float` range and rounding when omitted.
    pub default_float_min: f64,
    pub default_float_max: f64,
    pub default_float_precision: u32,
    /// Default word count range for `string` with `kind = "word"`.
    pub default_word_min: usize,
    pub default_word_max: usize,
    /// Default paragraph count for `string` with `kind = "paragraph"`.
    pub default_paragraphs: usize,
    /// Fixed RNG seed. `None` (the default) draws fresh OS entropy per call;
    /// tests set this to make every generated value reproducible.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            max_projected_items: DEFAULT_MAX_PROJECTED_ITEMS,
            default_nullable_rate: DEFAULT_NULLABLE_RATE,
            default_array_count: DEFAULT_ARRAY_COUNT,
            default_int_min: 0,
            default_int_max: 10_000,
            default_float_min: 0.0,
            default_float_max: 10_000.0,
            default_float_precision: 2,
            default_word_min: 1,
            default_word_max: 3,
            default_paragraphs: 3,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Config with a fixed seed, for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Top-level mocksmith.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MocksmithConfig {
    /// Resource-limit ceiling overrides.
    pub limits: LimitsConfig,
    /// Default generation settings.
    pub generate: GenerateConfig,
}

/// `[limits]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_fields: Option<usize>,
    pub max_projected_items: Option<usize>,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Default number of records when the caller gives no count.
    pub count: Option<usize>,
    /// Default null probability for nullable fields without a rate.
    pub nullable_rate: Option<f64>,
    /// Fixed random seed for reproducible output.
    pub seed: Option<u64>,
}

/// Read and parse a mocksmith.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<MocksmithConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| MocksmithError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: MocksmithConfig =
        toml::from_str(&content).map_err(|e| MocksmithError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;

    // Validate semantic constraints that serde can't enforce.
    config.validate()?;

    Ok(Some(config))
}

impl MocksmithConfig {
    /// Validate semantic constraints that serde cannot enforce.
    ///
    /// Call this immediately after parsing, so configuration mistakes surface
    /// before any schema is accepted under the wrong ceilings.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_fields) = self.limits.max_fields {
            if max_fields == 0 {
                return Err(MocksmithError::Config {
                    message: "limits.max_fields must be at least 1".to_string(),
                });
            }
        }
        if let Some(max_items) = self.limits.max_projected_items {
            if max_items == 0 {
                return Err(MocksmithError::Config {
                    message: "limits.max_projected_items must be at least 1".to_string(),
                });
            }
        }
        if let Some(rate) = self.generate.nullable_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(MocksmithError::Config {
                    message: format!(
                        "generate.nullable_rate must be between 0.0 and 1.0, got {}",
                        rate
                    ),
                });
            }
        }
        Ok(())
    }

    /// Fold the file overrides into an `EngineConfig`.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(max_fields) = self.limits.max_fields {
            config.max_fields = max_fields;
        }
        if let Some(max_items) = self.limits.max_projected_items {
            config.max_projected_items = max_items;
        }
        if let Some(rate) = self.generate.nullable_rate {
            config.default_nullable_rate = rate;
        }
        config.seed = self.generate.seed;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[limits]
max_fields = 500
max_projected_items = 50000

[generate]
count = 250
nullable_rate = 0.05
seed = 42
"#;

        let config: MocksmithConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.limits.max_fields, Some(500));
        assert_eq!(config.limits.max_projected_items, Some(50000));
        assert_eq!(config.generate.count, Some(250));
        assert_eq!(config.generate.nullable_rate, Some(0.05));
        assert_eq!(config.generate.seed, Some(42));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: MocksmithConfig = toml::from_str("").unwrap();
        assert!(config.limits.max_fields.is_none());
        assert!(config.generate.count.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_applies_overrides() {
        let toml = r#"
[limits]
max_fields = 50

[generate]
nullable_rate = 0.5
seed = 7
"#;
        let config: MocksmithConfig = toml::from_str(toml).unwrap();
        let engine = config.engine_config();

        assert_eq!(engine.max_fields, 50);
        assert_eq!(engine.max_projected_items, DEFAULT_MAX_PROJECTED_ITEMS);
        assert_eq!(engine.default_nullable_rate, 0.5);
        assert_eq!(engine.seed, Some(7));
    }

    #[test]
    fn test_validate_zero_ceiling_fails() {
        let toml = r#"
[limits]
max_fields = 0
"#;
        let config: MocksmithConfig = toml::from_str(toml).unwrap();
        let err = config.validate();
        assert!(err.is_err());
        let msg = format!("{}", err.unwrap_err());
        assert!(msg.contains("max_fields"), "should name the key: {}", msg);
    }

    #[test]
    fn test_validate_nullable_rate_out_of_range_fails() {
        let toml = r#"
[generate]
nullable_rate = 1.5
"#;
        let config: MocksmithConfig = toml::from_str(toml).unwrap();
        let err = config.validate();
        assert!(err.is_err());
        let msg = format!("{}", err.unwrap_err());
        assert!(msg.contains("1.5"), "should include the bad value: {}", msg);
    }

    #[test]
    fn test_read_config_nonexistent() {
        let result = read_config(Path::new("/nonexistent/dir"));
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_read_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[generate]
count = 25
"#,
        )
        .unwrap();

        let config = read_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.generate.count, Some(25));
    }

    #[test]
    fn test_read_config_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "this is not valid [[[toml").unwrap();

        let result = read_config(dir.path());
        assert!(result.is_err());
    }
}
