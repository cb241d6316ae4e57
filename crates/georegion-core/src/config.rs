use crate::error::{GeoregionError, Result};
use crate::models::{
    parse_distance_unit, DistanceUnit, RegionQueryOptions, DEFAULT_POLYGON_SIDES,
    DEFAULT_SPHERE_RADIUS_METERS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

/// Point count at which the CLI switches to parallel evaluation
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Where a configuration value came from, lowest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::Default => "default",
            ConfigSource::File => "file",
            ConfigSource::Environment => "environment",
            ConfigSource::Cli => "cli",
        };
        f.write_str(name)
    }
}

/// A value tagged with the layer that set it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Replace the value when `source` outranks the current one.
    ///
    /// Returns whether the value changed hands.
    pub fn update(&mut self, value: T, source: ConfigSource) -> bool {
        if source <= self.source {
            return false;
        }
        self.value = value;
        self.source = source;
        true
    }
}

/// Layered configuration for GeoRegion
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub sphere_radius_meters: ConfigValue<f64>,
    pub geodesic: ConfigValue<bool>,
    pub polygon_sides: ConfigValue<u32>,
    pub distance_unit: ConfigValue<DistanceUnit>,
    pub parallel_threshold: ConfigValue<usize>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            sphere_radius_meters: ConfigValue::new(
                DEFAULT_SPHERE_RADIUS_METERS,
                ConfigSource::Default,
            ),
            geodesic: ConfigValue::new(true, ConfigSource::Default),
            polygon_sides: ConfigValue::new(DEFAULT_POLYGON_SIDES, ConfigSource::Default),
            distance_unit: ConfigValue::new(DistanceUnit::Meters, ConfigSource::Default),
            parallel_threshold: ConfigValue::new(DEFAULT_PARALLEL_THRESHOLD, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeoregionError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeoregionError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius) = file_config.sphere_radius_meters {
            validate_sphere_radius(radius)?;
            self.sphere_radius_meters.update(radius, ConfigSource::File);
        }

        if let Some(geodesic) = file_config.geodesic {
            self.geodesic.update(geodesic, ConfigSource::File);
        }

        if let Some(sides) = file_config.polygon_sides {
            validate_polygon_sides(sides)?;
            self.polygon_sides.update(sides, ConfigSource::File);
        }

        if let Some(distance_unit) = file_config.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::File);
        }

        if let Some(threshold) = file_config.parallel_threshold {
            self.parallel_threshold.update(threshold, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from `GEOREGION_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn load_from_env(mut self) -> Self {
        env_override(
            &mut self.sphere_radius_meters,
            "GEOREGION_SPHERE_RADIUS",
            "a positive number of meters",
            |s| s.trim().parse::<f64>().ok().filter(|r| validate_sphere_radius(*r).is_ok()),
        );
        env_override(&mut self.geodesic, "GEOREGION_GEODESIC", "true or false", parse_bool);
        env_override(
            &mut self.polygon_sides,
            "GEOREGION_POLYGON_SIDES",
            "an integer >= 3",
            |s| s.trim().parse::<u32>().ok().filter(|n| validate_polygon_sides(*n).is_ok()),
        );
        env_override(
            &mut self.distance_unit,
            "GEOREGION_DISTANCE_UNIT",
            "m, km, mi or ft",
            |s| parse_distance_unit(s).ok(),
        );
        env_override(
            &mut self.parallel_threshold,
            "GEOREGION_PARALLEL_THRESHOLD",
            "a point count",
            |s| s.trim().parse::<usize>().ok(),
        );
        self
    }

    /// Update configuration from CLI arguments.
    ///
    /// Values are checked like the file layer; nothing is applied if any
    /// override is rejected.
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(radius) = overrides.sphere_radius_meters {
            validate_sphere_radius(radius)?;
        }
        if let Some(sides) = overrides.polygon_sides {
            validate_polygon_sides(sides)?;
        }

        let mut applied = 0;

        if let Some(radius) = overrides.sphere_radius_meters {
            applied += usize::from(self.sphere_radius_meters.update(radius, ConfigSource::Cli));
        }

        if let Some(geodesic) = overrides.geodesic {
            applied += usize::from(self.geodesic.update(geodesic, ConfigSource::Cli));
        }

        if let Some(sides) = overrides.polygon_sides {
            applied += usize::from(self.polygon_sides.update(sides, ConfigSource::Cli));
        }

        if let Some(distance_unit) = overrides.distance_unit {
            applied += usize::from(self.distance_unit.update(distance_unit, ConfigSource::Cli));
        }

        if applied > 0 {
            tracing::debug!(applied, "Applied command-line configuration overrides");
        }

        Ok(())
    }

    /// Options for a region query built from the effective values
    pub fn to_query_options(&self) -> RegionQueryOptions {
        RegionQueryOptions::new()
            .sphere_radius(self.sphere_radius_meters.value)
            .geodesic(self.geodesic.value)
            .polygon_sides(self.polygon_sides.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "sphere_radius_meters".to_string(),
            (self.sphere_radius_meters.value.to_string(), self.sphere_radius_meters.source),
        );

        map.insert(
            "geodesic".to_string(),
            (self.geodesic.value.to_string(), self.geodesic.source),
        );

        map.insert(
            "polygon_sides".to_string(),
            (self.polygon_sides.value.to_string(), self.polygon_sides.source),
        );

        map.insert(
            "distance_unit".to_string(),
            (self.distance_unit.value.to_string(), self.distance_unit.source),
        );

        map.insert(
            "parallel_threshold".to_string(),
            (self.parallel_threshold.value.to_string(), self.parallel_threshold.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    sphere_radius_meters: Option<f64>,
    geodesic: Option<bool>,
    polygon_sides: Option<u32>,
    distance_unit: Option<DistanceUnit>,
    parallel_threshold: Option<usize>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub sphere_radius_meters: Option<f64>,
    pub geodesic: Option<bool>,
    pub polygon_sides: Option<u32>,
    pub distance_unit: Option<DistanceUnit>,
}

fn validate_sphere_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeoregionError::ConfigInvalid {
            key: "sphere_radius_meters".to_string(),
            reason: format!("Sphere radius must be a positive number of meters, found {}", radius),
        })
    }
}

fn validate_polygon_sides(sides: u32) -> Result<()> {
    if sides >= 3 {
        Ok(())
    } else {
        Err(GeoregionError::ConfigInvalid {
            key: "polygon_sides".to_string(),
            reason: format!("A polygon needs at least 3 sides, found {}", sides),
        })
    }
}

/// Apply one environment variable to `target` when it is set and parses
fn env_override<T>(
    target: &mut ConfigValue<T>,
    var: &str,
    expected: &str,
    parse: impl Fn(&str) -> Option<T>,
) {
    let Ok(raw) = env::var(var) else {
        return;
    };

    match parse(&raw) {
        Some(value) => {
            target.update(value, ConfigSource::Environment);
        }
        None => tracing::warn!("Invalid {} value '{}': expected {}", var, raw, expected),
    }
}

/// Parse a boolean flag from an environment-style string
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.sphere_radius_meters.value, 6_371_000.0);
        assert_eq!(config.sphere_radius_meters.source, ConfigSource::Default);
        assert!(config.geodesic.value);
        assert_eq!(config.polygon_sides.value, 128);
        assert_eq!(config.distance_unit.value, DistanceUnit::Meters);
        assert_eq!(config.parallel_threshold.value, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_sources_are_ordered_by_precedence() {
        let layers = [ConfigSource::Default, ConfigSource::File, ConfigSource::Environment, ConfigSource::Cli];
        assert!(layers.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ConfigSource::Environment.to_string(), "environment");
    }

    #[test]
    fn test_higher_layer_wins_regardless_of_order() {
        let mut radius = ConfigValue::new(6_371_000.0, ConfigSource::Default);

        assert!(radius.update(6_378_137.0, ConfigSource::Cli));
        // Applied after the CLI layer, but ranked below it
        assert!(!radius.update(6_000_000.0, ConfigSource::Environment));
        assert!(!radius.update(5_000_000.0, ConfigSource::Cli));

        assert_eq!(radius.value, 6_378_137.0);
        assert_eq!(radius.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
sphere_radius_meters = 6378137.0
geodesic = false
polygon_sides = 64
distance_unit = "Kilometers"
parallel_threshold = 500
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.sphere_radius_meters.value, 6_378_137.0);
        assert_eq!(config.sphere_radius_meters.source, ConfigSource::File);
        assert!(!config.geodesic.value);
        assert_eq!(config.polygon_sides.value, 64);
        assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
        assert_eq!(config.parallel_threshold.value, 500);
    }

    #[test]
    fn test_file_rejects_bad_sphere_radius() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sphere_radius_meters = -1.0").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, GeoregionError::ConfigInvalid { ref key, .. } if key == "sphere_radius_meters"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            sphere_radius_meters: Some(6_378_137.0),
            geodesic: Some(false),
            polygon_sides: None,
            distance_unit: None,
        };

        config.update_from_cli(overrides).unwrap();

        assert_eq!(config.sphere_radius_meters.value, 6_378_137.0);
        assert_eq!(config.sphere_radius_meters.source, ConfigSource::Cli);
        assert!(!config.geodesic.value);
        // These should still be defaults
        assert_eq!(config.polygon_sides.source, ConfigSource::Default);
        assert_eq!(config.distance_unit.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides_are_validated() {
        let mut config = LayeredConfig::with_defaults();

        let err = config
            .update_from_cli(CliConfigOverrides {
                sphere_radius_meters: Some(-5.0),
                geodesic: Some(false),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, GeoregionError::ConfigInvalid { ref key, .. } if key == "sphere_radius_meters"));

        let err = config
            .update_from_cli(CliConfigOverrides { polygon_sides: Some(2), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, GeoregionError::ConfigInvalid { ref key, .. } if key == "polygon_sides"));

        // Rejected overrides leave every value on its previous layer
        assert_eq!(config.sphere_radius_meters.value, 6_371_000.0);
        assert_eq!(config.sphere_radius_meters.source, ConfigSource::Default);
        assert!(config.geodesic.value);
        assert_eq!(config.polygon_sides.source, ConfigSource::Default);
    }

    #[test]
    fn test_to_query_options() {
        let options = LayeredConfig::with_defaults().to_query_options();
        assert_eq!(options.sphere_radius_meters, Some(6_371_000.0));
        assert!(options.is_geodesic());
        assert_eq!(options.sides(), 128);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert_eq!(map.len(), 5);
        assert!(map.contains_key("geodesic"));
        assert!(map.contains_key("polygon_sides"));

        let (radius_value, radius_source) = &map["sphere_radius_meters"];
        assert_eq!(radius_value, "6371000");
        assert_eq!(*radius_source, ConfigSource::Default);
    }
}
