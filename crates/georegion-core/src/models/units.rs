use crate::error::{GeoregionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units accepted for circle radii
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Length of one unit in meters (international mile and foot)
    pub fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1_000.0,
            DistanceUnit::Miles => 1_609.344,
            DistanceUnit::Feet => 0.3048,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoregionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(DistanceUnit::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(DistanceUnit::Kilometers)
            }
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            "ft" | "foot" | "feet" => Ok(DistanceUnit::Feet),
            other => Err(GeoregionError::ConfigInvalid {
                key: "distance_unit".to_string(),
                reason: format!("unknown unit '{}', expected m, km, mi or ft", other),
            }),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A length with its unit, as typed by a user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    pub fn to_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Parse a unit name such as "km" or "miles"
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    s.parse()
}

/// Parse a length like "5km", "250 m" or "1e3".
///
/// The unit is the trailing alphabetic suffix; a bare number is read in
/// `default_unit`.
pub fn parse_distance(s: &str, default_unit: DistanceUnit) -> Result<Distance> {
    let s = s.trim();
    let number = s.trim_end_matches(char::is_alphabetic);
    let suffix = &s[number.len()..];

    let value: f64 = number.trim().parse().map_err(|_| GeoregionError::ConfigInvalid {
        key: "distance".to_string(),
        reason: format!("'{}' does not start with a number", s),
    })?;

    let unit = if suffix.is_empty() { default_unit } else { suffix.parse()? };

    Ok(Distance::new(value, unit))
}
