//! # Site Parameters
//!
//! Where the sign stands: base wind speed, altitude, terrain and distances.
//!
//! ## Example JSON
//!
//! ```json
//! {
//!   "base_wind_speed": 22.1,
//!   "altitude_m": 105.0,
//!   "shore_distance_km": 100.0,
//!   "terrain": "town",
//!   "town_distance_km": 2.0
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::gazetteer::{Confidence, Gazetteer};
use crate::validation::{Constraint, Validator};

/// Terrain category of the upwind fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainCategory {
    /// Open sea or coastal strip
    Coastal,
    /// Open country
    #[default]
    Country,
    /// Town terrain (at least 2 km of town upwind)
    Town,
}

impl TerrainCategory {
    pub const ALL: [TerrainCategory; 3] = [
        TerrainCategory::Coastal,
        TerrainCategory::Country,
        TerrainCategory::Town,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TerrainCategory::Coastal => "Coastal",
            TerrainCategory::Country => "Country",
            TerrainCategory::Town => "Town",
        }
    }
}

impl fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TerrainCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coastal" | "sea" => Ok(TerrainCategory::Coastal),
            "country" | "open" => Ok(TerrainCategory::Country),
            "town" | "urban" => Ok(TerrainCategory::Town),
            _ => Err(CalcError::unknown_category("site.terrain", s)),
        }
    }
}

/// Where the base wind speed came from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WindSpeedSource {
    /// Entered by the engineer
    #[default]
    Manual,
    /// Resolved from a postcode
    Gazetteer {
        postcode: String,
        confidence: Confidence,
    },
}

/// Site description for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteParameters {
    /// Fundamental basic wind speed from the wind map, v_b,map (m/s)
    pub base_wind_speed: f64,
    /// Site altitude above sea level (m)
    pub altitude_m: f64,
    /// Distance upwind to the shoreline (km)
    pub shore_distance_km: f64,
    pub terrain: TerrainCategory,
    /// Distance inside town terrain (km); only read for town sites
    #[serde(default)]
    pub town_distance_km: f64,
    #[serde(default)]
    pub wind_speed_source: WindSpeedSource,
}

impl SiteParameters {
    /// Build site parameters with the base wind speed taken from a gazetteer.
    ///
    /// A low-confidence match is kept and reported as a warning when the
    /// calculation runs.
    pub fn from_gazetteer(
        gazetteer: &dyn Gazetteer,
        postcode: &str,
        altitude_m: f64,
        shore_distance_km: f64,
        terrain: TerrainCategory,
        town_distance_km: f64,
    ) -> Self {
        let found = gazetteer.lookup(postcode);
        SiteParameters {
            base_wind_speed: found.base_wind_speed,
            altitude_m,
            shore_distance_km,
            terrain,
            town_distance_km,
            wind_speed_source: WindSpeedSource::Gazetteer {
                postcode: postcode.to_string(),
                confidence: found.confidence,
            },
        }
    }

    /// Replace the base wind speed with a gazetteer lookup, keeping everything else
    pub fn with_gazetteer(mut self, gazetteer: &dyn Gazetteer, postcode: &str) -> Self {
        let found = gazetteer.lookup(postcode);
        self.base_wind_speed = found.base_wind_speed;
        self.wind_speed_source = WindSpeedSource::Gazetteer {
            postcode: postcode.to_string(),
            confidence: found.confidence,
        };
        self
    }

    pub fn validate(&self, v: &mut Validator<'_>) -> CalcResult<()> {
        v.check_all(
            "site.base_wind_speed",
            self.base_wind_speed,
            &[Constraint::Positive, Constraint::Typical { min: 20.0, max: 32.0 }],
        )?;
        v.check_all(
            "site.altitude_m",
            self.altitude_m,
            &[Constraint::NonNegative, Constraint::Typical { min: 0.0, max: 2000.0 }],
        )?;
        v.check("site.shore_distance_km", self.shore_distance_km, Constraint::NonNegative)?;
        if self.terrain == TerrainCategory::Town {
            v.check("site.town_distance_km", self.town_distance_km, Constraint::NonNegative)?;
        }
        Ok(())
    }
}
