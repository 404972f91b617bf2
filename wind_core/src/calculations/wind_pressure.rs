//! # Wind Pressure Stage
//!
//! Shared by every mounting variant. Converts the site description and the
//! height to the top of the sign into a peak velocity pressure using the UK
//! National Annex simplified procedure (SCI P394 stages 1 to 7):
//!
//! ```text
//! v_b  = v_b,map × c_alt × c_dir × c_season
//! q_p  = ½ρ × v_b² × c_e(z, shore) × c_e,T(town)
//! ```
//!
//! The general EN 1991-1-4 method (`c_r`, `I_v`) is evaluated alongside for
//! information only; it never replaces the simplified value.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::calculations::wind_pressure;
//! use wind_core::site::{SiteParameters, TerrainCategory};
//! use wind_core::{EngineSettings, WarningLog};
//!
//! let site = SiteParameters {
//!     base_wind_speed: 22.0,
//!     altitude_m: 10.0,
//!     shore_distance_km: 5.0,
//!     terrain: TerrainCategory::Country,
//!     town_distance_km: 0.0,
//!     wind_speed_source: Default::default(),
//! };
//! let mut log = WarningLog::new();
//! let wind = wind_pressure::calculate(&site, 5.0, &EngineSettings::default(), &mut log);
//!
//! assert!((wind.altitude_factor - 1.01).abs() < 1e-12);
//! assert!((wind.peak_velocity_pressure_pa - 599.3).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::gazetteer::Confidence;
use crate::references::{en1991, p394};
use crate::result::NamedFactor;
use crate::settings::EngineSettings;
use crate::site::{SiteParameters, TerrainCategory, WindSpeedSource};
use crate::tables::{exposure_factor, roughness_parameters, town_correction_factor};
use crate::warnings::{Stage, WarningKind, WarningLog};

/// Directional factor c_dir: all directions treated as the worst
pub const DIRECTIONAL_FACTOR: f64 = 1.0;

/// Seasonal factor c_season for a permanent structure
pub const SEASONAL_FACTOR: f64 = 1.0;

/// Orography factor c_o: flat terrain assumed
pub const OROGRAPHY_FACTOR: f64 = 1.0;

/// Height above which the National Annex allows a reduced altitude factor (m)
const ALTITUDE_REDUCTION_HEIGHT: f64 = 10.0;

/// Peak velocity pressure by the general method, reported for comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralMethodCheck {
    /// EN 1991-1-4 terrain category ("0", "II", "III")
    pub terrain_category: String,
    /// Roughness length z0 (m)
    pub roughness_length_m: f64,
    /// Roughness factor c_r(z)
    pub roughness_factor: f64,
    /// Turbulence intensity I_v(z)
    pub turbulence_intensity: f64,
    /// q_p = ½ρ (c_r v_b)² (1 + 7 I_v) (Pa)
    pub peak_velocity_pressure_pa: f64,
}

/// Output of the wind pressure stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindPressure {
    /// Height to the top of the sign as entered (m)
    pub mounting_height_m: f64,
    /// Reference height z used for lookups, never below z_min (m)
    pub reference_height_m: f64,
    /// Displacement height h_dis (m)
    pub displacement_height_m: f64,
    /// Fundamental basic wind speed v_b,map (m/s)
    pub map_wind_speed: f64,
    /// c_alt = 1 + 0.001 A
    pub altitude_factor: f64,
    pub directional_factor: f64,
    pub seasonal_factor: f64,
    pub orography_factor: f64,
    /// Basic wind speed v_b (m/s)
    pub basic_wind_speed: f64,
    /// c_e from the terrain curves
    pub exposure_factor: f64,
    /// c_e,T, exactly 1.0 outside town terrain
    pub town_correction_factor: f64,
    /// c_e × c_e,T
    pub combined_exposure_factor: f64,
    /// ½ρ (kg/m³)
    pub pressure_constant: f64,
    /// Basic velocity pressure q_b = ½ρ v_b² (Pa)
    pub basic_velocity_pressure_pa: f64,
    /// Peak velocity pressure q_p (Pa)
    pub peak_velocity_pressure_pa: f64,
    pub general_method: GeneralMethodCheck,
}

impl WindPressure {
    /// Named factors in the order they are applied
    pub fn factors(&self) -> Vec<NamedFactor> {
        let s = Stage::WindPressure;
        vec![
            NamedFactor::new("Map wind speed", "v_b,map", self.map_wind_speed, "m/s", s, p394::WIND_MAP),
            NamedFactor::new("Altitude factor", "c_alt", self.altitude_factor, "", s, p394::ALTITUDE),
            NamedFactor::new("Directional factor", "c_dir", self.directional_factor, "", s, p394::DIRECTION_SEASON),
            NamedFactor::new("Seasonal factor", "c_season", self.seasonal_factor, "", s, p394::DIRECTION_SEASON),
            NamedFactor::new("Orography factor", "c_o", self.orography_factor, "", s, en1991::OROGRAPHY),
            NamedFactor::new("Basic wind speed", "v_b", self.basic_wind_speed, "m/s", s, p394::TERRAIN),
            NamedFactor::new("Reference height", "z", self.reference_height_m, "m", s, p394::REFERENCE_HEIGHT),
            NamedFactor::new("Displacement height", "h_dis", self.displacement_height_m, "m", s, p394::REFERENCE_HEIGHT),
            NamedFactor::new("Exposure factor", "c_e", self.exposure_factor, "", s, p394::EXPOSURE),
            NamedFactor::new("Town terrain correction", "c_e,T", self.town_correction_factor, "", s, p394::TOWN_CORRECTION),
            NamedFactor::new("Basic velocity pressure", "q_b", self.basic_velocity_pressure_pa, "Pa", s, p394::PEAK_PRESSURE),
            NamedFactor::new("Peak velocity pressure", "q_p", self.peak_velocity_pressure_pa, "Pa", s, p394::PEAK_PRESSURE),
            NamedFactor::new("Roughness factor", "c_r", self.general_method.roughness_factor, "", s, en1991::ROUGHNESS_FACTOR),
            NamedFactor::new("Turbulence intensity", "I_v", self.general_method.turbulence_intensity, "", s, en1991::TURBULENCE),
            NamedFactor::new(
                "Peak velocity pressure (general method)",
                "q_p,gen",
                self.general_method.peak_velocity_pressure_pa,
                "Pa",
                s,
                en1991::PEAK_PRESSURE_GENERAL,
            ),
        ]
    }
}

/// Altitude factor c_alt = 1 + 0.001 A
#[inline]
pub fn altitude_factor(altitude_m: f64) -> f64 {
    1.0 + 0.001 * altitude_m
}

/// Run the wind pressure stage for a sign whose top is `mounting_height_m` above ground.
///
/// Inputs are assumed validated. Every conservative substitution and table
/// clamp is appended to `log` under [`Stage::WindPressure`].
pub fn calculate(
    site: &SiteParameters,
    mounting_height_m: f64,
    settings: &EngineSettings,
    log: &mut WarningLog,
) -> WindPressure {
    let stage = Stage::WindPressure;

    if let WindSpeedSource::Gazetteer {
        postcode,
        confidence: Confidence::Low,
    } = &site.wind_speed_source
    {
        log.warn(
            WarningKind::LowConfidence,
            stage,
            format!(
                "Postcode '{}' not matched to a wind map region; using {:.1} m/s. Confirm against the wind map",
                postcode, site.base_wind_speed
            ),
        );
    }

    // Reference height, floored at z_min
    let roughness = roughness_parameters(site.terrain);
    let reference_height_m = if mounting_height_m < roughness.minimum_height_m {
        log.warn(
            WarningKind::ConservativeAssumption,
            stage,
            format!(
                "Reference height raised from {:.2} m to z_min = {:.1} m for terrain category {}",
                mounting_height_m, roughness.minimum_height_m, roughness.category
            ),
        );
        roughness.minimum_height_m
    } else {
        mounting_height_m
    };

    let displacement_height_m = 0.0;
    if site.terrain == TerrainCategory::Town {
        log.warn(
            WarningKind::ConservativeAssumption,
            stage,
            "Displacement height h_dis taken as 0 (surrounding building heights not considered)",
        );
    }

    // Basic wind speed
    let altitude = altitude_factor(site.altitude_m);
    if site.altitude_m > 0.0 && reference_height_m > ALTITUDE_REDUCTION_HEIGHT {
        log.warn(
            WarningKind::ConservativeAssumption,
            stage,
            format!(
                "Altitude factor not reduced for reference height {:.1} m above {:.0} m",
                reference_height_m, ALTITUDE_REDUCTION_HEIGHT
            ),
        );
    }
    log.warn(
        WarningKind::ConservativeAssumption,
        stage,
        "Directional factor c_dir = 1.0 (all wind directions treated as critical)",
    );
    log.warn(
        WarningKind::ConservativeAssumption,
        stage,
        "Orography factor c_o = 1.0 (site assumed clear of hills, cliffs and escarpments)",
    );
    let basic_wind_speed = site.base_wind_speed * altitude * DIRECTIONAL_FACTOR * SEASONAL_FACTOR;

    // Exposure
    let exposure = exposure_factor(site.terrain, reference_height_m, site.shore_distance_km)
        .resolve(log, stage);
    let town_correction =
        town_correction_factor(site.terrain, site.town_distance_km).resolve(log, stage);
    let combined = exposure * town_correction;

    let k = settings.pressure_constant();
    let basic_velocity_pressure_pa = k * basic_wind_speed.powi(2);
    let peak_velocity_pressure_pa = basic_velocity_pressure_pa * combined;

    let c_r = roughness.roughness_factor(reference_height_m);
    let i_v = roughness.turbulence_intensity(reference_height_m);
    let general_method = GeneralMethodCheck {
        terrain_category: roughness.category.to_string(),
        roughness_length_m: roughness.roughness_length_m,
        roughness_factor: c_r,
        turbulence_intensity: i_v,
        peak_velocity_pressure_pa: k * (c_r * basic_wind_speed).powi(2) * (1.0 + 7.0 * i_v),
    };

    tracing::debug!(
        z = reference_height_m,
        v_b = basic_wind_speed,
        c_e = exposure,
        c_et = town_correction,
        q_p = peak_velocity_pressure_pa,
        q_p_general = general_method.peak_velocity_pressure_pa,
        "wind pressure stage"
    );

    WindPressure {
        mounting_height_m,
        reference_height_m,
        displacement_height_m,
        map_wind_speed: site.base_wind_speed,
        altitude_factor: altitude,
        directional_factor: DIRECTIONAL_FACTOR,
        seasonal_factor: SEASONAL_FACTOR,
        orography_factor: OROGRAPHY_FACTOR,
        basic_wind_speed,
        exposure_factor: exposure,
        town_correction_factor: town_correction,
        combined_exposure_factor: combined,
        pressure_constant: k,
        basic_velocity_pressure_pa,
        peak_velocity_pressure_pa,
        general_method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country_site() -> SiteParameters {
        SiteParameters {
            base_wind_speed: 22.0,
            altitude_m: 10.0,
            shore_distance_km: 5.0,
            terrain: TerrainCategory::Country,
            town_distance_km: 0.0,
            wind_speed_source: WindSpeedSource::Manual,
        }
    }

    fn sheffield_site() -> SiteParameters {
        SiteParameters {
            base_wind_speed: 22.1,
            altitude_m: 105.0,
            shore_distance_km: 100.0,
            terrain: TerrainCategory::Town,
            town_distance_km: 2.0,
            wind_speed_source: WindSpeedSource::Manual,
        }
    }

    #[test]
    fn test_altitude_factor() {
        assert_eq!(altitude_factor(0.0), 1.0);
        assert!((altitude_factor(105.0) - 1.105).abs() < 1e-12);
    }

    #[test]
    fn test_small_country_sign() {
        let mut log = WarningLog::new();
        let wind = calculate(&country_site(), 5.0, &EngineSettings::default(), &mut log);

        // v_b = 22.0 × 1.01 = 22.22 m/s
        assert!((wind.basic_wind_speed - 22.22).abs() < 1e-9);
        assert!((wind.exposure_factor - 1.98).abs() < 0.01);
        assert_eq!(wind.town_correction_factor, 1.0);
        // q_p = 0.613 × 22.22² × 1.98 ≈ 599 Pa
        assert!((wind.peak_velocity_pressure_pa - 599.3).abs() < 1.0);
        assert_eq!(log.count(WarningKind::BoundaryClamped), 0);
    }

    #[test]
    fn test_sheffield_town_site() {
        let mut log = WarningLog::new();
        let wind = calculate(&sheffield_site(), 27.0, &EngineSettings::default(), &mut log);

        assert!((wind.altitude_factor - 1.105).abs() < 1e-12);
        assert!((wind.combined_exposure_factor - 2.89).abs() / 2.89 < 0.02);
        assert!(wind.peak_velocity_pressure_pa > 1038.0 && wind.peak_velocity_pressure_pa < 1058.0);
        assert!(log.iter().any(|w| w.message.contains("Altitude factor not reduced")));
        assert!(log.iter().any(|w| w.message.contains("Displacement height")));
    }

    #[test]
    fn test_reference_height_floor() {
        let mut site = sheffield_site();
        site.altitude_m = 0.0;
        let mut log = WarningLog::new();
        let wind = calculate(&site, 3.0, &EngineSettings::default(), &mut log);
        assert_eq!(wind.reference_height_m, 5.0);
        assert_eq!(wind.mounting_height_m, 3.0);
        assert!(log.iter().any(|w| w.message.contains("z_min")));
    }

    #[test]
    fn test_standing_warnings_come_first_from_this_stage() {
        let mut log = WarningLog::new();
        calculate(&country_site(), 5.0, &EngineSettings::default(), &mut log);
        assert!(log.iter().all(|w| w.stage == Stage::WindPressure));
        assert!(log.iter().any(|w| w.message.starts_with("Directional factor")));
    }

    #[test]
    fn test_low_confidence_gazetteer() {
        let mut site = country_site();
        site.wind_speed_source = WindSpeedSource::Gazetteer {
            postcode: "XX1 1XX".to_string(),
            confidence: Confidence::Low,
        };
        let mut log = WarningLog::new();
        calculate(&site, 5.0, &EngineSettings::default(), &mut log);
        assert_eq!(log.count(WarningKind::LowConfidence), 1);
    }

    #[test]
    fn test_general_method_is_informational() {
        let mut log = WarningLog::new();
        let wind = calculate(&country_site(), 10.0, &EngineSettings::default(), &mut log);
        // Category II at 10 m: c_r = 0.19 ln(200) ≈ 1.007
        assert!((wind.general_method.roughness_factor - 1.0067).abs() < 1e-3);
        assert!(wind.general_method.peak_velocity_pressure_pa > 0.0);
        assert_ne!(wind.general_method.peak_velocity_pressure_pa, wind.peak_velocity_pressure_pa);
    }

    #[test]
    fn test_factor_list_order() {
        let mut log = WarningLog::new();
        let wind = calculate(&country_site(), 5.0, &EngineSettings::default(), &mut log);
        let factors = wind.factors();
        assert_eq!(factors[0].symbol, "v_b,map");
        assert_eq!(factors[1].symbol, "c_alt");
        assert!(factors.iter().any(|f| f.symbol == "q_p"));
    }
}
