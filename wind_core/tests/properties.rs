//! Property tests over the factor tables and the wind pressure stage.

use proptest::prelude::*;
use wind_core::calculations::wind_pressure;
use wind_core::equations::quadratic_interaction;
use wind_core::tables::{exposure_factor, size_factor};
use wind_core::{EngineSettings, SiteParameters, TerrainCategory, WarningLog};

fn terrain() -> impl Strategy<Value = TerrainCategory> {
    prop::sample::select(TerrainCategory::ALL.to_vec())
}

fn site(terrain: TerrainCategory, shore_distance_km: f64) -> SiteParameters {
    SiteParameters {
        base_wind_speed: 22.0,
        altitude_m: 50.0,
        shore_distance_km,
        terrain,
        town_distance_km: 3.0,
        wind_speed_source: Default::default(),
    }
}

proptest! {
    #[test]
    fn exposure_never_decreases_with_height(
        terrain in terrain(),
        shore in 0.1f64..100.0,
        z in 1.0f64..200.0,
        dz in 0.0f64..50.0,
    ) {
        let lower = exposure_factor(terrain, z, shore).value;
        let upper = exposure_factor(terrain, z + dz, shore).value;
        prop_assert!(upper >= lower - 1e-12, "c_e({}) = {} > c_e({}) = {}", z, lower, z + dz, upper);
    }

    #[test]
    fn peak_pressure_never_decreases_with_height(
        terrain in terrain(),
        shore in 0.1f64..100.0,
        z in 1.0f64..150.0,
        dz in 0.0f64..50.0,
    ) {
        let settings = EngineSettings::default();
        let s = site(terrain, shore);
        let lower = wind_pressure::calculate(&s, z, &settings, &mut WarningLog::new());
        let upper = wind_pressure::calculate(&s, z + dz, &settings, &mut WarningLog::new());
        prop_assert!(upper.peak_velocity_pressure_pa >= lower.peak_velocity_pressure_pa - 1e-9);
    }

    #[test]
    fn exposure_stays_within_table_bounds(
        terrain in terrain(),
        shore in 0.0f64..500.0,
        z in 0.0f64..400.0,
    ) {
        let c_e = exposure_factor(terrain, z, shore).value;
        prop_assert!((1.22..=3.33).contains(&c_e));
    }

    #[test]
    fn size_factor_never_amplifies(
        terrain in terrain(),
        z in 1.0f64..200.0,
        b_plus_h in 1.0f64..300.0,
    ) {
        let c_s = size_factor(terrain, z, b_plus_h).value;
        prop_assert!(c_s > 0.7 && c_s <= 1.0);
    }

    #[test]
    fn quadratic_interaction_within_linear_sum(
        t in 0.0f64..20.0,
        v in 0.0f64..20.0,
    ) {
        let eta = quadratic_interaction(t, 10.0, v, 10.0);
        prop_assert!(eta <= t / 10.0 + v / 10.0 + 1e-12);
        prop_assert!(eta >= (t / 10.0).max(v / 10.0) - 1e-12);
    }
}
