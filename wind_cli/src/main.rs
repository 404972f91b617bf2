//! # Signage Wind Loading CLI
//!
//! Runs one calculation from a JSON request and prints a boxed summary
//! followed by the full result as JSON.
//!
//! ```text
//! wind_cli --input sign.json [--settings engine.toml] [--postcode SW1A 1AA]
//! wind_cli --demo
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wind_core::{
    calculate_with_settings, CalcError, CalcResult, CalculationInput, CalculationResult,
    EngineSettings, RegionalGazetteer, TerrainCategory,
};

/// Small fascia sign used by `--demo`
const DEMO_INPUT: &str = r#"{
    "site": {
        "base_wind_speed": 22.0,
        "altitude_m": 10.0,
        "shore_distance_km": 5.0,
        "terrain": "country"
    },
    "geometry": {
        "width_m": 4.0,
        "height_m": 1.5,
        "depth_m": 0.3,
        "mounting_height_m": 5.0
    },
    "mounting": {"type": "WallMounted"}
}"#;

#[derive(Debug, Parser)]
#[command(name = "wind_cli", version, about = "Wind loading on wall-mounted, projecting and post-mounted signs")]
struct Args {
    /// Calculation request (JSON)
    #[arg(short, long, required_unless_present = "demo")]
    input: Option<PathBuf>,

    /// Engine settings overrides (TOML)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Resolve the base wind speed from a UK postcode
    #[arg(long)]
    postcode: Option<String>,

    /// Override the terrain category (coastal, country, town)
    #[arg(long)]
    terrain: Option<String>,

    /// Print only the JSON result
    #[arg(long)]
    json: bool,

    /// Debug logging from the engine
    #[arg(short, long)]
    verbose: bool,

    /// Run the built-in demonstration sign
    #[arg(long, conflicts_with = "input")]
    demo: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "wind_core=debug,wind_cli=debug" } else { "wind_core=info,wind_cli=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(result) => {
            if !args.json {
                print_summary(&result);
                println!();
                println!("JSON Output (for LLM/API use):");
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!(error = %e, "could not serialize result"),
            }
            if result.passes() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> CalcResult<CalculationResult> {
    let json = match &args.input {
        Some(path) => read_file("--input", path)?,
        None => DEMO_INPUT.to_string(),
    };
    let mut input = CalculationInput::from_json(&json)?;

    if let Some(terrain) = &args.terrain {
        input.site.terrain = terrain.parse::<TerrainCategory>()?;
    }
    if let Some(postcode) = &args.postcode {
        input.site = input.site.with_gazetteer(&RegionalGazetteer, postcode);
        tracing::info!(postcode = %postcode, v_b_map = input.site.base_wind_speed, "base wind speed from postcode");
    }

    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => EngineSettings::default(),
    };

    tracing::info!(mounting = %input.mounting.mounting_type().display_name(), "running calculation");
    calculate_with_settings(&input, &settings)
}

fn read_file(flag: &str, path: &Path) -> CalcResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input(flag, path.display().to_string(), e.to_string()))
}

fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let text = read_file("--settings", path)?;
    toml::from_str(&text).map_err(|e| CalcError::serialization(e.to_string()))
}

fn print_summary(result: &CalculationResult) {
    let g = &result.inputs.geometry;
    let site = &result.inputs.site;

    println!("═══════════════════════════════════════");
    println!("  SIGN WIND LOADING RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Mounting: {}", result.mounting_type.display_name());
    println!("  Sign:     {:.2} m x {:.2} m, depth {:.2} m", g.width_m, g.height_m, g.depth_m);
    println!("  Height:   {:.2} m to top, {:.2} m clear below", g.mounting_height_m, g.clearance());
    println!(
        "  Site:     v_b,map = {:.1} m/s, A = {:.0} m, {:.1} km to shore, {}",
        site.base_wind_speed, site.altitude_m, site.shore_distance_km, site.terrain
    );
    println!();
    println!("Factors:");
    for f in &result.factors {
        println!("  {:<10} = {:>10.3} {:<6} {}", f.symbol, f.value, f.unit, f.reference);
    }
    println!();
    println!("Actions:");
    println!("  q_p   = {:.0} Pa", result.peak_pressure_pa);
    println!("  F_w   = {:.2} kN (design {:.2} kN)", result.characteristic_force_kn, result.design_force_kn);
    println!("  G_k   = {:.2} kN", result.self_weight_kn);
    if let (Some(m), Some(m_ed)) = (result.overturning_moment_knm, result.design_overturning_moment_knm) {
        println!("  M_ot  = {:.2} kNm (design {:.2} kNm)", m, m_ed);
    }
    println!();
    println!("Checks:");
    for check in &result.checks {
        println!(
            "  {:<20} {:.2} ({:.2}/{:.2} {}) {}",
            check.element,
            check.utilization,
            check.demand,
            check.capacity,
            check.unit,
            status_icon(check.passes())
        );
    }
    if let Some(panel) = &result.panel {
        println!();
        println!("Face panel:");
        println!("  Max channel spacing: {:.0} mm ({} channels)", panel.max_spacing_mm, panel.channels_at_max_spacing);
        println!("  Entered spacing:     {:.0} mm, {}", panel.channel_spacing_mm, panel.quality);
    }
    let a = &result.assessment;
    println!();
    println!("Indicative assessment: {}", a.status);
    println!("  Peak pressure:   {:.0} Pa {}", a.peak_pressure_pa, a.pressure_status);
    println!("  Force intensity: {:.2} kN/m² {}", a.force_intensity_kn_m2, a.intensity_status);
    println!("  Size:            {:.1} m² ({}) {}", a.sign_area_m2, a.size_category, a.size_category.guidance());
    println!("  Height:          {:.1} m ({}) {}", a.installation_height_m, a.height_category, a.height_category.guidance());
    println!("  {}", a.summary);
    for r in &a.recommendations {
        println!("  - {}", r);
    }
    if !result.warnings.is_empty() {
        println!();
        println!("Warnings ({}):", result.warnings.len());
        for w in &result.warnings {
            println!("  - {}", w);
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    match result.governing_check() {
        Some(check) => println!("  RESULT: {} (governs: {})", result.status, check.element),
        None => println!("  RESULT: {}", result.status),
    }
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_input_passes() {
        let input = CalculationInput::from_json(DEMO_INPUT).unwrap();
        let result = calculate_with_settings(&input, &EngineSettings::default()).unwrap();
        assert!(result.passes());
    }

    #[test]
    fn test_args_require_input_or_demo() {
        assert!(Args::try_parse_from(["wind_cli"]).is_err());
        assert!(Args::try_parse_from(["wind_cli", "--demo"]).is_ok());
        assert!(Args::try_parse_from(["wind_cli", "--demo", "--input", "a.json"]).is_err());
    }

    #[test]
    fn test_settings_toml() {
        let s: EngineSettings = toml::from_str("freestanding_force_factor = 1.2").unwrap();
        assert_eq!(s.freestanding_force_factor, 1.2);
        assert_eq!(s.air_density, EngineSettings::default().air_density);
    }
}
