//! # Mounting Configuration
//!
//! How the sign is supported. Exactly one variant is active per calculation
//! and each carries only the fields its own structural checks read.
//!
//! ## Example JSON
//!
//! ```json
//! {
//!   "type": "Projecting",
//!   "bracket_count": 2,
//!   "bracket_spacing_m": 0.8,
//!   "bracket_section": { "width_mm": 50, "depth_mm": 100, "thickness_mm": 5, "material": "S275" },
//!   "anchor_capacity": { "tension_kn": 12, "shear_kn": 8 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::materials::structural_material;
use crate::validation::{Constraint, Validator};
use crate::warnings::WarningKind;

// ============================================================================
// Wall-mounted
// ============================================================================

/// Grid of fixings between a fascia sign and the wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixingLayout {
    /// Number of horizontal rows (at least two, top and bottom)
    pub rows: u32,
    pub fixings_per_row: u32,
    /// Vertical lever arm between outer rows (m)
    pub row_spacing_m: f64,
    /// Characteristic tension resistance per fixing, N_Rk (kN)
    pub tension_capacity_kn: f64,
    /// Characteristic shear resistance per fixing, V_Rk (kN)
    pub shear_capacity_kn: f64,
    #[serde(default = "default_fixing_gamma")]
    pub gamma_m: f64,
}

fn default_fixing_gamma() -> f64 {
    1.5
}

impl FixingLayout {
    /// Fixing count, saturating at u32::MAX
    pub fn total(&self) -> u32 {
        self.rows.saturating_mul(self.fixings_per_row)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WallMountedConfig {
    /// Fixing layout; a default grid is assumed when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixings: Option<FixingLayout>,
}

// ============================================================================
// Projecting
// ============================================================================

/// Rectangular hollow bracket section, depth in the plane of bending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketSection {
    pub width_mm: f64,
    pub depth_mm: f64,
    pub thickness_mm: f64,
    pub material: String,
}

/// Wall anchors at the root of each bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorCapacity {
    /// Characteristic tension resistance per anchor, N_Rk (kN)
    pub tension_kn: f64,
    /// Characteristic shear resistance per anchor, V_Rk (kN)
    pub shear_kn: f64,
    #[serde(default = "default_fixing_gamma")]
    pub gamma_m: f64,
    #[serde(default = "default_fixings_per_bracket")]
    pub fixings_per_bracket: u32,
    /// Vertical pitch between anchor rows on the wall plate (m)
    #[serde(default = "default_fixing_pitch")]
    pub fixing_pitch_m: f64,
}

fn default_fixings_per_bracket() -> u32 {
    4
}

fn default_fixing_pitch() -> f64 {
    0.15
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectingConfig {
    pub bracket_count: u32,
    /// Centre-to-centre spacing between brackets (m)
    pub bracket_spacing_m: f64,
    pub bracket_section: BracketSection,
    pub anchor_capacity: AnchorCapacity,
}

// ============================================================================
// Post-mounted
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostShape {
    #[default]
    Circular,
    Square,
}

impl PostShape {
    pub fn display_name(&self) -> &'static str {
        match self {
            PostShape::Circular => "Circular",
            PostShape::Square => "Square",
        }
    }
}

impl fmt::Display for PostShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PostShape {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" | "chs" | "round" => Ok(PostShape::Circular),
            "square" | "shs" => Ok(PostShape::Square),
            _ => Err(CalcError::unknown_category("mounting.post_section.shape", s)),
        }
    }
}

/// Post cross-section. Metal posts are hollow (CHS/SHS) and need a wall
/// thickness; timber posts are solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSection {
    pub shape: PostShape,
    /// Outside diameter or side length (mm)
    pub size_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMountedConfig {
    pub post_count: u32,
    pub post_section: PostSection,
    /// Depth of the pad foundation below ground (m)
    pub foundation_depth_m: f64,
    /// Side of the square pad foundation under each post (m)
    pub foundation_width_m: f64,
    /// Allowable soil bearing pressure (kPa)
    pub soil_bearing_capacity_kpa: f64,
}

// ============================================================================
// Tagged union
// ============================================================================

/// Discriminant of [`MountingConfiguration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountingType {
    WallMounted,
    Projecting,
    PostMounted,
}

impl MountingType {
    pub const ALL: [MountingType; 3] = [
        MountingType::WallMounted,
        MountingType::Projecting,
        MountingType::PostMounted,
    ];

    /// Serialized tag of the variant
    pub fn tag(&self) -> &'static str {
        match self {
            MountingType::WallMounted => "WallMounted",
            MountingType::Projecting => "Projecting",
            MountingType::PostMounted => "PostMounted",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MountingType::WallMounted => "Wall-mounted",
            MountingType::Projecting => "Projecting",
            MountingType::PostMounted => "Post-mounted",
        }
    }

    /// Fields that must be present in the JSON for this variant
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            MountingType::WallMounted => &[],
            MountingType::Projecting => &[
                "bracket_count",
                "bracket_spacing_m",
                "bracket_section",
                "anchor_capacity",
            ],
            MountingType::PostMounted => &[
                "post_count",
                "post_section",
                "foundation_depth_m",
                "foundation_width_m",
                "soil_bearing_capacity_kpa",
            ],
        }
    }
}

impl fmt::Display for MountingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MountingType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        MountingType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| CalcError::unknown_category("mounting.type", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MountingConfiguration {
    WallMounted(WallMountedConfig),
    Projecting(ProjectingConfig),
    PostMounted(PostMountedConfig),
}

impl MountingConfiguration {
    pub fn mounting_type(&self) -> MountingType {
        match self {
            MountingConfiguration::WallMounted(_) => MountingType::WallMounted,
            MountingConfiguration::Projecting(_) => MountingType::Projecting,
            MountingConfiguration::PostMounted(_) => MountingType::PostMounted,
        }
    }

    pub fn validate(&self, v: &mut Validator<'_>) -> CalcResult<()> {
        match self {
            MountingConfiguration::WallMounted(cfg) => validate_wall(cfg, v),
            MountingConfiguration::Projecting(cfg) => validate_projecting(cfg, v),
            MountingConfiguration::PostMounted(cfg) => validate_post(cfg, v),
        }
    }
}

fn validate_wall(cfg: &WallMountedConfig, v: &mut Validator<'_>) -> CalcResult<()> {
    let Some(layout) = &cfg.fixings else {
        return Ok(());
    };
    v.check_count("mounting.fixings.rows", layout.rows, 2)?;
    v.check_count("mounting.fixings.fixings_per_row", layout.fixings_per_row, 1)?;
    v.check("mounting.fixings.row_spacing_m", layout.row_spacing_m, Constraint::Positive)?;
    v.check("mounting.fixings.tension_capacity_kn", layout.tension_capacity_kn, Constraint::Positive)?;
    v.check("mounting.fixings.shear_capacity_kn", layout.shear_capacity_kn, Constraint::Positive)?;
    v.check("mounting.fixings.gamma_m", layout.gamma_m, Constraint::AtLeast(1.0))
}

fn validate_projecting(cfg: &ProjectingConfig, v: &mut Validator<'_>) -> CalcResult<()> {
    v.check_count("mounting.bracket_count", cfg.bracket_count, 1)?;
    v.check("mounting.bracket_spacing_m", cfg.bracket_spacing_m, Constraint::Positive)?;

    let s = &cfg.bracket_section;
    v.check("mounting.bracket_section.width_mm", s.width_mm, Constraint::Positive)?;
    v.check("mounting.bracket_section.depth_mm", s.depth_mm, Constraint::Positive)?;
    v.check("mounting.bracket_section.thickness_mm", s.thickness_mm, Constraint::Positive)?;
    if 2.0 * s.thickness_mm >= s.width_mm.min(s.depth_mm) {
        return Err(CalcError::invalid_input(
            "mounting.bracket_section.thickness_mm",
            s.thickness_mm.to_string(),
            "Wall thickness must be less than half the smaller outside dimension",
        ));
    }
    if !structural_material(&s.material)?.kind.is_metal() {
        return Err(CalcError::invalid_input(
            "mounting.bracket_section.material",
            s.material.clone(),
            "Brackets must be steel or aluminium hollow sections",
        ));
    }

    let a = &cfg.anchor_capacity;
    v.check("mounting.anchor_capacity.tension_kn", a.tension_kn, Constraint::Positive)?;
    v.check("mounting.anchor_capacity.shear_kn", a.shear_kn, Constraint::Positive)?;
    v.check("mounting.anchor_capacity.gamma_m", a.gamma_m, Constraint::AtLeast(1.0))?;
    v.check_count("mounting.anchor_capacity.fixings_per_bracket", a.fixings_per_bracket, 2)?;
    v.check("mounting.anchor_capacity.fixing_pitch_m", a.fixing_pitch_m, Constraint::Positive)
}

fn validate_post(cfg: &PostMountedConfig, v: &mut Validator<'_>) -> CalcResult<()> {
    v.check_count("mounting.post_count", cfg.post_count, 1)?;

    let s = &cfg.post_section;
    v.check("mounting.post_section.size_mm", s.size_mm, Constraint::Positive)?;
    let material = structural_material(&s.material)?;
    match (material.kind.is_metal(), s.thickness_mm) {
        (true, None) => return Err(CalcError::missing_field("mounting.post_section.thickness_mm")),
        (true, Some(t)) => {
            v.check("mounting.post_section.thickness_mm", t, Constraint::Positive)?;
            if 2.0 * t > s.size_mm {
                return Err(CalcError::invalid_input(
                    "mounting.post_section.thickness_mm",
                    t.to_string(),
                    "Wall thickness exceeds half the section size",
                ));
            }
        }
        (false, Some(_)) => v.warn(
            WarningKind::ConservativeAssumption,
            format!("{} post treated as a solid section; thickness ignored", material.name),
        ),
        (false, None) => {}
    }

    v.check("mounting.foundation_depth_m", cfg.foundation_depth_m, Constraint::Positive)?;
    v.check("mounting.foundation_width_m", cfg.foundation_width_m, Constraint::Positive)?;
    v.check(
        "mounting.soil_bearing_capacity_kpa",
        cfg.soil_bearing_capacity_kpa,
        Constraint::Positive,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::WarningLog;

    fn test_projecting() -> ProjectingConfig {
        ProjectingConfig {
            bracket_count: 2,
            bracket_spacing_m: 0.8,
            bracket_section: BracketSection {
                width_mm: 50.0,
                depth_mm: 100.0,
                thickness_mm: 5.0,
                material: "S275".to_string(),
            },
            anchor_capacity: AnchorCapacity {
                tension_kn: 12.0,
                shear_kn: 8.0,
                gamma_m: 1.5,
                fixings_per_bracket: 4,
                fixing_pitch_m: 0.15,
            },
        }
    }

    fn test_post() -> PostMountedConfig {
        PostMountedConfig {
            post_count: 2,
            post_section: PostSection {
                shape: PostShape::Circular,
                size_mm: 114.3,
                thickness_mm: Some(5.0),
                material: "S355".to_string(),
            },
            foundation_depth_m: 1.2,
            foundation_width_m: 0.6,
            soil_bearing_capacity_kpa: 150.0,
        }
    }

    fn run(config: MountingConfiguration) -> (CalcResult<()>, WarningLog) {
        let mut log = WarningLog::new();
        let result = config.validate(&mut Validator::new(&mut log));
        (result, log)
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_string(&MountingConfiguration::WallMounted(WallMountedConfig::default()))
            .unwrap();
        assert_eq!(json, r#"{"type":"WallMounted"}"#);

        let parsed: MountingConfiguration = serde_json::from_str(
            r#"{"type":"Projecting","bracket_count":2,"bracket_spacing_m":0.8,
                "bracket_section":{"width_mm":50,"depth_mm":100,"thickness_mm":5,"material":"S275"},
                "anchor_capacity":{"tension_kn":12,"shear_kn":8}}"#,
        )
        .unwrap();
        assert_eq!(parsed, MountingConfiguration::Projecting(test_projecting()));
    }

    #[test]
    fn test_mounting_type_from_tag() {
        assert_eq!("PostMounted".parse::<MountingType>().unwrap(), MountingType::PostMounted);
        assert_eq!(
            "Hanging".parse::<MountingType>().unwrap_err(),
            CalcError::unknown_category("mounting.type", "Hanging")
        );
    }

    #[test]
    fn test_valid_configs() {
        assert!(run(MountingConfiguration::Projecting(test_projecting())).0.is_ok());
        assert!(run(MountingConfiguration::PostMounted(test_post())).0.is_ok());
        assert!(run(MountingConfiguration::WallMounted(WallMountedConfig::default())).0.is_ok());
    }

    #[test]
    fn test_zero_brackets_rejected() {
        let mut cfg = test_projecting();
        cfg.bracket_count = 0;
        let err = run(MountingConfiguration::Projecting(cfg)).0.unwrap_err();
        assert_eq!(err.field(), Some("mounting.bracket_count"));
    }

    #[test]
    fn test_timber_bracket_rejected() {
        let mut cfg = test_projecting();
        cfg.bracket_section.material = "C24".to_string();
        let err = run(MountingConfiguration::Projecting(cfg)).0.unwrap_err();
        assert_eq!(err.field(), Some("mounting.bracket_section.material"));
    }

    #[test]
    fn test_steel_post_requires_thickness() {
        let mut cfg = test_post();
        cfg.post_section.thickness_mm = None;
        let err = run(MountingConfiguration::PostMounted(cfg)).0.unwrap_err();
        assert_eq!(err, CalcError::missing_field("mounting.post_section.thickness_mm"));
    }

    #[test]
    fn test_timber_post_thickness_ignored_with_warning() {
        let mut cfg = test_post();
        cfg.post_section.material = "C24".to_string();
        cfg.post_section.shape = PostShape::Square;
        cfg.post_section.size_mm = 150.0;
        let (result, log) = run(MountingConfiguration::PostMounted(cfg));
        assert!(result.is_ok());
        assert_eq!(log.count(WarningKind::ConservativeAssumption), 1);
    }

    #[test]
    fn test_single_fixing_row_rejected() {
        let cfg = WallMountedConfig {
            fixings: Some(FixingLayout {
                rows: 1,
                fixings_per_row: 6,
                row_spacing_m: 1.0,
                tension_capacity_kn: 12.0,
                shear_capacity_kn: 8.0,
                gamma_m: 1.5,
            }),
        };
        let err = run(MountingConfiguration::WallMounted(cfg)).0.unwrap_err();
        assert_eq!(err.field(), Some("mounting.fixings.rows"));
    }
}
