//! # Calculation Input
//!
//! The request aggregate: site, geometry and mounting configuration.
//!
//! [`CalculationInput::from_json`] is the preferred entry point for external
//! callers. It checks the mounting tag and the variant's required fields
//! before handing the document to serde, so a malformed request is rejected
//! with the offending field named rather than a generic parse message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use crate::geometry::SignGeometry;
use crate::mounting::{MountingConfiguration, MountingType, PostShape};
use crate::site::{SiteParameters, TerrainCategory};
use crate::validation::Validator;
use crate::warnings::WarningLog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub site: SiteParameters,
    pub geometry: SignGeometry,
    pub mounting: MountingConfiguration,
}

const REQUIRED_SITE_FIELDS: &[&str] = &["base_wind_speed", "altitude_m", "shore_distance_km", "terrain"];
const REQUIRED_GEOMETRY_FIELDS: &[&str] = &["width_m", "height_m", "depth_m", "mounting_height_m"];

impl CalculationInput {
    /// Parse a request document, naming missing or unknown fields precisely.
    ///
    /// ```rust
    /// use wind_core::CalculationInput;
    ///
    /// let err = CalculationInput::from_json(r#"{
    ///     "site": {"base_wind_speed": 22, "altitude_m": 10, "shore_distance_km": 5, "terrain": "country"},
    ///     "geometry": {"width_m": 4, "height_m": 1.5, "depth_m": 0.3, "mounting_height_m": 5},
    ///     "mounting": {"type": "PostMounted", "post_count": 2}
    /// }"#).unwrap_err();
    /// assert_eq!(err.field(), Some("mounting.post_section"));
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let doc: Value = serde_json::from_str(json)?;
        check_document(&doc)?;
        Ok(serde_json::from_value(doc)?)
    }

    /// Run every hard and soft input check, appending soft findings to `log`.
    ///
    /// Material names are resolved here so an unknown material aborts the
    /// calculation before any factor is computed.
    pub fn validate(&self, log: &mut WarningLog) -> CalcResult<()> {
        let mut v = Validator::new(log);
        self.site.validate(&mut v)?;
        self.geometry.validate(&mut v)?;
        self.mounting.validate(&mut v)
    }
}

fn check_document(doc: &Value) -> CalcResult<()> {
    let site = section(doc, "site", "site")?;
    require_fields(site, "site", REQUIRED_SITE_FIELDS)?;
    if let Some(Value::String(terrain)) = site.get("terrain") {
        terrain.parse::<TerrainCategory>()?;
    }

    let geometry = section(doc, "geometry", "geometry")?;
    require_fields(geometry, "geometry", REQUIRED_GEOMETRY_FIELDS)?;

    let mounting = section(doc, "mounting", "mounting")?;
    let tag = match mounting.get("type") {
        Some(Value::String(tag)) => tag.parse::<MountingType>()?,
        Some(other) => return Err(CalcError::unknown_category("mounting.type", other.to_string())),
        None => return Err(CalcError::missing_field("mounting.type")),
    };
    require_fields(mounting, "mounting", tag.required_fields())?;

    if tag == MountingType::PostMounted {
        let post_section = section(mounting, "post_section", "mounting.post_section")?;
        require_fields(post_section, "mounting.post_section", &["shape", "size_mm", "material"])?;
        if let Some(Value::String(shape)) = post_section.get("shape") {
            shape.parse::<PostShape>()?;
        }
    }
    Ok(())
}

fn section<'a>(doc: &'a Value, key: &str, path: &str) -> CalcResult<&'a Value> {
    match doc.get(key) {
        Some(v @ Value::Object(_)) => Ok(v),
        Some(other) => Err(CalcError::invalid_input(path, other.to_string(), "Expected a JSON object")),
        None => Err(CalcError::missing_field(path)),
    }
}

fn require_fields(obj: &Value, prefix: &str, fields: &[&str]) -> CalcResult<()> {
    for field in fields {
        if obj.get(*field).map_or(true, Value::is_null) {
            return Err(CalcError::missing_field(format!("{}.{}", prefix, field)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mounting::WallMountedConfig;

    const WALL_SIGN: &str = r#"{
        "site": {"base_wind_speed": 22.0, "altitude_m": 10.0, "shore_distance_km": 5.0, "terrain": "country"},
        "geometry": {"width_m": 4.0, "height_m": 1.5, "depth_m": 0.3, "mounting_height_m": 5.0},
        "mounting": {"type": "WallMounted"}
    }"#;

    #[test]
    fn test_parse_wall_sign() {
        let input = CalculationInput::from_json(WALL_SIGN).unwrap();
        assert_eq!(input.site.terrain, TerrainCategory::Country);
        assert_eq!(input.mounting, MountingConfiguration::WallMounted(WallMountedConfig::default()));
        assert_eq!(input.site.town_distance_km, 0.0);
    }

    #[test]
    fn test_unknown_terrain() {
        let json = WALL_SIGN.replace("\"country\"", "\"suburban\"");
        let err = CalculationInput::from_json(&json).unwrap_err();
        assert_eq!(err, CalcError::unknown_category("site.terrain", "suburban"));
    }

    #[test]
    fn test_unknown_mounting_tag() {
        let json = WALL_SIGN.replace("WallMounted", "Suspended");
        let err = CalculationInput::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(err.field(), Some("mounting.type"));
    }

    #[test]
    fn test_missing_variant_field() {
        let json = WALL_SIGN.replace(
            r#"{"type": "WallMounted"}"#,
            r#"{"type": "Projecting", "bracket_count": 2, "bracket_spacing_m": 0.8,
                "bracket_section": {"width_mm": 50, "depth_mm": 100, "thickness_mm": 5, "material": "S275"}}"#,
        );
        let err = CalculationInput::from_json(&json).unwrap_err();
        assert_eq!(err, CalcError::missing_field("mounting.anchor_capacity"));
    }

    #[test]
    fn test_missing_geometry_field() {
        let json = WALL_SIGN.replace(r#""depth_m": 0.3, "#, "");
        let err = CalculationInput::from_json(&json).unwrap_err();
        assert_eq!(err, CalcError::missing_field("geometry.depth_m"));
    }

    #[test]
    fn test_unknown_post_shape() {
        let json = WALL_SIGN.replace(
            r#"{"type": "WallMounted"}"#,
            r#"{"type": "PostMounted", "post_count": 1, "foundation_depth_m": 1.0,
                "foundation_width_m": 0.6, "soil_bearing_capacity_kpa": 100,
                "post_section": {"shape": "hexagonal", "size_mm": 100, "material": "C24"}}"#,
        );
        let err = CalculationInput::from_json(&json).unwrap_err();
        assert_eq!(err.field(), Some("mounting.post_section.shape"));
    }

    #[test]
    fn test_malformed_json() {
        let err = CalculationInput::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_validate_collects_soft_warnings() {
        let mut input = CalculationInput::from_json(WALL_SIGN).unwrap();
        input.geometry.width_m = 60.0;
        let mut log = WarningLog::new();
        input.validate(&mut log).unwrap();
        assert_eq!(log.len(), 1);
    }
}
