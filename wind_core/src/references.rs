//! # Code References
//!
//! Clause references attached to every named factor and check, so a report
//! can cite where each value came from.

/// SCI P394 "Wind actions to BS EN 1991-1-4" stage references
pub mod p394 {
    /// Fundamental basic wind speed from the UK wind map
    pub const WIND_MAP: &str = "P394 Stage 1";
    /// Altitude factor c_alt
    pub const ALTITUDE: &str = "P394 Stage 2";
    /// Directional and seasonal factors
    pub const DIRECTION_SEASON: &str = "P394 Stage 3";
    /// Basic wind speed and terrain classification
    pub const TERRAIN: &str = "P394 Stage 4";
    /// Reference height and displacement height
    pub const REFERENCE_HEIGHT: &str = "P394 Section 5.1";
    /// Exposure factor c_e (Figure NA.7)
    pub const EXPOSURE: &str = "P394 Stage 6";
    /// Town terrain correction c_e,T (Figure NA.8)
    pub const TOWN_CORRECTION: &str = "P394 Stage 6";
    /// Peak velocity pressure q_p
    pub const PEAK_PRESSURE: &str = "P394 Stage 7";
    /// Size factor c_s (Table NA.3)
    pub const SIZE_FACTOR: &str = "P394 Stage 8";
    /// Dynamic factor c_d (Figure NA.9)
    pub const DYNAMIC_FACTOR: &str = "P394 Stage 8";
}

/// BS EN 1991-1-4 clause references
pub mod en1991 {
    /// Orography factor c_o
    pub const OROGRAPHY: &str = "EN 1991-1-4 4.3.3";
    /// Terrain roughness table (z0, z_min)
    pub const TERRAIN_CATEGORIES: &str = "EN 1991-1-4 Table 4.1";
    /// Roughness factor c_r, Eq. (4.4)
    pub const ROUGHNESS_FACTOR: &str = "EN 1991-1-4 Eq. (4.4)";
    /// Turbulence intensity I_v, Eq. (4.7)
    pub const TURBULENCE: &str = "EN 1991-1-4 Eq. (4.7)";
    /// Peak velocity pressure, general method, Eq. (4.8)
    pub const PEAK_PRESSURE_GENERAL: &str = "EN 1991-1-4 Eq. (4.8)";
    /// Wind force, Eq. (5.3)
    pub const WIND_FORCE: &str = "EN 1991-1-4 Eq. (5.3)";
    /// Force coefficients for signboards
    pub const SIGNBOARD: &str = "EN 1991-1-4 7.4.3";
    /// Force coefficient of flat plates normal to flow
    pub const FLAT_PLATE: &str = "EN 1991-1-4 7.4.3 (flat plate)";
    /// Force coefficients for circular cylinders
    pub const CIRCULAR_CYLINDER: &str = "EN 1991-1-4 7.9.2";
    /// Force coefficients for rectangular sections
    pub const RECTANGULAR_SECTION: &str = "EN 1991-1-4 7.6";
}

/// BS EN 1990 and material code references
pub mod design {
    /// ULS partial factors
    pub const PARTIAL_FACTORS: &str = "EN 1990 Table A1.2(B)";
    /// Steel cross-section resistance
    pub const STEEL_BENDING: &str = "EN 1993-1-1 6.2.5";
    pub const STEEL_SHEAR: &str = "EN 1993-1-1 6.2.6";
    /// Aluminium resistance
    pub const ALUMINIUM_BENDING: &str = "EN 1999-1-1 6.2.5";
    /// Timber resistance
    pub const TIMBER_BENDING: &str = "EN 1995-1-1 6.1.6";
    pub const TIMBER_SHEAR: &str = "EN 1995-1-1 6.1.7";
    /// Post-installed anchor combined tension and shear
    pub const ANCHOR_INTERACTION: &str = "EN 1992-4 7.2.3";
    /// Serviceability deflection limits
    pub const DEFLECTION: &str = "EN 1990 A1.4";
    /// Pad foundation bearing
    pub const BEARING: &str = "EN 1997-1 6.5.2";
}
