//! Physical constants of the IAPWS-IF97 formulation and the auxiliary
//! releases (all in internal units: K, MPa, kg/m³, kJ/kg).

/// Specific gas constant of ordinary water, kJ/(kg·K).
pub const SPECIFIC_GAS_CONSTANT: f64 = 0.461526;

/// Critical temperature of ordinary water (K).
pub const CRITICAL_TEMPERATURE: f64 = 647.096;
/// Critical pressure of ordinary water (MPa).
pub const CRITICAL_PRESSURE: f64 = 22.06395;
/// Critical density of ordinary water (kg/m³).
pub const CRITICAL_DENSITY: f64 = 322.0;

/// Triple-point temperature (K).
pub const TRIPLE_POINT_TEMPERATURE: f64 = 273.16;
/// Triple-point pressure (MPa).
pub const TRIPLE_POINT_PRESSURE: f64 = 0.000611657;
/// Specific enthalpy of the saturated liquid at the triple point (kJ/kg).
pub const TRIPLE_POINT_ENTHALPY: f64 = 0.611783e-3;

/// Critical temperature of heavy water, IAPWS 1992 (K).
pub const CRITICAL_TEMPERATURE_D2O: f64 = 643.847;
/// Critical pressure of heavy water, IAPWS 1992 (MPa).
pub const CRITICAL_PRESSURE_D2O: f64 = 21.671;
/// Critical density of heavy water, IAPWS 1992 (kg/m³).
pub const CRITICAL_DENSITY_D2O: f64 = 356.0;

/// 0 °C expressed in kelvin.
pub const ZERO_CELSIUS: f64 = 273.15;

// ── Envelope limits shared by the classifier and the regions ───────

/// Lowest temperature of Regions 1 and 2 (K).
pub(crate) const T_MIN: f64 = 273.15;
/// Region 1 / Region 3 boundary temperature (K).
pub(crate) const T_13: f64 = 623.15;
/// Upper temperature of Region 2 (K).
pub(crate) const T_25: f64 = 1073.15;
/// Upper temperature of Region 5 (K).
pub(crate) const T_MAX: f64 = 2273.15;
/// Saturation pressure at 623.15 K, i.e. where Region 3 touches the
/// saturation line (MPa).
pub(crate) const P_SAT_13: f64 = 16.529;
/// Same limit with the extra digit the classifier tests use (MPa).
pub(crate) const P_SAT_13_FINE: f64 = 16.5292;
/// Lowest accepted pressure of the classifiers (MPa).
pub(crate) const P_MIN: f64 = 0.000611657;
/// Upper pressure of Regions 1-3 (MPa).
pub(crate) const P_MAX: f64 = 100.0;
/// Upper pressure of Region 5 (MPa).
pub(crate) const P_MAX_5: f64 = 50.0;
