use serde::{Deserialize, Serialize};

use crate::region::Region;

// ── State point ─────────────────────────────────────────────────────

/// Full set of properties at one state point.
///
/// Values are in the unit system of the [`Steam`](crate::Steam) that
/// produced them. In bare units:
///
/// | Field            | Unit       |
/// |------------------|------------|
/// | temperature      | K          |
/// | pressure         | MPa        |
/// | density          | kg/m³      |
/// | specific_volume  | m³/kg      |
/// | enthalpy         | kJ/kg      |
/// | internal_energy  | kJ/kg      |
/// | entropy          | kJ/(kg·K)  |
/// | cv, cp           | kJ/(kg·K)  |
/// | sound_speed      | m/s        |
/// | quality          | vapour mass fraction (0–1), `NaN` outside the saturation pressure range |
///
/// In Region 4 `v`, `h`, `u` and `s` are quality-weighted mixtures of the
/// two saturated phases, and `cp`, `cv` and `sound_speed` are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteamProps {
    pub region: Region,
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
    pub specific_volume: f64,
    pub enthalpy: f64,
    pub internal_energy: f64,
    pub entropy: f64,
    pub cv: f64,
    pub cp: f64,
    pub sound_speed: f64,
    pub quality: f64,
}

impl SteamProps {
    /// A state outside the envelope: every property is `NaN`.
    pub fn undefined() -> Self {
        Self {
            region: Region::Undefined,
            temperature: f64::NAN,
            pressure: f64::NAN,
            density: f64::NAN,
            specific_volume: f64::NAN,
            enthalpy: f64::NAN,
            internal_energy: f64::NAN,
            entropy: f64::NAN,
            cv: f64::NAN,
            cp: f64::NAN,
            sound_speed: f64::NAN,
            quality: f64::NAN,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.region.is_defined()
    }
}

impl std::fmt::Display for SteamProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.region)?;
        writeln!(f, "T  = {:.4}", self.temperature)?;
        writeln!(f, "P  = {:.6}", self.pressure)?;
        writeln!(f, "D  = {:.6}", self.density)?;
        writeln!(f, "V  = {:.8}", self.specific_volume)?;
        writeln!(f, "H  = {:.4}", self.enthalpy)?;
        writeln!(f, "U  = {:.4}", self.internal_energy)?;
        writeln!(f, "S  = {:.6}", self.entropy)?;
        writeln!(f, "Cv = {:.6}", self.cv)?;
        writeln!(f, "Cp = {:.6}", self.cp)?;
        writeln!(f, "W  = {:.4}", self.sound_speed)?;
        write!(f, "X  = {:.6}", self.quality)
    }
}

// ── Saturation properties ───────────────────────────────────────────

/// Both ends of the saturation line at one pressure or temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturationProps {
    /// Saturation temperature
    pub temperature: f64,
    /// Saturation pressure
    pub pressure: f64,
    /// Saturated liquid (x = 0)
    pub liquid: SteamProps,
    /// Saturated vapour (x = 1)
    pub vapour: SteamProps,
}

impl std::fmt::Display for SaturationProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T_sat  = {:.4}", self.temperature)?;
        writeln!(f, "P_sat  = {:.6}", self.pressure)?;
        writeln!(f, "D_liq  = {:.6}", self.liquid.density)?;
        writeln!(f, "D_vap  = {:.6}", self.vapour.density)?;
        writeln!(f, "H_liq  = {:.4}", self.liquid.enthalpy)?;
        write!(f, "H_vap  = {:.4}", self.vapour.enthalpy)
    }
}

// ── Transport properties ────────────────────────────────────────────

/// Viscosity, thermal conductivity and Prandtl number at one state point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportProps {
    /// Dynamic viscosity (Pa·s in bare units)
    pub viscosity: f64,
    /// Thermal conductivity (W/(m·K) in bare units)
    pub thermal_conductivity: f64,
    /// Prandtl number (dimensionless)
    pub prandtl: f64,
}

impl std::fmt::Display for TransportProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "eta = {:.6e}", self.viscosity)?;
        writeln!(f, "tcx = {:.6}", self.thermal_conductivity)?;
        write!(f, "Pr  = {:.6}", self.prandtl)
    }
}

// ── Critical point ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalProps {
    /// Critical temperature
    pub temperature: f64,
    /// Critical pressure
    pub pressure: f64,
    /// Critical density
    pub density: f64,
}

impl std::fmt::Display for CriticalProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tc = {:.4}", self.temperature)?;
        writeln!(f, "Pc = {:.6}", self.pressure)?;
        write!(f, "Dc = {:.4}", self.density)
    }
}
