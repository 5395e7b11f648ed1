//! Configurable unit conversion for steam-table values.
//!
//! The formulations work internally in: **K, MPa, kJ/kg, kJ/(kg·K),
//! m³/kg, kg/m³, m/s, Pa·s, W/(m·K), N/m**. A [`UnitSystem`] describes
//! what the caller works in and a [`Converter`] moves values across.
//!
//! # Presets
//!
//! | Preset   | T   | P   | H      | S            | V      |
//! |----------|-----|-----|--------|--------------|--------|
//! | `bare()` | K   | MPa | kJ/kg  | kJ/(kg·K)    | m³/kg  |
//! | `mks()`  | °C  | bar | kJ/kg  | kJ/(kg·K)    | m³/kg  |
//! | `fls()`  | °F  | psi | btu/lb | btu/(lb·°F)  | ft³/lb |
//!
//! Density always follows the volume unit (kg/m³ or lb/ft³).
//!
//! # Builder
//!
//! ```
//! use xsteam::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::bare()
//!     .temperature(TempUnit::Celsius)
//!     .pressure(PressUnit::Bar);
//! assert_eq!(units, UnitSystem::mks());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ZERO_CELSIUS;
use crate::error::XSteamError;
use crate::properties::SteamProps;

const MPA_PER_BAR: f64 = 0.1;
const MPA_PER_PSI: f64 = 0.00689475729;
const KJKG_PER_BTULB: f64 = 2.326;
const KJKGK_PER_BTULBF: f64 = 4.1868;
const M3KG_PER_FT3LB: f64 = 0.0624279606;
const MS_PER_FTS: f64 = 0.3048;
const LBMFTH_PER_PAS: f64 = 2419.088311;
const BTUHFTF_PER_WMK: f64 = 0.577789;
const LBFFT_PER_NM: f64 = 0.068521766;

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempUnit {
    /// Kelvin (internal)
    Kelvin,
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressUnit {
    /// Megapascal (internal)
    MPa,
    /// Kilopascal
    KPa,
    /// Bar (1 bar = 0.1 MPa)
    Bar,
    /// Pounds per square inch
    Psi,
}

/// Specific energy unit, used for enthalpy and internal energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    /// kJ/kg (internal)
    KJPerKg,
    /// btu/lb
    BtuPerLb,
}

/// Entropy / heat-capacity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntropyUnit {
    /// kJ/(kg·K) (internal)
    KJPerKgK,
    /// btu/(lb·°F)
    BtuPerLbF,
}

/// Specific volume unit. Density uses the reciprocal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// m³/kg, density in kg/m³ (internal)
    M3PerKg,
    /// ft³/lb, density in lb/ft³
    Ft3PerLb,
}

/// Speed of sound unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    /// m/s (internal)
    MPerS,
    /// ft/s
    FtPerS,
}

/// Dynamic viscosity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViscosityUnit {
    /// Pa·s (internal)
    PaS,
    /// lbm/(ft·h)
    LbmPerFtH,
}

/// Thermal conductivity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductivityUnit {
    /// W/(m·K) (internal)
    WPerMK,
    /// btu/(h·ft·°F)
    BtuPerHFtF,
}

/// Surface tension unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensionUnit {
    /// N/m (internal)
    NPerM,
    /// lbf/ft
    LbfPerFt,
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the user wants to work in.
///
/// Create one with a preset (`bare()`, `mks()`, `fls()`), parse one by
/// name, or customise individual quantities with the builder methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitSystem {
    pub temperature:  TempUnit,
    pub pressure:     PressUnit,
    pub energy:       EnergyUnit,
    pub entropy:      EntropyUnit,
    pub volume:       VolumeUnit,
    pub speed:        SpeedUnit,
    pub viscosity:    ViscosityUnit,
    pub conductivity: ConductivityUnit,
    pub tension:      TensionUnit,
}

impl UnitSystem {
    /// Start from the internal units. Use the builder methods to change
    /// individual quantities.
    pub fn new() -> Self { Self::bare() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Internal units: K, MPa, kJ/kg, kJ/(kg·K), m³/kg, m/s, Pa·s, W/(m·K), N/m.
    pub fn bare() -> Self {
        Self {
            temperature:  TempUnit::Kelvin,
            pressure:     PressUnit::MPa,
            energy:       EnergyUnit::KJPerKg,
            entropy:      EntropyUnit::KJPerKgK,
            volume:       VolumeUnit::M3PerKg,
            speed:        SpeedUnit::MPerS,
            viscosity:    ViscosityUnit::PaS,
            conductivity: ConductivityUnit::WPerMK,
            tension:      TensionUnit::NPerM,
        }
    }

    /// Metric engineering: °C and bar, everything else as `bare()`.
    pub fn mks() -> Self {
        Self {
            temperature: TempUnit::Celsius,
            pressure:    PressUnit::Bar,
            ..Self::bare()
        }
    }

    /// Foot-pound-second: °F, psi, btu/lb, btu/(lb·°F), ft³/lb, ft/s,
    /// lbm/(ft·h), btu/(h·ft·°F), lbf/ft.
    pub fn fls() -> Self {
        Self {
            temperature:  TempUnit::Fahrenheit,
            pressure:     PressUnit::Psi,
            energy:       EnergyUnit::BtuPerLb,
            entropy:      EntropyUnit::BtuPerLbF,
            volume:       VolumeUnit::Ft3PerLb,
            speed:        SpeedUnit::FtPerS,
            viscosity:    ViscosityUnit::LbmPerFtH,
            conductivity: ConductivityUnit::BtuPerHFtF,
            tension:      TensionUnit::LbfPerFt,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn pressure(mut self, u: PressUnit) -> Self { self.pressure = u; self }
    pub fn energy(mut self, u: EnergyUnit) -> Self { self.energy = u; self }
    pub fn entropy(mut self, u: EntropyUnit) -> Self { self.entropy = u; self }
    pub fn volume(mut self, u: VolumeUnit) -> Self { self.volume = u; self }
    pub fn speed(mut self, u: SpeedUnit) -> Self { self.speed = u; self }
    pub fn viscosity(mut self, u: ViscosityUnit) -> Self { self.viscosity = u; self }
    pub fn conductivity(mut self, u: ConductivityUnit) -> Self { self.conductivity = u; self }
    pub fn tension(mut self, u: TensionUnit) -> Self { self.tension = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::bare() }
}

impl FromStr for UnitSystem {
    type Err = XSteamError;

    /// Parses a preset name: `bare`/`si`, `mks`/`metric` or
    /// `fls`/`imperial`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bare" | "si" => Ok(Self::bare()),
            "mks" | "metric" => Ok(Self::mks()),
            "fls" | "imperial" => Ok(Self::fls()),
            _ => Err(XSteamError::UnknownUnitSystem(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between user units and internal units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → K
    pub fn t_to_si(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin     => t,
            TempUnit::Celsius    => t + ZERO_CELSIUS,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS,
        }
    }

    /// K → User
    pub fn t_from_si(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin     => t,
            TempUnit::Celsius    => t - ZERO_CELSIUS,
            TempUnit::Fahrenheit => (t - ZERO_CELSIUS) * 9.0 / 5.0 + 32.0,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// User → MPa
    pub fn p_to_si(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p / 1000.0,
            PressUnit::Bar => p * MPA_PER_BAR,
            PressUnit::Psi => p * MPA_PER_PSI,
        }
    }

    /// MPa → User
    pub fn p_from_si(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p * 1000.0,
            PressUnit::Bar => p / MPA_PER_BAR,
            PressUnit::Psi => p / MPA_PER_PSI,
        }
    }

    // ── Enthalpy / Internal energy ──────────────────────────────────

    /// User → kJ/kg
    pub fn h_to_si(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg  => h,
            EnergyUnit::BtuPerLb => h * KJKG_PER_BTULB,
        }
    }

    /// kJ/kg → User
    pub fn h_from_si(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg  => h,
            EnergyUnit::BtuPerLb => h / KJKG_PER_BTULB,
        }
    }

    // ── Entropy / Cv / Cp ───────────────────────────────────────────

    /// User → kJ/(kg·K)
    pub fn s_to_si(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK  => s,
            EntropyUnit::BtuPerLbF => s * KJKGK_PER_BTULBF,
        }
    }

    /// kJ/(kg·K) → User
    pub fn s_from_si(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK  => s,
            EntropyUnit::BtuPerLbF => s / KJKGK_PER_BTULBF,
        }
    }

    // ── Specific volume / Density ───────────────────────────────────

    /// User → m³/kg
    pub fn v_to_si(&self, v: f64) -> f64 {
        match self.units.volume {
            VolumeUnit::M3PerKg  => v,
            VolumeUnit::Ft3PerLb => v * M3KG_PER_FT3LB,
        }
    }

    /// m³/kg → User
    pub fn v_from_si(&self, v: f64) -> f64 {
        match self.units.volume {
            VolumeUnit::M3PerKg  => v,
            VolumeUnit::Ft3PerLb => v / M3KG_PER_FT3LB,
        }
    }

    /// User → kg/m³
    pub fn rho_to_si(&self, rho: f64) -> f64 {
        match self.units.volume {
            VolumeUnit::M3PerKg  => rho,
            VolumeUnit::Ft3PerLb => rho / M3KG_PER_FT3LB,
        }
    }

    /// kg/m³ → User
    pub fn rho_from_si(&self, rho: f64) -> f64 {
        match self.units.volume {
            VolumeUnit::M3PerKg  => rho,
            VolumeUnit::Ft3PerLb => rho * M3KG_PER_FT3LB,
        }
    }

    // ── Speed of sound ──────────────────────────────────────────────

    /// User → m/s
    pub fn w_to_si(&self, w: f64) -> f64 {
        match self.units.speed {
            SpeedUnit::MPerS  => w,
            SpeedUnit::FtPerS => w * MS_PER_FTS,
        }
    }

    /// m/s → User
    pub fn w_from_si(&self, w: f64) -> f64 {
        match self.units.speed {
            SpeedUnit::MPerS  => w,
            SpeedUnit::FtPerS => w / MS_PER_FTS,
        }
    }

    // ── Viscosity ───────────────────────────────────────────────────

    /// User → Pa·s
    pub fn my_to_si(&self, my: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS       => my,
            ViscosityUnit::LbmPerFtH => my / LBMFTH_PER_PAS,
        }
    }

    /// Pa·s → User
    pub fn my_from_si(&self, my: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS       => my,
            ViscosityUnit::LbmPerFtH => my * LBMFTH_PER_PAS,
        }
    }

    // ── Thermal conductivity ────────────────────────────────────────

    /// User → W/(m·K)
    pub fn tc_to_si(&self, tc: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK     => tc,
            ConductivityUnit::BtuPerHFtF => tc / BTUHFTF_PER_WMK,
        }
    }

    /// W/(m·K) → User
    pub fn tc_from_si(&self, tc: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK     => tc,
            ConductivityUnit::BtuPerHFtF => tc * BTUHFTF_PER_WMK,
        }
    }

    // ── Surface tension ─────────────────────────────────────────────

    /// User → N/m
    pub fn st_to_si(&self, st: f64) -> f64 {
        match self.units.tension {
            TensionUnit::NPerM    => st,
            TensionUnit::LbfPerFt => st / LBFFT_PER_NM,
        }
    }

    /// N/m → User
    pub fn st_from_si(&self, st: f64) -> f64 {
        match self.units.tension {
            TensionUnit::NPerM    => st,
            TensionUnit::LbfPerFt => st * LBFFT_PER_NM,
        }
    }

    // ── Generic key-based conversion ────────────────────────────────

    /// Convert an internal output value to user units, choosing the
    /// conversion from the property key (`"T"`, `"P"`, `"H"`, …).
    pub fn output_from_si(&self, key: &str, val: f64) -> f64 {
        match key.to_uppercase().as_str() {
            "T"                => self.t_from_si(val),
            "P"                => self.p_from_si(val),
            "H" | "U"          => self.h_from_si(val),
            "S" | "CP" | "CV"  => self.s_from_si(val),
            "V"                => self.v_from_si(val),
            "D" | "RHO"        => self.rho_from_si(val),
            "W"                => self.w_from_si(val),
            "ETA" | "MY"       => self.my_from_si(val),
            "TCX" | "TC"       => self.tc_from_si(val),
            "ST"               => self.st_from_si(val),
            _                  => val, // X, Q, VX, PR
        }
    }

    /// Convert every field of an internal-unit state to user units.
    pub fn props_from_si(&self, props: &SteamProps) -> SteamProps {
        SteamProps {
            region: props.region,
            temperature: self.t_from_si(props.temperature),
            pressure: self.p_from_si(props.pressure),
            density: self.rho_from_si(props.density),
            specific_volume: self.v_from_si(props.specific_volume),
            enthalpy: self.h_from_si(props.enthalpy),
            internal_energy: self.h_from_si(props.internal_energy),
            entropy: self.s_from_si(props.entropy),
            cv: self.s_from_si(props.cv),
            cp: self.s_from_si(props.cp),
            sound_speed: self.w_from_si(props.sound_speed),
            quality: props.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("MKS".parse::<UnitSystem>().ok(), Some(UnitSystem::mks()));
        assert_eq!(" fls ".parse::<UnitSystem>().ok(), Some(UnitSystem::fls()));
        assert_eq!("si".parse::<UnitSystem>().ok(), Some(UnitSystem::bare()));
        assert!(matches!(
            "furlongs".parse::<UnitSystem>(),
            Err(XSteamError::UnknownUnitSystem(_))
        ));
    }

    #[test]
    fn fahrenheit_and_psi() {
        let c = Converter::new(UnitSystem::fls());
        assert_relative_eq!(c.t_to_si(212.0), 373.15, max_relative = 1e-12);
        assert_relative_eq!(c.t_from_si(273.15), 32.0, max_relative = 1e-12);
        assert_relative_eq!(c.p_to_si(14.503773773), 0.1, max_relative = 1e-8);
    }

    #[test]
    fn density_follows_volume_unit() {
        let c = Converter::new(UnitSystem::fls());
        let v = 0.5;
        let v_user = c.v_from_si(v);
        assert_relative_eq!(c.rho_from_si(1.0 / v), 1.0 / v_user, max_relative = 1e-12);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let c = Converter::new(UnitSystem::mks());
        assert_relative_eq!(c.output_from_si("t", 373.15), 100.0);
        assert_relative_eq!(c.output_from_si("p", 0.1), 1.0);
        assert_relative_eq!(c.output_from_si("x", 0.3), 0.3);
    }
}
