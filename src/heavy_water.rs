//! Viscosity and thermal conductivity of heavy water, IAPWS R4-84
//! (revised 2007), plus a small unit-aware façade.

use tracing::{info, warn};

use crate::constants::{CRITICAL_DENSITY_D2O, CRITICAL_PRESSURE_D2O, CRITICAL_TEMPERATURE_D2O};
use crate::converter::{Converter, UnitSystem};
use crate::error::{Result, XSteamError};
use crate::power_sum::{self, Partial};
use crate::properties::CriticalProps;

const T_STAR: f64 = 643.847;
const RHO_STAR: f64 = 358.0;

/// Dynamic viscosity of D₂O (Pa·s) from density (kg/m³) and temperature (K).
pub fn viscosity(rho: f64, t: f64) -> f64 {
    const A: [f64; 4] = [1.0, 0.940695, 0.578377, -0.202044];
    // (1/T' - 1)^I · (ρ' - 1)^J, zero entries of the 6×7 table omitted.
    const I: [i32; 26] = [
        0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 0, 1, 2, 5, 0, 1, 2, 3, 0, 1, 3, 5, 0, 1, 5, 3,
    ];
    const J: [i32; 26] = [
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6,
    ];
    const N: [f64; 26] = [
        0.4864192, -0.2448372, -0.8702035, 0.8716056, -1.051126, 0.3458395, 0.3509007, 1.315436,
        1.297752, 1.353448, -0.2847572, -1.037026, -1.287846, -0.02148229, 0.07013759, 0.4660127,
        0.2292075, -0.4857462, 0.01641220, -0.02884911, 0.1607171, -0.009603846, -0.01163815,
        -0.008239587, 0.004559914, -0.003886659,
    ];
    // µ* = 55.2651 µPa·s
    const MY_STAR: f64 = 55.2651e-6;

    let td = t / T_STAR;
    let rhod = rho / RHO_STAR;

    let my0 = td.sqrt() / A.iter().enumerate().map(|(i, a)| a / td.powi(i as i32)).sum::<f64>();
    let sum = power_sum::sum(&I, &J, &N, 1.0 / td - 1.0, rhod - 1.0, Partial::Value);
    let my1 = (rhod * sum).exp();

    my0 * my1 * MY_STAR
}

/// Thermal conductivity of D₂O (W/(m·K)) from density (kg/m³) and
/// temperature (K).
pub fn thermal_conductivity(rho: f64, t: f64) -> f64 {
    const A: [f64; 6] = [1.0, 37.3223, 22.5485, 13.0465, 0.0, -2.60735];
    const B_E: f64 = -2.506;
    const B: [f64; 5] = [-167.31, 483.656, -191.039, 73.0358, -7.57467];
    const C1: f64 = 35429.6;
    const C2: f64 = 5000.0e6;
    const C_T1: f64 = 0.144847;
    const C_T2: f64 = -5.64493;
    const C_R1: f64 = -2.80000;
    const C_R2: f64 = -0.080738543;
    const C_R3: f64 = -17.9430;
    const RHO_R1: f64 = 0.125698;
    const D1: f64 = -741.112;
    // λ* = 0.742128 mW/(m·K)
    const TC_STAR: f64 = 0.742128e-3;

    let td = t / T_STAR;
    let rhod = rho / RHO_STAR;

    let tau = td / ((td - 1.1).abs() + 1.1);
    let f1 = (C_T1 * td + C_T2 * td * td).exp();
    let f2 = (C_R1 * (rhod - 1.0).powi(2)).exp() + C_R2 * (C_R3 * (rhod - RHO_R1).powi(2)).exp();
    let f3 = 1.0 + (60.0 * (tau - 1.0) + 20.0).exp();
    let f4 = 1.0 + (100.0 * (tau - 1.0) + 15.0).exp();

    let tc_o: f64 = A.iter().enumerate().map(|(i, a)| a * td.powi(i as i32)).sum();
    let delta_tc = B[0] * (1.0 - (B_E * rhod).exp())
        + B.iter().enumerate().skip(1).map(|(i, b)| b * rhod.powi(i as i32)).sum::<f64>();
    let delta_tc_c = C1 * f1 * f2 * (1.0 + f2 * f2 * (C2 * f1.powi(4) / f3 + 3.5 * f2 / f4));
    let delta_tc_l = D1 * f1.powf(1.2) * (1.0 - (-(rhod / 2.5).powi(10)).exp());

    (tc_o + delta_tc + delta_tc_c + delta_tc_l) * TC_STAR
}

// ────────────────────────────────────────────────────────────────────
//  HeavyWater façade
// ────────────────────────────────────────────────────────────────────

/// Unit-aware access to the heavy-water transport properties.
///
/// ```
/// use xsteam::{HeavyWater, UnitSystem};
///
/// let d2o = HeavyWater::with_units(UnitSystem::mks());
/// let my = d2o.my_rhot(1100.0, 20.0).unwrap();
/// assert!(my > 1.0e-3 && my < 1.5e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeavyWater {
    converter: Converter,
}

impl HeavyWater {
    pub fn new() -> Self {
        Self::with_units(UnitSystem::bare())
    }

    pub fn with_units(units: UnitSystem) -> Self {
        info!(?units, "heavy water tables ready");
        Self { converter: Converter::new(units) }
    }

    pub fn units(&self) -> &UnitSystem {
        &self.converter.units
    }

    pub fn critical_temperature(&self) -> f64 {
        self.converter.t_from_si(CRITICAL_TEMPERATURE_D2O)
    }

    pub fn critical_pressure(&self) -> f64 {
        self.converter.p_from_si(CRITICAL_PRESSURE_D2O)
    }

    pub fn critical_density(&self) -> f64 {
        self.converter.rho_from_si(CRITICAL_DENSITY_D2O)
    }

    pub fn critical_point(&self) -> CriticalProps {
        CriticalProps {
            temperature: self.critical_temperature(),
            pressure: self.critical_pressure(),
            density: self.critical_density(),
        }
    }

    /// Viscosity from density and temperature, valid for 277 K ≤ T ≤ 775 K.
    pub fn my_rhot(&self, rho: f64, t: f64) -> Result<f64> {
        let (rho, t) = self.inputs(rho, t)?;
        if !(277.0..=775.0).contains(&t) {
            warn!(t, "heavy water viscosity: temperature out of range");
            return Ok(f64::NAN);
        }
        Ok(self.converter.my_from_si(viscosity(rho, t)))
    }

    /// Thermal conductivity from density and temperature, valid for
    /// 277 K ≤ T ≤ 825 K.
    pub fn tc_rhot(&self, rho: f64, t: f64) -> Result<f64> {
        let (rho, t) = self.inputs(rho, t)?;
        if !(277.0..=825.0).contains(&t) {
            warn!(t, "heavy water conductivity: temperature out of range");
            return Ok(f64::NAN);
        }
        Ok(self.converter.tc_from_si(thermal_conductivity(rho, t)))
    }

    fn inputs(&self, rho: f64, t: f64) -> Result<(f64, f64)> {
        if !rho.is_finite() || !t.is_finite() {
            return Err(XSteamError::InvalidInput(format!("non-finite input rho = {rho}, T = {t}")));
        }
        let rho = self.converter.rho_to_si(rho);
        if rho <= 0.0 {
            return Err(XSteamError::InvalidInput(format!("density must be positive, got {rho}")));
        }
        Ok((rho, self.converter.t_to_si(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn liquid_near_room_temperature() {
        // D₂O at 298.15 K, 1104.5 kg/m³: about 1.1 mPa·s and 0.6 W/(m·K).
        let my = viscosity(1104.5, 298.15);
        assert!(my > 1.0e-3 && my < 1.2e-3, "{my}");
        let tc = thermal_conductivity(1104.5, 298.15);
        assert!(tc > 0.55 && tc < 0.65, "{tc}");
    }

    #[test]
    fn dilute_gas_limit() {
        // At ρ → 0 only the ideal-gas term of the viscosity is left.
        let t = 700.0;
        let td = t / T_STAR;
        let my0 = td.sqrt() / (1.0 + 0.940695 / td + 0.578377 / (td * td) - 0.202044 / td.powi(3));
        assert_relative_eq!(viscosity(0.0, t), my0 * 55.2651e-6, max_relative = 1e-12);
    }

    #[test]
    fn facade_checks_inputs() {
        let d2o = HeavyWater::new();
        assert!(matches!(d2o.my_rhot(-1.0, 300.0), Err(XSteamError::InvalidInput(_))));
        assert!(d2o.my_rhot(1000.0, 800.0).unwrap().is_nan());
        assert!(d2o.tc_rhot(1000.0, 800.0).unwrap().is_finite());
        assert_relative_eq!(d2o.critical_density(), 356.0);
    }
}
