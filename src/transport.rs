//! Transport properties of ordinary water as functions of the state.
//!
//! * dynamic viscosity, IAPWS 1985 formulation (revised 2003),
//! * thermal conductivity, IAPWS 1998 industrial formulation,
//! * vapour-liquid surface tension, IAPWS 1994.
//!
//! Each function takes the already resolved state (p, T, ρ in internal
//! units) and returns `NaN` outside its own validity range. Resolving the
//! state from a property pair and reporting out-of-range inputs is left
//! to [`Steam`](crate::Steam).

use crate::constants::{CRITICAL_TEMPERATURE, ZERO_CELSIUS};
use crate::power_sum::{self, Partial};

// Reference values: Pa·s, K, kg/m³.
const MY_REF: f64 = 55.071e-6;
const MY_T_REF: f64 = 647.226;
const MY_RHO_REF: f64 = 317.763;

const TC_T_REF: f64 = 647.26;
const TC_RHO_REF: f64 = 317.7;

/// Whether (p, T) lies inside the validity range of the viscosity
/// formulation.
pub fn viscosity_in_range(p: f64, t: f64) -> bool {
    !(t > 900.0 + ZERO_CELSIUS
        || (t > 600.0 + ZERO_CELSIUS && p > 300.0)
        || (t > 150.0 + ZERO_CELSIUS && p > 350.0)
        || p > 500.0)
}

/// Whether (p, T) lies inside the validity range of the thermal
/// conductivity formulation.
pub fn conductivity_in_range(p: f64, t: f64) -> bool {
    if t < ZERO_CELSIUS {
        return false;
    }
    let p_max = if t < 500.0 + ZERO_CELSIUS {
        100.0
    } else if t <= 650.0 + ZERO_CELSIUS {
        70.0
    } else if t <= 800.0 + ZERO_CELSIUS {
        40.0
    } else {
        f64::INFINITY
    };
    p <= p_max
}

/// Dynamic viscosity (Pa·s) at pressure `p` (MPa), temperature `t` (K) and
/// density `rho` (kg/m³).
pub fn viscosity(p: f64, t: f64, rho: f64) -> f64 {
    // (1/T* - 1)^I · (ρ* - 1)^J, zero entries of the 6×7 table omitted.
    const I: [i32; 19] = [0, 1, 4, 5, 0, 1, 2, 3, 0, 1, 2, 0, 1, 2, 3, 0, 3, 1, 3];
    const J: [i32; 19] = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 6];
    const N: [f64; 19] = [
        0.5132047, 0.3205656, -0.7782567, 0.1885447, 0.2151778, 0.7317883, 1.241044, 1.476783,
        -0.2818107, -1.070786, -1.263184, 0.1778064, 0.460504, 0.2340379, -0.4924179, -0.0417661,
        0.1600435, -0.01578386, -0.003629481,
    ];

    if !viscosity_in_range(p, t) {
        return f64::NAN;
    }
    let ts = t / MY_T_REF;
    let rhos = rho / MY_RHO_REF;

    let my0 = ts.sqrt() / (1.0 + 0.978197 / ts + 0.579829 / (ts * ts) - 0.202354 / ts.powi(3));
    let h = power_sum::sum(&I, &J, &N, 1.0 / ts - 1.0, rhos - 1.0, Partial::Value);
    let my1 = (rhos * h).exp();

    my0 * my1 * MY_REF
}

/// Thermal conductivity (W/(m·K)) at pressure `p` (MPa), temperature `t`
/// (K) and density `rho` (kg/m³).
pub fn thermal_conductivity(p: f64, t: f64, rho: f64) -> f64 {
    if !conductivity_in_range(p, t) {
        return f64::NAN;
    }
    let ts = t / TC_T_REF;
    let rhos = rho / TC_RHO_REF;

    let tc0 = ts.sqrt() * (0.0102811 + 0.0299621 * ts + 0.0156146 * ts * ts - 0.00422464 * ts.powi(3));
    let tc1 = -0.397070 + 0.400302 * rhos + 1.06 * (-0.171587 * (rhos + 2.392190).powi(2)).exp();

    let dt = (ts - 1.0).abs() + 0.00308976;
    let q = 2.0 + 0.0822994 / dt.powf(0.6);
    let s = if ts >= 1.0 { 1.0 / dt } else { 10.0932 / dt.powf(0.6) };

    let tc2 = (0.0701309 / ts.powi(10) + 0.0118520)
        * rhos.powf(1.8)
        * (0.642857 * (1.0 - rhos.powf(2.8))).exp()
        + 0.00169937 * s * rhos.powf(q) * ((q / (1.0 + q)) * (1.0 - rhos.powf(1.0 + q))).exp()
        - 1.02 * (-4.11717 * ts.powf(1.5) - 6.17937 / rhos.powi(5)).exp();

    tc0 + tc1 + tc2
}

/// Vapour-liquid surface tension (N/m), valid for 0.01 K ≤ T ≤ T_c.
pub fn surface_tension(t: f64) -> f64 {
    if !(0.01..=CRITICAL_TEMPERATURE).contains(&t) {
        return f64::NAN;
    }
    let tau = 1.0 - t / CRITICAL_TEMPERATURE;
    0.2358 * tau.powf(1.256) * (1.0 - 0.625 * tau)
}

/// Prandtl number from cp (kJ/(kg·K)), viscosity (Pa·s) and conductivity
/// (W/(m·K)).
pub fn prandtl(cp: f64, viscosity: f64, conductivity: f64) -> f64 {
    cp * 1000.0 * viscosity / conductivity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region1;
    use approx::assert_relative_eq;

    #[test]
    fn liquid_at_room_temperature() {
        let (p, t) = (0.1, 298.15);
        let rho = 1.0 / region1::volume(p, t);
        assert_relative_eq!(viscosity(p, t, rho), 890.0e-6, max_relative = 1e-2);
        assert_relative_eq!(thermal_conductivity(p, t, rho), 0.607, max_relative = 1e-2);
    }

    #[test]
    fn surface_tension_at_normal_boiling_point() {
        assert_relative_eq!(surface_tension(373.15), 0.0589118685877, max_relative = 1e-9);
        assert_eq!(surface_tension(CRITICAL_TEMPERATURE), 0.0);
        assert!(surface_tension(700.0).is_nan());
    }

    #[test]
    fn validity_ranges() {
        assert!(viscosity(1.0, 1200.0, 1.0).is_nan());
        assert!(thermal_conductivity(80.0, 800.0, 300.0).is_nan());
        assert!(thermal_conductivity(1.0, 270.0, 1000.0).is_nan());
        assert!(conductivity_in_range(100.0, 700.0));
    }
}
