//! Region identifiers and the classifier that maps an input pair onto the
//! IF97 region governing it.
//!
//! | Entry point | Inputs              |
//! |-------------|---------------------|
//! | `from_pt`   | p [MPa], T [K]      |
//! | `from_ph`   | p [MPa], h [kJ/kg]  |
//! | `from_ps`   | p [MPa], s [kJ/(kg·K)] |
//! | `from_hs`   | h [kJ/kg], s [kJ/(kg·K)] |
//! | `from_prho` | p [MPa], ρ [kg/m³]  |
//!
//! The classifier never fails: anything outside the envelope, including
//! non-finite input, is [`Region::Undefined`].

use serde::{Deserialize, Serialize};

use crate::boundary;
use crate::constants::{
    CRITICAL_PRESSURE, CRITICAL_TEMPERATURE, P_MAX, P_MAX_5, P_MIN, P_SAT_13, P_SAT_13_FINE, T_13,
    T_25, T_MAX, T_MIN,
};
use crate::region4::{S_LIQUID_13, S_LIQUID_TRIPLE, S_VAPOUR_TRIPLE};
use crate::{region1, region2, region3, region4, region5};

/// Distance to the saturation pressure under which a (p, T) state is
/// taken as lying on the saturation line (MPa).
pub const SATURATION_PROXIMITY: f64 = 1e-5;

/// Lower pressure bound of the (p, T) envelope (MPa).
const P_MIN_PT: f64 = 0.000611;

/// IF97 region of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated vapour.
    Two,
    /// Near-critical region.
    Three,
    /// Saturation line / two-phase mixture.
    Four,
    /// High-temperature steam.
    Five,
    /// Outside the validity envelope.
    Undefined,
}

impl Region {
    /// Numeric id, 1 to 5, and 0 for [`Region::Undefined`].
    pub fn id(self) -> u8 {
        match self {
            Region::One => 1,
            Region::Two => 2,
            Region::Three => 3,
            Region::Four => 4,
            Region::Five => 5,
            Region::Undefined => 0,
        }
    }

    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Region::One,
            2 => Region::Two,
            3 => Region::Three,
            4 => Region::Four,
            5 => Region::Five,
            _ => Region::Undefined,
        }
    }

    pub fn is_defined(self) -> bool {
        self != Region::Undefined
    }

    // ── Classifier ──────────────────────────────────────────────────

    /// Region from pressure and temperature.
    ///
    /// A state within 1e-5 MPa of the saturation pressure is Region 4.
    pub fn from_pt(p: f64, t: f64) -> Self {
        if !(p.is_finite() && t.is_finite()) {
            return Region::Undefined;
        }
        if t > T_25 && t <= T_MAX && p > P_MIN_PT && p <= P_MAX_5 {
            return Region::Five;
        }
        if !(t >= T_MIN && t <= T_25 && p > P_MIN_PT && p <= P_MAX) {
            return Region::Undefined;
        }

        if t > T_13 {
            if p > boundary::b23_p_t(t) {
                if t < CRITICAL_TEMPERATURE
                    && (p - region4::p_t(t)).abs() < SATURATION_PROXIMITY
                {
                    Region::Four
                } else {
                    Region::Three
                }
            } else {
                Region::Two
            }
        } else {
            let ps = region4::p_t(t);
            if (p - ps).abs() < SATURATION_PROXIMITY {
                Region::Four
            } else if p > ps {
                Region::One
            } else {
                Region::Two
            }
        }
    }

    /// Region from pressure and enthalpy.
    pub fn from_ph(p: f64, h: f64) -> Self {
        if !(p.is_finite() && h.is_finite()) || p < P_MIN || p > P_MAX {
            return Region::Undefined;
        }
        // Below the 0 °C isotherm; the linear test skips the exact one
        // for most inputs.
        if h < 0.963 * p + 2.2 && h < region1::enthalpy(p, T_MIN) {
            return Region::Undefined;
        }

        if p < P_SAT_13_FINE {
            let ts = region4::t_p(p);

            let mut hl = 109.6635 * p.ln() + 40.3481 * p + 734.58;
            if (h - hl).abs() < 100.0 {
                hl = region1::enthalpy(p, ts);
            }
            if h <= hl {
                return Region::One;
            }

            let mut hv = 45.1768 * p.ln() - 20.158 * p + 2804.4;
            if (h - hv).abs() < 50.0 {
                hv = region2::enthalpy(p, ts);
            }
            if h < hv {
                return Region::Four;
            }

            if h < 4000.0 || h <= region2::enthalpy(p, T_25) {
                return Region::Two;
            }
            // Region 5 reaches 50 MPa, so every p in this branch qualifies.
            if h < region5::enthalpy(p, T_MAX) {
                return Region::Five;
            }
            return Region::Undefined;
        }

        if h < region1::enthalpy(p, T_13) {
            return Region::One;
        }
        if h < region2::enthalpy(p, boundary::b23_t_p(p)) {
            return if p > boundary::p3sat_h(h) { Region::Three } else { Region::Four };
        }
        if h < region2::enthalpy(p, T_25) {
            return Region::Two;
        }
        if p <= P_MAX_5 && h < region5::enthalpy(p, T_MAX) {
            return Region::Five;
        }
        Region::Undefined
    }

    /// Region from pressure and entropy.
    pub fn from_ps(p: f64, s: f64) -> Self {
        if !(p.is_finite() && s.is_finite()) || p < P_MIN || p > P_MAX || s < 0.0 {
            return Region::Undefined;
        }
        if s > region5::entropy(p, T_MAX) {
            return Region::Undefined;
        }
        if s > region2::entropy(p, T_25) {
            return if p <= P_MAX_5 { Region::Five } else { Region::Undefined };
        }

        let s_vapour = if p > P_SAT_13 {
            region2::entropy(p, boundary::b23_t_p(p))
        } else {
            region2::entropy(p, region4::t_p(p))
        };
        if s > s_vapour {
            return Region::Two;
        }

        if p > P_SAT_13 && s > region1::entropy(p, T_13) {
            return if p > boundary::p3sat_s(s) { Region::Three } else { Region::Four };
        }
        if p < P_SAT_13 && s > region1::entropy(p, region4::t_p(p)) {
            return Region::Four;
        }
        Region::One
    }

    /// Region from enthalpy and entropy.
    ///
    /// Entropy is split into bands that follow the saturation line. Each
    /// band compares `h` with the saturated enthalpy `h4(s)` first and then
    /// with the upper envelope of the region above it.
    pub fn from_hs(h: f64, s: f64) -> Self {
        if !(h.is_finite() && s.is_finite()) || s < S_LIQUID_TRIPLE {
            return Region::Undefined;
        }
        // Straight line from the triple-point liquid to the triple-point
        // vapour, under the whole dome.
        let h_min = ((-0.0415878 - 2500.89262) / (-0.00015455 - 9.155759)) * s;
        if s < S_VAPOUR_TRIPLE && h < h_min {
            return Region::Undefined;
        }

        if s <= S_LIQUID_13 {
            if h < region4::h_s(s) {
                return Region::Four;
            }
            if s < 3.397782955 {
                let h_max = region1::enthalpy(P_MAX, region1::t_ps(P_MAX, s));
                return if h < h_max { Region::One } else { Region::Undefined };
            }
            if h < boundary::hb13_s(s) {
                return Region::One;
            }
            return if h < region3_h_max(s) { Region::Three } else { Region::Undefined };
        }

        if (5.260578707..=11.9212156897728).contains(&s) {
            if s > S_VAPOUR_TRIPLE {
                let h_min = region2::enthalpy(P_MIN_PT, region2::t_ps(P_MIN_PT, s));
                let h_max = -0.07554022 * s.powi(4) + 3.341571 * s.powi(3) - 55.42151 * s * s
                    + 408.515 * s
                    + 3031.338;
                return if h > h_min && h < h_max { Region::Two } else { Region::Undefined };
            }
            if h < region4::h_s(s) {
                return Region::Four;
            }
            let h_max = if s < 6.04048367171238 {
                region2::enthalpy(P_MAX, region2::t_ps(P_MAX, s))
            } else {
                -2.988734 * s.powi(4) + 121.4015 * s.powi(3) - 1805.15 * s * s + 11720.16 * s
                    - 23998.33
            };
            return if h < h_max { Region::Two } else { Region::Undefined };
        }

        if s <= region3::CRITICAL_ENTROPY {
            if h < region4::h_s(s) {
                return Region::Four;
            }
            return if h < region3_h_max(s) { Region::Three } else { Region::Undefined };
        }

        if s <= 5.260578707 {
            if h < region4::h_s(s) {
                return Region::Four;
            }
            if s <= 5.048096828 {
                return if h < region3_h_max(s) { Region::Three } else { Region::Undefined };
            }
            if h > 2812.942061 {
                if s > 5.09796573397125 {
                    let h_max = region2::enthalpy(P_MAX, region2::t_ps(P_MAX, s));
                    return if h < h_max { Region::Two } else { Region::Undefined };
                }
                return Region::Undefined;
            }
            if h < 2563.592004 {
                return Region::Three;
            }
            let t_b23 = boundary::tb23_hs(h, s);
            return if region2::p_hs(h, s) > boundary::b23_p_t(t_b23) {
                Region::Three
            } else {
                Region::Two
            };
        }

        Region::Undefined
    }

    /// Region from pressure and density.
    pub fn from_prho(p: f64, rho: f64) -> Self {
        if !(p.is_finite() && rho.is_finite()) || rho <= 0.0 || p < P_MIN || p > P_MAX {
            return Region::Undefined;
        }
        let v = 1.0 / rho;

        // v1 at 0 °C is not the true minimum (the 4 °C anomaly), but it is
        // the lower envelope of Region 1.
        if v < region1::volume(p, T_MIN) {
            return Region::Undefined;
        }

        if p < P_SAT_13_FINE {
            let ts = region4::t_p(p);
            if v <= region1::volume(p, ts) {
                return Region::One;
            }
            if v < region2::volume(p, ts) {
                return Region::Four;
            }
            if v <= region2::volume(p, T_25) {
                return Region::Two;
            }
            if v <= region5::volume(p, T_MAX) {
                return Region::Five;
            }
            return Region::Undefined;
        }

        if v < region1::volume(p, T_13) {
            return Region::One;
        }
        if v < region2::volume(p, boundary::b23_t_p(p)) {
            if p >= CRITICAL_PRESSURE {
                return Region::Three;
            }
            let vl = region3::v_ph(p, region4::hl_p(p).value);
            let vv = region3::v_ph(p, region4::hv_p(p).value);
            return if v < vl || v > vv { Region::Three } else { Region::Four };
        }
        if v < region2::volume(p, T_25) {
            return Region::Two;
        }
        if p <= P_MAX_5 && v <= region5::volume(p, T_MAX) {
            return Region::Five;
        }
        Region::Undefined
    }
}

/// Enthalpy of Region 3 on the 100 MPa isobar at entropy `s`.
fn region3_h_max(s: f64) -> f64 {
    let t = region3::t_ps(P_MAX, s);
    let v = region3::v_ps(P_MAX, s);
    region3::enthalpy(1.0 / v, t)
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Undefined => write!(f, "undefined"),
            r => write!(f, "Region {}", r.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for id in 0..=5 {
            assert_eq!(Region::from_id(id).id(), id);
        }
        assert_eq!(Region::from_id(9), Region::Undefined);
        assert_eq!(Region::Three.to_string(), "Region 3");
        assert_eq!(Region::Undefined.to_string(), "undefined");
    }

    #[test]
    fn pt_reference_states() {
        assert_eq!(Region::from_pt(3.0, 300.0), Region::One);
        assert_eq!(Region::from_pt(0.0035, 300.0), Region::Two);
        assert_eq!(Region::from_pt(30.0, 700.0), Region::Two);
        assert_eq!(Region::from_pt(25.5837018, 650.0), Region::Three);
        assert_eq!(Region::from_pt(0.5, 1500.0), Region::Five);
        assert_eq!(Region::from_pt(region4::p_t(400.0), 400.0), Region::Four);
    }

    #[test]
    fn pt_envelope_is_inclusive_at_the_edges() {
        assert_eq!(Region::from_pt(1.0, 273.15), Region::One);
        assert_eq!(Region::from_pt(1.0, 2273.15), Region::Five);
        assert_eq!(Region::from_pt(1.0, 2273.16), Region::Undefined);
        assert_eq!(Region::from_pt(60.0, 1500.0), Region::Undefined);
        assert_eq!(Region::from_pt(100.1, 500.0), Region::Undefined);
        assert_eq!(Region::from_pt(f64::NAN, 500.0), Region::Undefined);
    }

    #[test]
    fn ph_classification() {
        assert_eq!(Region::from_ph(3.0, 115.331273), Region::One);
        assert_eq!(Region::from_ph(1.0, 1500.0), Region::Four);
        assert_eq!(Region::from_ph(1.0, 3000.0), Region::Two);
        assert_eq!(Region::from_ph(25.0, 2000.0), Region::Three);
        assert_eq!(Region::from_ph(0.5, 5219.76332), Region::Five);
        assert_eq!(Region::from_ph(1.0, -10.0), Region::Undefined);
    }

    #[test]
    fn ps_classification() {
        assert_eq!(Region::from_ps(3.0, 0.392294792), Region::One);
        assert_eq!(Region::from_ps(1.0, 4.0), Region::Four);
        assert_eq!(Region::from_ps(1.0, 7.0), Region::Two);
        assert_eq!(Region::from_ps(25.0, 4.0), Region::Three);
        assert_eq!(Region::from_ps(1.0, -0.1), Region::Undefined);
    }

    #[test]
    fn hs_classification() {
        assert_eq!(Region::from_hs(550.0, 1.5), Region::One);
        assert_eq!(Region::from_hs(1500.0, 4.0), Region::Four);
        assert_eq!(Region::from_hs(3000.0, 7.0), Region::Two);
        assert_eq!(Region::from_hs(2000.0, 4.2), Region::Three);
        assert_eq!(Region::from_hs(1000.0, -1.0), Region::Undefined);
    }

    #[test]
    fn prho_classification() {
        assert_eq!(Region::from_prho(3.0, 1.0 / 0.00100215168), Region::One);
        assert_eq!(Region::from_prho(1.0, 10.0), Region::Four);
        assert_eq!(Region::from_prho(0.0035, 1.0 / 39.4913866), Region::Two);
        assert_eq!(Region::from_prho(25.5837018, 500.0), Region::Three);
        assert_eq!(Region::from_prho(1.0, 0.0), Region::Undefined);
    }

    #[test]
    fn region5_above_the_region3_pressure_band() {
        let (p, t) = (30.0, 1500.0);
        assert_eq!(Region::from_pt(p, t), Region::Five);
        assert_eq!(Region::from_ph(p, region5::enthalpy(p, t)), Region::Five);
        assert_eq!(Region::from_ps(p, region5::entropy(p, t)), Region::Five);
        assert_eq!(Region::from_prho(p, 1.0 / region5::volume(p, t)), Region::Five);

        // Past 50 MPa the same temperature is outside every region.
        let p = 60.0;
        assert_eq!(Region::from_ph(p, region5::enthalpy(p, t)), Region::Undefined);
        assert_eq!(Region::from_prho(p, 1.0 / region5::volume(p, t)), Region::Undefined);
    }

    #[test]
    fn prho_at_the_critical_pressure_is_region3() {
        assert_eq!(Region::from_prho(CRITICAL_PRESSURE, 322.0), Region::Three);
        assert_eq!(Region::from_prho(CRITICAL_PRESSURE, 500.0), Region::Three);
    }
}
