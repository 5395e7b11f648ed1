//! Melting and sublimation pressures of the ice phases (IAPWS R14-08).
//!
//! Every curve is a correlation in θ = T / T* returning π = p / p*, with
//! the reducing point of each curve at its triple point.

use serde::{Deserialize, Serialize};

use crate::constants::{TRIPLE_POINT_PRESSURE, TRIPLE_POINT_TEMPERATURE};
use crate::error::{Result, XSteamError};

/// Ice polymorph whose melting curve is wanted.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IceType {
    /// Ordinary hexagonal ice
    Ih,
    III,
    V,
    VI,
    VII,
}

impl IceType {
    /// Temperature range `[lo, hi)` of the melting curve, in K.
    pub fn melting_range(self) -> (f64, f64) {
        match self {
            IceType::Ih => (251.165, TRIPLE_POINT_TEMPERATURE),
            IceType::III => (251.165, 256.164),
            IceType::V => (256.164, 273.31),
            IceType::VI => (273.31, 355.0),
            IceType::VII => (355.0, 751.0),
        }
    }

    pub fn covers(self, t: f64) -> bool {
        let (lo, hi) = self.melting_range();
        t >= lo && t < hi
    }

    /// Picks the ice phase from the temperature alone.
    ///
    /// Ice V, VI and VII are chosen automatically. Between 251.165 K and
    /// 256.164 K both ice Ih and ice III melt, so the choice is refused
    /// with [`XSteamError::AmbiguousIceType`]. Outside every curve the
    /// result is `Ok(None)`.
    pub fn from_temperature(t: f64) -> Result<Option<Self>> {
        if IceType::III.covers(t) {
            return Err(XSteamError::AmbiguousIceType(t));
        }
        Ok([IceType::V, IceType::VI, IceType::VII].into_iter().find(|ice| ice.covers(t)))
    }

    /// Melting pressure (MPa) at `t` (K), `NaN` outside this phase's range.
    pub fn melting_pressure(self, t: f64) -> f64 {
        if !self.covers(t) {
            return f64::NAN;
        }
        match self {
            IceType::Ih => {
                const A: [f64; 3] = [0.119539337e7, 0.808183159e5, 0.333826860e4];
                const B: [f64; 3] = [0.300000e1, 0.257500e2, 0.103750e3];
                let theta = t / TRIPLE_POINT_TEMPERATURE;
                let pi = 1.0 + A.iter().zip(&B).map(|(a, b)| a * (1.0 - theta.powf(*b))).sum::<f64>();
                pi * TRIPLE_POINT_PRESSURE
            }
            IceType::III => {
                let theta = t / 251.165;
                (1.0 - 0.299948 * (1.0 - theta.powi(60))) * 208.566
            }
            IceType::V => {
                let theta = t / 256.164;
                (1.0 - 1.18721 * (1.0 - theta.powi(8))) * 350.1
            }
            IceType::VI => {
                let theta = t / 273.31;
                (1.0 - 1.07476 * (1.0 - theta.powf(4.6))) * 632.4
            }
            IceType::VII => {
                let theta = t / 355.0;
                let ln_pi = 0.173683e1 * (1.0 - 1.0 / theta) - 0.544606e-1 * (1.0 - theta.powi(5))
                    + 0.806106e-7 * (1.0 - theta.powi(22));
                ln_pi.exp() * 2216.0
            }
        }
    }
}

impl std::fmt::Display for IceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IceType::Ih => "Ih",
            IceType::III => "III",
            IceType::V => "V",
            IceType::VI => "VI",
            IceType::VII => "VII",
        };
        write!(f, "ice {name}")
    }
}

/// Sublimation pressure of ice Ih (MPa), valid for 50 K ≤ T < 273.16 K.
pub fn sublimation_pressure(t: f64) -> f64 {
    const A: [f64; 3] = [-0.212144006e2, 0.273203819e2, -0.610598130e1];
    const B: [f64; 3] = [0.333333333e-2, 0.120666667e1, 0.170333333e1];

    if !(50.0..TRIPLE_POINT_TEMPERATURE).contains(&t) {
        return f64::NAN;
    }
    let theta = t / TRIPLE_POINT_TEMPERATURE;
    let sum: f64 = A.iter().zip(&B).map(|(a, b)| a * theta.powf(*b)).sum();
    (sum / theta).exp() * TRIPLE_POINT_PRESSURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curves_meet_their_reducing_points() {
        assert_relative_eq!(IceType::III.melting_pressure(251.165), 208.566, max_relative = 1e-12);
        assert_relative_eq!(IceType::V.melting_pressure(256.164), 350.1, max_relative = 1e-12);
        assert_relative_eq!(IceType::VI.melting_pressure(273.31), 632.4, max_relative = 1e-12);
        assert_relative_eq!(IceType::VII.melting_pressure(355.0), 2216.0, max_relative = 1e-12);
    }

    #[test]
    fn ice_ih_melting_pressure_rises_as_temperature_falls() {
        let near_triple = IceType::Ih.melting_pressure(273.159);
        let colder = IceType::Ih.melting_pressure(260.0);
        assert!(colder > near_triple);
        assert!(IceType::Ih.melting_pressure(273.16).is_nan());
    }

    #[test]
    fn selection_by_temperature() {
        assert_eq!(IceType::from_temperature(260.0), Ok(Some(IceType::V)));
        assert_eq!(IceType::from_temperature(300.0), Ok(Some(IceType::VI)));
        assert_eq!(IceType::from_temperature(400.0), Ok(Some(IceType::VII)));
        assert_eq!(IceType::from_temperature(800.0), Ok(None));
        assert_eq!(
            IceType::from_temperature(253.0),
            Err(XSteamError::AmbiguousIceType(253.0))
        );
    }

    #[test]
    fn sublimation_range() {
        assert!(sublimation_pressure(49.0).is_nan());
        assert!(sublimation_pressure(273.16).is_nan());
        assert_relative_eq!(sublimation_pressure(273.159), TRIPLE_POINT_PRESSURE, max_relative = 1e-4);
        assert!(sublimation_pressure(230.0) < sublimation_pressure(250.0));
    }
}
