//! Region 5: high-temperature steam, 1073.15 K < T ≤ 2273.15 K and
//! p ≤ 50 MPa.
//!
//! Same structure as Region 2 (ideal-gas plus residual Gibbs energy) with
//! τ = 1000 K / T and no shift on τ in the residual part. There are no
//! explicit backward equations, `t_ph`, `t_ps` and `t_prho` iterate on the
//! forward equations over the whole temperature range of the region.

use crate::bisection::{Bisection, Monotonic, Solved};
use crate::constants::{T_25, T_MAX};
use crate::gibbs::{Gibbs, Residual};

const J0: [i32; 6] = [0, 1, -3, -2, -1, 2];
const N0: [f64; 6] = [
    -13.179983674201, 6.8540841634434, -0.024805148933466, 0.36901534980333, -3.1161318213925,
    -0.32961626538917,
];

const IR: [i32; 5] = [1, 1, 1, 2, 3];
const JR: [i32; 5] = [0, 1, 3, 9, 3];
const NR: [f64; 5] = [
    -1.2563183589592e-04, 2.1774678714571e-03, -0.004594282089991, -3.9724828359569e-06,
    1.2919228289784e-07,
];

fn gibbs(p: f64, t: f64) -> Gibbs {
    let residual = Residual { i: &IR, j: &JR, n: &NR, tau_shift: 0.0 };
    Gibbs::evaluate(p, t, 1000.0, &J0, &N0, &residual)
}

pub fn volume(p: f64, t: f64) -> f64 {
    gibbs(p, t).volume()
}

pub fn enthalpy(p: f64, t: f64) -> f64 {
    gibbs(p, t).enthalpy()
}

pub fn internal_energy(p: f64, t: f64) -> f64 {
    gibbs(p, t).internal_energy()
}

pub fn entropy(p: f64, t: f64) -> f64 {
    gibbs(p, t).entropy()
}

pub fn cp(p: f64, t: f64) -> f64 {
    gibbs(p, t).cp()
}

pub fn cv(p: f64, t: f64) -> f64 {
    gibbs(p, t).cv()
}

pub fn speed_of_sound(p: f64, t: f64) -> f64 {
    gibbs(p, t).speed_of_sound()
}

/// Temperature from pressure and enthalpy.
pub fn t_ph(p: f64, h: f64) -> Solved {
    Bisection::new(T_25, T_MAX, Monotonic::Increasing)
        .tolerance(1e-5)
        .solve(h, |t| enthalpy(p, t))
}

/// Temperature from pressure and entropy.
pub fn t_ps(p: f64, s: f64) -> Solved {
    Bisection::new(T_25, T_MAX, Monotonic::Increasing)
        .tolerance(1e-5)
        .solve(s, |t| entropy(p, t))
}

/// Temperature from pressure and density, over the full Region 5 range.
pub fn t_prho(p: f64, rho: f64) -> Solved {
    Bisection::new(T_25, T_MAX, Monotonic::Decreasing)
        .tolerance(1e-6)
        .solve(rho, |t| 1.0 / volume(p, t))
}
