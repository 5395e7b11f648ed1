//! Property relations for a Gibbs free energy split into an ideal-gas part
//! γ⁰ = ln π + Σ n⁰ τ^J⁰ and a residual part γʳ = Σ nʳ π^I (τ − shift)^J.
//!
//! Regions 2, 2-metastable and 5 share these relations and only differ in
//! their tables and reducing temperature. Pressure is reduced by 1 MPa in
//! all three, so π equals p numerically.

use crate::constants::SPECIFIC_GAS_CONSTANT as R;
use crate::power_sum::{Partial, series, sum};

/// A coefficient table of the residual part.
pub(crate) struct Residual<'a> {
    pub i: &'a [i32],
    pub j: &'a [i32],
    pub n: &'a [f64],
    pub tau_shift: f64,
}

/// γ⁰, γʳ and the derivatives the property relations need at one state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gibbs {
    t: f64,
    pi: f64,
    tau: f64,
    g0: f64,
    g0_t: f64,
    g0_tt: f64,
    gr: f64,
    gr_p: f64,
    gr_pp: f64,
    gr_t: f64,
    gr_tt: f64,
    gr_pt: f64,
}

impl Gibbs {
    pub fn evaluate(p: f64, t: f64, t_ref: f64, j0: &[i32], n0: &[f64], res: &Residual) -> Self {
        let pi = p;
        let tau = t_ref / t;
        let y = tau - res.tau_shift;
        let r = |d| sum(res.i, res.j, res.n, pi, y, d);
        Self {
            t,
            pi,
            tau,
            g0: pi.ln() + series(j0, n0, tau, 0),
            g0_t: series(j0, n0, tau, 1),
            g0_tt: series(j0, n0, tau, 2),
            gr: r(Partial::Value),
            gr_p: r(Partial::X),
            gr_pp: r(Partial::XX),
            gr_t: r(Partial::Y),
            gr_tt: r(Partial::YY),
            gr_pt: r(Partial::XY),
        }
    }

    pub fn volume(&self) -> f64 {
        R * self.t / self.pi * self.pi * (1.0 / self.pi + self.gr_p) / 1000.0
    }

    pub fn enthalpy(&self) -> f64 {
        R * self.t * self.tau * (self.g0_t + self.gr_t)
    }

    pub fn internal_energy(&self) -> f64 {
        R * self.t
            * (self.tau * (self.g0_t + self.gr_t) - self.pi * (1.0 / self.pi + self.gr_p))
    }

    pub fn entropy(&self) -> f64 {
        R * (self.tau * (self.g0_t + self.gr_t) - (self.g0 + self.gr))
    }

    pub fn cp(&self) -> f64 {
        -R * self.tau * self.tau * (self.g0_tt + self.gr_tt)
    }

    pub fn cv(&self) -> f64 {
        let (pi, tau) = (self.pi, self.tau);
        let num = (1.0 + pi * self.gr_p - tau * pi * self.gr_pt).powi(2);
        R * (-tau * tau * (self.g0_tt + self.gr_tt) - num / (1.0 - pi * pi * self.gr_pp))
    }

    pub fn speed_of_sound(&self) -> f64 {
        let (pi, tau) = (self.pi, self.tau);
        let num = 1.0 + 2.0 * pi * self.gr_p + (pi * self.gr_p).powi(2);
        let den = (1.0 - pi * pi * self.gr_pp)
            + (1.0 + pi * self.gr_p - tau * pi * self.gr_pt).powi(2)
                / (tau * tau * (self.g0_tt + self.gr_tt));
        (1000.0 * R * self.t * num / den).sqrt()
    }
}
