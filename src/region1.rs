//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, p_sat(T) ≤ p ≤ 100 MPa.
//!
//! Basic equation is the dimensionless Gibbs free energy
//! γ(π, τ) = Σ nᵢ (7.1 − π)^Iᵢ (τ − 1.222)^Jᵢ with π = p / 16.53 MPa and
//! τ = 1386 K / T.
//!
//! | Function          | Inputs     | Output    |
//! |-------------------|------------|-----------|
//! | `volume`          | p, T       | m³/kg     |
//! | `enthalpy`        | p, T       | kJ/kg     |
//! | `internal_energy` | p, T       | kJ/kg     |
//! | `entropy`         | p, T       | kJ/(kg·K) |
//! | `cp`, `cv`        | p, T       | kJ/(kg·K) |
//! | `speed_of_sound`  | p, T       | m/s       |
//! | `t_ph`, `t_ps`    | p, h or s  | K         |
//! | `p_hs`            | h, s       | MPa       |
//! | `t_prho`          | p, ρ       | K (iterative) |

use crate::bisection::{Bisection, Monotonic, Solved};
use crate::constants::{P_SAT_13_FINE, SPECIFIC_GAS_CONSTANT as R, T_13, T_MIN};
use crate::power_sum::{Partial, sum};
use crate::region4;

fn reduced(p: f64, t: f64) -> (f64, f64) {
    (p / 16.53, 1386.0 / t)
}

/// γ and its derivatives with respect to π and τ.
fn gamma(pi: f64, tau: f64, partial: Partial) -> f64 {
    const I: [i32; 34] = [
        0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21,
        23, 29, 30, 31, 32,
    ];
    const J: [i32; 34] = [
        -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8,
        -11, -6, -29, -31, -38, -39, -40, -41,
    ];
    const N: [f64; 34] = [
        0.14632971213167, -0.84548187169114, -3.756360367204, 3.3855169168385,
        -0.95791963387872, 0.15772038513228, -0.016616417199501, 8.1214629983568e-04,
        2.8319080123804e-04, -6.0706301565874e-04, -0.018990068218419, -0.032529748770505,
        -0.021841717175414, -5.283835796993e-05, -4.7184321073267e-04, -3.0001780793026e-04,
        4.7661393906987e-05, -4.4141845330846e-06, -7.2694996297594e-16, -3.1679644845054e-05,
        -2.8270797985312e-06, -8.5205128120103e-10, -2.2425281908e-06, -6.5171222895601e-07,
        -1.4341729937924e-13, -4.0516996860117e-07, -1.2734301741641e-09, -1.7424871230634e-10,
        -6.8762131295531e-19, 1.4478307828521e-20, 2.6335781662795e-23, -1.1947622640071e-23,
        1.8228094581404e-24, -9.3537087292458e-26,
    ];

    let raw = sum(&I, &J, &N, 7.1 - pi, tau - 1.222, partial);
    // d/dπ = −d/d(7.1 − π)
    match partial {
        Partial::X | Partial::XY => -raw,
        _ => raw,
    }
}

// ── Forward equations ───────────────────────────────────────────────

pub fn volume(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    R * t / p * pi * gamma(pi, tau, Partial::X) / 1000.0
}

pub fn enthalpy(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    R * t * tau * gamma(pi, tau, Partial::Y)
}

pub fn internal_energy(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    R * t * (tau * gamma(pi, tau, Partial::Y) - pi * gamma(pi, tau, Partial::X))
}

pub fn entropy(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    R * (tau * gamma(pi, tau, Partial::Y) - gamma(pi, tau, Partial::Value))
}

pub fn cp(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    -R * tau * tau * gamma(pi, tau, Partial::YY)
}

pub fn cv(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    let g_p = gamma(pi, tau, Partial::X);
    let g_pt = gamma(pi, tau, Partial::XY);
    let g_pp = gamma(pi, tau, Partial::XX);
    let g_tt = gamma(pi, tau, Partial::YY);
    R * (-tau * tau * g_tt + (g_p - tau * g_pt).powi(2) / g_pp)
}

pub fn speed_of_sound(p: f64, t: f64) -> f64 {
    let (pi, tau) = reduced(p, t);
    let g_p = gamma(pi, tau, Partial::X);
    let g_pt = gamma(pi, tau, Partial::XY);
    let g_pp = gamma(pi, tau, Partial::XX);
    let g_tt = gamma(pi, tau, Partial::YY);
    let denom = (g_p - tau * g_pt).powi(2) / (tau * tau * g_tt) - g_pp;
    (1000.0 * R * t * g_p * g_p / denom).sqrt()
}

// ── Backward equations ──────────────────────────────────────────────

/// Temperature from pressure and enthalpy (IF97 eq. 11).
pub fn t_ph(p: f64, h: f64) -> f64 {
    const I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6];
    const J: [i32; 20] = [0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32];
    const N: [f64; 20] = [
        -238.72489924521, 404.21188637945, 113.49746881718, -5.8457616048039,
        -1.528548241314e-04, -1.0866707695377e-06, -13.391744872602, 43.211039183559,
        -54.010067170506, 30.535892203916, -6.5964749423638, 9.3965400878363e-03,
        1.157364750534e-07, -2.5858641282073e-05, -4.0644363084799e-09, 6.6456186191635e-08,
        8.0670734103027e-11, -9.3477771213947e-13, 5.8265442020601e-15, -1.5020185953503e-17,
    ];

    let eta = h / 2500.0;
    sum(&I, &J, &N, p, eta + 1.0, Partial::Value)
}

/// Temperature from pressure and entropy (IF97 eq. 13).
pub fn t_ps(p: f64, s: f64) -> f64 {
    const I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4];
    const J: [i32; 20] = [0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32];
    const N: [f64; 20] = [
        174.78268058307, 34.806930892873, 6.5292584978455, 0.33039981775489,
        -1.9281382923196e-07, -2.4909197244573e-23, -0.26107636489332, 0.22592965981586,
        -0.064256463395226, 7.8876289270526e-03, 3.5672110607366e-10, 1.7332496994895e-24,
        5.6608900654837e-04, -3.2635483139717e-04, 4.4778286690632e-05, -5.1322156908507e-10,
        -4.2522657042207e-26, 2.6400441360689e-13, 7.8124600459723e-29, -3.0732199903668e-31,
    ];

    sum(&I, &J, &N, p, s + 2.0, Partial::Value)
}

/// Pressure from enthalpy and entropy (supplementary release, eq. 1).
pub fn p_hs(h: f64, s: f64) -> f64 {
    const I: [i32; 19] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 4, 4, 5];
    const J: [i32; 19] = [0, 1, 2, 4, 5, 6, 8, 14, 0, 1, 4, 6, 0, 1, 10, 4, 1, 4, 0];
    const N: [f64; 19] = [
        -0.691997014660582, -18.361254878756, -9.28332409297335, 65.9639569909906,
        -16.2060388912024, 450.620017338667, 854.68067822417, 6075.23214001162,
        32.6487682621856, -26.9408844582931, -319.9478483343, -928.35430704332,
        30.3634537455249, -65.0540422444146, -4309.9131651613, -747.512324096068,
        730.000345529245, 1142.84032569021, -436.407041874559,
    ];

    let eta = h / 3400.0;
    let sigma = s / 7.6;
    sum(&I, &J, &N, eta + 0.05, sigma + 0.05, Partial::Value) * 100.0
}

/// Temperature from pressure and density by bisection.
///
/// The bracket tops out at the saturation temperature below the Region 3
/// corner and at 623.15 K above it. Density falls with temperature over
/// the bracket, except in the 0-4 °C anomaly where two roots exist.
pub fn t_prho(p: f64, rho: f64) -> Solved {
    let hi = if p < P_SAT_13_FINE { region4::t_p(p) } else { T_13 };
    Bisection::new(T_MIN, hi, Monotonic::Decreasing)
        .tolerance(1e-5)
        .solve(rho, |t| 1.0 / volume(p, t))
}
