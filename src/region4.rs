//! Region 4: the saturation curve from the triple point to the critical
//! point, and the two-phase states that sit on it.
//!
//! `p_t` and `t_p` are the explicit IF97 saturation equations. The
//! saturated enthalpies above 16.529 MPa come from inverting the Region 3
//! `p3sat_h` boundary, so they carry a [`Solved`] diagnostic.

use crate::bisection::{Bisection, Monotonic, Solved};
use crate::boundary;
use crate::constants::{CRITICAL_PRESSURE, P_MIN, P_SAT_13};
use crate::power_sum::{Partial, sum};
use crate::{region1, region2, region3};

/// Entropy of the saturated liquid at 623.15 K, where the curve enters
/// Region 3 (kJ/(kg·K)).
pub const S_LIQUID_13: f64 = 3.77828134;
/// Entropy of the saturated vapour at 623.15 K (kJ/(kg·K)).
pub const S_VAPOUR_23: f64 = 5.210887663;
/// Entropy of the saturated vapour at the triple point (kJ/(kg·K)).
pub const S_VAPOUR_TRIPLE: f64 = 9.155759395;
/// Entropy of the saturated liquid at the triple point, slightly negative
/// in IF97 (kJ/(kg·K)).
pub const S_LIQUID_TRIPLE: f64 = -0.0001545495919;

/// Which side of the dome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Vapour,
}

// ── Saturation equations ────────────────────────────────────────────

/// Saturation pressure at temperature `t` (IF97 eq. 30).
pub fn p_t(t: f64) -> f64 {
    let theta = t - 0.23855557567849 / (t - 650.17534844798);
    let a = theta * theta + 1167.0521452767 * theta - 724213.16703206;
    let b = -17.073846940092 * theta * theta + 12020.82470247 * theta - 3232555.0322333;
    let c = 14.91510861353 * theta * theta - 4823.2657361591 * theta + 405113.40542057;
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature at pressure `p` (IF97 eq. 31).
pub fn t_p(p: f64) -> f64 {
    let beta = p.powf(0.25);
    let e = beta * beta - 17.073846940092 * beta + 14.91510861353;
    let f = 1167.0521452767 * beta * beta + 12020.82470247 * beta - 4823.2657361591;
    let g = -724213.16703206 * beta * beta - 3232555.0322333 * beta + 405113.40542057;
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    let n10 = 650.17534844798;
    (n10 + d - ((n10 + d).powi(2) - 4.0 * (-0.23855557567849 + n10 * d)).sqrt()) / 2.0
}

/// Saturated enthalpy as a function of entropy, over the whole dome.
///
/// Four correlations cover the liquid line below and above 623.15 K and
/// the vapour line above and below the 2c/2b split. Outside
/// `[S_LIQUID_TRIPLE, S_VAPOUR_TRIPLE)` the result is `NaN`.
pub fn h_s(s: f64) -> f64 {
    if s > S_LIQUID_TRIPLE && s <= S_LIQUID_13 {
        // h'1(s)
        const I: [i32; 27] = [
            0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 4, 5, 5, 7, 8, 12, 12, 14, 14, 16, 20, 20, 22, 24, 28,
            32, 32,
        ];
        const J: [i32; 27] = [
            14, 36, 3, 16, 0, 5, 4, 36, 4, 16, 24, 18, 24, 1, 4, 2, 4, 1, 22, 10, 12, 28, 8, 3, 0,
            6, 8,
        ];
        const N: [f64; 27] = [
            0.332171191705237, 6.11217706323496e-04, -8.82092478906822, -0.45562819254325,
            -2.63483840850452e-05, -22.3949661148062, -4.28398660164013, -0.616679338856916,
            -14.682303110404, 284.523138727299, -113.398503195444, 1156.71380760859,
            395.551267359325, -1.54891257229285, 19.4486637751291, -3.57915139457043,
            -3.35369414148819, -0.66442679633246, 32332.1885383934, 3317.66744667084,
            -22350.1257931087, 5739538.75852936, 173.226193407919, -3.63968822121321e-02,
            8.34596332878346e-07, 5.03611916682674, 65.5444787064505,
        ];
        let sigma = s / 3.8;
        sum(&I, &J, &N, sigma - 1.09, sigma + 0.0000366, Partial::Value) * 1700.0
    } else if s > S_LIQUID_13 && s <= region3::CRITICAL_ENTROPY {
        // h'3a(s)
        const I: [i32; 19] = [0, 0, 0, 0, 2, 3, 4, 4, 5, 5, 6, 7, 7, 7, 10, 10, 10, 32, 32];
        const J: [i32; 19] = [1, 4, 10, 16, 1, 36, 3, 16, 20, 36, 4, 2, 28, 32, 14, 32, 36, 0, 6];
        const N: [f64; 19] = [
            0.822673364673336, 0.181977213534479, -0.011200026031362, -7.46778287048033e-04,
            -0.179046263257381, 4.24220110836657e-02, -0.341355823438768, -2.09881740853565,
            -8.22477343323596, -4.99684082076008, 0.191413958471069, 5.81062241093136e-02,
            -1655.05498701029, 1588.70443421201, -85.0623535172818, -31771.4386511207,
            -94589.0406632871, -1.3927384708869e-06, 0.63105253224098,
        ];
        let sigma = s / 3.8;
        sum(&I, &J, &N, sigma - 1.09, sigma + 0.0000366, Partial::Value) * 1700.0
    } else if s > region3::CRITICAL_ENTROPY && s <= 5.85 {
        // h''2c3b(s)
        const I: [i32; 16] = [0, 0, 0, 1, 1, 5, 6, 7, 8, 8, 12, 16, 22, 22, 24, 36];
        const J: [i32; 16] = [0, 3, 4, 0, 12, 36, 12, 16, 2, 20, 32, 36, 2, 32, 7, 20];
        const N: [f64; 16] = [
            1.04351280732769, -2.27807912708513, 1.80535256723202, 0.420440834792042,
            -105721.24483466, 4.36911607493884e24, -328032702839.753, -6.7868676080427e15,
            7439.57464645363, -3.56896445355761e19, 1.67590585186801e31, -3.55028625419105e37,
            396611982166.538, -4.14716268484468e40, 3.59080103867382e18, -1.16994334851995e40,
        ];
        let sigma = s / 5.9;
        sum(&I, &J, &N, sigma - 1.02, sigma - 0.726, Partial::Value).powi(4) * 2800.0
    } else if s > 5.85 && s < S_VAPOUR_TRIPLE {
        // h''2ab(s)
        const I: [i32; 30] = [
            1, 1, 2, 2, 4, 4, 7, 8, 8, 10, 12, 12, 18, 20, 24, 28, 28, 28, 28, 28, 32, 32, 32, 32,
            32, 36, 36, 36, 36, 36,
        ];
        const J: [i32; 30] = [
            8, 24, 4, 32, 1, 2, 7, 5, 12, 1, 0, 7, 10, 12, 32, 8, 12, 20, 22, 24, 2, 7, 12, 14, 24,
            10, 12, 20, 22, 28,
        ];
        const N: [f64; 30] = [
            -524.581170928788, -9269472.18142218, -237.385107491666, 21077015581.2776,
            -23.9494562010986, 221.802480294197, -5104725.33393438, 1249813.96109147,
            2000084369.96201, -815.158509791035, -157.612685637523, -11420042233.2791,
            6.62364680776872e15, -2.27622818296144e18, -1.71048081348406e31, 6.60788766938091e15,
            1.66320055886021e22, -2.18003784381501e29, -7.87276140295618e29, 1.51062329700346e31,
            7957321.70300541, 1.31957647355347e15, -3.2509706829914e23, -4.18600611419248e25,
            2.97478906557467e34, -9.53588761745473e19, 1.66957699620939e24, -1.75407764869978e32,
            3.47581490626396e34, -7.10971318427851e38,
        ];
        let eta = sum(&I, &J, &N, 5.21 / s - 0.513, s / 9.2 - 0.524, Partial::Value);
        eta.exp() * 2800.0
    } else {
        f64::NAN
    }
}

/// Saturation pressure as a function of entropy, through `h_s` and the
/// `p(h, s)` backward equation of the region the curve passes through.
pub fn p_s(s: f64) -> f64 {
    let h = h_s(s);
    if s > S_LIQUID_TRIPLE && s <= S_LIQUID_13 {
        region1::p_hs(h, s)
    } else if s > S_LIQUID_13 && s <= S_VAPOUR_23 {
        region3::p_hs(h, s)
    } else if s > S_VAPOUR_23 && s < S_VAPOUR_TRIPLE {
        region2::p_hs(h, s)
    } else {
        f64::NAN
    }
}

// ── Saturated enthalpies ────────────────────────────────────────────

fn on_curve(p: f64) -> bool {
    p > P_MIN && p < CRITICAL_PRESSURE
}

/// Saturated liquid enthalpy at pressure `p`.
pub fn hl_p(p: f64) -> Solved {
    if !on_curve(p) {
        return Solved::exact(f64::NAN);
    }
    if p < P_SAT_13 {
        return Solved::exact(region1::enthalpy(p, t_p(p)));
    }
    Bisection::new(1670.858218, 2087.23500164864, Monotonic::Increasing)
        .tolerance(1e-5)
        .solve(p, boundary::p3sat_h)
}

/// Saturated vapour enthalpy at pressure `p`.
pub fn hv_p(p: f64) -> Solved {
    if !on_curve(p) {
        return Solved::exact(f64::NAN);
    }
    if p < P_SAT_13 {
        return Solved::exact(region2::enthalpy(p, t_p(p)));
    }
    Bisection::new(2087.23500164864, 2563.592004 + 5.0, Monotonic::Decreasing)
        .tolerance(1e-6)
        .solve(p, boundary::p3sat_h)
}

/// Saturated enthalpy of one side of the dome.
pub fn h_p(p: f64, phase: Phase) -> Solved {
    match phase {
        Phase::Liquid => hl_p(p),
        Phase::Vapour => hv_p(p),
    }
}

/// Saturated entropy of one side of the dome at pressure `p`.
///
/// Above 16.529 MPa the side is evaluated in Region 3 at the density the
/// `v(p, h)` backward equation gives for the saturated enthalpy.
pub fn s_p(p: f64, phase: Phase) -> Solved {
    let t = t_p(p);
    if p < P_SAT_13 {
        let s = match phase {
            Phase::Liquid => region1::entropy(p, t),
            Phase::Vapour => region2::entropy(p, t),
        };
        return Solved::exact(s);
    }
    h_p(p, phase).map(|h| region3::entropy(1.0 / region3::v_ph(p, h), t))
}

// ── Two-phase states ────────────────────────────────────────────────

fn lever(value: f64, liquid: f64, vapour: f64) -> f64 {
    if value > vapour {
        1.0
    } else if value < liquid {
        0.0
    } else {
        (value - liquid) / (vapour - liquid)
    }
}

/// Vapour mass fraction from pressure and enthalpy, clamped to `[0, 1]`.
pub fn x_ph(p: f64, h: f64) -> Solved {
    let hl = hl_p(p);
    let hv = hv_p(p);
    Solved::exact(lever(h, hl.value, hv.value)).after(hv).after(hl)
}

/// Vapour mass fraction from pressure and entropy, clamped to `[0, 1]`.
pub fn x_ps(p: f64, s: f64) -> Solved {
    let sl = s_p(p, Phase::Liquid);
    let sv = s_p(p, Phase::Vapour);
    Solved::exact(lever(s, sl.value, sv.value)).after(sv).after(sl)
}

/// Saturation temperature from enthalpy and entropy.
///
/// For vapour-side entropies in `(5.210887825, 9.15546555571324)` this
/// is the explicit T_sat(h, s) equation. Elsewhere the saturation pressure
/// is found by bisection on the mixture entropy, bounded above by the
/// saturated-liquid pressure of `h`.
pub fn t_hs(h: f64, s: f64) -> Solved {
    if s > 5.210887825 && s < 9.15546555571324 {
        const I: [i32; 36] = [
            0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 5, 5, 6, 6, 6, 8, 10, 10, 12, 14,
            14, 16, 16, 18, 18, 18, 20, 28,
        ];
        const J: [i32; 36] = [
            0, 3, 12, 0, 1, 2, 5, 0, 5, 8, 0, 2, 3, 4, 0, 1, 1, 2, 4, 16, 6, 8, 22, 1, 20, 36, 24,
            1, 28, 12, 32, 14, 22, 36, 24, 36,
        ];
        const N: [f64; 36] = [
            0.179882673606601, -0.267507455199603, 1.162767226126, 0.147545428713616,
            -0.512871635973248, 0.421333567697984, 0.56374952218987, 0.429274443819153,
            -3.3570455214214, 10.8890916499278, -0.248483390456012, 0.30415322190639,
            -0.494819763939905, 1.07551674933261, 7.33888415457688e-02, 1.40170545411085e-02,
            -0.106110975998808, 1.68324361811875e-02, 1.25028363714877, 1013.16840309509,
            -1.51791558000712, 52.4277865990866, 23049.5545563912, 2.49459806365456e-02,
            2107964.67412137, 366836848.613065, -144814105.365163, -1.7927637300359e-03,
            4899556021.00459, 471.262212070518, -82929439019.8652, -1715.45662263191,
            3557776.82973575, 586062760258.436, -12988763.5078195, 31724744937.1057,
        ];
        let theta = sum(&I, &J, &N, h / 2800.0 - 0.119, s / 9.2 - 1.07, Partial::Value);
        return Solved::exact(theta * 550.0);
    }

    const P_LOW: f64 = 0.000611;
    let p_liquid = if s <= S_LIQUID_13 {
        // Pressure at which the saturated liquid has enthalpy h.
        Bisection::new(P_LOW, boundary::b23_p_t(623.15), Monotonic::Increasing)
            .tolerance(1e-5)
            .min_width(1e-4)
            .solve(h, |p| region1::enthalpy(p, t_p(p)))
    } else {
        Solved::exact(boundary::p3sat_h(h))
    };

    Bisection::new(P_LOW, p_liquid.value, Monotonic::Decreasing)
        .tolerance(1e-6)
        .min_width(1e-7)
        .solve(s, |p| {
            let x = x_ph(p, h).value;
            let sl = s_p(p, Phase::Liquid).value;
            let sv = s_p(p, Phase::Vapour).value;
            x * sv + (1.0 - x) * sl
        })
        .map(t_p)
        .after(p_liquid)
}
