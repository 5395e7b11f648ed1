//! Auxiliary boundary equations between regions.
//!
//! All closed forms, no iteration. Inputs and outputs in K, MPa, kJ/kg and
//! kJ/(kg·K).

use crate::power_sum::{Partial, sum};

// ── Region 2 / Region 3 ─────────────────────────────────────────────

/// B23 boundary pressure at temperature `t` (IF97 eq. 5).
pub fn b23_p_t(t: f64) -> f64 {
    348.05185628969 - 1.1671859879975 * t + 1.0192970039326e-03 * t * t
}

/// B23 boundary temperature at pressure `p` (IF97 eq. 6).
pub fn b23_t_p(p: f64) -> f64 {
    572.54459862746 + ((p - 13.91883977887) / 1.0192970039326e-03).sqrt()
}

/// Temperature on the B23 boundary from `(h, s)`, used to split
/// Region 2 from Region 3 above the critical entropy.
pub fn tb23_hs(h: f64, s: f64) -> f64 {
    const I: [i32; 25] = [
        -12, -10, -8, -4, -3, -2, -2, -2, -2, 0, 1, 1, 1, 3, 3, 5, 6, 6, 8, 8, 8, 12, 12, 14, 14,
    ];
    const J: [i32; 25] = [
        10, 8, 3, 4, 3, -6, 2, 3, 4, 0, -3, -2, 10, -2, -1, -5, -6, -3, -8, -2, -1, -12, -1, -12, 1,
    ];
    const N: [f64; 25] = [
        6.2909626082981e-04, -8.23453502583165e-04, 5.15446951519474e-08, -1.17565945784945,
        3.48519684726192, -5.07837382408313e-12, -2.84637670005479, -2.36092263939673,
        6.01492324973779, 1.48039650824546, 3.60075182221907e-04, -1.26700045009952e-02,
        -1221843.32521413, 0.149276502463272, 0.698733471798484, -2.52207040114321e-02,
        1.47151930985213e-02, -1.08618917681849, -9.36875039816322e-04, 81.9877897570217,
        -182.041861521835, 2.61907376402688e-06, -29162.6417025961, 1.40660774926165e-05,
        7832370.62349385,
    ];

    let eta = h / 3000.0;
    let sigma = s / 5.3;
    sum(&I, &J, &N, eta - 0.727, sigma - 0.864, Partial::Value) * 900.0
}

// ── Region 3 saturation ─────────────────────────────────────────────

/// Saturation pressure inside Region 3 from enthalpy.
pub fn p3sat_h(h: f64) -> f64 {
    const I: [i32; 14] = [0, 1, 1, 1, 1, 5, 7, 8, 14, 20, 22, 24, 28, 36];
    const J: [i32; 14] = [0, 1, 3, 4, 36, 3, 0, 24, 16, 16, 3, 18, 8, 24];
    const N: [f64; 14] = [
        0.600073641753024, -9.36203654849857, 24.6590798594147, -107.014222858224,
        -91582131580576.8, -8623.32011700662, -23.5837344740032, 2.52304969384128e17,
        -3.89718771997719e18, -3.33775713645296e22, 35649946963.6328, -1.48547544720641e26,
        3.30611514838798e18, 8.13641294467829e37,
    ];

    let eta = h / 2600.0;
    sum(&I, &J, &N, eta - 1.02, eta - 0.608, Partial::Value) * 22.0
}

/// Saturation pressure inside Region 3 from entropy.
pub fn p3sat_s(s: f64) -> f64 {
    const I: [i32; 10] = [0, 1, 1, 4, 12, 12, 16, 24, 28, 32];
    const J: [i32; 10] = [0, 1, 32, 7, 4, 14, 36, 10, 0, 18];
    const N: [f64; 10] = [
        0.639767553612785, -12.9727445396014, -2.24595125848403e15, 1774667.41801846,
        7170793495.71538, -3.78829107169011e17, -9.55586736431328e34, 1.87269814676188e23,
        119254746466.473, 1.10649277244882e36,
    ];

    let sigma = s / 5.2;
    sum(&I, &J, &N, sigma - 1.03, sigma - 0.699, Partial::Value) * 22.0
}

// ── Region 1 / Region 3 ─────────────────────────────────────────────

/// Enthalpy on the B13 boundary (T = 623.15 K) from entropy.
pub fn hb13_s(s: f64) -> f64 {
    const I: [i32; 6] = [0, 1, 1, 3, 5, 6];
    const J: [i32; 6] = [0, -2, 2, -12, -4, -3];
    const N: [f64; 6] = [
        0.913965547600543, -4.30944856041991e-05, 60.3235694765419, 1.17518273082168e-18,
        0.220000904781292, -69.0815545851641,
    ];

    let sigma = s / 3.8;
    sum(&I, &J, &N, sigma - 0.884, sigma - 0.864, Partial::Value) * 1700.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn b23_reference_point() {
        // IF97 section 4: T = 623.15 K ↔ p = 16.5291643 MPa
        assert_relative_eq!(b23_p_t(623.15), 16.5291643, max_relative = 1e-7);
        assert_relative_eq!(b23_t_p(16.5291643), 623.15, max_relative = 1e-7);
    }

    #[test]
    fn p3sat_reference_points() {
        // Supplementary release p-h-s, table 18
        assert_relative_eq!(p3sat_h(1700.0), 17.24175718, max_relative = 1e-7);
        assert_relative_eq!(p3sat_h(2000.0), 21.93442957, max_relative = 1e-7);
        assert_relative_eq!(p3sat_h(2400.0), 20.18090839, max_relative = 1e-7);
        assert_relative_eq!(p3sat_s(3.8), 16.87755057, max_relative = 1e-7);
        assert_relative_eq!(p3sat_s(4.2), 21.64451789, max_relative = 1e-7);
        assert_relative_eq!(p3sat_s(5.2), 16.68968482, max_relative = 1e-7);
    }

    #[test]
    fn boundary_hs_reference_points() {
        // Supplementary release p-h-s, tables 20 and 25
        assert_relative_eq!(hb13_s(3.7), 1632.525047, max_relative = 1e-7);
        assert_relative_eq!(hb13_s(3.6), 1593.027214, max_relative = 1e-7);
        assert_relative_eq!(hb13_s(3.5), 1566.104611, max_relative = 1e-7);
        assert_relative_eq!(tb23_hs(2600.0, 5.1), 713.5259364, max_relative = 1e-7);
        assert_relative_eq!(tb23_hs(2700.0, 5.15), 768.5345532, max_relative = 1e-7);
        assert_relative_eq!(tb23_hs(2800.0, 5.2), 817.6202120, max_relative = 1e-7);
    }
}
