use approx::assert_relative_eq;
use xsteam::{boundary, region1, region2, region3, region4, region5};

/// Accumulated relative error of `f` over a table of reference values.
fn table_error(expected: &[f64], f: impl Fn(usize) -> f64) -> f64 {
    expected.iter().enumerate().map(|(i, e)| ((f(i) - e) / e).abs()).sum()
}

// ═══════════════════════════════════════════════════════════════════
//  Region 1: compressed liquid
// ═══════════════════════════════════════════════════════════════════

#[test]
fn region1_forward_equations() {
    let p = [3.0, 80.0, 3.0];
    let t = [300.0, 300.0, 500.0];

    let cases: [(&str, fn(f64, f64) -> f64, [f64; 3]); 6] = [
        ("v", region1::volume, [0.00100215168, 0.000971180894, 0.001202418]),
        ("h", region1::enthalpy, [115.331273, 184.142828, 975.542239]),
        ("u", region1::internal_energy, [112.324818, 106.448356, 971.934985]),
        ("s", region1::entropy, [0.392294792, 0.368563852, 2.58041912]),
        ("cp", region1::cp, [4.17301218, 4.01008987, 4.65580682]),
        ("w", region1::speed_of_sound, [1507.73921, 1634.69054, 1240.71337]),
    ];
    for (name, f, expected) in cases {
        let err = table_error(&expected, |i| f(p[i], t[i]));
        assert!(err < 2e-8, "region 1 {name}(p, T): accumulated error {err:e}");
    }
}

#[test]
fn region1_backward_equations() {
    let p = [3.0, 80.0, 80.0];

    let h = [500.0, 500.0, 1500.0];
    let err = table_error(&[391.798509, 378.108626, 611.041229], |i| region1::t_ph(p[i], h[i]));
    assert!(err < 1e-8, "T(p, h): {err:e}");

    let s = [0.5, 0.5, 3.0];
    let err = table_error(&[307.842258, 309.979785, 565.899909], |i| region1::t_ps(p[i], s[i]));
    assert!(err < 1e-8, "T(p, s): {err:e}");

    let h = [0.001, 90.0, 1500.0];
    let s = [0.0, 0.0, 3.4];
    let err = table_error(&[0.0009800980612, 91.929547272, 58.68294423], |i| {
        region1::p_hs(h[i], s[i])
    });
    assert!(err < 1e-8, "p(h, s): {err:e}");
}

#[test]
fn region1_t_prho_inverts_volume() {
    let (p, t) = (10.0, 400.0);
    let rho = 1.0 / region1::volume(p, t);
    let back = region1::t_prho(p, rho);
    assert_relative_eq!(back.value, t, max_relative = 1e-6);
}

// ═══════════════════════════════════════════════════════════════════
//  Region 2: superheated vapour
// ═══════════════════════════════════════════════════════════════════

#[test]
fn region2_forward_equations() {
    let p = [0.0035, 0.0035, 30.0];
    let t = [300.0, 700.0, 700.0];

    let cases: [(&str, fn(f64, f64) -> f64, [f64; 3]); 5] = [
        ("v", region2::volume, [39.4913866, 92.3015898, 0.00542946619]),
        ("h", region2::enthalpy, [2549.91145, 3335.68375, 2631.49474]),
        ("u", region2::internal_energy, [2411.6916, 3012.62819, 2468.61076]),
        ("s", region2::entropy, [8.52238967, 10.1749996, 5.17540298]),
        ("cp", region2::cp, [1.91300162, 2.08141274, 10.3505092]),
    ];
    for (name, f, expected) in cases {
        let err = table_error(&expected, |i| f(p[i], t[i]));
        assert!(err < 2e-8, "region 2 {name}(p, T): accumulated error {err:e}");
    }
}

#[test]
fn region2_metastable_vapour() {
    let p = [1.0, 1.0, 1.5];
    let t = [450.0, 440.0, 450.0];
    let v = [0.192516540, 0.186212297, 0.121685206];
    let h = [0.276881115e4, 0.274015123e4, 0.272134539e4];
    let w = [0.498408101e3, 0.489363295e3, 0.481941819e3];

    for i in 0..3 {
        assert_relative_eq!(region2::metastable::volume(p[i], t[i]), v[i], max_relative = 1e-4);
        assert_relative_eq!(region2::metastable::enthalpy(p[i], t[i]), h[i], max_relative = 1e-4);
        assert_relative_eq!(region2::metastable::speed_of_sound(p[i], t[i]), w[i], max_relative = 1e-4);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Region 3: near-critical
// ═══════════════════════════════════════════════════════════════════

#[test]
fn region3_forward_equations() {
    let rho = [500.0, 200.0, 500.0];
    let t = [650.0, 650.0, 750.0];

    let cases: [(&str, fn(f64, f64) -> f64, [f64; 3]); 5] = [
        ("p", region3::pressure, [25.5837018, 22.2930643, 78.3095639]),
        ("h", region3::enthalpy, [1863.43019, 2375.12401, 2258.68845]),
        ("u", region3::internal_energy, [1812.26279, 2263.65868, 2102.06932]),
        ("s", region3::entropy, [4.05427273, 4.85438792, 4.46971906]),
        ("cp", region3::cp, [13.8935717, 44.6579342, 6.34165359]),
    ];
    for (name, f, expected) in cases {
        let err = table_error(&expected, |i| f(rho[i], t[i]));
        assert!(err < 2e-8, "region 3 {name}(rho, T): accumulated error {err:e}");
    }
}

#[test]
fn region3_enthalpy_from_pressure_and_temperature() {
    let p = [25.583702, 22.293064, 78.309564];
    let t = [650.0, 650.0, 750.0];
    let err = table_error(&[1863.271389, 2375.696155, 2258.626582], |i| {
        region3::h_pt(p[i], t[i]).value
    });
    assert!(err < 1e-6, "h(p, T): {err:e}");
}

#[test]
fn enthalpy_is_continuous_across_b23() {
    for k in 0..=14 {
        let p = 17.0 + 5.0 * k as f64;
        let t = boundary::b23_t_p(p);
        let h2 = region2::enthalpy(p, t);
        let h3 = region3::h_pt(p, t).value;
        assert!((h2 - h3).abs() < 0.2, "B23 at {p} MPa: h2 = {h2}, h3 = {h3}");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Region 4: saturation line
// ═══════════════════════════════════════════════════════════════════

#[test]
fn saturation_curve_round_trips() {
    for t in [280.0, 373.15, 500.0, 620.0, 647.0] {
        assert_relative_eq!(region4::t_p(region4::p_t(t)), t, max_relative = 1e-9);
    }
}

#[test]
fn saturation_pressure_round_trips() {
    // Log-spaced from just above the triple point to just below Pc.
    let (lo, hi): (f64, f64) = (0.000611657, 22.06395);
    for k in 1..200 {
        let p = lo * (hi / lo).powf(k as f64 / 200.0);
        assert_relative_eq!(region4::p_t(region4::t_p(p)), p, max_relative = 1e-7);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Region 5: high-temperature steam
// ═══════════════════════════════════════════════════════════════════

#[test]
fn region5_forward_equations() {
    let p = [0.5, 8.0, 8.0];
    let t = [1500.0, 1500.0, 2000.0];

    let cases: [(&str, fn(f64, f64) -> f64, [f64; 3]); 5] = [
        ("v", region5::volume, [1.38455354, 0.0865156616, 0.115743146]),
        ("h", region5::enthalpy, [5219.76332, 5206.09634, 6583.80291]),
        ("u", region5::internal_energy, [4527.48654, 4513.97105, 5657.85774]),
        ("s", region5::entropy, [9.65408431, 8.36546724, 9.15671044]),
        ("cp", region5::cp, [2.61610228, 2.64453866, 2.8530675]),
    ];
    for (name, f, expected) in cases {
        let err = table_error(&expected, |i| f(p[i], t[i]));
        assert!(err < 2e-8, "region 5 {name}(p, T): accumulated error {err:e}");
    }
}

#[test]
fn region5_backward_iterations() {
    let p = [0.5, 8.0, 8.0];
    let h = [5219.76331549428, 5206.09634477373, 6583.80290533381];
    let s = [9.65408430982588, 8.36546724495503, 9.15671044273249];
    let t = [1500.0, 1500.0, 2000.0];

    for i in 0..3 {
        let by_h = region5::t_ph(p[i], h[i]);
        assert_relative_eq!(by_h.value, t[i], max_relative = 1e-7);
        assert!(by_h.diagnostic.is_none());
        assert_relative_eq!(region5::t_ps(p[i], s[i]).value, t[i], max_relative = 1e-4);
    }
}
