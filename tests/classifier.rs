use proptest::prelude::*;
use xsteam::bisection::{Bisection, Monotonic};
use xsteam::{boundary, region1, region2, region4, Region, Steam};

/// Forward enthalpy and entropy of a Region 1 or 2 state.
fn forward(region: Region, p: f64, t: f64) -> (f64, f64) {
    match region {
        Region::One => (region1::enthalpy(p, t), region1::entropy(p, t)),
        _ => (region2::enthalpy(p, t), region2::entropy(p, t)),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  The classifiers agree with each other
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ph_and_ps_agree_with_pt_away_from_saturation(
        p in 0.005f64..16.0,
        t in 280.0f64..1000.0,
    ) {
        prop_assume!((t - region4::t_p(p)).abs() > 1.0);
        let region = Region::from_pt(p, t);
        prop_assume!(matches!(region, Region::One | Region::Two));
        // Region 1 ends at 623.15 K; keep clear of the Region 1/3 edge.
        prop_assume!(region != Region::One || t < 620.0);

        let (h, s) = forward(region, p, t);
        prop_assert_eq!(Region::from_ph(p, h), region);
        prop_assert_eq!(Region::from_ps(p, s), region);
    }

    #[test]
    fn ph_flash_recovers_temperature(
        p in 0.005f64..16.0,
        t in 280.0f64..1000.0,
    ) {
        prop_assume!((t - region4::t_p(p)).abs() > 1.0);
        let region = Region::from_pt(p, t);
        prop_assume!(matches!(region, Region::One | Region::Two));
        prop_assume!(region != Region::One || t < 620.0);

        let (h, _) = forward(region, p, t);
        let back = Steam::new().t_ph(p, h);
        prop_assert!((back - t).abs() < 0.03, "T = {t}, T(p, h) = {back}");
    }

    #[test]
    fn quality_stays_in_unit_interval(
        p in 0.001f64..22.0,
        h in 0.0f64..4000.0,
    ) {
        let x = region4::x_ph(p, h).value;
        prop_assert!((0.0..=1.0).contains(&x), "x({p}, {h}) = {x}");
    }

    #[test]
    fn quality_is_non_decreasing_in_enthalpy(
        p in 0.001f64..22.0,
        h in 0.0f64..3000.0,
        dh in 0.0f64..500.0,
    ) {
        let lower = region4::x_ph(p, h).value;
        let upper = region4::x_ph(p, h + dh).value;
        prop_assert!(upper >= lower, "x({p}, {h}) = {lower} > x({p}, {}) = {upper}", h + dh);
    }

    #[test]
    fn classifiers_never_panic(a in any::<f64>(), b in any::<f64>()) {
        let _ = Region::from_pt(a, b);
        let _ = Region::from_ph(a, b);
        let _ = Region::from_ps(a, b);
        let _ = Region::from_hs(a, b);
        let _ = Region::from_prho(a, b);
    }

    #[test]
    fn enthalpy_rises_with_temperature_along_an_isobar(
        p in 0.01f64..50.0,
        t in 1080.0f64..2200.0,
    ) {
        let steam = Steam::new();
        prop_assert!(steam.h_pt(p, t + 10.0) > steam.h_pt(p, t));
    }

    #[test]
    fn iterative_flashes_are_deterministic(p in 0.5f64..20.0, h in 100.0f64..3500.0) {
        let steam = Steam::new();
        let a = steam.props_ph(p, h);
        let b = steam.props_ph(p, h);
        prop_assert_eq!(a.temperature.to_bits(), b.temperature.to_bits());
        prop_assert_eq!(a.enthalpy.to_bits(), b.enthalpy.to_bits());
    }

    #[test]
    fn bisection_hits_the_target(target in 0.0f64..1000.0) {
        let root = Bisection::new(0.0, 10.0, Monotonic::Increasing)
            .tolerance(1e-9)
            .solve(target, |x| x * x * x);
        prop_assert!((root.value.powi(3) - target).abs() < 1e-6);
    }
}

/// Whether `t` lies within `margin` kelvin of a region boundary on the
/// `p` isobar.
fn near_boundary(p: f64, t: f64, margin: f64) -> bool {
    let mut edges = vec![1073.15];
    if p < 22.064 {
        edges.push(region4::t_p(p));
    }
    if p > 16.5292 {
        edges.push(623.15);
        edges.push(boundary::b23_t_p(p));
    }
    edges.iter().any(|edge| (t - edge).abs() < margin)
}

#[test]
fn every_classifier_agrees_with_pt_across_the_envelope() {
    let steam = Steam::new();
    let pressures = [0.005, 0.05, 0.5, 2.0, 5.0, 10.0, 15.0, 18.0, 20.0, 25.0, 30.0, 45.0, 70.0, 90.0];
    let temperatures = (0..80)
        .map(|k| 280.0 + 10.0 * k as f64)
        .chain((0..24).map(|k| 1100.0 + 50.0 * k as f64));

    let mut checked = [0usize; 6];
    for t in temperatures {
        for p in pressures {
            let region = Region::from_pt(p, t);
            if !region.is_defined() || region == Region::Four || near_boundary(p, t, 3.0) {
                continue;
            }
            let props = steam.props_pt(p, t);
            let (h, s, rho) = (props.enthalpy, props.entropy, props.density);

            assert_eq!(Region::from_ph(p, h), region, "(p, h) at {p} MPa, {t} K");
            assert_eq!(Region::from_ps(p, s), region, "(p, s) at {p} MPa, {t} K");
            // (h, s) covers Regions 1 to 4 only.
            if region != Region::Five {
                assert_eq!(Region::from_hs(h, s), region, "(h, s) at {p} MPa, {t} K");
            }
            // Liquid density peaks near 4 °C, below which v(p, T) is not
            // monotonic and the Region 1 floor is the 0 °C isotherm.
            if t > 278.0 {
                assert_eq!(Region::from_prho(p, rho), region, "(p, rho) at {p} MPa, {t} K");
            }
            checked[region.id() as usize] += 1;
        }
    }
    for region in [Region::One, Region::Two, Region::Three, Region::Five] {
        assert!(checked[region.id() as usize] > 0, "{region} never sampled");
    }
}

#[test]
fn ph_flash_recovers_temperature_in_high_pressure_region5() {
    let steam = Steam::new();
    for p in [20.0, 30.0, 50.0] {
        let h = steam.h_pt(p, 1500.0);
        let t = steam.t_ph(p, h);
        assert!((t - 1500.0).abs() < 1e-3, "T({p}, {h}) = {t}");
        let rho = steam.rho_pt(p, 1500.0);
        let back = steam.props_prho(p, rho).unwrap();
        assert_eq!(back.region, Region::Five);
        assert!((back.temperature - 1500.0).abs() < 1e-3, "T({p}, rho) = {}", back.temperature);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Edges of the envelope
// ═══════════════════════════════════════════════════════════════════

#[test]
fn non_finite_inputs_are_undefined() {
    assert_eq!(Region::from_pt(f64::NAN, 300.0), Region::Undefined);
    assert_eq!(Region::from_ph(1.0, f64::INFINITY), Region::Undefined);
    assert_eq!(Region::from_hs(f64::NAN, f64::NAN), Region::Undefined);
}

#[test]
fn region5_lies_above_1073_k_up_to_50_mpa() {
    assert_eq!(Region::from_pt(8.0, 1500.0), Region::Five);
    assert_eq!(Region::from_pt(60.0, 1500.0), Region::Undefined);
    assert_eq!(Region::from_pt(8.0, 2300.0), Region::Undefined);
}
