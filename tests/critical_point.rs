use approx::assert_relative_eq;
use xsteam::{Region, Steam};

// ═══════════════════════════════════════════════════════════════════
//  Critical point — known values
// ═══════════════════════════════════════════════════════════════════

#[test]
fn water_critical_point() {
    // Tc = 647.096 K, Pc = 22.064 MPa, ρc = 322 kg/m³
    let crit = Steam::new().critical_point();
    assert_relative_eq!(crit.temperature, 647.096, max_relative = 1e-12);
    assert_relative_eq!(crit.pressure, 22.06395, max_relative = 1e-12);
    assert_relative_eq!(crit.density, 322.0, max_relative = 1e-12);
}

#[test]
fn saturation_curve_ends_at_the_critical_point() {
    let steam = Steam::new();
    let crit = steam.critical_point();
    // psat(Tc) from the IF97 equation is within 1 kPa of Pc.
    let p = xsteam::region4::p_t(crit.temperature);
    assert!((p - crit.pressure).abs() < 1e-3, "psat(Tc) = {p}");
}

// ═══════════════════════════════════════════════════════════════════
//  Near-critical states
// ═══════════════════════════════════════════════════════════════════

#[test]
fn dome_closes_approaching_the_critical_point() {
    let steam = Steam::new();
    let far = steam.saturation_t(600.0);
    let near = steam.saturation_t(646.0);
    let gap = |s: &xsteam::SaturationProps| s.liquid.density - s.vapour.density;
    assert!(gap(&near) < gap(&far));
    assert!(gap(&near) > 0.0);
}

#[test]
fn supercritical_states_are_region3() {
    let steam = Steam::new();
    let props = steam.props_pt(25.0, 650.0);
    assert_eq!(props.region, Region::Three);
    assert!(props.quality.is_nan());

    // Region 3 forward density round trip
    let back = steam.props_prho(25.0, props.density).unwrap();
    assert_eq!(back.region, Region::Three);
    assert!((back.temperature - 650.0).abs() < 0.01, "T = {}", back.temperature);
}

#[test]
fn region3_ph_flash_is_consistent_with_pt() {
    let steam = Steam::new();
    let pt = steam.props_pt(50.0, 700.0);
    assert_eq!(pt.region, Region::Three);
    let ph = steam.props_ph(50.0, pt.enthalpy);
    assert!((ph.temperature - 700.0).abs() < 0.05, "T(p, h) = {}", ph.temperature);
    assert_relative_eq!(ph.density, pt.density, max_relative = 1e-3);
}
