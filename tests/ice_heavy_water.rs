use approx::assert_relative_eq;
use xsteam::{HeavyWater, IceType, Steam, UnitSystem, XSteamError};

// ═══════════════════════════════════════════════════════════════════
//  Melting curves
// ═══════════════════════════════════════════════════════════════════

#[test]
fn melting_pressure_reference_points() {
    let cases = [
        (IceType::Ih, 251.165, 208.566, 0.002),
        (IceType::Ih, 254.0, 187.19355603141994, 0.002),
        (IceType::III, 254.0, 268.685, 0.003),
        (IceType::V, 265.0, 479.640, 0.003),
        (IceType::VI, 320.0, 1356.7565178693883, 0.003),
        (IceType::VII, 550.0, 6308.71, 0.007),
    ];
    for (ice, t, expected, tol) in cases {
        let p = ice.melting_pressure(t);
        assert!(
            (p - expected).abs() < tol,
            "{ice} at {t} K: expected {expected} MPa, got {p}"
        );
    }
}

#[test]
fn pmelt_picks_the_ice_type_from_temperature() {
    let steam = Steam::new();
    assert_relative_eq!(
        steam.pmelt_t(320.0, None).unwrap(),
        IceType::VI.melting_pressure(320.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        steam.pmelt_t(550.0, None).unwrap(),
        IceType::VII.melting_pressure(550.0),
        max_relative = 1e-12
    );
}

#[test]
fn pmelt_needs_a_hint_where_ih_and_iii_overlap() {
    let steam = Steam::new();
    assert!(matches!(steam.pmelt_t(254.0, None), Err(XSteamError::AmbiguousIceType(_))));
    let ih = steam.pmelt_t(254.0, Some(IceType::Ih)).unwrap();
    let iii = steam.pmelt_t(254.0, Some(IceType::III)).unwrap();
    assert!(iii > ih);
}

#[test]
fn pmelt_outside_every_curve_is_nan() {
    let steam = Steam::new();
    assert!(steam.pmelt_t(800.0, None).unwrap().is_nan());
    assert!(steam.pmelt_t(300.0, Some(IceType::V)).unwrap().is_nan());
}

#[test]
fn pmelt_in_metric_units() {
    let mks = Steam::with_units(UnitSystem::mks());
    // 46.85 °C on the ice VI curve, in bar
    let p = mks.pmelt_t(320.0 - 273.15, None).unwrap();
    assert_relative_eq!(p, 13567.565178693883, max_relative = 1e-5);
}

// ═══════════════════════════════════════════════════════════════════
//  Sublimation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn sublimation_pressure_at_230_k() {
    let p = Steam::new().psubl_t(230.0);
    assert!((p - 8.94735e-6).abs() < 1e-6, "psubl(230 K) = {p:e}");
    assert!(Steam::new().psubl_t(20.0).is_nan());
}

// ═══════════════════════════════════════════════════════════════════
//  Heavy water
// ═══════════════════════════════════════════════════════════════════

#[test]
fn heavy_water_critical_point() {
    let d2o = HeavyWater::new();
    let crit = d2o.critical_point();
    assert_relative_eq!(crit.temperature, 643.847, max_relative = 1e-12);
    assert_relative_eq!(crit.pressure, 21.671, max_relative = 1e-12);
    assert_relative_eq!(crit.density, 356.0, max_relative = 1e-12);

    let mks = HeavyWater::with_units(UnitSystem::mks());
    assert_relative_eq!(mks.critical_pressure(), 216.71, max_relative = 1e-12);
    assert_relative_eq!(mks.critical_temperature(), 370.697, max_relative = 1e-12);
}

#[test]
fn heavy_water_transport_in_metric_units() {
    let mks = HeavyWater::with_units(UnitSystem::mks());
    let bare = HeavyWater::new();
    // Temperature converts, density does not.
    assert_relative_eq!(
        mks.my_rhot(1100.0, 30.0).unwrap(),
        bare.my_rhot(1100.0, 303.15).unwrap(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        mks.tc_rhot(1100.0, 30.0).unwrap(),
        bare.tc_rhot(1100.0, 303.15).unwrap(),
        max_relative = 1e-12
    );
}

#[test]
fn heavy_water_viscosity_falls_with_temperature() {
    let d2o = HeavyWater::new();
    let cold = d2o.my_rhot(1105.0, 290.0).unwrap();
    let warm = d2o.my_rhot(1090.0, 330.0).unwrap();
    assert!(cold > warm, "µ(290 K) = {cold}, µ(330 K) = {warm}");
}
