use approx::assert_relative_eq;
use xsteam::{Region, Steam, UnitSystem, XSteamError};

// ═══════════════════════════════════════════════════════════════════
//  Pair flashes (internal units)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pt_flash_compressed_liquid() {
    let props = Steam::new().props_pt(3.0, 300.0);
    assert_eq!(props.region, Region::One);
    assert_relative_eq!(props.enthalpy, 115.331273, max_relative = 1e-8);
    assert_relative_eq!(props.specific_volume, 0.00100215168, max_relative = 1e-8);
    assert_relative_eq!(props.density * props.specific_volume, 1.0, max_relative = 1e-12);
    assert_eq!(props.quality, 0.0);
    assert!(props.cp >= props.cv, "cp ({}) should be >= cv ({})", props.cp, props.cv);
}

#[test]
fn pt_flash_high_temperature_steam() {
    let props = Steam::new().props_pt(8.0, 1500.0);
    assert_eq!(props.region, Region::Five);
    assert_relative_eq!(props.enthalpy, 5206.09634, max_relative = 1e-8);
    assert_eq!(props.quality, 1.0);
}

#[test]
fn pt_flash_outside_the_envelope_is_undefined() {
    let steam = Steam::new();
    for (p, t) in [(0.1, 3000.0), (150.0, 500.0), (60.0, 1500.0), (1.0, 200.0)] {
        let props = steam.props_pt(p, t);
        assert_eq!(props.region, Region::Undefined, "p = {p}, T = {t}");
        assert!(props.enthalpy.is_nan());
    }
}

#[test]
fn ph_flash_in_each_region() {
    let steam = Steam::new();

    let liquid = steam.props_ph(3.0, 500.0);
    assert_eq!(liquid.region, Region::One);
    assert_relative_eq!(liquid.temperature, 391.798509, max_relative = 1e-8);

    let vapour = steam.props_ph(3.0, 3000.0);
    assert_eq!(vapour.region, Region::Two);
    assert_relative_eq!(vapour.temperature, 575.37337, max_relative = 1e-8);

    let dense = steam.props_ph(20.0, 1700.0);
    assert_eq!(dense.region, Region::Three);
    assert_relative_eq!(dense.temperature, 629.3083892, max_relative = 1e-8);
    assert_relative_eq!(dense.specific_volume, 0.001749903962, max_relative = 1e-8);

    let mixture = steam.props_ph(1.0, 1500.0);
    assert_eq!(mixture.region, Region::Four);
    assert!(mixture.quality > 0.0 && mixture.quality < 1.0);
    assert!(mixture.cp.is_nan());
}

#[test]
fn ps_flash_matches_backward_equation() {
    let props = Steam::new().props_ps(3.0, 0.5);
    assert_eq!(props.region, Region::One);
    assert_relative_eq!(props.temperature, 307.842258, max_relative = 1e-8);
    assert_relative_eq!(props.entropy, 0.5, max_relative = 1e-5);
}

#[test]
fn hs_flash_recovers_pressure() {
    let props = Steam::new().props_hs(2800.0, 6.5);
    assert_eq!(props.region, Region::Two);
    assert_relative_eq!(props.pressure, 1.371012767, max_relative = 1e-8);
}

#[test]
fn prho_flash_round_trip() {
    let steam = Steam::new();
    let origin = steam.props_pt(10.0, 400.0);
    let back = steam.props_prho(10.0, origin.density).unwrap();
    assert_eq!(back.region, Region::One);
    assert_relative_eq!(back.temperature, 400.0, max_relative = 1e-6);
}

#[test]
fn prho_flash_on_the_critical_isobar() {
    let steam = Steam::new();
    let props = steam.props_prho(22.06395, 500.0).unwrap();
    assert_eq!(props.region, Region::Three);
    assert_relative_eq!(props.density, 500.0, max_relative = 1e-6);
    assert!(props.temperature > 623.15 && props.temperature < 647.2, "T = {}", props.temperature);
}

#[test]
fn px_and_tx_mix_saturated_sides() {
    let steam = Steam::new();
    let by_p = steam.props_px(1.0, 0.5).unwrap();
    assert_eq!(by_p.region, Region::Four);
    assert_relative_eq!(by_p.temperature, 453.035632, max_relative = 1e-8);
    assert_eq!(by_p.quality, 0.5);

    let by_t = steam.props_tx(by_p.temperature, 0.5).unwrap();
    assert_relative_eq!(by_t.enthalpy, by_p.enthalpy, max_relative = 1e-6);
}

#[test]
fn invalid_flash_inputs_are_errors() {
    let steam = Steam::new();
    assert!(matches!(steam.props_px(1.0, 1.5), Err(XSteamError::InvalidInput(_))));
    assert!(matches!(steam.props_tx(400.0, -0.1), Err(XSteamError::InvalidInput(_))));
    assert!(matches!(steam.props_prho(1.0, 0.0), Err(XSteamError::InvalidInput(_))));
    assert!(matches!(steam.h_prho(1.0, -5.0), Err(XSteamError::InvalidInput(_))));
}

// ═══════════════════════════════════════════════════════════════════
//  Generic get()
// ═══════════════════════════════════════════════════════════════════

#[test]
fn get_accepts_either_order_and_any_case() {
    let steam = Steam::new();
    let a = steam.get("H", "P", 3.0, "T", 300.0).unwrap();
    let b = steam.get("h", "t", 300.0, "p", 3.0).unwrap();
    assert_eq!(a, b);
    assert_relative_eq!(a, 115.331273, max_relative = 1e-8);
}

#[test]
fn get_aliases() {
    let steam = Steam::with_units(UnitSystem::mks());
    let d = steam.get("D", "P", 1.0, "T", 20.0).unwrap();
    let rho = steam.get("RHO", "P", 1.0, "T", 20.0).unwrap();
    assert_eq!(d, rho);

    let x = steam.get("X", "P", 1.0, "H", 1000.0).unwrap();
    let q = steam.get("Q", "P", 1.0, "H", 1000.0).unwrap();
    assert_eq!(x, q);
    assert_relative_eq!(x, 0.258055424, max_relative = 1e-7);

    let eta = steam.get("ETA", "P", 1.0, "T", 100.0).unwrap();
    let my = steam.get("MY", "P", 1.0, "T", 100.0).unwrap();
    assert_eq!(eta, my);
}

#[test]
fn get_from_every_supported_pair() {
    let steam = Steam::new();
    let (p, t) = (1.0, 500.0);
    let state = steam.props_pt(p, t);

    let t_ph = steam.get("T", "P", p, "H", state.enthalpy).unwrap();
    let t_ps = steam.get("T", "P", p, "S", state.entropy).unwrap();
    let t_hs = steam.get("T", "H", state.enthalpy, "S", state.entropy).unwrap();
    let t_prho = steam.get("T", "P", p, "D", state.density).unwrap();
    let p_hrho = steam.get("P", "H", state.enthalpy, "RHO", state.density).unwrap();
    for got in [t_ph, t_ps, t_hs, t_prho] {
        assert!((got - t).abs() < 0.05, "expected T ≈ {t}, got {got}");
    }
    assert_relative_eq!(p_hrho, p, max_relative = 1e-3);

    let h_px = steam.get("H", "P", p, "X", 1.0).unwrap();
    let h_tx = steam.get("H", "T", 453.035632, "Q", 1.0).unwrap();
    assert_relative_eq!(h_px, h_tx, max_relative = 1e-6);
}

#[test]
fn get_transport_and_surface_tension() {
    let steam = Steam::new();
    let pr = steam.get("PR", "P", 0.1, "T", 300.0).unwrap();
    let cp = steam.get("CP", "P", 0.1, "T", 300.0).unwrap();
    let my = steam.get("ETA", "P", 0.1, "T", 300.0).unwrap();
    let tc = steam.get("TC", "P", 0.1, "T", 300.0).unwrap();
    assert_relative_eq!(pr, cp * 1000.0 * my / tc, max_relative = 1e-12);

    let st = steam.get("ST", "T", 373.15, "X", 0.0).unwrap();
    assert_relative_eq!(st, 0.0589118685877, max_relative = 1e-6);
}

#[test]
fn get_rejects_bad_requests() {
    let steam = Steam::new();
    assert!(matches!(
        steam.get("Z", "P", 1.0, "T", 300.0),
        Err(XSteamError::UnknownProperty(_))
    ));
    assert!(matches!(
        steam.get("H", "T", 300.0, "S", 1.0),
        Err(XSteamError::UnsupportedPair(_, _))
    ));
    assert!(matches!(
        steam.get("H", "P", f64::NAN, "T", 300.0),
        Err(XSteamError::InvalidInput(_))
    ));
    assert!(matches!(
        steam.get("H", "P", 1.0, "X", 2.0),
        Err(XSteamError::InvalidInput(_))
    ));
}

#[test]
fn get_outside_the_envelope_is_nan() {
    let h = Steam::new().get("H", "P", 1.0, "T", 5000.0).unwrap();
    assert!(h.is_nan());
}
