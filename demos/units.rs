use xsteam::{HeavyWater, Steam, TempUnit, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // XSTEAM_UNIT_SYSTEM (or a .env file) picks the preset; bare otherwise.
    let steam = Steam::from_env()?;
    println!("Units from the environment: {:?}", steam.units());
    println!("h(p=1, T=400) = {:.3}\n", steam.h_pt(1.0, 400.0));

    // The same state in the three presets
    for (name, units) in [
        ("bare", UnitSystem::bare()),
        ("mks", UnitSystem::mks()),
        ("fls", UnitSystem::fls()),
    ] {
        let s = Steam::with_units(units);
        let conv = s.converter();
        let p = conv.p_from_si(1.0);
        let t = conv.t_from_si(500.0);
        println!(
            "{name:>4}: p = {p:10.4}  T = {t:8.2}  h = {:9.3}  s = {:7.4}  ρ = {:8.4}",
            s.h_pt(p, t),
            s.s_pt(p, t),
            s.rho_pt(p, t),
        );
    }

    // Custom: Celsius, everything else internal
    let custom = Steam::with_units(UnitSystem::bare().temperature(TempUnit::Celsius));
    println!("\nTsat(1 MPa) = {:.3} °C", custom.tsat_p(1.0));

    // Heavy water in metric units
    let d2o = HeavyWater::with_units(UnitSystem::mks());
    println!("\nD2O critical point:\n{}", d2o.critical_point());
    println!("D2O µ(1100 kg/m³, 20 °C) = {:.4e} Pa·s", d2o.my_rhot(1100.0, 20.0)?);

    Ok(())
}
