use xsteam::{IceType, Steam, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // ── Metric units: °C, bar, kJ/kg ────────────────────────────────
    let steam = Steam::with_units(UnitSystem::mks());

    // Saturation, input directly in bar, output in °C
    let t_boil = steam.get("T", "P", 1.01325, "Q", 0.0)?;
    let t_boiler = steam.get("T", "P", 40.0, "Q", 1.0)?;
    println!("Tsat(1 atm) = {t_boil:.2} °C");
    println!("Tsat(40 bar) = {t_boiler:.2} °C");

    // A simple Rankine cycle, named functions in XSteam style
    let (p_high, p_low, t_in) = (40.0, 0.1, 450.0);
    let h1 = steam.h_pt(p_high, t_in);
    let s1 = steam.s_pt(p_high, t_in);
    let h2 = steam.h_ps(p_low, s1);
    let x2 = steam.x_ps(p_low, s1);
    let h3 = steam.hl_p(p_low);
    let h4 = h3 + steam.vl_p(p_low) * (p_high - p_low) * 100.0;
    let efficiency = ((h1 - h2) - (h4 - h3)) / (h1 - h4);
    println!("\nRankine cycle, {p_high} bar / {t_in} °C to {p_low} bar:");
    println!("  turbine exit quality = {x2:.4}");
    println!("  thermal efficiency   = {:.2} %", efficiency * 100.0);

    // Transport properties of the condensate
    println!("\nCondensate at {p_low} bar:");
    println!("  µ  = {:.4e} Pa·s", steam.my_ph(p_low, h3 - 1.0));
    println!("  λ  = {:.4} W/(m·K)", steam.tcl_p(p_low));
    println!("  σ  = {:.4} N/m", steam.st_p(p_low));

    // ── Ice ─────────────────────────────────────────────────────────
    println!("\nMelting pressure of ice VI at 20 °C = {:.1} bar", steam.pmelt_t(20.0, None)?);
    println!(
        "Melting pressure of ice Ih at -10 °C = {:.1} bar",
        steam.pmelt_t(-10.0, Some(IceType::Ih))?
    );
    match steam.pmelt_t(-20.0, None) {
        Ok(p) => println!("pmelt(-20 °C) = {p}"),
        Err(e) => println!("pmelt(-20 °C): {e}"),
    }

    Ok(())
}
