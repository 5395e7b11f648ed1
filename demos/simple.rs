use xsteam::{Steam, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Out-of-range warnings and construction messages go to stdout.
    tracing_subscriber::fmt::init();

    println!("=== Steam tables, metric units ===\n");
    let steam = Steam::with_units(UnitSystem::mks());

    // ── Critical point ──────────────────────────────────────────────
    let crit = steam.critical_point();
    println!("Critical point:\n{crit}\n");

    // ── PT flash: p = 10 bar, T = 300 °C ────────────────────────────
    let props = steam.props_pt(10.0, 300.0);
    println!("PT flash (p=10 bar, T=300 °C):\n{props}\n");

    // ── Transport properties at the same state point ────────────────
    let trn = steam.transport_pt(10.0, 300.0);
    println!("Transport:\n{trn}\n");

    // ── Saturation at p = 1 bar ─────────────────────────────────────
    let sat = steam.saturation_p(1.0);
    println!("Saturation at p=1 bar:\n{sat}\n");

    // ── Two-phase state: p = 1 bar, x = 0.5 ─────────────────────────
    let wet = steam.props_px(1.0, 0.5)?;
    println!("Wet steam (p=1 bar, x=0.5):\n{wet}\n");

    // ── Outside the envelope: NaN and a warning ─────────────────────
    println!("tsat_p(300 bar) = {}", steam.tsat_p(300.0));

    Ok(())
}
