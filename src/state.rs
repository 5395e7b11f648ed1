//! Complete state points in internal units, built from any supported
//! property pair.
//!
//! Each flash classifies its pair, runs the backward equation of the
//! governing region and fills a [`SteamProps`] from the forward equations
//! at the resulting natural variables. Two-phase states mix the saturated
//! liquid and vapour sides. Nothing here logs or converts units; any
//! solver diagnostic travels back in the [`Flash`].

use crate::bisection::{Bisection, Monotonic, Solved};
use crate::constants::{CRITICAL_PRESSURE, P_MAX, P_MIN, P_SAT_13, T_13};
use crate::error::Diagnostic;
use crate::properties::{SteamProps, TransportProps};
use crate::region::Region;
use crate::region4::Phase;
use crate::{region1, region2, region3, region4, region5, transport};

/// A state point together with the first diagnostic raised on the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Flash {
    pub props: SteamProps,
    pub diagnostic: Option<Diagnostic>,
}

impl Flash {
    fn exact(props: SteamProps) -> Self {
        Self { props, diagnostic: None }
    }

    fn undefined() -> Self {
        Self::exact(SteamProps::undefined())
    }

    fn after(self, solved: Solved) -> Self {
        Self { props: self.props, diagnostic: self.diagnostic.or(solved.diagnostic) }
    }
}

// ── Single-phase building blocks ────────────────────────────────────

/// Forward properties of Region 1, 2 or 5 at (p, T).
fn gibbs_props(region: Region, p: f64, t: f64) -> SteamProps {
    let (v, h, u, s, cp, cv, w) = match region {
        Region::One => (
            region1::volume(p, t),
            region1::enthalpy(p, t),
            region1::internal_energy(p, t),
            region1::entropy(p, t),
            region1::cp(p, t),
            region1::cv(p, t),
            region1::speed_of_sound(p, t),
        ),
        Region::Two => (
            region2::volume(p, t),
            region2::enthalpy(p, t),
            region2::internal_energy(p, t),
            region2::entropy(p, t),
            region2::cp(p, t),
            region2::cv(p, t),
            region2::speed_of_sound(p, t),
        ),
        Region::Five => (
            region5::volume(p, t),
            region5::enthalpy(p, t),
            region5::internal_energy(p, t),
            region5::entropy(p, t),
            region5::cp(p, t),
            region5::cv(p, t),
            region5::speed_of_sound(p, t),
        ),
        _ => return SteamProps::undefined(),
    };
    SteamProps {
        region,
        temperature: t,
        pressure: p,
        density: 1.0 / v,
        specific_volume: v,
        enthalpy: h,
        internal_energy: u,
        entropy: s,
        cv,
        cp,
        sound_speed: w,
        quality: f64::NAN,
    }
}

/// Forward properties of Region 3 at (ρ, T), reported at pressure `p`.
fn density_props(p: f64, rho: f64, t: f64) -> SteamProps {
    SteamProps {
        region: Region::Three,
        temperature: t,
        pressure: p,
        density: rho,
        specific_volume: 1.0 / rho,
        enthalpy: region3::enthalpy(rho, t),
        internal_energy: region3::internal_energy(rho, t),
        entropy: region3::entropy(rho, t),
        cv: region3::cv(rho, t),
        cp: region3::cp(rho, t),
        sound_speed: region3::speed_of_sound(rho, t),
        quality: f64::NAN,
    }
}

/// Sets the vapour fraction of a single-phase state: 0 for liquid, 1 for
/// vapour, `NaN` outside the saturation pressure range.
fn single_phase(mut props: SteamProps) -> SteamProps {
    props.quality = if props.pressure > P_MIN && props.pressure < CRITICAL_PRESSURE {
        match props.region {
            Region::One => 0.0,
            Region::Two | Region::Five => 1.0,
            Region::Three => region4::x_ph(props.pressure, props.enthalpy).value,
            _ => f64::NAN,
        }
    } else {
        f64::NAN
    };
    props
}

// ── Saturation ──────────────────────────────────────────────────────

/// One side of the dome at (p, T) on the saturation line.
///
/// With `below_13` the side comes from Region 1 or 2 at (p, T); otherwise
/// from Region 3 at the density of the saturated enthalpy. The reported
/// region is the one whose equations were used.
fn saturated_side(p: f64, t: f64, phase: Phase, below_13: bool) -> Flash {
    let quality = match phase {
        Phase::Liquid => 0.0,
        Phase::Vapour => 1.0,
    };
    if below_13 {
        let region = match phase {
            Phase::Liquid => Region::One,
            Phase::Vapour => Region::Two,
        };
        return Flash::exact(SteamProps { quality, ..gibbs_props(region, p, t) });
    }
    let h = region4::h_p(p, phase);
    let rho = 1.0 / region3::v_ph(p, h.value);
    let props = SteamProps { enthalpy: h.value, quality, ..density_props(p, rho, t) };
    Flash::exact(props).after(h)
}

fn sides(p: f64, t: f64, below_13: bool) -> (Flash, Flash) {
    (
        saturated_side(p, t, Phase::Liquid, below_13),
        saturated_side(p, t, Phase::Vapour, below_13),
    )
}

/// Quality-weighted mixture of the two saturated sides.
fn mix(liquid: Flash, vapour: Flash, x: f64) -> Flash {
    let (l, v) = (liquid.props, vapour.props);
    let weigh = |a: f64, b: f64| x * b + (1.0 - x) * a;
    let volume = weigh(l.specific_volume, v.specific_volume);
    let props = SteamProps {
        region: Region::Four,
        temperature: l.temperature,
        pressure: l.pressure,
        density: 1.0 / volume,
        specific_volume: volume,
        enthalpy: weigh(l.enthalpy, v.enthalpy),
        internal_energy: weigh(l.internal_energy, v.internal_energy),
        entropy: weigh(l.entropy, v.entropy),
        cv: f64::NAN,
        cp: f64::NAN,
        sound_speed: f64::NAN,
        quality: x,
    };
    Flash { props, diagnostic: liquid.diagnostic.or(vapour.diagnostic) }
}

/// Saturated liquid and vapour at pressure `p`.
pub(crate) fn saturation_p(p: f64) -> (Flash, Flash) {
    sides(p, region4::t_p(p), p < P_SAT_13)
}

/// Saturated liquid and vapour at temperature `t`.
pub(crate) fn saturation_t(t: f64) -> (Flash, Flash) {
    sides(region4::p_t(t), t, t <= T_13)
}

/// Volume fraction of vapour in a two-phase state of quality `x`.
pub(crate) fn vapour_volume_fraction(p: f64, x: f64) -> f64 {
    let (liquid, vapour) = saturation_p(p);
    let (vl, vv) = (liquid.props.specific_volume, vapour.props.specific_volume);
    x * vv / (x * vv + (1.0 - x) * vl)
}

// ── Flashes ─────────────────────────────────────────────────────────

pub(crate) fn pt(p: f64, t: f64) -> Flash {
    match Region::from_pt(p, t) {
        region @ (Region::One | Region::Two | Region::Five) => {
            Flash::exact(single_phase(gibbs_props(region, p, t)))
        }
        Region::Three => {
            let h = region3::h_pt(p, t);
            let rho = 1.0 / region3::v_ph(p, h.value);
            let props = SteamProps { enthalpy: h.value, ..density_props(p, rho, t) };
            Flash::exact(single_phase(props)).after(h)
        }
        // On the saturation line (p, T) does not fix the state.
        Region::Four | Region::Undefined => Flash::undefined(),
    }
}

pub(crate) fn ph(p: f64, h: f64) -> Flash {
    match Region::from_ph(p, h) {
        Region::One => Flash::exact(single_phase(gibbs_props(Region::One, p, region1::t_ph(p, h)))),
        Region::Two => Flash::exact(single_phase(gibbs_props(Region::Two, p, region2::t_ph(p, h)))),
        Region::Three => {
            let rho = 1.0 / region3::v_ph(p, h);
            Flash::exact(single_phase(density_props(p, rho, region3::t_ph(p, h))))
        }
        Region::Four => {
            let x = region4::x_ph(p, h);
            let (liquid, vapour) = saturation_p(p);
            mix(liquid, vapour, x.value).after(x)
        }
        Region::Five => {
            let t = region5::t_ph(p, h);
            Flash::exact(single_phase(gibbs_props(Region::Five, p, t.value))).after(t)
        }
        Region::Undefined => Flash::undefined(),
    }
}

pub(crate) fn ps(p: f64, s: f64) -> Flash {
    match Region::from_ps(p, s) {
        Region::One => Flash::exact(single_phase(gibbs_props(Region::One, p, region1::t_ps(p, s)))),
        Region::Two => Flash::exact(single_phase(gibbs_props(Region::Two, p, region2::t_ps(p, s)))),
        Region::Three => {
            let rho = 1.0 / region3::v_ps(p, s);
            Flash::exact(single_phase(density_props(p, rho, region3::t_ps(p, s))))
        }
        Region::Four => {
            let x = region4::x_ps(p, s);
            let (liquid, vapour) = saturation_p(p);
            mix(liquid, vapour, x.value).after(x)
        }
        Region::Five => {
            let t = region5::t_ps(p, s);
            Flash::exact(single_phase(gibbs_props(Region::Five, p, t.value))).after(t)
        }
        Region::Undefined => Flash::undefined(),
    }
}

pub(crate) fn hs(h: f64, s: f64) -> Flash {
    match Region::from_hs(h, s) {
        Region::One => {
            let p = region1::p_hs(h, s);
            Flash::exact(single_phase(gibbs_props(Region::One, p, region1::t_ph(p, h))))
        }
        Region::Two => {
            let p = region2::p_hs(h, s);
            Flash::exact(single_phase(gibbs_props(Region::Two, p, region2::t_ph(p, h))))
        }
        Region::Three => {
            let p = region3::p_hs(h, s);
            let rho = 1.0 / region3::v_ph(p, h);
            Flash::exact(single_phase(density_props(p, rho, region3::t_ph(p, h))))
        }
        Region::Four => {
            let t = region4::t_hs(h, s);
            let p = region4::p_t(t.value);
            let x = region4::x_ph(p, h);
            let (liquid, vapour) = saturation_p(p);
            mix(liquid, vapour, x.value).after(x).after(t)
        }
        // No (h, s) backward path exists for Region 5.
        Region::Five | Region::Undefined => Flash::undefined(),
    }
}

pub(crate) fn prho(p: f64, rho: f64) -> Flash {
    match Region::from_prho(p, rho) {
        Region::One => {
            let t = region1::t_prho(p, rho);
            Flash::exact(single_phase(gibbs_props(Region::One, p, t.value))).after(t)
        }
        Region::Two => {
            let t = region2::t_prho(p, rho);
            Flash::exact(single_phase(gibbs_props(Region::Two, p, t.value))).after(t)
        }
        Region::Three => {
            let t = region3::t_prho(p, rho);
            Flash::exact(single_phase(density_props(p, rho, t.value))).after(t)
        }
        Region::Four => {
            let (liquid, vapour) = saturation_p(p);
            let (vl, vv) = (liquid.props.specific_volume, vapour.props.specific_volume);
            let x = ((1.0 / rho - vl) / (vv - vl)).clamp(0.0, 1.0);
            mix(liquid, vapour, x)
        }
        Region::Five => {
            let t = region5::t_prho(p, rho);
            Flash::exact(single_phase(gibbs_props(Region::Five, p, t.value))).after(t)
        }
        Region::Undefined => Flash::undefined(),
    }
}

/// Two-phase state at pressure `p` and vapour fraction `x`.
pub(crate) fn px(p: f64, x: f64) -> Flash {
    let (liquid, vapour) = saturation_p(p);
    mix(liquid, vapour, x)
}

/// Two-phase state at temperature `t` and vapour fraction `x`.
pub(crate) fn tx(t: f64, x: f64) -> Flash {
    let (liquid, vapour) = saturation_t(t);
    mix(liquid, vapour, x)
}

/// Pressure from enthalpy and density, solved on the (p, h) flash.
pub(crate) fn p_hrho(h: f64, rho: f64) -> Solved {
    Bisection::new(P_MIN, P_MAX, Monotonic::Increasing)
        .tolerance(1e-7)
        .solve(rho, |p| ph(p, h).props.density)
}

// ── Transport ───────────────────────────────────────────────────────

/// Viscosity, conductivity and Prandtl number at a single-phase state.
pub(crate) fn transport_at(props: &SteamProps) -> TransportProps {
    let (p, t, rho) = (props.pressure, props.temperature, props.density);
    let viscosity = transport::viscosity(p, t, rho);
    let thermal_conductivity = transport::thermal_conductivity(p, t, rho);
    TransportProps {
        viscosity,
        thermal_conductivity,
        prandtl: transport::prandtl(props.cp, viscosity, thermal_conductivity),
    }
}
