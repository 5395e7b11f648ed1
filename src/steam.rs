use std::sync::Once;

use tracing::{debug, info, warn};

use crate::constants::{
    CRITICAL_DENSITY, CRITICAL_PRESSURE, CRITICAL_TEMPERATURE, SPECIFIC_GAS_CONSTANT, T_MIN,
    TRIPLE_POINT_PRESSURE, TRIPLE_POINT_TEMPERATURE,
};
use crate::converter::{Converter, UnitSystem};
use crate::error::{Result, XSteamError};
use crate::ice::{self, IceType};
use crate::properties::*;
use crate::region::Region;
use crate::region4::{self, Phase, S_LIQUID_TRIPLE, S_VAPOUR_TRIPLE};
use crate::state::{self, Flash};
use crate::transport;

/// Environment variable naming the unit system used by [`Steam::from_env`].
pub const UNIT_SYSTEM_VAR: &str = "XSTEAM_UNIT_SYSTEM";

/// Output keys understood by [`Steam::get`].
const OUTPUTS: [&str; 19] = [
    "T", "P", "H", "S", "U", "D", "RHO", "V", "CP", "CV", "W", "X", "Q", "ETA", "MY", "TCX", "TC",
    "PR", "ST",
];

/// High-level entry point for IAPWS-IF97 steam-table calculations.
///
/// Every input and output is in the [`UnitSystem`] chosen at
/// construction. Inputs outside the validity envelope give `NaN` (or an
/// undefined [`SteamProps`]) and a `tracing` warning; only meaningless
/// requests such as a negative density or an unknown property key are
/// errors.
///
/// # Quick example (MKS units)
/// ```
/// use xsteam::{Steam, UnitSystem};
///
/// let steam = Steam::with_units(UnitSystem::mks());
/// // °C, bar, kJ/kg
/// let t = steam.tsat_p(1.0);
/// assert!((t - 99.606).abs() < 1e-3);
/// let h = steam.get("H", "P", 10.0, "T", 300.0)?;
/// assert!((h - 3051.7).abs() < 0.1);
/// # Ok::<(), xsteam::XSteamError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steam {
    conv: Converter,
}

impl Steam {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a `Steam` working in internal units (K, MPa, kJ/kg, …).
    pub fn new() -> Self {
        Self::with_units(UnitSystem::bare())
    }

    /// Create a `Steam` with a custom unit system.
    pub fn with_units(units: UnitSystem) -> Self {
        info!(?units, "steam tables ready");
        Self { conv: Converter::new(units) }
    }

    /// Create a `Steam` whose unit system is named by the
    /// `XSTEAM_UNIT_SYSTEM` environment variable (`bare`, `mks` or `fls`).
    /// A `.env` file is honoured. Without the variable the internal units
    /// are used.
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();
        match std::env::var(UNIT_SYSTEM_VAR) {
            Ok(name) => Ok(Self::with_units(name.parse()?)),
            Err(_) => Ok(Self::new()),
        }
    }

    // ── .env loading (once) ──────────────────────────────────────────

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            if dotenvy::dotenv().is_ok() { return; }
            if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
                let p = std::path::PathBuf::from(dir).join(".env");
                if p.exists() { let _ = dotenvy::from_path(&p); }
            }
        });
    }

    /// The active unit system.
    pub fn units(&self) -> &UnitSystem {
        &self.conv.units
    }

    /// Access the active converter (useful for manual conversions).
    pub fn converter(&self) -> &Converter {
        &self.conv
    }

    // ── Constants ────────────────────────────────────────────────────

    /// Critical point (Tc, Pc, ρc) in user units.
    pub fn critical_point(&self) -> CriticalProps {
        CriticalProps {
            temperature: self.conv.t_from_si(CRITICAL_TEMPERATURE),
            pressure:    self.conv.p_from_si(CRITICAL_PRESSURE),
            density:     self.conv.rho_from_si(CRITICAL_DENSITY),
        }
    }

    /// Triple point as `(temperature, pressure)` in user units.
    pub fn triple_point(&self) -> (f64, f64) {
        (
            self.conv.t_from_si(TRIPLE_POINT_TEMPERATURE),
            self.conv.p_from_si(TRIPLE_POINT_PRESSURE),
        )
    }

    /// Specific gas constant of water, in the entropy unit.
    pub fn specific_gas_constant(&self) -> f64 {
        self.conv.s_from_si(SPECIFIC_GAS_CONSTANT)
    }

    // ── Pair flashes ─────────────────────────────────────────────────

    /// Pressure–temperature flash. Exactly on the saturation line the
    /// state is not fixed by (p, T) and the result is undefined.
    pub fn props_pt(&self, p: f64, t: f64) -> SteamProps {
        self.conv.props_from_si(&self.pt(p, t))
    }

    /// Pressure–enthalpy flash.
    pub fn props_ph(&self, p: f64, h: f64) -> SteamProps {
        self.conv.props_from_si(&self.ph(p, h))
    }

    /// Pressure–entropy flash.
    pub fn props_ps(&self, p: f64, s: f64) -> SteamProps {
        self.conv.props_from_si(&self.ps(p, s))
    }

    /// Enthalpy–entropy flash. Not available in Region 5.
    pub fn props_hs(&self, h: f64, s: f64) -> SteamProps {
        self.conv.props_from_si(&self.hs(h, s))
    }

    /// Pressure–density flash. The density must be positive.
    pub fn props_prho(&self, p: f64, rho: f64) -> Result<SteamProps> {
        Ok(self.conv.props_from_si(&self.prho(p, rho)?))
    }

    /// Pressure–quality flash on the saturation line.
    pub fn props_px(&self, p: f64, x: f64) -> Result<SteamProps> {
        Ok(self.conv.props_from_si(&self.px(p, x)?))
    }

    /// Temperature–quality flash on the saturation line.
    pub fn props_tx(&self, t: f64, x: f64) -> Result<SteamProps> {
        Ok(self.conv.props_from_si(&self.tx(t, x)?))
    }

    /// Saturated liquid and vapour at a given pressure.
    pub fn saturation_p(&self, p: f64) -> SaturationProps {
        let p = self.conv.p_to_si(p);
        if !on_saturation_p(p) {
            warn!(p, "saturation_p: pressure out of range");
            return self.convert_sat(SteamProps::undefined(), SteamProps::undefined());
        }
        let (liquid, vapour) = state::saturation_p(p);
        let liquid = self.settle("saturation_p", (p, 0.0), liquid);
        let vapour = self.settle("saturation_p", (p, 1.0), vapour);
        self.convert_sat(liquid, vapour)
    }

    /// Saturated liquid and vapour at a given temperature.
    pub fn saturation_t(&self, t: f64) -> SaturationProps {
        let t = self.conv.t_to_si(t);
        if !on_saturation_t(t) {
            warn!(t, "saturation_t: temperature out of range");
            return self.convert_sat(SteamProps::undefined(), SteamProps::undefined());
        }
        let (liquid, vapour) = state::saturation_t(t);
        let liquid = self.settle("saturation_t", (t, 0.0), liquid);
        let vapour = self.settle("saturation_t", (t, 1.0), vapour);
        self.convert_sat(liquid, vapour)
    }

    /// Viscosity, thermal conductivity and Prandtl number at (p, T).
    pub fn transport_pt(&self, p: f64, t: f64) -> TransportProps {
        let props = self.pt(p, t);
        self.convert_transport(self.transport_of("transport_pt", &props))
    }

    /// Viscosity, thermal conductivity and Prandtl number at (p, h).
    pub fn transport_ph(&self, p: f64, h: f64) -> TransportProps {
        let props = self.ph(p, h);
        self.convert_transport(self.transport_of("transport_ph", &props))
    }

    // ── Generic property lookup ─────────────────────────────────────

    /// **Generic property lookup**, CoolProp-style.
    ///
    /// Keys are case-insensitive and the two inputs may come in either
    /// order. Supported pairs: (P,T) (P,H) (P,S) (H,S) (P,D) (P,X) (T,X)
    /// (H,D); `RHO` is accepted for `D` and `Q` for `X`. Outputs: T P H S
    /// U D V CP CV W X ETA TCX PR ST (with the aliases RHO, Q, MY, TC).
    ///
    /// ```
    /// # use xsteam::{Steam, UnitSystem};
    /// let steam = Steam::with_units(UnitSystem::mks());
    /// let x = steam.get("Q", "H", 1000.0, "P", 1.0)?;
    /// assert!((x - 0.258055424).abs() < 1e-6);
    /// # Ok::<(), xsteam::XSteamError>(())
    /// ```
    pub fn get(
        &self,
        output: &str,
        key1: &str, val1: f64,
        key2: &str, val2: f64,
    ) -> Result<f64> {
        validate_finite(key1, val1)?;
        validate_finite(key2, val2)?;

        let out = canonical_key(output);
        if !OUTPUTS.contains(&out.as_str()) {
            return Err(XSteamError::UnknownProperty(output.to_string()));
        }

        let k1 = canonical_key(key1);
        let k2 = canonical_key(key2);
        let props = match (k1.as_str(), k2.as_str()) {
            ("P", "T") => self.pt(val1, val2),
            ("T", "P") => self.pt(val2, val1),

            ("P", "H") => self.ph(val1, val2),
            ("H", "P") => self.ph(val2, val1),

            ("P", "S") => self.ps(val1, val2),
            ("S", "P") => self.ps(val2, val1),

            ("H", "S") => self.hs(val1, val2),
            ("S", "H") => self.hs(val2, val1),

            ("P", "D") => self.prho(val1, val2)?,
            ("D", "P") => self.prho(val2, val1)?,

            ("P", "X") => self.px(val1, val2)?,
            ("X", "P") => self.px(val2, val1)?,

            ("T", "X") => self.tx(val1, val2)?,
            ("X", "T") => self.tx(val2, val1)?,

            ("H", "D") => self.ph(self.p_hrho(val1, val2)?, val1),
            ("D", "H") => self.ph(self.p_hrho(val2, val1)?, val2),

            _ => return Err(XSteamError::UnsupportedPair(key1.to_string(), key2.to_string())),
        };

        let raw = match out.as_str() {
            "T" => props.temperature,
            "P" => props.pressure,
            "H" => props.enthalpy,
            "S" => props.entropy,
            "U" => props.internal_energy,
            "D" => props.density,
            "V" => props.specific_volume,
            "CP" => props.cp,
            "CV" => props.cv,
            "W" => props.sound_speed,
            "X" => props.quality,
            "ETA" | "MY" => self.transport_of("get", &props).viscosity,
            "TCX" | "TC" => self.transport_of("get", &props).thermal_conductivity,
            "PR" => self.transport_of("get", &props).prandtl,
            _ => self.surface_tension(props.temperature),
        };
        Ok(self.conv.output_from_si(&out, raw))
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// Saturation temperature.
    pub fn tsat_p(&self, p: f64) -> f64 {
        let p = self.conv.p_to_si(p);
        if !on_saturation_p(p) {
            warn!(p, "tsat_p: pressure out of range");
            return f64::NAN;
        }
        self.conv.t_from_si(region4::t_p(p))
    }

    /// Saturation temperature from entropy.
    pub fn tsat_s(&self, s: f64) -> f64 {
        let s = self.conv.s_to_si(s);
        if !on_saturation_s(s) {
            warn!(s, "tsat_s: entropy out of range");
            return f64::NAN;
        }
        self.conv.t_from_si(region4::t_p(region4::p_s(s)))
    }

    pub fn t_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.t_from_si(self.ph(p, h).temperature)
    }

    pub fn t_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.t_from_si(self.ps(p, s).temperature)
    }

    pub fn t_hs(&self, h: f64, s: f64) -> f64 {
        self.conv.t_from_si(self.hs(h, s).temperature)
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// Saturation pressure from entropy.
    pub fn psat_s(&self, s: f64) -> f64 {
        let s = self.conv.s_to_si(s);
        if !on_saturation_s(s) {
            warn!(s, "psat_s: entropy out of range");
            return f64::NAN;
        }
        self.conv.p_from_si(region4::p_s(s))
    }

    /// Saturation pressure, for 273.1 K < T < T_c.
    pub fn psat_t(&self, t: f64) -> f64 {
        let t = self.conv.t_to_si(t);
        if !(t > 273.1 && t < CRITICAL_TEMPERATURE) {
            warn!(t, "psat_t: temperature out of range");
            return f64::NAN;
        }
        self.conv.p_from_si(region4::p_t(t))
    }

    pub fn p_hs(&self, h: f64, s: f64) -> f64 {
        self.conv.p_from_si(self.hs(h, s).pressure)
    }

    /// Pressure from enthalpy and density.
    pub fn p_hrho(&self, h: f64, rho: f64) -> Result<f64> {
        validate_density(rho)?;
        let h = self.conv.h_to_si(h);
        let rho = self.conv.rho_to_si(rho);
        let p = state::p_hrho(h, rho);
        if let Some(diagnostic) = p.diagnostic {
            warn!(h, rho, %diagnostic, "p_hrho did not converge");
        }
        Ok(self.conv.p_from_si(p.value))
    }

    // ── Enthalpy ────────────────────────────────────────────────────

    pub fn hv_p(&self, p: f64) -> f64 {
        self.conv.h_from_si(self.side_p("hv_p", p, Phase::Vapour).enthalpy)
    }

    pub fn hl_p(&self, p: f64) -> f64 {
        self.conv.h_from_si(self.side_p("hl_p", p, Phase::Liquid).enthalpy)
    }

    pub fn hv_t(&self, t: f64) -> f64 {
        self.conv.h_from_si(self.side_t("hv_t", t, Phase::Vapour).enthalpy)
    }

    pub fn hl_t(&self, t: f64) -> f64 {
        self.conv.h_from_si(self.side_t("hl_t", t, Phase::Liquid).enthalpy)
    }

    pub fn h_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.h_from_si(self.pt(p, t).enthalpy)
    }

    pub fn h_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.h_from_si(self.ps(p, s).enthalpy)
    }

    /// Enthalpy of a two-phase state from pressure and vapour fraction.
    pub fn h_px(&self, p: f64, x: f64) -> Result<f64> {
        Ok(self.conv.h_from_si(self.px(p, x)?.enthalpy))
    }

    pub fn h_prho(&self, p: f64, rho: f64) -> Result<f64> {
        Ok(self.conv.h_from_si(self.prho(p, rho)?.enthalpy))
    }

    /// Enthalpy of a two-phase state from temperature and vapour fraction.
    pub fn h_tx(&self, t: f64, x: f64) -> Result<f64> {
        Ok(self.conv.h_from_si(self.tx(t, x)?.enthalpy))
    }

    // ── Specific volume ─────────────────────────────────────────────

    pub fn vv_p(&self, p: f64) -> f64 {
        self.conv.v_from_si(self.side_p("vv_p", p, Phase::Vapour).specific_volume)
    }

    pub fn vl_p(&self, p: f64) -> f64 {
        self.conv.v_from_si(self.side_p("vl_p", p, Phase::Liquid).specific_volume)
    }

    pub fn vv_t(&self, t: f64) -> f64 {
        self.conv.v_from_si(self.side_t("vv_t", t, Phase::Vapour).specific_volume)
    }

    pub fn vl_t(&self, t: f64) -> f64 {
        self.conv.v_from_si(self.side_t("vl_t", t, Phase::Liquid).specific_volume)
    }

    pub fn v_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.v_from_si(self.pt(p, t).specific_volume)
    }

    pub fn v_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.v_from_si(self.ph(p, h).specific_volume)
    }

    pub fn v_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.v_from_si(self.ps(p, s).specific_volume)
    }

    // ── Density ─────────────────────────────────────────────────────

    pub fn rhov_p(&self, p: f64) -> f64 {
        self.conv.rho_from_si(self.side_p("rhov_p", p, Phase::Vapour).density)
    }

    pub fn rhol_p(&self, p: f64) -> f64 {
        self.conv.rho_from_si(self.side_p("rhol_p", p, Phase::Liquid).density)
    }

    pub fn rhov_t(&self, t: f64) -> f64 {
        self.conv.rho_from_si(self.side_t("rhov_t", t, Phase::Vapour).density)
    }

    pub fn rhol_t(&self, t: f64) -> f64 {
        self.conv.rho_from_si(self.side_t("rhol_t", t, Phase::Liquid).density)
    }

    pub fn rho_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.rho_from_si(self.pt(p, t).density)
    }

    pub fn rho_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.rho_from_si(self.ph(p, h).density)
    }

    pub fn rho_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.rho_from_si(self.ps(p, s).density)
    }

    // ── Entropy ─────────────────────────────────────────────────────

    pub fn sv_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("sv_p", p, Phase::Vapour).entropy)
    }

    pub fn sl_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("sl_p", p, Phase::Liquid).entropy)
    }

    pub fn sv_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("sv_t", t, Phase::Vapour).entropy)
    }

    pub fn sl_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("sl_t", t, Phase::Liquid).entropy)
    }

    pub fn s_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.s_from_si(self.pt(p, t).entropy)
    }

    pub fn s_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.s_from_si(self.ph(p, h).entropy)
    }

    pub fn s_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.s_from_si(self.ps(p, s).entropy)
    }

    // ── Internal energy ─────────────────────────────────────────────

    pub fn uv_p(&self, p: f64) -> f64 {
        self.conv.h_from_si(self.side_p("uv_p", p, Phase::Vapour).internal_energy)
    }

    pub fn ul_p(&self, p: f64) -> f64 {
        self.conv.h_from_si(self.side_p("ul_p", p, Phase::Liquid).internal_energy)
    }

    pub fn uv_t(&self, t: f64) -> f64 {
        self.conv.h_from_si(self.side_t("uv_t", t, Phase::Vapour).internal_energy)
    }

    pub fn ul_t(&self, t: f64) -> f64 {
        self.conv.h_from_si(self.side_t("ul_t", t, Phase::Liquid).internal_energy)
    }

    pub fn u_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.h_from_si(self.pt(p, t).internal_energy)
    }

    pub fn u_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.h_from_si(self.ph(p, h).internal_energy)
    }

    pub fn u_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.h_from_si(self.ps(p, s).internal_energy)
    }

    // ── Isobaric heat capacity ──────────────────────────────────────

    pub fn cpv_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("cpv_p", p, Phase::Vapour).cp)
    }

    pub fn cpl_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("cpl_p", p, Phase::Liquid).cp)
    }

    pub fn cpv_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("cpv_t", t, Phase::Vapour).cp)
    }

    pub fn cpl_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("cpl_t", t, Phase::Liquid).cp)
    }

    pub fn cp_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.s_from_si(self.pt(p, t).cp)
    }

    pub fn cp_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.s_from_si(self.single_phase("cp_ph", self.ph(p, h)).cp)
    }

    pub fn cp_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.s_from_si(self.single_phase("cp_ps", self.ps(p, s)).cp)
    }

    // ── Isochoric heat capacity ─────────────────────────────────────

    pub fn cvv_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("cvv_p", p, Phase::Vapour).cv)
    }

    pub fn cvl_p(&self, p: f64) -> f64 {
        self.conv.s_from_si(self.side_p("cvl_p", p, Phase::Liquid).cv)
    }

    pub fn cvv_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("cvv_t", t, Phase::Vapour).cv)
    }

    pub fn cvl_t(&self, t: f64) -> f64 {
        self.conv.s_from_si(self.side_t("cvl_t", t, Phase::Liquid).cv)
    }

    pub fn cv_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.s_from_si(self.pt(p, t).cv)
    }

    pub fn cv_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.s_from_si(self.single_phase("cv_ph", self.ph(p, h)).cv)
    }

    pub fn cv_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.s_from_si(self.single_phase("cv_ps", self.ps(p, s)).cv)
    }

    // ── Speed of sound ──────────────────────────────────────────────

    pub fn wv_p(&self, p: f64) -> f64 {
        self.conv.w_from_si(self.side_p("wv_p", p, Phase::Vapour).sound_speed)
    }

    pub fn wl_p(&self, p: f64) -> f64 {
        self.conv.w_from_si(self.side_p("wl_p", p, Phase::Liquid).sound_speed)
    }

    pub fn wv_t(&self, t: f64) -> f64 {
        self.conv.w_from_si(self.side_t("wv_t", t, Phase::Vapour).sound_speed)
    }

    pub fn wl_t(&self, t: f64) -> f64 {
        self.conv.w_from_si(self.side_t("wl_t", t, Phase::Liquid).sound_speed)
    }

    pub fn w_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.w_from_si(self.pt(p, t).sound_speed)
    }

    pub fn w_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.w_from_si(self.single_phase("w_ph", self.ph(p, h)).sound_speed)
    }

    pub fn w_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.w_from_si(self.single_phase("w_ps", self.ps(p, s)).sound_speed)
    }

    // ── Viscosity / Prandtl ─────────────────────────────────────────

    pub fn my_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.my_from_si(self.transport_of("my_pt", &self.pt(p, t)).viscosity)
    }

    pub fn my_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.my_from_si(self.transport_of("my_ph", &self.ph(p, h)).viscosity)
    }

    pub fn my_ps(&self, p: f64, s: f64) -> f64 {
        self.conv.my_from_si(self.transport_of("my_ps", &self.ps(p, s)).viscosity)
    }

    pub fn pr_pt(&self, p: f64, t: f64) -> f64 {
        self.transport_of("pr_pt", &self.pt(p, t)).prandtl
    }

    pub fn pr_ph(&self, p: f64, h: f64) -> f64 {
        self.transport_of("pr_ph", &self.ph(p, h)).prandtl
    }

    // ── Surface tension ─────────────────────────────────────────────

    pub fn st_t(&self, t: f64) -> f64 {
        self.conv.st_from_si(self.surface_tension(self.conv.t_to_si(t)))
    }

    /// Surface tension at the saturation temperature of `p`.
    pub fn st_p(&self, p: f64) -> f64 {
        let p = self.conv.p_to_si(p);
        if !on_saturation_p(p) {
            warn!(p, "st_p: pressure out of range");
            return f64::NAN;
        }
        self.conv.st_from_si(self.surface_tension(region4::t_p(p)))
    }

    // ── Thermal conductivity ────────────────────────────────────────

    pub fn tcl_p(&self, p: f64) -> f64 {
        let side = self.side_p("tcl_p", p, Phase::Liquid);
        self.conv.tc_from_si(self.transport_of("tcl_p", &side).thermal_conductivity)
    }

    pub fn tcv_p(&self, p: f64) -> f64 {
        let side = self.side_p("tcv_p", p, Phase::Vapour);
        self.conv.tc_from_si(self.transport_of("tcv_p", &side).thermal_conductivity)
    }

    pub fn tcl_t(&self, t: f64) -> f64 {
        let side = self.side_t("tcl_t", t, Phase::Liquid);
        self.conv.tc_from_si(self.transport_of("tcl_t", &side).thermal_conductivity)
    }

    pub fn tcv_t(&self, t: f64) -> f64 {
        let side = self.side_t("tcv_t", t, Phase::Vapour);
        self.conv.tc_from_si(self.transport_of("tcv_t", &side).thermal_conductivity)
    }

    pub fn tc_pt(&self, p: f64, t: f64) -> f64 {
        self.conv.tc_from_si(self.transport_of("tc_pt", &self.pt(p, t)).thermal_conductivity)
    }

    pub fn tc_ph(&self, p: f64, h: f64) -> f64 {
        self.conv.tc_from_si(self.transport_of("tc_ph", &self.ph(p, h)).thermal_conductivity)
    }

    pub fn tc_hs(&self, h: f64, s: f64) -> f64 {
        self.conv.tc_from_si(self.transport_of("tc_hs", &self.hs(h, s)).thermal_conductivity)
    }

    // ── Vapour fraction ─────────────────────────────────────────────

    /// Vapour mass fraction, clamped to 0 or 1 outside the dome.
    pub fn x_ph(&self, p: f64, h: f64) -> f64 {
        let (p, h) = (self.conv.p_to_si(p), self.conv.h_to_si(h));
        if !on_saturation_p(p) {
            warn!(p, "x_ph: pressure out of range");
            return f64::NAN;
        }
        let x = region4::x_ph(p, h);
        if let Some(diagnostic) = x.diagnostic {
            warn!(p, h, %diagnostic, "x_ph did not converge");
        }
        x.value
    }

    /// Vapour mass fraction, clamped to 0 or 1 outside the dome.
    pub fn x_ps(&self, p: f64, s: f64) -> f64 {
        let (p, s) = (self.conv.p_to_si(p), self.conv.s_to_si(s));
        if !on_saturation_p(p) {
            warn!(p, "x_ps: pressure out of range");
            return f64::NAN;
        }
        let x = region4::x_ps(p, s);
        if let Some(diagnostic) = x.diagnostic {
            warn!(p, s, %diagnostic, "x_ps did not converge");
        }
        x.value
    }

    /// Vapour volume fraction.
    pub fn vx_ph(&self, p: f64, h: f64) -> f64 {
        let x = self.x_ph(p, h);
        if x.is_nan() {
            return f64::NAN;
        }
        state::vapour_volume_fraction(self.conv.p_to_si(p), x)
    }

    /// Vapour volume fraction.
    pub fn vx_ps(&self, p: f64, s: f64) -> f64 {
        let x = self.x_ps(p, s);
        if x.is_nan() {
            return f64::NAN;
        }
        state::vapour_volume_fraction(self.conv.p_to_si(p), x)
    }

    // ── Ice ─────────────────────────────────────────────────────────

    /// Melting pressure of ice.
    ///
    /// Without a hint the ice phase is picked from the temperature; in the
    /// Ih/III overlap that choice is refused with
    /// [`XSteamError::AmbiguousIceType`].
    pub fn pmelt_t(&self, t: f64, hint: Option<IceType>) -> Result<f64> {
        let t = self.conv.t_to_si(t);
        let ice = match hint {
            Some(ice) => ice,
            None => match IceType::from_temperature(t)? {
                Some(ice) => {
                    debug!(%ice, t, "ice type chosen from temperature");
                    ice
                }
                None => {
                    warn!(t, "pmelt_t: temperature out of range");
                    return Ok(f64::NAN);
                }
            },
        };
        let p = ice.melting_pressure(t);
        if p.is_nan() {
            warn!(%ice, t, "pmelt_t: temperature out of range for this ice");
        }
        Ok(self.conv.p_from_si(p))
    }

    /// Sublimation pressure of ice Ih, for 50 K ≤ T < 273.16 K.
    pub fn psubl_t(&self, t: f64) -> f64 {
        let t = self.conv.t_to_si(t);
        let p = ice::sublimation_pressure(t);
        if p.is_nan() {
            warn!(t, "psubl_t: temperature out of range");
        }
        self.conv.p_from_si(p)
    }

    // ── Internal flashes (user units in, internal units out) ────────

    fn pt(&self, p: f64, t: f64) -> SteamProps {
        let (p, t) = (self.conv.p_to_si(p), self.conv.t_to_si(t));
        self.settle("pt", (p, t), state::pt(p, t))
    }

    fn ph(&self, p: f64, h: f64) -> SteamProps {
        let (p, h) = (self.conv.p_to_si(p), self.conv.h_to_si(h));
        self.settle("ph", (p, h), state::ph(p, h))
    }

    fn ps(&self, p: f64, s: f64) -> SteamProps {
        let (p, s) = (self.conv.p_to_si(p), self.conv.s_to_si(s));
        self.settle("ps", (p, s), state::ps(p, s))
    }

    fn hs(&self, h: f64, s: f64) -> SteamProps {
        let (h, s) = (self.conv.h_to_si(h), self.conv.s_to_si(s));
        self.settle("hs", (h, s), state::hs(h, s))
    }

    fn prho(&self, p: f64, rho: f64) -> Result<SteamProps> {
        validate_density(rho)?;
        let (p, rho) = (self.conv.p_to_si(p), self.conv.rho_to_si(rho));
        Ok(self.settle("prho", (p, rho), state::prho(p, rho)))
    }

    fn px(&self, p: f64, x: f64) -> Result<SteamProps> {
        validate_fraction(x)?;
        let p = self.conv.p_to_si(p);
        if !on_saturation_p(p) {
            warn!(p, x, "px: pressure out of range");
            return Ok(SteamProps::undefined());
        }
        Ok(self.settle("px", (p, x), state::px(p, x)))
    }

    fn tx(&self, t: f64, x: f64) -> Result<SteamProps> {
        validate_fraction(x)?;
        let t = self.conv.t_to_si(t);
        if !on_saturation_t(t) {
            warn!(t, x, "tx: temperature out of range");
            return Ok(SteamProps::undefined());
        }
        Ok(self.settle("tx", (t, x), state::tx(t, x)))
    }

    /// One side of the dome at a user-unit pressure.
    fn side_p(&self, op: &'static str, p: f64, phase: Phase) -> SteamProps {
        let p = self.conv.p_to_si(p);
        if !on_saturation_p(p) {
            warn!(op, p, "pressure out of range");
            return SteamProps::undefined();
        }
        let (liquid, vapour) = state::saturation_p(p);
        let side = match phase {
            Phase::Liquid => liquid,
            Phase::Vapour => vapour,
        };
        self.settle(op, (p, side.props.quality), side)
    }

    /// One side of the dome at a user-unit temperature.
    fn side_t(&self, op: &'static str, t: f64, phase: Phase) -> SteamProps {
        let t = self.conv.t_to_si(t);
        if !on_saturation_t(t) {
            warn!(op, t, "temperature out of range");
            return SteamProps::undefined();
        }
        let (liquid, vapour) = state::saturation_t(t);
        let side = match phase {
            Phase::Liquid => liquid,
            Phase::Vapour => vapour,
        };
        self.settle(op, (t, side.props.quality), side)
    }

    /// Logs whatever the flash reports and hands back its state.
    fn settle(&self, op: &'static str, (a, b): (f64, f64), flash: Flash) -> SteamProps {
        if let Some(diagnostic) = flash.diagnostic {
            warn!(op, a, b, %diagnostic, "iteration did not converge, using best estimate");
        }
        if !flash.props.is_defined() {
            warn!(op, a, b, "inputs outside the validity envelope");
        }
        flash.props
    }

    /// cp, cv and w have no meaning inside the dome.
    fn single_phase(&self, op: &'static str, props: SteamProps) -> SteamProps {
        if props.region == Region::Four {
            warn!(op, "not available in the two-phase region");
        }
        props
    }

    fn transport_of(&self, op: &'static str, props: &SteamProps) -> TransportProps {
        let undefined = TransportProps {
            viscosity: f64::NAN,
            thermal_conductivity: f64::NAN,
            prandtl: f64::NAN,
        };
        match props.region {
            Region::Undefined => undefined,
            Region::Four => {
                warn!(op, "transport properties are not available in the two-phase region");
                undefined
            }
            _ => {
                let tp = state::transport_at(props);
                if tp.viscosity.is_nan() || tp.thermal_conductivity.is_nan() {
                    warn!(
                        op,
                        p = props.pressure,
                        t = props.temperature,
                        "temperature and/or pressure out of range of the transport formulations"
                    );
                }
                tp
            }
        }
    }

    fn surface_tension(&self, t: f64) -> f64 {
        let st = transport::surface_tension(t);
        if st.is_nan() {
            warn!(t, "surface tension: temperature out of range");
        }
        st
    }

    // ── Internal conversion helpers ──────────────────────────────────

    fn convert_sat(&self, liquid: SteamProps, vapour: SteamProps) -> SaturationProps {
        SaturationProps {
            temperature: self.conv.t_from_si(liquid.temperature),
            pressure:    self.conv.p_from_si(liquid.pressure),
            liquid:      self.conv.props_from_si(&liquid),
            vapour:      self.conv.props_from_si(&vapour),
        }
    }

    fn convert_transport(&self, tp: TransportProps) -> TransportProps {
        TransportProps {
            viscosity:            self.conv.my_from_si(tp.viscosity),
            thermal_conductivity: self.conv.tc_from_si(tp.thermal_conductivity),
            prandtl:              tp.prandtl,
        }
    }
}

// ── Input validation ────────────────────────────────────────────────

fn canonical_key(key: &str) -> String {
    match key.trim().to_uppercase().as_str() {
        "RHO" => "D".to_string(),
        "Q" => "X".to_string(),
        "MY" => "ETA".to_string(),
        "TC" => "TCX".to_string(),
        other => other.to_string(),
    }
}

fn validate_finite(key: &str, val: f64) -> Result<()> {
    if val.is_finite() {
        Ok(())
    } else {
        Err(XSteamError::InvalidInput(format!("{key} = {val} is not a finite number")))
    }
}

fn validate_density(rho: f64) -> Result<()> {
    if rho.is_finite() && rho > 0.0 {
        Ok(())
    } else {
        Err(XSteamError::InvalidInput(format!("density must be positive, got {rho}")))
    }
}

fn validate_fraction(x: f64) -> Result<()> {
    if (0.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(XSteamError::InvalidInput(format!("vapour fraction {x} is outside [0, 1]")))
    }
}

fn on_saturation_p(p: f64) -> bool {
    p > TRIPLE_POINT_PRESSURE && p < CRITICAL_PRESSURE
}

fn on_saturation_t(t: f64) -> bool {
    t > T_MIN && t < CRITICAL_TEMPERATURE
}

fn on_saturation_s(s: f64) -> bool {
    s > S_LIQUID_TRIPLE && s < S_VAPOUR_TRIPLE
}
