//! Region 2: superheated vapour up to 1073.15 K and 100 MPa, bounded below
//! by the saturation curve (T ≤ 623.15 K) or the B23 line.
//!
//! Basic equation γ = γ⁰ + γʳ with π = p / 1 MPa and τ = 540 K / T. The
//! [`metastable`] submodule carries the supplementary equation for
//! metastable vapour below the saturation line (p ≤ 10 MPa).
//!
//! Backward equations are split into subregions 2a, 2b and 2c. The split
//! functions are exposed so that the classifier and the tests can name the
//! subregion a state falls into.

use crate::bisection::{Bisection, Monotonic, Solved};
use crate::boundary;
use crate::constants::{P_SAT_13_FINE, T_25};
use crate::gibbs::{Gibbs, Residual};
use crate::power_sum::{Partial, sum};
use crate::region4;

const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];
const N0: [f64; 9] = [
    -9.6927686500217, 10.086655968018, -0.005608791128302, 0.071452738081455, -0.40710498223928,
    1.4240819171444, -4.383951131945, -0.28408632460772, 0.021268463753307,
];

const IR: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10, 10,
    16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];
const JR: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];
const NR: [f64; 43] = [
    -1.7731742473213e-03, -0.017834862292358, -0.045996013696365, -0.057581259083432,
    -0.05032527872793, -3.3032641670203e-05, -1.8948987516315e-04, -3.9392777243355e-03,
    -0.043797295650573, -2.6674547914087e-05, 2.0481737692309e-08, 4.3870667284435e-07,
    -3.227767723857e-05, -1.5033924542148e-03, -0.040668253562649, -7.8847309559367e-10,
    1.2790717852285e-08, 4.8225372718507e-07, 2.2922076337661e-06, -1.6714766451061e-11,
    -2.1171472321355e-03, -23.895741934104, -5.905956432427e-18, -1.2621808899101e-06,
    -0.038946842435739, 1.1256211360459e-11, -8.2311340897998, 1.9809712802088e-08,
    1.0406965210174e-19, -1.0234747095929e-13, -1.0018179379511e-09, -8.0882908646985e-11,
    0.10693031879409, -0.33662250574171, 8.9185845355421e-25, 3.0629316876232e-13,
    -4.2002467698208e-06, -5.9056029685639e-26, 3.7826947613457e-06, -1.2768608934681e-15,
    7.3087610595061e-29, 5.5414715350778e-17, -9.436970724121e-07,
];

fn gibbs(p: f64, t: f64) -> Gibbs {
    let residual = Residual { i: &IR, j: &JR, n: &NR, tau_shift: 0.5 };
    Gibbs::evaluate(p, t, 540.0, &J0, &N0, &residual)
}

// ── Forward equations ───────────────────────────────────────────────

pub fn volume(p: f64, t: f64) -> f64 {
    gibbs(p, t).volume()
}

pub fn enthalpy(p: f64, t: f64) -> f64 {
    gibbs(p, t).enthalpy()
}

pub fn internal_energy(p: f64, t: f64) -> f64 {
    gibbs(p, t).internal_energy()
}

pub fn entropy(p: f64, t: f64) -> f64 {
    gibbs(p, t).entropy()
}

pub fn cp(p: f64, t: f64) -> f64 {
    gibbs(p, t).cp()
}

pub fn cv(p: f64, t: f64) -> f64 {
    gibbs(p, t).cv()
}

pub fn speed_of_sound(p: f64, t: f64) -> f64 {
    gibbs(p, t).speed_of_sound()
}

/// Supplementary equation for metastable vapour (IF97 section 6.2).
pub mod metastable {
    use crate::gibbs::{Gibbs, Residual};

    // Ideal-gas part of the stable equation with n⁰₁ and n⁰₂ readjusted.
    const N0: [f64; 9] = [
        -9.6937268393049, 10.087275970006, -0.005608791128302, 0.071452738081455,
        -0.40710498223928, 1.4240819171444, -4.383951131945, -0.28408632460772,
        0.021268463753307,
    ];

    const IR: [i32; 13] = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 4, 5, 5];
    const JR: [i32; 13] = [0, 2, 5, 11, 1, 7, 16, 4, 16, 7, 10, 9, 10];
    const NR: [f64; 13] = [
        -0.73362260186506e-2, -0.88223831943146e-1, -0.72334555213245e-1,
        -0.40813178534455e-2, 0.20097803380207e-2, -0.53045921898642e-1,
        -0.76190409086970e-2, -0.63498037657313e-2, -0.86043093028588e-1,
        0.75321581522770e-2, -0.79238375446139e-2, -0.22888160778447e-3,
        -0.26456501482810e-2,
    ];

    fn gibbs(p: f64, t: f64) -> Gibbs {
        let residual = Residual { i: &IR, j: &JR, n: &NR, tau_shift: 0.5 };
        Gibbs::evaluate(p, t, 540.0, &super::J0, &N0, &residual)
    }

    pub fn volume(p: f64, t: f64) -> f64 {
        gibbs(p, t).volume()
    }

    pub fn enthalpy(p: f64, t: f64) -> f64 {
        gibbs(p, t).enthalpy()
    }

    pub fn internal_energy(p: f64, t: f64) -> f64 {
        gibbs(p, t).internal_energy()
    }

    pub fn entropy(p: f64, t: f64) -> f64 {
        gibbs(p, t).entropy()
    }

    pub fn cp(p: f64, t: f64) -> f64 {
        gibbs(p, t).cp()
    }

    pub fn cv(p: f64, t: f64) -> f64 {
        gibbs(p, t).cv()
    }

    pub fn speed_of_sound(p: f64, t: f64) -> f64 {
        gibbs(p, t).speed_of_sound()
    }
}

// ── Subregions ──────────────────────────────────────────────────────

/// Backward-equation subregion of Region 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subregion {
    A,
    B,
    C,
}

/// 2b/2c boundary pressure as a function of enthalpy (IF97 eq. 20).
pub fn b2bc_p_h(h: f64) -> f64 {
    905.84278514723 - 0.67955786399241 * h + 1.2809002730136e-04 * h * h
}

/// 2a/2b boundary enthalpy as a function of entropy, used by `p_hs`.
pub fn b2ab_h_s(s: f64) -> f64 {
    -3498.98083432139 + 2575.60716905876 * s - 421.073558227969 * s * s
        + 27.6349063799944 * s.powi(3)
}

pub fn subregion_ph(p: f64, h: f64) -> Subregion {
    if p < 4.0 {
        Subregion::A
    } else if p < b2bc_p_h(h) {
        Subregion::B
    } else {
        Subregion::C
    }
}

pub fn subregion_ps(p: f64, s: f64) -> Subregion {
    if p < 4.0 {
        Subregion::A
    } else if s < 5.85 {
        Subregion::C
    } else {
        Subregion::B
    }
}

pub fn subregion_hs(h: f64, s: f64) -> Subregion {
    if h < b2ab_h_s(s) {
        Subregion::A
    } else if s < 5.85 {
        Subregion::C
    } else {
        Subregion::B
    }
}

// ── Backward equations ──────────────────────────────────────────────

/// Temperature from pressure and enthalpy (IF97 eqs. 22 to 24).
pub fn t_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2000.0;
    match subregion_ph(p, h) {
        Subregion::A => {
            const I: [i32; 34] = [
                0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 4, 4, 4,
                5, 5, 5, 6, 6, 7,
            ];
            const J: [i32; 34] = [
                0, 1, 2, 3, 7, 20, 0, 1, 2, 3, 7, 9, 11, 18, 44, 0, 2, 7, 36, 38, 40, 42, 44, 24,
                44, 12, 32, 44, 32, 36, 42, 34, 44, 28,
            ];
            const N: [f64; 34] = [
                1089.8952318288, 849.51654495535, -107.81748091826, 33.153654801263,
                -7.4232016790248, 11.765048724356, 1.844574935579, -4.1792700549624,
                6.2478196935812, -17.344563108114, -200.58176862096, 271.96065473796,
                -455.11318285818, 3091.9688604755, 252266.40357872, -6.1707422868339e-03,
                -0.31078046629583, 11.670873077107, 128127984.04046, -985549096.23276,
                2822454697.3002, -3594897141.0703, 1722734991.3197, -13551.334240775,
                12848734.66465, 1.3865724283226, 235988.32556514, -13105236.545054,
                7399.9835474766, -551966.9703006, 3715408.5996233, 19127.72923966,
                -415351.64835634, -62.459855192507,
            ];
            sum(&I, &J, &N, p, eta - 2.1, Partial::Value)
        }
        Subregion::B => {
            const I: [i32; 38] = [
                0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4,
                4, 4, 5, 5, 5, 6, 7, 7, 9, 9,
            ];
            const J: [i32; 38] = [
                0, 1, 2, 12, 18, 24, 28, 40, 0, 2, 6, 12, 18, 24, 28, 40, 2, 8, 18, 40, 1, 2, 12,
                24, 2, 12, 18, 24, 28, 40, 18, 24, 40, 28, 2, 28, 1, 40,
            ];
            const N: [f64; 38] = [
                1489.5041079516, 743.07798314034, -97.708318797837, 2.4742464705674,
                -0.63281320016026, 1.1385952129658, -0.47811863648625, 8.5208123431544e-03,
                0.93747147377932, 3.3593118604916, 3.3809355601454, 0.16844539671904,
                0.73875745236695, -0.47128737436186, 0.15020273139707, -0.002176411421975,
                -0.021810755324761, -0.10829784403677, -0.046333324635812, 7.1280351959551e-05,
                1.1032831789999e-04, 1.8955248387902e-04, 3.0891541160537e-03,
                1.3555504554949e-03, 2.8640237477456e-07, -1.0779857357512e-05,
                -7.6462712454814e-05, 1.4052392818316e-05, -3.1083814331434e-05,
                -1.0302738212103e-06, 2.821728163504e-07, 1.2704902271945e-06,
                7.3803353468292e-08, -1.1030139238909e-08, -8.1456365207833e-14,
                -2.5180545682962e-11, -1.7565233969407e-18, 8.6934156344163e-15,
            ];
            sum(&I, &J, &N, p - 2.0, eta - 2.6, Partial::Value)
        }
        Subregion::C => {
            const I: [i32; 23] =
                [-7, -7, -6, -6, -5, -5, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 6, 6, 6, 6, 6, 6];
            const J: [i32; 23] =
                [0, 4, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 4, 8, 4, 0, 1, 4, 10, 12, 16, 20, 22];
            const N: [f64; 23] = [
                -3236839855524.2, 7326335090218.1, 358250899454.47, -583401318515.9,
                -10783068217.47, 20825544563.171, 610747.83564516, 859777.2253558,
                -25745.72360417, 31081.088422714, 1208.2315865936, 482.19755109255,
                3.7966001272486, -10.842984880077, -0.04536417267666, 1.4559115658698e-13,
                1.126159740723e-12, -1.7804982240686e-11, 1.2324579690832e-07,
                -1.1606921130984e-06, 2.7846367088554e-05, -5.9270038474176e-04,
                1.2918582991878e-03,
            ];
            sum(&I, &J, &N, p + 25.0, eta - 1.8, Partial::Value)
        }
    }
}

/// Temperature from pressure and entropy (IF97 eqs. 25 to 27).
pub fn t_ps(p: f64, s: f64) -> f64 {
    match subregion_ps(p, s) {
        Subregion::A => {
            const I: [f64; 46] = [
                -1.5, -1.5, -1.5, -1.5, -1.5, -1.5, -1.25, -1.25, -1.25, -1.0, -1.0, -1.0, -1.0,
                -1.0, -1.0, -0.75, -0.75, -0.5, -0.5, -0.5, -0.5, -0.25, -0.25, -0.25, -0.25, 0.25,
                0.25, 0.25, 0.25, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.75, 0.75, 0.75, 0.75, 1.0,
                1.0, 1.25, 1.25, 1.5, 1.5,
            ];
            const J: [i32; 46] = [
                -24, -23, -19, -13, -11, -10, -19, -15, -6, -26, -21, -17, -16, -9, -8, -15, -14,
                -26, -13, -9, -7, -27, -25, -11, -6, 1, 4, 8, 11, 0, 1, 5, 6, 10, 14, 16, 0, 4, 9,
                17, 7, 18, 3, 15, 5, 18,
            ];
            const N: [f64; 46] = [
                -392359.83861984, 515265.7382727, 40482.443161048, -321.93790923902,
                96.961424218694, -22.867846371773, -449429.14124357, -5011.8336020166,
                0.35684463560015, 44235.33584819, -13673.388811708, 421632.60207864,
                22516.925837475, 474.42144865646, -149.31130797647, -197811.26320452,
                -23554.39947076, -19070.616302076, 55375.669883164, 3829.3691437363,
                -603.91860580567, 1936.3102620331, 4266.064369861, -5978.0638872718,
                -704.01463926862, 338.36784107553, 20.862786635187, 0.033834172656196,
                -4.3124428414893e-05, 166.53791356412, -139.86292055898, -0.78849547999872,
                0.072132411753872, -0.0059754839398283, -1.2141358953904e-05,
                2.3227096733871e-07, -10.538463566194, 2.0718925496502, -0.072193155260427,
                2.074988708112e-07, -0.018340657911379, 2.9036272348696e-07, 0.21037527893619,
                2.5681239729999e-04, -0.012799002933781, -8.2198102652018e-06,
            ];
            sum(&I, &J, &N, p, s / 2.0 - 2.0, Partial::Value)
        }
        Subregion::B => {
            const I: [i32; 44] = [
                -6, -6, -5, -5, -4, -4, -4, -3, -3, -3, -3, -2, -2, -2, -2, -1, -1, -1, -1, -1, 0,
                0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5,
            ];
            const J: [i32; 44] = [
                0, 11, 0, 11, 0, 1, 11, 0, 1, 11, 12, 0, 1, 6, 10, 0, 1, 5, 8, 9, 0, 1, 2, 4, 5,
                6, 9, 0, 1, 2, 3, 7, 8, 0, 1, 5, 0, 1, 3, 0, 1, 0, 1, 2,
            ];
            const N: [f64; 44] = [
                316876.65083497, 20.864175881858, -398593.99803599, -21.816058518877,
                223697.85194242, -2784.1703445817, 9.920743607148, -75197.512299157,
                2970.8605951158, -3.4406878548526, 0.38815564249115, 17511.29508575,
                -1423.7112854449, 1.0943803364167, 0.89971619308495, -3375.9740098958,
                471.62885818355, -1.9188241993679, 0.41078580492196, -0.33465378172097,
                1387.0034777505, -406.63326195838, 41.72734715961, 2.1932549434532,
                -1.0320050009077, 0.35882943516703, 0.0052511453726066, 12.838916450705,
                -2.8642437219381, 0.56912683664855, -0.099962954584931, -0.0032632037778459,
                0.00023320922576723, -0.1533480985745, 0.029072288239902, 0.00037534702741167,
                0.0017296691702411, -0.00038556050844504, -0.000035017712292608,
                -0.000014566393631492, 0.0000056420857267269, 4.1286150074605e-08,
                -2.0684671118824e-08, 1.6409393674725e-09,
            ];
            sum(&I, &J, &N, p, 10.0 - s / 0.7853, Partial::Value)
        }
        Subregion::C => {
            const I: [i32; 30] = [
                -2, -2, -1, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 7, 7,
                7, 7, 7,
            ];
            const J: [i32; 30] = [
                0, 1, 0, 0, 1, 2, 3, 0, 1, 3, 4, 0, 1, 2, 0, 1, 5, 0, 1, 4, 0, 1, 2, 0, 1, 0, 1, 3,
                4, 5,
            ];
            const N: [f64; 30] = [
                909.68501005365, 2404.566708842, -591.6232638713, 541.45404128074,
                -270.98308411192, 979.76525097926, -469.66772959435, 14.399274604723,
                -19.104204230429, 5.3299167111971, -21.252975375934, -0.3114733441376,
                0.60334840894623, -0.042764839702509, 0.0058185597255259, -0.014597008284753,
                0.0056631175631027, -0.000076155864584577, 0.00022440342919332,
                -0.000012561095013413, 0.00000063323132660934, -0.0000020541989675375,
                0.000000036405370390082, -0.0000000029759897789215, 0.000000010136618529763,
                5.9925719692351e-12, -2.0677870105164e-11, -2.0874278181886e-11,
                1.0162166825089e-10, -1.6429828281347e-10,
            ];
            sum(&I, &J, &N, p, 2.0 - s / 2.9251, Partial::Value)
        }
    }
}

/// Pressure from enthalpy and entropy (supplementary release, eqs. 3 to 5).
pub fn p_hs(h: f64, s: f64) -> f64 {
    match subregion_hs(h, s) {
        Subregion::A => {
            const I: [i32; 29] = [
                0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5, 6,
                7,
            ];
            const J: [i32; 29] = [
                1, 3, 6, 16, 20, 22, 0, 1, 2, 3, 5, 6, 10, 16, 20, 22, 3, 16, 20, 0, 2, 3, 6, 16,
                16, 3, 16, 3, 1,
            ];
            const N: [f64; 29] = [
                -0.0182575361923032, -0.125229548799536, 0.592290437320145, 6.04769706185122,
                238.624965444474, -298.639090222922, 0.051225081304075, -0.437266515606486,
                0.413336902999504, -5.16468254574773, -5.57014838445711, 12.8555037824478,
                11.414410895329, -119.504225652714, -2847.7798596156, 4317.57846408006,
                1.1289404080265, 1974.09186206319, 1516.12444706087, 0.0141324451421235,
                0.585501282219601, -2.97258075863012, 5.94567314847319, -6236.56565798905,
                9659.86235133332, 6.81500934948134, -6332.07286824489, -5.5891922446576,
                0.0400645798472063,
            ];
            let pi = sum(&I, &J, &N, h / 4200.0 - 0.5, s / 12.0 - 1.2, Partial::Value);
            pi.powi(4) * 4.0
        }
        Subregion::B => {
            const I: [i32; 33] = [
                0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 6, 6, 6, 7, 7, 8,
                8, 8, 8, 12, 14,
            ];
            const J: [i32; 33] = [
                0, 1, 2, 4, 8, 0, 1, 2, 3, 5, 12, 1, 6, 18, 0, 1, 7, 12, 1, 16, 1, 12, 1, 8, 18, 1,
                16, 1, 3, 14, 18, 10, 16,
            ];
            const N: [f64; 33] = [
                0.0801496989929495, -0.543862807146111, 0.337455597421283, 8.9055545115745,
                313.840736431485, 0.797367065977789, -1.2161697355624, 8.72803386937477,
                -16.9769781757602, -186.552827328416, 95115.9274344237, -18.9168510120494,
                -4334.0703719484, 543212633.012715, 0.144793408386013, 128.024559637516,
                -67230.9534071268, 33697238.0095287, -586.63419676272, -22140322476.9889,
                1716.06668708389, -570817595.806302, -3121.09693178482, -2078413.8463301,
                3056059461577.86, 3221.57004314333, 326810259797.295, -1441.04158934487,
                410.694867802691, 109077066873.024, -24796465425889.3, 1888019068.65134,
                -123651009018773.0,
            ];
            let pi = sum(&I, &J, &N, h / 4100.0 - 0.6, s / 7.9 - 1.01, Partial::Value);
            pi.powi(4) * 100.0
        }
        Subregion::C => {
            const I: [i32; 31] = [
                0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5, 5, 5, 6, 6,
                10, 12, 16,
            ];
            const J: [i32; 31] = [
                0, 1, 2, 3, 4, 8, 0, 2, 5, 8, 14, 2, 3, 7, 10, 18, 0, 5, 8, 16, 18, 18, 1, 4, 6,
                14, 8, 18, 7, 7, 10,
            ];
            const N: [f64; 31] = [
                0.112225607199012, -3.39005953606712, -32.0503911730094, -197.5973051049,
                -407.693861553446, 13294.3775222331, 1.70846839774007, 37.3694198142245,
                3581.44365815434, 423014.446424664, -751071025.760063, 52.3446127607898,
                -228.351290812417, -960652.417056937, -80705929.2526074, 1626980172256.69,
                0.772465073604171, 46392.9973837746, -13731788.5134128, 1704703926305.12,
                -25110462818730.8, 31774883083552.0, 53.8685623675312, -55308.9094625169,
                -1028615.22421405, 2042494187562.34, 273918446.626977, -2.63963146312685e15,
                -1078908541.08088, -29649262098.0124, -1.11754907323424e15,
            ];
            let pi = sum(&I, &J, &N, h / 3500.0 - 0.7, s / 5.9 - 1.1, Partial::Value);
            pi.powi(4) * 100.0
        }
    }
}

/// Temperature from pressure and density by bisection between the lower
/// boundary of Region 2 (saturation or B23) and 1073.15 K.
pub fn t_prho(p: f64, rho: f64) -> Solved {
    let lo = if p < P_SAT_13_FINE { region4::t_p(p) } else { boundary::b23_t_p(p) };
    Bisection::new(lo, T_25, Monotonic::Decreasing)
        .tolerance(1e-6)
        .solve(rho, |t| 1.0 / volume(p, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn backward_t_ph_reference_points() {
        // IF97 table 24
        let cases = [
            (0.001, 3000.0, 534.433241),
            (3.0, 3000.0, 575.373370),
            (3.0, 4000.0, 1010.77577),
            (5.0, 3500.0, 801.299102),
            (5.0, 4000.0, 1015.31583),
            (25.0, 3500.0, 875.279054),
            (40.0, 2700.0, 743.056411),
            (60.0, 2700.0, 791.137067),
            (60.0, 3200.0, 882.756860),
        ];
        for (p, h, t) in cases {
            assert_relative_eq!(t_ph(p, h), t, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_t_ps_reference_points() {
        // IF97 table 29
        let cases = [
            (0.1, 7.5, 399.517097),
            (0.1, 8.0, 514.127081),
            (2.5, 8.0, 1039.84917),
            (8.0, 6.0, 600.484040),
            (8.0, 7.5, 1064.95556),
            (90.0, 6.0, 1038.01126),
            (20.0, 5.75, 697.992849),
            (80.0, 5.25, 854.011484),
            (80.0, 5.75, 949.017998),
        ];
        for (p, s, t) in cases {
            assert_relative_eq!(t_ps(p, s), t, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_p_hs_reference_points() {
        // Supplementary release p-h-s, table 9
        let cases = [
            (2800.0, 6.5, 1.371012767),
            (2800.0, 9.5, 1.879743844e-3),
            (4100.0, 9.5, 1.024788997e-1),
            (2800.0, 6.0, 4.793911442),
            (3600.0, 6.0, 83.95519209),
            (3600.0, 7.0, 7.527161441),
            (2800.0, 5.1, 94.39202060),
            (2800.0, 5.8, 8.414574124),
            (3400.0, 5.8, 83.76903879),
        ];
        for (h, s, p) in cases {
            assert_relative_eq!(p_hs(h, s), p, max_relative = 1e-8);
        }
    }

    #[test]
    fn subregion_splits() {
        assert_eq!(subregion_ph(3.0, 3000.0), Subregion::A);
        assert_eq!(subregion_ph(5.0, 3500.0), Subregion::B);
        assert_eq!(subregion_ph(40.0, 2700.0), Subregion::C);
        // IF97 eq. 20 reference point
        assert_relative_eq!(b2bc_p_h(3516.004323), 100.0, max_relative = 1e-8);
    }

    #[test]
    fn metastable_reference_point() {
        // IF97 table 18, T = 450 K, p = 1 MPa
        assert_relative_eq!(metastable::volume(1.0, 450.0), 0.192516540, max_relative = 1e-8);
        assert_relative_eq!(metastable::enthalpy(1.0, 450.0), 2768.81115, max_relative = 1e-8);
        assert_relative_eq!(metastable::entropy(1.0, 450.0), 6.56660377, max_relative = 1e-8);
        assert_relative_eq!(metastable::cp(1.0, 450.0), 2.76349265, max_relative = 1e-8);
        assert_relative_eq!(metastable::speed_of_sound(1.0, 450.0), 498.408101, max_relative = 1e-8);
    }
}
