//! Truncated IAU 2000B nutation.
//!
//! Keeps the 15 largest lunisolar terms of IERS Conventions 2010,
//! Table 5.3b. The omitted terms sum to well under an arcsecond, which is
//! invisible at the arcsecond display precision of chart longitudes.
//! Fundamental (Delaunay) arguments from IERS Conventions 2010, Eq. 5.43.
//! Public domain (IAU standard).

use crate::obliquity::mean_obliquity_rad;
use crate::rotation::{Mat3, mat_mul, rot_x, rot_z};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648_000.0;

/// Five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Ω`  mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    // Polynomials in arcseconds: c0 + c1 t + c2 t² + c3 t³ + c4 t⁴
    #[rustfmt::skip]
    const POLY: [[f64; 5]; 5] = [
        [  485_868.249036, 1_717_915_923.2178,  31.8792,  0.051635, -0.000_244_70],
        [1_287_104.793050,   129_596_581.0481,  -0.5532,  0.000136, -0.000_011_49],
        [  335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037,  0.000_004_17],
        [1_072_260.703690, 1_602_961_601.2090,  -6.3706,  0.006593, -0.000_031_69],
        [  450_160.398036,    -6_962_890.5431,   7.4722,  0.007702, -0.000_059_39],
    ];

    let mut args = [0.0; 5];
    for (arg, c) in args.iter_mut().zip(POLY.iter()) {
        let arcsec = c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])));
        *arg = (arcsec % 1_296_000.0) * ARCSEC_TO_RAD;
    }
    args
}

/// One lunisolar term: integer multipliers of `[l, l', F, D, Ω]` and
/// amplitudes in milliarcseconds (Δψ sine, its rate per century, Δε cosine,
/// its rate per century).
struct NutationTerm {
    mult: [i8; 5],
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
}

const fn term(mult: [i8; 5], psi: f64, psi_t: f64, eps: f64, eps_t: f64) -> NutationTerm {
    NutationTerm { mult, psi, psi_t, eps, eps_t }
}

#[rustfmt::skip]
static TERMS: [NutationTerm; 15] = [
    term([ 0,  0,  0,  0, 1], -17_206.4161, -17.4666, 9_205.2331,  0.9086),
    term([ 0,  0,  2, -2, 2],  -1_317.0906,  -0.1675,   573.0336, -0.3015),
    term([ 0,  0,  2,  0, 2],    -227.6413,  -0.0234,    97.8459, -0.0485),
    term([ 0,  0,  0,  0, 2],     207.4554,   0.0207,   -89.7492,  0.0470),
    term([ 0,  1,  0,  0, 0],     147.5877,  -0.3633,     7.3871, -0.0184),
    term([ 0,  1,  2, -2, 2],     -51.6821,   0.1226,    22.4386, -0.0677),
    term([ 1,  0,  0,  0, 0],      71.1159,   0.0073,    -0.6750,  0.0),
    term([ 0,  0,  2,  0, 1],     -38.7298,  -0.0367,    20.0728,  0.0018),
    term([ 1,  0,  2,  0, 2],     -30.1461,  -0.0036,    12.9025, -0.0063),
    term([ 0, -1,  2, -2, 2],      21.5829,  -0.0494,    -9.5929,  0.0299),
    term([-1,  0,  0,  2, 0],      15.6994,   0.0010,    -0.1235,  0.0),
    term([ 0,  0,  2, -2, 1],      12.8227,   0.0137,    -6.8982, -0.0009),
    term([-1,  0,  2,  0, 2],      12.3457,   0.0011,    -5.3311,  0.0032),
    term([ 1,  0,  0,  0, 1],       6.3110,   0.0063,    -3.3228,  0.0),
    term([-1,  0,  0,  0, 1],      -5.7976,  -0.0063,     3.1429,  0.0),
];

/// Nutation in longitude and obliquity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, arcseconds.
    pub dpsi_arcsec: f64,
    /// Δε, arcseconds.
    pub deps_arcsec: f64,
}

/// Nutation at `t` Julian centuries since J2000.0.
pub fn nutation_truncated(t: f64) -> Nutation {
    let args = fundamental_arguments(t);
    let mut dpsi_mas = 0.0;
    let mut deps_mas = 0.0;

    for term in &TERMS {
        let arg: f64 = term
            .mult
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| f64::from(n) * a)
            .sum();
        dpsi_mas += (term.psi + term.psi_t * t) * arg.sin();
        deps_mas += (term.eps + term.eps_t * t) * arg.cos();
    }

    Nutation {
        dpsi_arcsec: dpsi_mas * 1e-3,
        deps_arcsec: deps_mas * 1e-3,
    }
}

/// Nutation matrix: mean equator of date → true equator of date.
///
/// N = R1(−(ε + Δε)) · R3(−Δψ) · R1(ε)
pub fn nutation_matrix(t: f64) -> Mat3 {
    let eps = mean_obliquity_rad(t);
    let nut = nutation_truncated(t);
    let dpsi = nut.dpsi_arcsec * ARCSEC_TO_RAD;
    let deps = nut.deps_arcsec * ARCSEC_TO_RAD;
    mat_mul(&rot_x(-(eps + deps)), &mat_mul(&rot_z(-dpsi), &rot_x(eps)))
}
