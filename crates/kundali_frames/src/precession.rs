//! IAU 2006 precession: the equatorial angles ζ_A, z_A, θ_A that build the
//! rotation from the mean equator of J2000 to the mean equator of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, _Astronomy & Astrophysics_
//! 412, 567-586 (Tables 1 and 2). Also published in IERS Conventions 2010,
//! Ch. 5. Public domain (IAU standard).

use crate::rotation::{Mat3, mat_mul, rot_y, rot_z};

const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648_000.0;

/// Equatorial precession angles, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

/// ζ_A, z_A, θ_A at `t` Julian centuries since J2000.0.
pub fn precession_angles(t: f64) -> PrecessionAngles {
    let zeta = 2.650545
        + t * (2306.083227
            + t * (0.2988499 + t * (0.01801828 + t * (-0.000005971 - t * 0.0000003173))));
    let z = -2.650545
        + t * (2306.077181
            + t * (1.0927348 + t * (0.01826837 + t * (-0.000028596 - t * 0.0000002904))));
    let theta = t
        * (2004.191903 + t * (-0.4294934 + t * (-0.04182264 + t * (-0.000007089 - t * 0.0000001274))));
    PrecessionAngles {
        zeta: zeta * ARCSEC_TO_RAD,
        z: z * ARCSEC_TO_RAD,
        theta: theta * ARCSEC_TO_RAD,
    }
}

/// Precession matrix: mean equator of J2000 → mean equator of date.
///
/// P = R3(−z_A) · R2(θ_A) · R3(−ζ_A)
pub fn precession_matrix(t: f64) -> Mat3 {
    let a = precession_angles(t);
    mat_mul(&rot_z(-a.z), &mat_mul(&rot_y(a.theta), &rot_z(-a.zeta)))
}
