//! 3×3 rotation matrices and the chart frame chains.
//!
//! Elementary rotations follow the frame-rotation sign convention: `rot_x(φ)`
//! rotates the coordinate axes by +φ about x, so a vector's components
//! change as if the vector turned by −φ.

use crate::nutation::nutation_matrix;
use crate::obliquity::{OBLIQUITY_J2000_RAD, true_obliquity_rad};
use crate::precession::precession_matrix;

/// Row-major 3×3 matrix.
pub type Mat3 = [[f64; 3]; 3];

pub const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// R1(φ)
pub fn rot_x(phi: f64) -> Mat3 {
    let (s, c) = phi.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]]
}

/// R2(θ)
pub fn rot_y(theta: f64) -> Mat3 {
    let (s, c) = theta.sin_cos();
    [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]
}

/// R3(ψ)
pub fn rot_z(psi: f64) -> Mat3 {
    let (s, c) = psi.sin_cos();
    [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Matrix product `a · b`.
pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// Matrix-vector product `m · v`.
pub fn apply(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// EQJ → mean ecliptic and equinox of J2000.
pub fn eqj_to_ecliptic_j2000() -> Mat3 {
    rot_x(OBLIQUITY_J2000_RAD)
}

/// EQJ → true ecliptic and equinox of date, `t` in Julian centuries.
///
/// Returns `R1(ε_true) · N · P` together with ε_true in radians, since the
/// ascendant needs the same obliquity.
pub fn eqj_to_true_ecliptic_of_date(t: f64) -> (Mat3, f64) {
    let eps_true = true_obliquity_rad(t);
    let equator_of_date = mat_mul(&nutation_matrix(t), &precession_matrix(t));
    (mat_mul(&rot_x(eps_true), &equator_of_date), eps_true)
}
