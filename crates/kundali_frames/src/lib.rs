//! Frame conversion helpers for chart computation.
//!
//! Ephemeris directions arrive in the mean equator and equinox of J2000
//! ("EQJ"). This crate rotates them into the frames the sidereal zodiac is
//! measured in:
//! - the mean ecliptic of J2000 (fixed-offset ayanamsha), or
//! - the true ecliptic of date, through IAU 2006 precession and truncated
//!   IAU 2000B nutation (reference-star ayanamsha).
//!
//! Time arguments are Julian centuries since J2000.0. Callers pass UT
//! centuries; the TT−UT difference is negligible at these accuracies.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use nutation::{Nutation, fundamental_arguments, nutation_matrix, nutation_truncated};
pub use obliquity::{
    OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, mean_obliquity_arcsec, mean_obliquity_rad,
    true_obliquity_rad,
};
pub use precession::{PrecessionAngles, precession_angles, precession_matrix};
pub use rotation::{
    IDENTITY, Mat3, apply, eqj_to_ecliptic_j2000, eqj_to_true_ecliptic_of_date, mat_mul, rot_x,
    rot_y, rot_z,
};
pub use spherical::{longitude_deg, radec_to_unit};
