//! Shared helpers: angle normalization, sign index, house counting.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // a tiny negative remainder rounds up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// 0-based sign index (0 = Aries .. 11 = Pisces) of a longitude.
pub fn sign_index(lon_deg: f64) -> u8 {
    ((normalize_360(lon_deg) / 30.0).floor() as u8).min(11)
}

/// House number (1..=12) of `target` sign counted from `reference` sign.
///
/// The reference sign itself is house 1. Both inputs are 0-based sign
/// indices in 0..=11.
pub fn house_from(target: u8, reference: u8) -> u8 {
    let mut h = i16::from(target) - i16::from(reference) + 1;
    if h <= 0 {
        h += 12;
    }
    h as u8
}

/// Angular houses: 1, 4, 7, 10.
pub fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
