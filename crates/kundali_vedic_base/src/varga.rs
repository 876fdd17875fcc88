//! Divisional charts (vargas).
//!
//! Each varga splits every 30° sign into N parts and maps each part to a
//! sign. Seven schemes are supported, with the classical Parashari
//! mappings:
//!
//! | Varga | Parts | Mapping |
//! |---|---|---|
//! | D1 Rashi | 1 | the sign itself |
//! | D2 Hora | 2 | odd signs: Leo then Cancer; even signs: Cancer then Leo |
//! | D3 Drekkana | 3 | 1st, 5th, 9th from the sign |
//! | D4 Chaturthamsha | 4 | 1st, 4th, 7th, 10th from the sign |
//! | D7 Saptamsha | 7 | odd: from the sign; even: from the 7th |
//! | D9 Navamsha | 9 | continuous count from Aries over the whole zodiac |
//! | D10 Dashamsha | 10 | odd: from the sign; even: from the 9th |
//!
//! "Odd" signs are Aries, Gemini, Leo, ... (even 0-based index).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

const LEO: u8 = 4;
const CANCER: u8 = 3;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
}

/// All vargas in output order.
pub const ALL_VARGAS: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
];

impl Varga {
    /// Number of parts per sign.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
        }
    }

    /// Short code, e.g. `"D9"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
        }
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
        }
    }

    /// Parse a code (`"D9"`, `"d9"`) or a bare division count (`"9"`).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let digits = code
            .strip_prefix('D')
            .or_else(|| code.strip_prefix('d'))
            .unwrap_or(code);
        let n: u8 = digits.parse().ok()?;
        ALL_VARGAS.into_iter().find(|v| v.divisions() == n)
    }
}

/// Part index of `pos` (degrees within a sign) for a part size, clamped to
/// `parts − 1` so a position that rounds up to 30° stays in the last part.
fn part_index(pos: f64, parts: u8) -> u8 {
    let size = 30.0 / f64::from(parts);
    ((pos / size).floor() as u8).min(parts - 1)
}

/// Sign index (0..=11) of a sidereal longitude in the given varga.
pub fn varga_rashi_index(sidereal_lon_deg: f64, varga: Varga) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    let sign = ((lon / 30.0).floor() as u8).min(11);
    let pos = lon - f64::from(sign) * 30.0;
    let odd = sign % 2 == 0;

    match varga {
        Varga::D1 => sign,
        Varga::D2 => {
            let first_half = part_index(pos, 2) == 0;
            match (odd, first_half) {
                (true, true) | (false, false) => LEO,
                (true, false) | (false, true) => CANCER,
            }
        }
        Varga::D3 => (sign + part_index(pos, 3) * 4) % 12,
        Varga::D4 => (sign + part_index(pos, 4) * 3) % 12,
        Varga::D7 => {
            let start = if odd { 0 } else { 6 };
            (sign + part_index(pos, 7) + start) % 12
        }
        Varga::D9 => {
            let sector = ((lon / (30.0 / 9.0)).floor() as u16).min(107);
            (sector % 12) as u8
        }
        Varga::D10 => {
            let start = if odd { 0 } else { 8 };
            (sign + part_index(pos, 10) + start) % 12
        }
    }
}

/// Varga sign indices of several longitudes at once.
pub fn varga_rashi_indices<const N: usize>(lons: &[f64; N], varga: Varga) -> [u8; N] {
    lons.map(|lon| varga_rashi_index(lon, varga))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for v in ALL_VARGAS {
            assert_eq!(Varga::from_code(v.code()), Some(v));
        }
        assert_eq!(Varga::from_code("9"), Some(Varga::D9));
        assert_eq!(Varga::from_code("d10"), Some(Varga::D10));
        assert_eq!(Varga::from_code("D5"), None);
        assert_eq!(Varga::from_code("Dx"), None);
    }

    #[test]
    fn d1_is_sign() {
        assert_eq!(varga_rashi_index(45.0, Varga::D1), 1);
    }

    #[test]
    fn part_clamped_at_sign_end() {
        // 30 − ε rounds to a full part count without the clamp
        let pos = 30.0 - 1e-15;
        assert_eq!(part_index(pos, 7), 6);
        assert_eq!(part_index(pos, 10), 9);
    }

    #[test]
    fn batch_matches_single() {
        let lons = [0.0, 100.0, 200.0, 300.0];
        let out = varga_rashi_indices(&lons, Varga::D9);
        for (lon, sign) in lons.iter().zip(out) {
            assert_eq!(sign, varga_rashi_index(*lon, Varga::D9));
        }
    }
}
