//! Vedic planet (graha) enum and sign dignities.
//!
//! The 9 grahas are the seven visible planets plus the two lunar nodes.
//! Dignity tables (own and exaltation signs) follow the standard Parashari
//! assignments.

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// The five "star" planets: Mars, Mercury, Jupiter, Venus, Saturn.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Signs ruled by this graha (0-based sign indices). Empty for the nodes.
    pub const fn own_signs(self) -> &'static [u8] {
        match self {
            Self::Surya => &[4],
            Self::Chandra => &[3],
            Self::Mangal => &[0, 7],
            Self::Buddh => &[2, 5],
            Self::Guru => &[8, 11],
            Self::Shukra => &[1, 6],
            Self::Shani => &[9, 10],
            Self::Rahu | Self::Ketu => &[],
        }
    }

    /// Exaltation sign (0-based), if any.
    pub const fn exaltation_sign(self) -> Option<u8> {
        match self {
            Self::Surya => Some(0),
            Self::Chandra => Some(1),
            Self::Mangal => Some(9),
            Self::Buddh => Some(5),
            Self::Guru => Some(3),
            Self::Shukra => Some(11),
            Self::Shani => Some(6),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// True if the graha occupies its own or exaltation sign.
    pub fn is_dignified_in(self, sign: u8) -> bool {
        self.own_signs().contains(&sign) || self.exaltation_sign() == Some(sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn every_sign_has_one_lord() {
        let mut owners = [0u8; 12];
        for g in SAPTA_GRAHAS {
            for &s in g.own_signs() {
                owners[s as usize] += 1;
            }
        }
        assert_eq!(owners, [1; 12]);
    }

    #[test]
    fn dignity() {
        assert!(Graha::Mangal.is_dignified_in(9)); // exalted in Capricorn
        assert!(Graha::Mangal.is_dignified_in(7)); // own sign Scorpio
        assert!(!Graha::Mangal.is_dignified_in(3));
        assert!(Graha::Buddh.is_dignified_in(5)); // own and exalted in Virgo
        assert!(!Graha::Rahu.is_dignified_in(0));
    }
}
