//! Yoga and dosha detection.
//!
//! A deliberately small, rule-table driven scan:
//!
//! 1. Pancha Mahapurusha: Mars, Mercury, Jupiter, Venus or Saturn in its own
//!    or exaltation sign AND in a kendra from the Lagna.
//! 2. Gajakesari: Jupiter in a kendra from the Moon.
//! 3. Kemadruma: no star planet in the 2nd or 12th from the Moon, and none
//!    in a kendra from the Moon (the only cancellation checked).
//! 4. Kaal Sarpa: all seven planets on one side of the Rahu–Ketu axis.
//!
//! Results come back in that order. Houses are whole-sign, counted with
//! [`house_from`].

use crate::graha::{Graha, TARA_GRAHAS};
use crate::positions::SiderealPositions;
use crate::util::{house_from, is_kendra, normalize_360};

/// Detectable combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Shasha,
    Gajakesari,
    Kemadruma,
    KaalSarpa,
}

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ruchaka => "Ruchaka Yoga",
            Self::Bhadra => "Bhadra Yoga",
            Self::Hamsa => "Hamsa Yoga",
            Self::Malavya => "Malavya Yoga",
            Self::Shasha => "Shasha Yoga",
            Self::Gajakesari => "Gajakesari Yoga",
            Self::Kemadruma => "Kemadruma Dosha",
            Self::KaalSarpa => "Kaal Sarpa Dosha",
        }
    }

    /// True for afflictions (doshas) rather than beneficial yogas.
    pub const fn is_dosha(self) -> bool {
        matches!(self, Self::Kemadruma | Self::KaalSarpa)
    }

    /// The Mahapurusha yoga formed by a star planet, if any.
    pub const fn mahapurusha_of(graha: Graha) -> Option<Self> {
        match graha {
            Graha::Mangal => Some(Self::Ruchaka),
            Graha::Buddh => Some(Self::Bhadra),
            Graha::Guru => Some(Self::Hamsa),
            Graha::Shukra => Some(Self::Malavya),
            Graha::Shani => Some(Self::Shasha),
            _ => None,
        }
    }
}

/// A detected yoga with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YogaRecord {
    pub yoga: Yoga,
    pub name: &'static str,
    pub description: String,
}

impl YogaRecord {
    fn new(yoga: Yoga, description: String) -> Self {
        Self {
            yoga,
            name: yoga.name(),
            description,
        }
    }
}

/// Planets checked for the Kaal Sarpa pattern, in scan order.
const KAAL_SARPA_GRAHAS: [Graha; 7] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Surya,
    Graha::Chandra,
];

fn mahapurusha(p: &SiderealPositions, out: &mut Vec<YogaRecord>) {
    let lagna = p.lagna_sign();
    for graha in TARA_GRAHAS {
        let sign = p.sign(graha);
        if !graha.is_dignified_in(sign) || !is_kendra(house_from(sign, lagna)) {
            continue;
        }
        if let Some(yoga) = Yoga::mahapurusha_of(graha) {
            out.push(YogaRecord::new(
                yoga,
                format!(
                    "A powerful Pancha Mahapurusha Yoga formed by {} in a strong position within a Kendra house.",
                    graha.english_name()
                ),
            ));
        }
    }
}

fn gajakesari(p: &SiderealPositions) -> Option<YogaRecord> {
    let moon = p.sign(Graha::Chandra);
    is_kendra(house_from(p.sign(Graha::Guru), moon)).then(|| {
        YogaRecord::new(
            Yoga::Gajakesari,
            "Jupiter located in a Kendra from the Moon, indicating wisdom, fame, and virtue."
                .to_string(),
        )
    })
}

fn kemadruma(p: &SiderealPositions) -> Option<YogaRecord> {
    let moon = p.sign(Graha::Chandra);
    let houses = TARA_GRAHAS.map(|g| house_from(p.sign(g), moon));
    let supported = houses.iter().any(|&h| h == 2 || h == 12);
    let cancelled = houses.iter().any(|&h| is_kendra(h));
    (!supported && !cancelled).then(|| {
        YogaRecord::new(
            Yoga::Kemadruma,
            "Solitary Moon with no support, indicating periods of loneliness or struggle unless mitigated."
                .to_string(),
        )
    })
}

fn kaal_sarpa(p: &SiderealPositions) -> Option<YogaRecord> {
    let rahu = p.longitude(Graha::Rahu);
    let rel_ketu = normalize_360(p.longitude(Graha::Ketu) - rahu);

    let mut rahu_to_ketu = true;
    let mut ketu_to_rahu = true;
    for graha in KAAL_SARPA_GRAHAS {
        let rel = normalize_360(p.longitude(graha) - rahu);
        if rel < rel_ketu {
            ketu_to_rahu = false;
        } else {
            rahu_to_ketu = false;
        }
    }

    (rahu_to_ketu || ketu_to_rahu).then(|| {
        YogaRecord::new(
            Yoga::KaalSarpa,
            "All planets hemmed between Rahu and Ketu, indicating karmic restrictions and potential for sudden rise/fall."
                .to_string(),
        )
    })
}

/// Scan a chart for the supported yogas and doshas.
pub fn detect_yogas(positions: &SiderealPositions) -> Vec<YogaRecord> {
    let mut out = Vec::new();
    mahapurusha(positions, &mut out);
    out.extend(gajakesari(positions));
    out.extend(kemadruma(positions));
    out.extend(kaal_sarpa(positions));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Longitudes in Graha index order: Sun, Moon, Mars, Mercury, Jupiter,
    /// Venus, Saturn, Rahu, Ketu.
    fn chart(lons: [f64; 9], lagna: f64) -> SiderealPositions {
        SiderealPositions::new(lons, lagna).unwrap()
    }

    fn names(records: &[YogaRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.name).collect()
    }

    #[test]
    fn ruchaka_in_first_house() {
        // Mars in Aries (own), Lagna in Aries
        let p = chart([100.0, 40.0, 10.0, 200.0, 250.0, 280.0, 310.0, 55.0, 235.0], 5.0);
        let found = detect_yogas(&p);
        assert_eq!(found[0].yoga, Yoga::Ruchaka);
        assert!(found[0].description.contains("Mars"));
    }

    #[test]
    fn dignified_but_not_kendra() {
        // Mars in Aries, Lagna in Taurus: house 12
        let p = chart([100.0, 40.0, 10.0, 200.0, 250.0, 280.0, 310.0, 55.0, 235.0], 35.0);
        assert!(!names(&detect_yogas(&p)).contains(&"Ruchaka Yoga"));
    }

    #[test]
    fn gajakesari_opposite_moon() {
        // Moon in Aries, Jupiter in Libra: 7th from the Moon
        let p = chart([100.0, 5.0, 70.0, 130.0, 185.0, 160.0, 300.0, 20.0, 200.0], 250.0);
        assert!(names(&detect_yogas(&p)).contains(&"Gajakesari Yoga"));
    }

    #[test]
    fn kemadruma_isolated_moon() {
        // Moon in Aries; star planets in houses 3, 5, 6, 9, 11 from it
        let p = chart([65.0, 5.0, 65.0, 125.0, 155.0, 245.0, 305.0, 95.0, 275.0], 0.0);
        let found = names(&detect_yogas(&p));
        assert!(found.contains(&"Kemadruma Dosha"), "{found:?}");
    }

    #[test]
    fn kemadruma_cancelled_by_kendra() {
        // same as above but Saturn moved to the 10th from the Moon
        let p = chart([65.0, 5.0, 65.0, 125.0, 155.0, 245.0, 275.0, 95.0, 275.0], 0.0);
        assert!(!names(&detect_yogas(&p)).contains(&"Kemadruma Dosha"));
    }

    #[test]
    fn kaal_sarpa_one_side() {
        // Rahu 0°, Ketu 180°, all planets in (0, 180)
        let p = chart([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 170.0, 0.0, 180.0], 100.0);
        assert!(names(&detect_yogas(&p)).contains(&"Kaal Sarpa Dosha"));

        // Other side also counts
        let p = chart([190.0, 200.0, 210.0, 220.0, 230.0, 240.0, 350.0, 0.0, 180.0], 100.0);
        assert!(names(&detect_yogas(&p)).contains(&"Kaal Sarpa Dosha"));
    }

    #[test]
    fn kaal_sarpa_broken_by_one_planet() {
        let p = chart([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 190.0, 0.0, 180.0], 100.0);
        assert!(!names(&detect_yogas(&p)).contains(&"Kaal Sarpa Dosha"));
    }

    #[test]
    fn doshas_flagged() {
        assert!(Yoga::KaalSarpa.is_dosha());
        assert!(!Yoga::Hamsa.is_dosha());
        assert_eq!(Yoga::mahapurusha_of(Graha::Surya), None);
    }
}
