//! Ashtakavarga (benefic points).
//!
//! For each of the 7 grahas (Sun through Saturn), 8 contributors (the 7
//! grahas plus the Lagna) each award one point to a set of signs counted
//! from the contributor's own sign. The per-graha rows are the Bhinna
//! Ashtakavarga; their sum per sign is the Sarvashtakavarga.
//!
//! Row totals are fixed by the rule table and hold for every chart:
//! Sun 48, Moon 49, Mars 41, Mercury 54, Jupiter 56, Venus 52, Saturn 39,
//! 339 in all.

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// RULES[target][contributor] = bitmask of favorable offsets.
///
/// target:      0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn
/// contributor: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same sign, 2=next sign, ..., 12=previous sign).
#[rustfmt::skip]
const RULES: [[u16; 8]; 7] = [
    // Sun
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars
    [
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11, 12]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
];

/// Expected row totals per graha, Sun through Saturn.
pub const BAV_TOTALS: [u8; 7] = [48, 49, 41, 54, 56, 52, 39];

/// Expected aggregate total (constant for all charts).
pub const SAV_TOTAL: u16 = 339;

/// Bhinna rows and their per-sign aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AshtakavargaTable {
    /// Points per sign for each graha, Sun through Saturn.
    pub per_body: [[u8; 12]; 7],
    /// Sum over the seven rows per sign.
    pub aggregate: [u16; 12],
}

impl AshtakavargaTable {
    /// Total points across all signs.
    pub fn total_points(&self) -> u16 {
        self.aggregate.iter().sum()
    }

    /// Total points of one graha's row (0=Sun .. 6=Saturn).
    pub fn body_total(&self, graha_index: usize) -> u8 {
        self.per_body[graha_index].iter().sum()
    }
}

/// Score all seven grahas in one pass.
///
/// `graha_signs` are the 0-based sign indices of Sun through Saturn,
/// `lagna_sign` that of the Ascendant.
pub fn ashtakavarga(graha_signs: &[u8; 7], lagna_sign: u8) -> AshtakavargaTable {
    let mut per_body = [[0u8; 12]; 7];
    let mut aggregate = [0u16; 12];

    for (rules, row) in RULES.iter().zip(per_body.iter_mut()) {
        for (contributor, &mask) in rules.iter().enumerate() {
            let sign = if contributor < 7 {
                graha_signs[contributor]
            } else {
                lagna_sign
            };
            let from = sign % 12;
            for offset in 1..=12u8 {
                if (mask >> offset) & 1 == 1 {
                    let idx = usize::from((from + offset - 1) % 12);
                    row[idx] += 1;
                    aggregate[idx] += 1;
                }
            }
        }
    }

    AshtakavargaTable {
        per_body,
        aggregate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_counts_match_totals() {
        for (g, rules) in RULES.iter().enumerate() {
            let n: u32 = rules.iter().map(|m| m.count_ones()).sum();
            assert_eq!(n, u32::from(BAV_TOTALS[g]), "graha {g}");
        }
    }

    #[test]
    fn totals_are_chart_independent() {
        let a = ashtakavarga(&[0, 0, 0, 0, 0, 0, 0], 0);
        let b = ashtakavarga(&[3, 7, 11, 2, 5, 9, 1], 6);
        for table in [a, b] {
            for g in 0..7 {
                assert_eq!(table.body_total(g), BAV_TOTALS[g]);
            }
            assert_eq!(table.total_points(), SAV_TOTAL);
        }
    }

    #[test]
    fn all_in_aries_sun_row() {
        // Every contributor in Aries: Sun's row counts how many contributors
        // award each offset.
        let t = ashtakavarga(&[0; 7], 0);
        // offset 1 (Aries): Sun, Mars, Saturn
        assert_eq!(t.per_body[0][0], 3);
        // offset 11 (Aquarius): everyone except Venus
        assert_eq!(t.per_body[0][10], 7);
    }

    #[test]
    fn aggregate_is_column_sum() {
        let t = ashtakavarga(&[4, 9, 1, 5, 3, 6, 10], 8);
        for s in 0..12 {
            let col: u16 = t.per_body.iter().map(|row| u16::from(row[s])).sum();
            assert_eq!(t.aggregate[s], col, "sign {s}");
        }
    }
}
