//! Plain-text narrative of a computed chart.
//!
//! The renderer only formats what the [`Chart`] already holds; it performs
//! no astronomy. Output is seven titled sections separated by blank lines.

use std::fmt::Write;

use kundali_vedic_base::{Rashi, Varga, ordinal};

use crate::document::{ASCENDANT, Chart, PlanetRecord};

/// Aggregate bindus at or above which a sign is called out as strong.
pub const STRONG_SIGN_BINDUS: u16 = 30;

const NO_YOGAS: &str = "No major classical Yogas or Doshas (such as Pancha Mahapurusha or \
Kemadruma) are prominently detected in this standard scan, suggesting a balanced distribution \
of karma.";

const MODERATE_STRENGTH: &str = "The distribution of strength is moderate throughout the chart, \
with no sign exceeding 30 points excessively.";

fn varga<'a>(chart: &'a Chart, v: Varga, body: &str) -> &'a str {
    chart.varga_sign(v, body).unwrap_or("an unknown sign")
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
}

fn birth_context(out: &mut String, chart: &Chart, moon: Option<&PlanetRecord>) {
    let p = &chart.panchanga;
    section(out, "I. Panchanga & Birth Context");
    let _ = write!(
        out,
        "The native, {}, entered this world on a {}. The lunar day (Tithi) was the {} Tithi, \
         marked by the configuration of the Sun and Moon.",
        chart.meta.input.full_name,
        p.weekday,
        ordinal(u32::from(p.tithi)),
    );
    if let Some(moon) = moon {
        let _ = write!(
            out,
            " At the time of birth, the Moon was transiting the star (Nakshatra) of {}, \
             positioned in the {} Pada.",
            moon.nakshatra,
            ordinal(u32::from(moon.pada)),
        );
    }
    let _ = writeln!(
        out,
        "\nThe Yoga active was the {} Yoga, and the Karana was the {} Karana. These elements \
         collectively shape the fundamental temperament, conferring a distinct karmic imprint \
         upon the soul's journey.",
        ordinal(u32::from(p.yoga)),
        ordinal(u32::from(p.karana)),
    );
}

fn foundation(out: &mut String, chart: &Chart, moon: Option<&PlanetRecord>) {
    section(out, "II. The Ascendant & Lunar Foundation");
    if let Some(asc) = chart.planet(ASCENDANT) {
        let _ = writeln!(
            out,
            "The Ascendant (Lagna), representing the physical self and general orientation, \
             falls in the sign of {} ({}). This placement suggests a personality rooted in the \
             qualities of {}. In the Navamsha (D9) chart, the Ascendant lord shifts to {}, \
             modifying the inner strength and direction of the life path.",
            asc.sign,
            asc.dms,
            asc.sign,
            varga(chart, Varga::D9, ASCENDANT),
        );
    }
    if let Some(moon) = moon {
        let _ = writeln!(
            out,
            "The Moon, the significator of the mind and emotions, is situated in {}. \
             Possessing the qualities of this sign, the emotional nature is filtered through \
             the lens of {}'s ruler. The Moon's Nakshatra, {}, further refines the mental \
             constitution and emotional responses.",
            moon.sign, moon.sign, moon.nakshatra,
        );
    }
}

fn configurations(out: &mut String, chart: &Chart) {
    section(out, "III. Planetary Configurations");
    out.push_str("The celestial council is arranged as follows:\n");
    for p in chart.planets.iter().filter(|p| p.name != ASCENDANT) {
        let _ = writeln!(
            out,
            "{} resides in the sign of {} at {}. It traverses the Nakshatra of {} (Pada {}). \
             In the Navamsha, {} moves to the sign of {}, revealing its deeper, internal \
             strength.",
            p.name,
            p.sign,
            p.dms,
            p.nakshatra,
            p.pada,
            p.name,
            varga(chart, Varga::D9, &p.name),
        );
    }
}

fn divisional(out: &mut String, chart: &Chart) {
    section(out, "IV. Divisional Strengths (Vargas)");
    let _ = writeln!(
        out,
        "Beyond the Rashi chart, the subtle bodies are revealed in the Divisional Charts. In \
         the Hora (D2), governing wealth and resources, the Sun is in {} and the Moon in {}.",
        varga(chart, Varga::D2, "Sun"),
        varga(chart, Varga::D2, "Moon"),
    );
    let _ = writeln!(
        out,
        "In the Drekkana (D3), indicative of courage and siblings, the Ascendant falls in {}. \
         The Chaturthamsha (D4) shows the Ascendant in {}, shedding light on destiny and \
         property.",
        varga(chart, Varga::D3, ASCENDANT),
        varga(chart, Varga::D4, ASCENDANT),
    );
    let _ = writeln!(
        out,
        "The Saptamsha (D7), representing progeny and creative output, places the Ascendant \
         in {}. The Dashamsha (D10), vital for career and status, has the rising sign of {}, \
         showing the karmic field of action.",
        varga(chart, Varga::D7, ASCENDANT),
        varga(chart, Varga::D10, ASCENDANT),
    );
}

fn yogas(out: &mut String, chart: &Chart) {
    section(out, "V. Yogas & Doshas");
    if chart.yogas.is_empty() {
        out.push_str(NO_YOGAS);
        out.push('\n');
        return;
    }
    out.push_str("The following planetary combinations are present in the horoscope:\n");
    for y in &chart.yogas {
        let _ = writeln!(out, "- {}: {}", y.name, y.description);
    }
}

fn strength(out: &mut String, chart: &Chart) {
    section(out, "VI. Ashtakavarga Strength");
    out.push_str(
        "In the Sarvashtakavarga summation, we observe the distribution of strength across \
         the zodiac. Notable strengths are found in the signs of:\n",
    );
    let mut any = false;
    for (i, &points) in chart.ashtakavarga.aggregate.iter().enumerate() {
        if points >= STRONG_SIGN_BINDUS {
            any = true;
            let _ = writeln!(
                out,
                "- {} with {points} points, indicating a fortified area of life.",
                Rashi::from_index(i as u8).western_name(),
            );
        }
    }
    if !any {
        let _ = writeln!(out, "- {MODERATE_STRENGTH}");
    }
}

fn dashas(out: &mut String, chart: &Chart) {
    section(out, "VII. Vimshottari Dasha Cycles");
    let Some(first) = chart.dashas.first() else {
        return;
    };
    let _ = writeln!(
        out,
        "The unfolding of karma occurs through the Dasha system. The native was born during \
         the Mahadasha of {}, with a balance of {:.1} years remaining at birth.",
        first.lord, first.duration_years,
    );
    out.push_str("The subsequent major periods (Mahadashas) are:\n");
    for d in chart.dashas.iter().skip(1) {
        let _ = writeln!(
            out,
            "- {} Mahadasha: From {} to {}.",
            d.lord,
            d.start.format("%Y-%m-%d"),
            d.end.format("%Y-%m-%d"),
        );
    }
}

/// Render the seven narrative sections.
pub fn render_narrative(chart: &Chart) -> String {
    let moon = chart.planet("Moon");
    let mut out = String::new();
    birth_context(&mut out, chart, moon);
    foundation(&mut out, chart, moon);
    configurations(&mut out, chart);
    divisional(&mut out, chart);
    yogas(&mut out, chart);
    strength(&mut out, chart);
    dashas(&mut out, chart);
    out
}
