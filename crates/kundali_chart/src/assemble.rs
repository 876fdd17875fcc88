//! Chart assembly: request in, finished [`Chart`] out.

use std::collections::BTreeMap;

use kundali_core::EphemerisPort;
use kundali_vedic_base::{
    ALL_GRAHAS, ALL_VARGAS, AshtakavargaTable, DashaPeriod, Graha, Panchanga, Rashi,
    SAPTA_GRAHAS, SiderealPositions, Varga, YogaRecord, ashtakavarga, detect_yogas,
    nakshatra_from_longitude, panchanga, rashi_from_longitude, varga_rashi_index, vimshottari,
};
use tracing::{debug, info};

use crate::document::{
    ASCENDANT, AshtakavargaRecord, BinduRow, Chart, ChartMeta, DashaRecord, PanchangaRecord,
    PlanetRecord, YogaEntry,
};
use crate::error::ChartError;
use crate::frame::SiderealFrame;
use crate::positions::resolve_positions;
use crate::request::{BirthContext, ChartRequest};
use crate::settings::ChartSettings;

/// Body names and longitudes in document order: the nine grahas, then the
/// Ascendant.
fn named_longitudes(p: &SiderealPositions) -> Vec<(&'static str, f64)> {
    ALL_GRAHAS
        .iter()
        .map(|&g| (g.english_name(), p.longitude(g)))
        .chain(std::iter::once((ASCENDANT, p.lagna())))
        .collect()
}

fn planet_record(name: &str, lon: f64) -> PlanetRecord {
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    PlanetRecord {
        name: name.to_string(),
        longitude_deg: lon,
        sign: rashi.rashi.western_name().to_string(),
        sign_index: rashi.rashi_index,
        degrees_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms.to_string(),
        nakshatra: nak.nakshatra.name().to_string(),
        pada: nak.pada,
    }
}

fn varga_table(bodies: &[(&'static str, f64)]) -> BTreeMap<Varga, BTreeMap<String, String>> {
    ALL_VARGAS
        .iter()
        .map(|&varga| {
            let signs = bodies
                .iter()
                .map(|&(name, lon)| {
                    let sign = Rashi::from_index(varga_rashi_index(lon, varga));
                    (name.to_string(), sign.western_name().to_string())
                })
                .collect();
            (varga, signs)
        })
        .collect()
}

fn dasha_record(period: &DashaPeriod) -> DashaRecord {
    DashaRecord {
        lord: period.lord.english_name().to_string(),
        start: period.start,
        end: period.end,
        duration_years: period.duration_years,
    }
}

fn ashtakavarga_record(table: &AshtakavargaTable) -> AshtakavargaRecord {
    let per_body = SAPTA_GRAHAS
        .iter()
        .zip(table.per_body.iter())
        .enumerate()
        .map(|(i, (g, row))| BinduRow {
            body: g.english_name().to_string(),
            points: *row,
            total: table.body_total(i),
        })
        .collect();
    AshtakavargaRecord {
        per_body,
        aggregate: table.aggregate,
        total: table.total_points(),
    }
}

fn panchanga_record(p: &Panchanga) -> PanchangaRecord {
    PanchangaRecord {
        tithi: p.tithi,
        yoga: p.yoga,
        karana: p.karana,
        weekday: p.vaar.name().to_string(),
    }
}

fn yoga_entry(record: YogaRecord) -> YogaEntry {
    YogaEntry {
        name: record.name.to_string(),
        description: record.description,
        dosha: record.yoga.is_dosha(),
    }
}

/// Compute a chart.
///
/// The request is validated before the ephemeris is consulted. Any failure
/// aborts the whole computation; no partial chart is returned.
pub fn compute_chart<E: EphemerisPort + ?Sized>(
    request: &ChartRequest,
    ephemeris: &E,
    settings: &ChartSettings,
) -> Result<Chart, ChartError> {
    let birth = BirthContext::from_request(request)?;
    let utc = birth.utc();
    debug!(%utc, lat = birth.latitude_deg(), lng = birth.longitude_deg(), "birth context");

    let frame = SiderealFrame::build(ephemeris, settings, &utc)?;
    debug!(
        strategy = settings.ayanamsa.name(),
        ayanamsha = frame.ayanamsha_deg(),
        date_ayanamsha = frame.date_ayanamsha_deg(),
        "sidereal frame"
    );

    let positions = resolve_positions(
        ephemeris,
        &frame,
        settings,
        &utc,
        birth.latitude_deg(),
        birth.longitude_deg(),
    )?;

    let bodies = named_longitudes(&positions);
    let planets = bodies
        .iter()
        .map(|&(name, lon)| planet_record(name, lon))
        .collect();
    let vargas = varga_table(&bodies);

    let dashas = vimshottari(positions.longitude(Graha::Chandra), utc)?
        .iter()
        .map(dasha_record)
        .collect();
    let bindus = ashtakavarga(&positions.sapta_signs(), positions.lagna_sign());
    let limbs = panchanga(
        positions.longitude(Graha::Surya),
        positions.longitude(Graha::Chandra),
        &utc,
    );
    let yogas: Vec<YogaEntry> = detect_yogas(&positions).into_iter().map(yoga_entry).collect();

    info!(
        name = birth.full_name(),
        %utc,
        lagna = positions.lagna(),
        yogas = yogas.len(),
        "chart computed"
    );

    Ok(Chart {
        meta: ChartMeta {
            input: request.clone(),
            utc_date: utc,
        },
        settings: settings.clone(),
        ayanamsa_deg: frame.ayanamsha_deg(),
        planets,
        vargas,
        dashas,
        ashtakavarga: ashtakavarga_record(&bindus),
        panchanga: panchanga_record(&limbs),
        yogas,
    })
}
