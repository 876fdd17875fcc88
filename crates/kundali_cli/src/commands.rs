use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use kundali_chart::{ChartRequest, ChartSettings, compute_chart, render_narrative};
use kundali_config::{KundaliConfig, OutputFormat};
use kundali_core::SnapshotEphemeris;
use kundali_vedic_base::{
    ALL_VARGAS, Rashi, Varga, deg_to_dms, nakshatra_from_longitude, normalize_360, panchanga,
    rashi_from_longitude, varga_rashi_index, vimshottari,
};
use tracing::debug;

use crate::cli::ChartArgs;

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    let instant = DateTime::parse_from_rfc3339(text.trim())
        .with_context(|| format!("invalid instant '{text}', expected RFC 3339"))?;
    Ok(instant.with_timezone(&Utc))
}

/// Request from `--request` or from the inline flags.
pub fn chart_request(args: &ChartArgs) -> Result<ChartRequest> {
    if let Some(path) = &args.request {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read request {}", path.display()))?;
        let mut request: ChartRequest = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse request {}", path.display()))?;
        if let Some(name) = &args.name {
            request.full_name.clone_from(name);
        }
        if let Some(gender) = &args.gender {
            request.gender.clone_from(gender);
        }
        return Ok(request);
    }

    let (Some(dob), Some(tob), Some(tz)) = (&args.dob, &args.tob, args.tz) else {
        bail!("--dob, --tob, and --tz are required unless --request is given");
    };
    Ok(ChartRequest {
        full_name: args.name.clone().unwrap_or_default(),
        gender: args.gender.clone().unwrap_or_default(),
        dob: dob.clone(),
        tob: tob.clone(),
        tz,
        lat: args.lat,
        lng: args.lng,
    })
}

/// Configured settings with command-line overrides applied.
pub fn chart_settings(args: &ChartArgs, config: &KundaliConfig) -> ChartSettings {
    let mut settings = config.chart.clone();
    if let Some(ayanamsa) = args.ayanamsa {
        settings.ayanamsa = ayanamsa;
    }
    if let Some(node_mode) = args.node_mode {
        settings.node_mode = node_mode;
    }
    settings
}

pub fn chart(args: &ChartArgs, config: &KundaliConfig) -> Result<String> {
    let request = chart_request(args)?;
    let settings = chart_settings(args, config);
    let ephemeris = load_snapshot(&args.snapshot)?;

    let chart = compute_chart(&request, &ephemeris, &settings).context("chart computation failed")?;

    let format = args.format.map_or(config.output.format, OutputFormat::from);
    debug!(format = format.name(), "rendering chart");
    match format {
        OutputFormat::Json => chart
            .to_json(args.pretty || config.output.pretty)
            .context("failed to serialize chart"),
        OutputFormat::Narrative => Ok(render_narrative(&chart)),
    }
}

fn load_snapshot(path: &Path) -> Result<SnapshotEphemeris> {
    SnapshotEphemeris::load(path)
        .with_context(|| format!("failed to load ephemeris snapshot {}", path.display()))
}

pub fn rashi(lon: f64) -> String {
    let info = rashi_from_longitude(lon);
    format!(
        "{} ({}) - {} ({:.4} deg in rashi)",
        info.rashi.name(),
        info.rashi.western_name(),
        info.dms,
        info.degrees_in_rashi
    )
}

pub fn nakshatra(lon: f64) -> String {
    let info = nakshatra_from_longitude(lon);
    format!(
        "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
        info.nakshatra.name(),
        info.nakshatra_index,
        info.pada,
        info.degrees_in_nakshatra
    )
}

pub fn dms(deg: f64) -> String {
    let sign = if deg < 0.0 { "-" } else { "" };
    format!("{sign}{}", deg_to_dms(deg.abs()))
}

pub fn varga(lon: f64, only: Option<Varga>) -> String {
    let lon = normalize_360(lon);
    let vargas: Vec<Varga> = match only {
        Some(v) => vec![v],
        None => ALL_VARGAS.to_vec(),
    };
    vargas
        .into_iter()
        .map(|v| {
            let sign = Rashi::from_index(varga_rashi_index(lon, v));
            format!(
                "{:<4}{:<14}{} ({})",
                v.code(),
                v.name(),
                sign.name(),
                sign.western_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dasha(moon: f64, birth: &str) -> Result<String> {
    let birth = parse_instant(birth)?;
    let periods = vimshottari(moon, birth).context("dasha computation failed")?;
    let lines: Vec<String> = periods
        .iter()
        .map(|p| {
            format!(
                "{:<8} {} -> {}  ({:.4} y)",
                p.lord.english_name(),
                p.start.format("%Y-%m-%d"),
                p.end.format("%Y-%m-%d"),
                p.duration_years
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn panchang(sun: f64, moon: f64, date: &str) -> Result<String> {
    let utc = parse_instant(date)?;
    let p = panchanga(sun, moon, &utc);
    Ok(format!(
        "Tithi {}, Yoga {}, Karana {}, {}",
        p.tithi, p.yoga, p.karana, p.vaar
    ))
}
