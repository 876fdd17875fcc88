use chrono::{DateTime, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{ChartRequest, ChartSettings, compute_chart, render_narrative};
use kundali_core::{Body, EphemerisError, EphemerisPort};
use kundali_vedic_base::AyanamshaStrategy;

/// Every body a fixed distance along the EQJ equator.
struct Circle;

impl EphemerisPort for Circle {
    fn geocentric_vector(
        &self,
        body: Body,
        _utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        let a = (body as u8 as f64 * 47.0).to_radians();
        Ok([a.cos(), a.sin(), 0.1])
    }
}

fn request() -> ChartRequest {
    ChartRequest {
        full_name: "Bench".to_string(),
        gender: String::new(),
        dob: "2000-01-01".to_string(),
        tob: "12:00".to_string(),
        tz: 5.5,
        lat: Some(28.6139),
        lng: Some(77.2090),
    }
}

fn chart_bench(c: &mut Criterion) {
    let req = request();
    let fixed = ChartSettings {
        ayanamsa: AyanamshaStrategy::FixedJ2000,
        ..ChartSettings::default()
    };
    let star = ChartSettings::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_fixed_j2000", |b| {
        b.iter(|| compute_chart(black_box(&req), &Circle, &fixed))
    });
    group.bench_function("compute_true_star", |b| {
        b.iter(|| compute_chart(black_box(&req), &Circle, &star))
    });
    if let Ok(chart) = compute_chart(&req, &Circle, &star) {
        group.bench_function("render_narrative", |b| {
            b.iter(|| render_narrative(black_box(&chart)))
        });
    }
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
