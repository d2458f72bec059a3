use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_base::{AyanamsaRegistry, AyanamsaSelector, HorizonSolver, SiderealContext};
use panchanga_core::{AnalyticProvider, GeoLocation};
use panchanga_search::{
    PanchangaConfig, SearchDirection, TransitionConfig, find_step_change, panchanga_for_instant,
    tithi_at,
};
use panchanga_time::{Instant, UtcTime};

fn transition_bench(c: &mut Criterion) {
    let start = Instant::from_utc(&UtcTime::new(2025, 7, 20, 12, 12, 30.0));
    let ctx = SiderealContext::new(&AnalyticProvider, AyanamsaRegistry::lahiri());
    let config = TransitionConfig::default();

    let mut group = c.benchmark_group("transition");
    group.bench_function("nakshatra_end", |b| {
        b.iter(|| {
            find_step_change(
                |t| {
                    ctx.snapshot(t)
                        .map(|s| (s.pair.moon_deg / (360.0 / 27.0)).floor() as u8)
                },
                black_box(start),
                SearchDirection::Forward,
                &config,
            )
        })
    });
    group.bench_function("tithi_with_start", |b| {
        let snap = ctx.snapshot(start).ok();
        let pconfig = PanchangaConfig::default();
        b.iter(|| snap.as_ref().map(|s| tithi_at(&ctx, black_box(s), &pconfig)))
    });
    group.finish();
}

fn panchanga_bench(c: &mut Criterion) {
    let location = GeoLocation::new(49.888, -119.496, 0.0);
    let instant = Instant::from_utc(&UtcTime::new(2025, 7, 20, 19, 0, 0.0));
    let solver = HorizonSolver::new(AnalyticProvider);
    let selector = AyanamsaSelector::Id(1);
    let config = PanchangaConfig::default();

    let mut group = c.benchmark_group("panchanga");
    group.sample_size(20);
    group.bench_function("kelowna_reference_day", |b| {
        b.iter(|| {
            panchanga_for_instant(
                &AnalyticProvider,
                &solver,
                black_box(instant),
                &location,
                &selector,
                &config,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, transition_bench, panchanga_bench);
criterion_main!(benches);
