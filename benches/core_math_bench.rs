use criterion::{Criterion, criterion_group, criterion_main};
use estate_charts::api::{BarChartConfig, ChartKind, DonutChartConfig, LineChartConfig};
use estate_charts::core::{
    BarOrientation, DataPoint, DonutGeometry, LinearScale, PlotArea, Point, build_donut_arcs,
    build_line_path, layout_bars,
};
use estate_charts::render::DEFAULT_PALETTE;
use std::hint::black_box;

fn daily_series(len: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("D{i}"), 1_000.0 + (t * 0.37).sin() * 250.0 + t * 0.5)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 1080.0, 0.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_layout_10k(c: &mut Criterion) {
    let series = daily_series(10_000);
    let plot = PlotArea::new(40.0, 10.0, 1_880.0, 1_040.0);
    let geometry = DonutGeometry::new(Point::new(500.0, 500.0), 500.0, 0.6);

    c.bench_function("bar_layout_10k", |b| {
        b.iter(|| {
            let _ = layout_bars(
                black_box(&series),
                black_box(plot),
                0.2,
                BarOrientation::Vertical,
            )
            .expect("layout should succeed");
        })
    });

    c.bench_function("line_path_10k", |b| {
        b.iter(|| {
            let _ = build_line_path(black_box(&series), black_box(plot))
                .expect("line path should succeed");
        })
    });

    c.bench_function("donut_arcs_10k", |b| {
        b.iter(|| {
            let _ = build_donut_arcs(black_box(&series), geometry, &DEFAULT_PALETTE, None)
                .expect("arcs should succeed");
        })
    });
}

fn bench_chart_output_json_2k(c: &mut Criterion) {
    let series = daily_series(2_000);
    let kinds = [
        ChartKind::Bar(BarChartConfig::default()),
        ChartKind::Line(LineChartConfig::default()),
        ChartKind::Donut(DonutChartConfig::default()),
    ];

    c.bench_function("chart_output_json_2k", |b| {
        b.iter(|| {
            for kind in &kinds {
                let output = kind.build(black_box(&series)).expect("build");
                let _ = output.to_json_contract_v1_pretty().expect("json");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_layout_10k,
    bench_chart_output_json_2k
);
criterion_main!(benches);
