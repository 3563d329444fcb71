use chart_request::api::{Chart, ChartKind, LineChartStyle};
use chart_request::core::{Color, DataEncoding, Plot, Series};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_values(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            50.0 + 45.0 * (t * 0.01).sin()
        })
        .collect()
}

fn bench_extended_encode_10k(c: &mut Criterion) {
    let values = sample_values(10_000);

    c.bench_function("extended_encode_10k", |b| {
        b.iter(|| {
            let _ = DataEncoding::Extended.encode(black_box(&values));
        })
    });
}

fn bench_text_encode_10k(c: &mut Criterion) {
    let series = vec![Series::new(sample_values(10_000))];

    c.bench_function("text_encode_10k", |b| {
        b.iter(|| {
            let _ = DataEncoding::Text.encode_series(black_box(&series));
        })
    });
}

fn bench_line_chart_to_url(c: &mut Criterion) {
    let mut chart = Chart::new(ChartKind::Line(LineChartStyle::Standard));
    for (index, color) in [Color::rgb(0xFF, 0, 0), Color::rgb(0, 0, 0xFF)]
        .into_iter()
        .enumerate()
    {
        chart
            .add_plot(
                Plot::new(sample_values(500))
                    .with_color(color)
                    .with_legend(format!("series {index}")),
            )
            .expect("valid plot");
    }

    c.bench_function("line_chart_to_url_2x500", |b| {
        b.iter(|| {
            let _ = black_box(&chart).to_url();
        })
    });
}

criterion_group!(
    benches,
    bench_extended_encode_10k,
    bench_text_encode_10k,
    bench_line_chart_to_url
);
criterion_main!(benches);
