use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use distplot::prelude::*;
use distplot::surface::render_plot_html;

fn bench_evaluate_defaults(c: &mut Criterion) {
    let catalog = Catalog::new();
    let mut group = c.benchmark_group("evaluate");

    for spec in catalog.iter() {
        let values = spec.default_values();
        group.bench_with_input(BenchmarkId::new("defaults", spec.name()), &values, |b, v| {
            b.iter(|| spec.evaluate(black_box(v)));
        });
    }
    group.finish();
}

fn bench_binomial_trials(c: &mut Criterion) {
    let catalog = Catalog::new();
    let spec = catalog.spec(DistributionKind::Binomial);
    let mut group = c.benchmark_group("binomial");

    for n in [10_i64, 50, 100] {
        let values = spec.default_values().with("n", n);
        group.bench_with_input(BenchmarkId::new("n", n), &values, |b, v| {
            b.iter(|| spec.evaluate(black_box(v)));
        });
    }
    group.finish();
}

/// Drops every frame.
struct Discard;

impl Surface for Discard {
    fn draw(&mut self, plot: &Plot) -> distplot::Result<()> {
        black_box(plot);
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> distplot::Result<()> {
        black_box(message);
        Ok(())
    }
}

/// One slider drag: a burst of parameter updates, each re-rendered.
fn bench_slider_drag(c: &mut Criterion) {
    c.bench_function("slider_drag_gamma", |b| {
        let mut controller = Controller::builder()
            .distribution(DistributionKind::Gamma)
            .surface(Discard)
            .build()
            .unwrap();
        b.iter(|| {
            for step in 1..=20 {
                controller.set_param("k", f64::from(step) * 0.5).unwrap();
            }
        });
    });
}

fn bench_render_html(c: &mut Criterion) {
    let catalog = Catalog::new();
    let spec = catalog.spec(DistributionKind::Normal);
    let plot = spec.render(&spec.default_values()).unwrap();
    c.bench_function("render_plot_html", |b| {
        b.iter(|| render_plot_html(black_box(&plot)));
    });
}

criterion_group!(
    benches,
    bench_evaluate_defaults,
    bench_binomial_trials,
    bench_slider_drag,
    bench_render_html
);
criterion_main!(benches);
