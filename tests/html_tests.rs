use distplot::prelude::*;
use distplot::surface::{render_error_html, render_plot_html};

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir =
        std::env::temp_dir().join(format!("distplot_html_test_{}_{id}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn page_is_written_on_construction() {
    let dir = tempdir();
    let path = dir.join("plot.html");
    let controller = Controller::new(HtmlSurface::new(&path)).unwrap();
    assert_eq!(controller.surface().path(), path.as_path());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("plotly"));
    assert!(content.contains("Binomial Distribution: n=10, p=0.5"));
    assert!(content.contains(r#"type: "bar""#));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn every_interaction_rewrites_the_page() {
    let dir = tempdir();
    let path = dir.join("plot.html");
    let mut controller = Controller::new(HtmlSurface::new(&path)).unwrap();

    controller.select("Beta").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Beta Distribution: α=1.0, β=1.0"));
    assert!(content.contains(r#"mode: "lines""#));
    assert!(content.contains("range: [0, 5]"));
    assert!(!content.contains("Binomial"));

    controller.select("Gamma").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("autorange: true"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_uniform_replaces_chart_with_message() {
    let dir = tempdir();
    let path = dir.join("plot.html");
    let mut controller = Controller::new(HtmlSurface::new(&path)).unwrap();
    controller.select("Uniform").unwrap();
    controller.set_param("a", 6.0).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("role=\"alert\""));
    assert!(content.contains("must be less than the upper bound"));
    assert!(!content.contains("Plotly.newPlot"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_an_io_error() {
    let path = tempdir().join("missing").join("plot.html");
    assert!(matches!(
        Controller::new(HtmlSurface::new(path)),
        Err(Error::Io(_))
    ));
}

#[test]
fn diverging_density_renders_gaps() {
    let catalog = Catalog::new();
    let spec = catalog.spec(DistributionKind::Weibull);
    let values = spec.default_values().with("k", 0.5);
    let html = render_plot_html(&spec.render(&values).unwrap());
    assert!(html.contains("y: [null,"));
}

#[test]
fn error_page_has_no_chart() {
    let html = render_error_html("Invalid range");
    assert!(html.contains("Interactive Probability Distribution Functions"));
    assert!(html.contains("Invalid range"));
    assert!(!html.contains("Plotly.newPlot"));
}
