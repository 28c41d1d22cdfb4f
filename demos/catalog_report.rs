//! Prints every catalog entry with its controls and a summary of the curve at
//! the default values, and writes one HTML page per entry to the temp directory.
//!
//! ```sh
//! cargo run --example catalog_report
//! ```

use distplot::surface::render_plot_html;
use distplot::{Bounds, Catalog};

fn main() -> distplot::Result<()> {
    let catalog = Catalog::new();
    let out_dir = std::env::temp_dir().join("distplot_catalog");
    std::fs::create_dir_all(&out_dir)?;

    for spec in catalog.iter() {
        let display = spec.display();
        println!("{} ({:?} chart)", spec.name(), display.kind);

        for param in spec.params() {
            let step = match &param.bounds {
                Bounds::Float(b) => b.step.to_string(),
                Bounds::Int(b) => b.step.to_string(),
            };
            let (low, high) = param.bounds.range();
            println!(
                "  {:<28} [{low}, {high}] step {step}, default {}",
                param.label, param.default
            );
        }

        let plot = spec.render(&spec.default_values())?;
        let (first, last) = (plot.curve.x[0], plot.curve.x[plot.curve.len() - 1]);
        let peak = plot.curve.y_max().unwrap_or(f64::NAN);
        println!("  title:  {}", plot.title);
        println!(
            "  domain: [{first:.3}, {last:.3}] with {} points, peak {peak:.4}",
            plot.curve.len()
        );
        match plot.y_range {
            Some((low, high)) => println!("  y-axis: fixed [{low}, {high}]"),
            None => println!("  y-axis: auto"),
        }

        let page = out_dir.join(format!("{}.html", spec.name().to_lowercase()));
        std::fs::write(&page, render_plot_html(&plot))?;
        println!("  page:   {}", page.display());
        println!();
    }

    Ok(())
}
