//! Self-contained HTML pages with an embedded
//! [Plotly.js](https://plotly.com/javascript/) chart.
//!
//! Every frame rewrites the whole page, the way a script-driven dashboard
//! re-runs top to bottom on each interaction. Probability mass functions are
//! drawn as bar charts, densities as line charts. An error frame replaces
//! the chart with an inline message.
//!
//! ```no_run
//! use distplot::prelude::*;
//!
//! let mut controller = Controller::new(HtmlSurface::new("distribution.html")).unwrap();
//! controller.select("Gamma").unwrap();
//! ```
//!
//! An internet connection is needed on first load to fetch `Plotly.js`
//! from a CDN.

use core::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::Surface;
use crate::curve::Plot;
use crate::error::Result;
use crate::types::PlotKind;

/// Curve color shared by bars and lines.
const CURVE_COLOR: &str = "mediumseagreen";

/// A surface that writes an HTML page to `path` on every frame.
#[derive(Clone, Debug)]
pub struct HtmlSurface {
    path: PathBuf,
}

impl HtmlSurface {
    /// Creates a surface writing to `path`. Nothing is written until the first frame.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The page being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for HtmlSurface {
    fn draw(&mut self, plot: &Plot) -> Result<()> {
        std::fs::write(&self.path, render_plot_html(plot))?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        std::fs::write(&self.path, render_error_html(message))?;
        Ok(())
    }
}

/// Build the page for `plot`.
#[must_use]
pub fn render_plot_html(plot: &Plot) -> String {
    let mut html = page_header(&plot.title);
    html.push_str("<div class=\"chart\"><div id=\"plot\"></div></div>\n");
    write_plot_script(&mut html, plot);
    html.push_str("</body>\n</html>\n");
    html
}

/// Build the page shown instead of a plot when validation fails.
#[must_use]
pub fn render_error_html(message: &str) -> String {
    let mut html = page_header("Interactive Probability Distribution Functions");
    let _ = writeln!(
        html,
        "<div class=\"chart error\" role=\"alert\">{}</div>",
        escape_html(message)
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn page_header(title: &str) -> String {
    let mut html = String::with_capacity(32 * 1024);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 24px; font-size: 1.8em; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
  .error {{ color: #c0392b; background: #fdecea; font-weight: 600; }}
</style>
</head>
<body>
<h1>Interactive Probability Distribution Functions</h1>
"#,
        title = escape_html(title),
    );
    html
}

fn write_plot_script(html: &mut String, plot: &Plot) {
    let trace = match plot.kind {
        PlotKind::Bar => format!(
            r#"type: "bar", marker: {{ color: "{CURVE_COLOR}" }}"#
        ),
        PlotKind::Line => format!(
            r#"type: "scatter", mode: "lines", line: {{ color: "{CURVE_COLOR}", width: 2 }}"#
        ),
    };
    let y_axis = match plot.y_range {
        Some((low, high)) => format!(
            r#"{{ title: "{label}", range: [{low}, {high}] }}"#,
            label = escape_js(&plot.y_label),
        ),
        None => format!(
            r#"{{ title: "{label}", autorange: true }}"#,
            label = escape_js(&plot.y_label),
        ),
    };

    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot("plot", [{{
  x: {x}, y: {y}, name: "{legend}", opacity: 0.5, showlegend: true,
  {trace}
}}], {{ title: {{ text: "{title}" }}, xaxis: {{ title: "{x_label}" }}, yaxis: {y_axis},
     bargap: 0.05, legend: {{ x: 1, xanchor: "right", y: 1 }} }},
   {{ responsive: true }});
</script>
"#,
        x = js_array(&plot.curve.x),
        y = js_array(&plot.curve.y),
        legend = escape_js(&plot.legend),
        title = escape_js(&plot.title),
        x_label = escape_js(&plot.x_label),
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// JS array literal; non-finite values become `null` (a gap in the chart).
fn js_array(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 12 + 2);
    out.push('[');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if v.is_finite() {
            let _ = write!(out, "{v}");
        } else {
            out.push_str("null");
        }
    }
    out.push(']');
    out
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
