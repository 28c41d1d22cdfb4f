//! Replays a short interactive session against an HTML page.
//!
//! Open `distplot_session.html` in a browser and re-run to watch the page
//! change; each step below rewrites it.
//!
//! ```sh
//! cargo run --example slider_session
//! ```

use distplot::prelude::*;

fn report(step: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Rendered(plot) => println!("{step:<28} -> {}", plot.title),
        Outcome::Invalid(message) => println!("{step:<28} -> error: {message}"),
    }
}

fn main() -> distplot::Result<()> {
    let path = std::env::temp_dir().join("distplot_session.html");
    let mut controller = Controller::new(HtmlSurface::new(&path))?;
    println!("writing {}", path.display());

    report("start", &controller.refresh()?);
    report("n = 30", &controller.set_param("n", 30_i64)?);
    report("p = 0.2", &controller.set_param("p", 0.2)?);

    report("select Gamma", &controller.select("Gamma")?);
    report("k = 3", &controller.set_param("k", 3.0)?);
    report("theta = 0.5", &controller.set_param("theta", 0.5)?);

    report("select Uniform", &controller.select("Uniform")?);
    report("a = 6 (past b)", &controller.set_param("a", 6.0)?);
    report("b = 9", &controller.set_param("b", 9.0)?);

    report("select Log-normal", &controller.select("Log-normal")?);
    report("sigma = 0.5", &controller.set_param("sigma", 0.5)?);

    Ok(())
}
