//! Probability density functions sampled on evenly spaced domains.

use statrs::distribution::{Beta, Continuous, Exp, Gamma, LogNormal, Normal, Uniform, Weibull};

use super::{CONTINUOUS_SAMPLES, DisplayMeta, DistributionKind, DistributionSpec, numeric};
use crate::curve::{Curve, linspace};
use crate::error::{Error, Result};
use crate::param::ParamValues;
use crate::parameter::FloatParam;
use crate::types::PlotKind;

/// Line chart with the shared density labels.
fn density_display(title_template: &'static str, y_range: Option<(f64, f64)>) -> DisplayMeta {
    DisplayMeta {
        kind: PlotKind::Line,
        x_label: "x",
        y_label: "Probability density",
        title_template,
        y_range,
    }
}

/// The `[0.1, 10]` control most shape and scale parameters share.
fn positive(name: &str, label: &str) -> FloatParam {
    FloatParam::new(0.1, 10.0)
        .step(0.1)
        .default(1.0)
        .name(name)
        .label(label)
}

fn sample(start: f64, stop: f64, f: impl Fn(f64) -> f64) -> Curve {
    Curve::sample(linspace(start, stop, CONTINUOUS_SAMPLES), f)
}

pub(super) fn normal() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Normal,
        vec![
            FloatParam::new(-10.0, 10.0)
                .default(0.0)
                .name("mu")
                .label("Mean (μ)")
                .into(),
            FloatParam::new(0.4, 5.0)
                .default(1.0)
                .name("sigma")
                .label("Standard deviation (σ)")
                .into(),
        ],
        eval_normal,
        density_display("Normal Distribution: μ={mu}, σ={sigma}", Some((0.0, 1.0))),
    )
}

fn eval_normal(values: &ParamValues) -> Result<Curve> {
    let dist = Normal::new(values.float("mu")?, values.float("sigma")?)
        .map_err(numeric(DistributionKind::Normal))?;
    Ok(sample(-10.0, 10.0, |x| dist.pdf(x)))
}

pub(super) fn uniform() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Uniform,
        vec![
            FloatParam::new(-10.0, 10.0)
                .default(-5.0)
                .name("a")
                .label("Lower bound (a)")
                .into(),
            FloatParam::new(-10.0, 10.0)
                .default(5.0)
                .name("b")
                .label("Upper bound (b)")
                .into(),
        ],
        eval_uniform,
        density_display("Uniform Distribution: a={a}, b={b}", Some((0.0, 1.0))),
    )
}

fn eval_uniform(values: &ParamValues) -> Result<Curve> {
    let a = values.float("a")?;
    let b = values.float("b")?;
    if a >= b {
        return Err(Error::InvalidRange { low: a, high: b });
    }
    let dist = Uniform::new(a, b).map_err(numeric(DistributionKind::Uniform))?;
    Ok(sample(-10.0, 10.0, |x| dist.pdf(x)))
}

pub(super) fn exponential() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Exponential,
        vec![
            FloatParam::new(0.1, 5.0)
                .default(1.0)
                .name("lambda")
                .label("Rate (λ)")
                .into(),
        ],
        eval_exponential,
        density_display("Exponential Distribution: λ={lambda}", Some((0.0, 3.0))),
    )
}

fn eval_exponential(values: &ParamValues) -> Result<Curve> {
    let dist = Exp::new(values.float("lambda")?).map_err(numeric(DistributionKind::Exponential))?;
    Ok(sample(0.0, 5.0, |x| dist.pdf(x)))
}

pub(super) fn beta() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Beta,
        vec![
            positive("alpha", "Alpha (α)").into(),
            positive("beta", "Beta (β)").into(),
        ],
        eval_beta,
        density_display("Beta Distribution: α={alpha}, β={beta}", Some((0.0, 5.0))),
    )
}

fn eval_beta(values: &ParamValues) -> Result<Curve> {
    let dist = Beta::new(values.float("alpha")?, values.float("beta")?)
        .map_err(numeric(DistributionKind::Beta))?;
    Ok(sample(0.0, 1.0, |x| dist.pdf(x)))
}

pub(super) fn gamma() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Gamma,
        vec![
            positive("k", "Shape (k)").into(),
            positive("theta", "Scale (θ)").into(),
        ],
        eval_gamma,
        density_display("Gamma Distribution: k={k}, θ={theta}", None),
    )
}

fn eval_gamma(values: &ParamValues) -> Result<Curve> {
    let shape = values.float("k")?;
    let scale = values.float("theta")?;
    // statrs parameterizes by rate.
    let dist = Gamma::new(shape, 1.0 / scale).map_err(numeric(DistributionKind::Gamma))?;
    Ok(sample(0.0, 3.0 * shape * scale, |x| dist.pdf(x)))
}

pub(super) fn log_normal() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::LogNormal,
        vec![
            FloatParam::new(-10.0, 10.0)
                .default(0.0)
                .name("mu")
                .label("Mean (μ)")
                .into(),
            positive("sigma", "Standard deviation (σ)").into(),
        ],
        eval_log_normal,
        density_display("Log-normal Distribution: μ={mu}, σ={sigma}", None),
    )
}

fn eval_log_normal(values: &ParamValues) -> Result<Curve> {
    let mu = values.float("mu")?;
    let sigma = values.float("sigma")?;
    let dist = LogNormal::new(mu, sigma).map_err(numeric(DistributionKind::LogNormal))?;
    // The support is x > 0.
    Ok(sample(0.0, (mu + 4.0 * sigma).exp(), |x| {
        if x > 0.0 { dist.pdf(x) } else { 0.0 }
    }))
}

pub(super) fn weibull() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Weibull,
        vec![
            positive("k", "Shape (k)").into(),
            positive("lambda", "Scale (λ)").into(),
        ],
        eval_weibull,
        density_display("Weibull Distribution: k={k}, λ={lambda}", None),
    )
}

fn eval_weibull(values: &ParamValues) -> Result<Curve> {
    let shape = values.float("k")?;
    let scale = values.float("lambda")?;
    let dist = Weibull::new(shape, scale).map_err(numeric(DistributionKind::Weibull))?;
    Ok(sample(0.0, 3.0 * scale, |x| dist.pdf(x)))
}
