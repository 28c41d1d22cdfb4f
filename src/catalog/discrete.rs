//! Probability mass functions: Binomial and Poisson.

use statrs::distribution::{Binomial, Discrete, Poisson};

use super::{DisplayMeta, DistributionKind, DistributionSpec, numeric};
use crate::curve::{Curve, integer_range};
use crate::error::Result;
use crate::param::ParamValues;
use crate::parameter::{FloatParam, IntParam};
use crate::types::PlotKind;

/// Largest event count drawn for Poisson; the domain is `0..=23`.
const POISSON_MAX_EVENTS: u64 = 23;

pub(super) fn binomial() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Binomial,
        vec![
            IntParam::new(1, 100)
                .default(10)
                .name("n")
                .label("Number of trials (n)")
                .into(),
            FloatParam::new(0.0, 1.0)
                .step(0.01)
                .default(0.5)
                .name("p")
                .label("Probability of success (p)")
                .into(),
        ],
        eval_binomial,
        DisplayMeta {
            kind: PlotKind::Bar,
            x_label: "Number of successes",
            y_label: "Probability",
            title_template: "Binomial Distribution: n={n}, p={p}",
            y_range: None,
        },
    )
}

fn eval_binomial(values: &ParamValues) -> Result<Curve> {
    let kind = DistributionKind::Binomial;
    let n = u64::try_from(values.int("n")?).map_err(numeric(kind))?;
    let p = values.float("p")?;
    let dist = Binomial::new(p, n).map_err(numeric(kind))?;
    Ok(Curve {
        x: integer_range(0, n),
        y: (0..=n).map(|k| dist.pmf(k)).collect(),
    })
}

pub(super) fn poisson() -> DistributionSpec {
    DistributionSpec::new(
        DistributionKind::Poisson,
        vec![
            FloatParam::new(1.0, 10.0)
                .step(0.1)
                .default(5.0)
                .name("lambda")
                .label("Average rate (λ)")
                .into(),
        ],
        eval_poisson,
        DisplayMeta {
            kind: PlotKind::Bar,
            x_label: "Number of events",
            y_label: "Probability",
            title_template: "Poisson Distribution: λ={lambda}",
            y_range: Some((0.0, 0.4)),
        },
    )
}

fn eval_poisson(values: &ParamValues) -> Result<Curve> {
    let rate = values.float("lambda")?;
    let dist = Poisson::new(rate).map_err(numeric(DistributionKind::Poisson))?;
    Ok(Curve {
        x: integer_range(0, POISSON_MAX_EVENTS),
        y: (0..=POISSON_MAX_EVENTS).map(|k| dist.pmf(k)).collect(),
    })
}
