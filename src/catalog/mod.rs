//! The fixed catalog of plottable distributions.
//!
//! Each entry is a [`DistributionSpec`]: the parameter declarations, a pure
//! evaluator and the display metadata of one distribution. The [`Catalog`]
//! is a registry of the nine entries, keyed by [`DistributionKind`].
//!
//! | Distribution | Function | Parameters | Plot |
//! |---|---|---|---|
//! | Binomial | PMF | `n`, `p` | bar |
//! | Poisson | PMF | `lambda` | bar |
//! | Normal | PDF | `mu`, `sigma` | line |
//! | Uniform | PDF | `a`, `b` (`a < b`) | line |
//! | Exponential | PDF | `lambda` | line |
//! | Beta | PDF | `alpha`, `beta` | line |
//! | Gamma | PDF | `k`, `theta` | line |
//! | Log-normal | PDF | `mu`, `sigma` | line |
//! | Weibull | PDF | `k`, `lambda` | line |
//!
//! # Example
//!
//! ```
//! use distplot::{Catalog, ParamValues};
//!
//! let catalog = Catalog::new();
//! let values = ParamValues::new().with("n", 10_i64).with("p", 0.5);
//! let curve = catalog.evaluate("Binomial", &values).unwrap();
//! assert_eq!(curve.len(), 11);
//! ```

mod continuous;
mod discrete;

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, Plot};
use crate::error::{Error, Result};
use crate::param::ParamValues;
use crate::parameter::ParamSpec;
use crate::selection::Selection;
use crate::types::PlotKind;

/// Number of samples on every continuous domain.
pub const CONTINUOUS_SAMPLES: usize = 1000;

/// Identifies one of the nine catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistributionKind {
    /// Binomial(n, p), probability mass.
    Binomial,
    /// Poisson(λ), probability mass.
    Poisson,
    /// Normal(μ, σ), density.
    Normal,
    /// Uniform(a, b), density.
    Uniform,
    /// Exponential(λ), density.
    Exponential,
    /// Beta(α, β), density.
    Beta,
    /// Gamma(k, θ), density.
    Gamma,
    /// Log-normal(μ, σ), density.
    LogNormal,
    /// Weibull(k, λ), density.
    Weibull,
}

impl DistributionKind {
    /// Every entry, in catalog order.
    pub const ALL: [DistributionKind; 9] = [
        DistributionKind::Binomial,
        DistributionKind::Poisson,
        DistributionKind::Normal,
        DistributionKind::Uniform,
        DistributionKind::Exponential,
        DistributionKind::Beta,
        DistributionKind::Gamma,
        DistributionKind::LogNormal,
        DistributionKind::Weibull,
    ];

    /// The display name shown in the selector.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Binomial => "Binomial",
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Normal => "Normal",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Exponential => "Exponential",
            DistributionKind::Beta => "Beta",
            DistributionKind::Gamma => "Gamma",
            DistributionKind::LogNormal => "Log-normal",
            DistributionKind::Weibull => "Weibull",
        }
    }

    /// Whether the entry is a probability mass function.
    #[must_use]
    pub fn is_discrete(self) -> bool {
        matches!(self, DistributionKind::Binomial | DistributionKind::Poisson)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a display name, ignoring ASCII case. `"Normal (Gaussian)"` is accepted
/// as an alias for [`DistributionKind::Normal`].
impl FromStr for DistributionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("Normal (Gaussian)") {
            return Ok(DistributionKind::Normal);
        }
        DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDistribution(s.to_string()))
    }
}

/// How an entry is labelled and scaled when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayMeta {
    /// Bar or line.
    pub kind: PlotKind,
    /// Label of the x axis.
    pub x_label: &'static str,
    /// Label of the y axis.
    pub y_label: &'static str,
    /// Title with `{name}` placeholders for parameter values.
    pub title_template: &'static str,
    /// Fixed y-axis bounds, or `None` to auto-scale.
    pub y_range: Option<(f64, f64)>,
}

/// Signature of a catalog evaluator: parameter values in, sampled curve out.
pub type Evaluator = fn(&ParamValues) -> Result<Curve>;

/// One catalog entry: parameters, evaluator and display metadata.
///
/// Specs are built once by [`Catalog::new`] and never mutated.
#[derive(Clone, Debug)]
pub struct DistributionSpec {
    kind: DistributionKind,
    params: Vec<ParamSpec>,
    evaluator: Evaluator,
    display: DisplayMeta,
}

impl DistributionSpec {
    #[must_use]
    pub(crate) fn new(
        kind: DistributionKind,
        params: Vec<ParamSpec>,
        evaluator: Evaluator,
        display: DisplayMeta,
    ) -> Self {
        Self {
            kind,
            params,
            evaluator,
            display,
        }
    }

    /// The entry's identity.
    #[must_use]
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Parameter declarations in control order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Looks up a parameter declaration by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Display metadata.
    #[must_use]
    pub fn display(&self) -> &DisplayMeta {
        &self.display
    }

    /// Every parameter at its declared default.
    #[must_use]
    pub fn default_values(&self) -> ParamValues {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.default))
            .collect()
    }

    /// Checks that `values` holds exactly the declared parameters, each with
    /// the declared type and inside its bounds.
    ///
    /// Cross-parameter constraints are not checked here; the evaluator owns them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`], [`Error::MissingParameter`],
    /// [`Error::ParameterType`] or [`Error::OutOfBounds`].
    pub fn check(&self, values: &ParamValues) -> Result<()> {
        if let Some((name, _)) = values.iter().find(|(name, _)| self.param(name).is_none()) {
            return Err(Error::UnknownParameter {
                distribution: self.kind,
                name: name.to_string(),
            });
        }
        for param in &self.params {
            let value = values
                .get(&param.name)
                .ok_or_else(|| Error::MissingParameter(param.name.clone()))?;
            param.check(value)?;
        }
        Ok(())
    }

    /// Checks `values` and samples the distribution's function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for Uniform with `a >= b`, any error of
    /// [`check`](Self::check), or [`Error::Numeric`] if the density library
    /// refuses the parameters.
    pub fn evaluate(&self, values: &ParamValues) -> Result<Curve> {
        self.check(values)?;
        (self.evaluator)(values)
    }

    /// The title template with each `{name}` replaced by its current value.
    #[must_use]
    pub fn title(&self, values: &ParamValues) -> String {
        values
            .iter()
            .fold(self.display.title_template.to_string(), |title, (name, value)| {
                title.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }

    /// The legend entry, e.g. `"Gamma Distribution"`.
    #[must_use]
    pub fn legend(&self) -> String {
        format!("{} Distribution", self.name())
    }

    /// Evaluates `values` and attaches the display metadata.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn render(&self, values: &ParamValues) -> Result<Plot> {
        let curve = self.evaluate(values)?;
        Ok(Plot {
            curve,
            kind: self.display.kind,
            x_label: self.display.x_label.to_string(),
            y_label: self.display.y_label.to_string(),
            title: self.title(values),
            legend: self.legend(),
            y_range: self.display.y_range,
        })
    }
}

/// Registry of the nine catalog entries.
///
/// # Examples
///
/// ```
/// use distplot::Catalog;
///
/// let catalog = Catalog::new();
/// assert_eq!(catalog.list_distributions()[7], "Log-normal");
/// assert!(catalog.get_spec("Cauchy").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<DistributionSpec>,
}

impl Catalog {
    /// Builds the registry.
    #[must_use]
    pub fn new() -> Self {
        let entries = DistributionKind::ALL
            .into_iter()
            .map(|kind| match kind {
                DistributionKind::Binomial => discrete::binomial(),
                DistributionKind::Poisson => discrete::poisson(),
                DistributionKind::Normal => continuous::normal(),
                DistributionKind::Uniform => continuous::uniform(),
                DistributionKind::Exponential => continuous::exponential(),
                DistributionKind::Beta => continuous::beta(),
                DistributionKind::Gamma => continuous::gamma(),
                DistributionKind::LogNormal => continuous::log_normal(),
                DistributionKind::Weibull => continuous::weibull(),
            })
            .collect();
        Self { entries }
    }

    /// Entry names in selector order.
    #[must_use]
    pub fn list_distributions(&self) -> Vec<&'static str> {
        self.entries.iter().map(DistributionSpec::name).collect()
    }

    /// Looks up an entry by display name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDistribution`] for names outside the catalog.
    pub fn get_spec(&self, name: &str) -> Result<&DistributionSpec> {
        Ok(self.spec(name.parse()?))
    }

    /// Looks up an entry by kind.
    #[must_use]
    pub fn spec(&self, kind: DistributionKind) -> &DistributionSpec {
        &self.entries[kind.index()]
    }

    /// Iterates over the entries in selector order.
    pub fn iter(&self) -> impl Iterator<Item = &DistributionSpec> {
        self.entries.iter()
    }

    /// Samples the named distribution at `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDistribution`] for an unknown name, otherwise
    /// the errors of [`DistributionSpec::evaluate`].
    pub fn evaluate(&self, name: &str, params: &ParamValues) -> Result<Curve> {
        self.get_spec(name)?.evaluate(params)
    }

    /// Renders a selection into a plot. Pure: the result depends only on `selection`.
    ///
    /// # Errors
    ///
    /// Same as [`DistributionSpec::evaluate`].
    pub fn render(&self, selection: &Selection) -> Result<Plot> {
        self.spec(selection.kind()).render(selection.values())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a density library error to [`Error::Numeric`].
fn numeric<E: fmt::Display>(distribution: DistributionKind) -> impl FnOnce(E) -> Error {
    move |e| Error::Numeric {
        distribution,
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::ParamValue;

    #[test]
    fn catalog_order_is_fixed() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.list_distributions(),
            [
                "Binomial",
                "Poisson",
                "Normal",
                "Uniform",
                "Exponential",
                "Beta",
                "Gamma",
                "Log-normal",
                "Weibull",
            ]
        );
    }

    #[test]
    fn entries_are_indexed_by_kind() {
        let catalog = Catalog::new();
        for kind in DistributionKind::ALL {
            assert_eq!(catalog.spec(kind).kind(), kind);
        }
    }

    #[test]
    fn every_param_spec_is_well_formed() {
        for spec in Catalog::new().iter() {
            for param in spec.params() {
                assert!(
                    param.validate().is_ok(),
                    "{}::{} is malformed",
                    spec.name(),
                    param.name
                );
            }
        }
    }

    #[test]
    fn parse_accepts_names_and_alias() {
        assert_eq!(
            "log-normal".parse::<DistributionKind>().unwrap(),
            DistributionKind::LogNormal
        );
        assert_eq!(
            "Normal (Gaussian)".parse::<DistributionKind>().unwrap(),
            DistributionKind::Normal
        );
        assert!(matches!(
            "Cauchy".parse::<DistributionKind>(),
            Err(Error::UnknownDistribution(name)) if name == "Cauchy"
        ));
    }

    #[test]
    fn only_mass_functions_are_discrete() {
        let discrete: Vec<_> = DistributionKind::ALL
            .into_iter()
            .filter(|k| k.is_discrete())
            .collect();
        assert_eq!(
            discrete,
            [DistributionKind::Binomial, DistributionKind::Poisson]
        );
    }

    #[test]
    fn title_fills_placeholders() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Binomial);
        assert_eq!(
            spec.title(&spec.default_values()),
            "Binomial Distribution: n=10, p=0.5"
        );
        let spec = catalog.spec(DistributionKind::Poisson);
        assert_eq!(
            spec.title(&spec.default_values()),
            "Poisson Distribution: λ=5.0"
        );
    }

    #[test]
    fn check_rejects_undeclared_parameter() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Poisson);
        let values = spec.default_values().with("mu", 1.0);
        assert!(matches!(
            spec.check(&values),
            Err(Error::UnknownParameter { .. })
        ));
    }

    #[test]
    fn check_rejects_missing_parameter() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Normal);
        let values = ParamValues::new().with("mu", 0.0);
        assert!(matches!(
            spec.check(&values),
            Err(Error::MissingParameter(name)) if name == "sigma"
        ));
    }

    #[test]
    fn check_rejects_out_of_bounds_value() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Normal);
        let values = spec.default_values().with("sigma", 0.1);
        assert!(matches!(
            spec.check(&values),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn check_rejects_wrong_type() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Binomial);
        let values = spec.default_values().with("n", ParamValue::Float(10.0));
        assert!(matches!(
            spec.check(&values),
            Err(Error::ParameterType { .. })
        ));
    }

    #[test]
    fn render_attaches_display_metadata() {
        let catalog = Catalog::new();
        let spec = catalog.spec(DistributionKind::Exponential);
        let plot = spec.render(&spec.default_values()).unwrap();
        assert_eq!(plot.kind, PlotKind::Line);
        assert_eq!(plot.x_label, "x");
        assert_eq!(plot.y_label, "Probability density");
        assert_eq!(plot.legend, "Exponential Distribution");
        assert_eq!(plot.y_range, Some((0.0, 3.0)));
        assert_eq!(plot.title, "Exponential Distribution: λ=1.0");
    }
}
