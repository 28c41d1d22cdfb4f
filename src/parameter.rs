//! Parameter declarations for catalog entries.
//!
//! The [`Parameter`] trait provides a unified way to describe a bounded
//! numeric control. [`FloatParam`] and [`IntParam`] are builders that turn
//! into a type-erased [`ParamSpec`], which is what a
//! [`DistributionSpec`](crate::DistributionSpec) stores.
//!
//! # Example
//!
//! ```
//! use distplot::parameter::{FloatParam, IntParam, Parameter};
//!
//! let n = IntParam::new(1, 100).default(10).name("n");
//! let p = FloatParam::new(0.0, 1.0)
//!     .step(0.01)
//!     .default(0.5)
//!     .name("p")
//!     .label("Probability of success (p)");
//!
//! assert!(n.validate().is_ok());
//! assert_eq!(p.spec().label, "Probability of success (p)");
//! ```

use core::fmt::Debug;

use crate::bounds::{Bounds, FloatBounds, IntBounds};
use crate::error::{Error, Result};
use crate::param::ParamValue;

/// A trait for declaring a bounded parameter of a distribution.
///
/// Implementors specify the identifier, the bounds and the default; the rest
/// of the declaration is derived from those.
pub trait Parameter: Debug {
    /// Returns the identifier used in title templates and [`ParamValues`](crate::ParamValues).
    fn key(&self) -> &str;

    /// Returns the bounds of the control.
    fn bounds(&self) -> Bounds;

    /// Returns the value the control starts at.
    fn default_value(&self) -> ParamValue;

    /// Returns a human-readable label for this parameter.
    ///
    /// Defaults to the name.
    fn display_label(&self) -> String {
        self.key().to_string()
    }

    /// Validates the parameter declaration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`], [`Error::InvalidStep`] or
    /// [`Error::InvalidDefault`] for a malformed declaration.
    fn validate(&self) -> Result<()> {
        self.spec().validate()
    }

    /// Returns the type-erased declaration.
    fn spec(&self) -> ParamSpec {
        ParamSpec {
            name: self.key().to_string(),
            label: self.display_label(),
            bounds: self.bounds(),
            default: self.default_value(),
        }
    }
}

/// A type-erased parameter declaration: name, label, bounds and default.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Identifier used in title templates and [`ParamValues`](crate::ParamValues).
    pub name: String,
    /// Human-readable control label.
    pub label: String,
    /// Inclusive bounds and step.
    pub bounds: Bounds,
    /// The value the control starts at.
    pub default: ParamValue,
}

impl ParamSpec {
    /// Checks `low <= high`, `step > 0` and that the default lies in bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`], [`Error::InvalidStep`] or [`Error::InvalidDefault`].
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        let (low, high) = self.bounds.range();
        if low > high {
            return Err(Error::InvalidBounds { low, high });
        }
        let step_ok = match &self.bounds {
            Bounds::Float(b) => b.step > 0.0,
            Bounds::Int(b) => b.step > 0,
        };
        if !step_ok {
            return Err(Error::InvalidStep);
        }
        if !self.bounds.contains(self.default) {
            return Err(Error::InvalidDefault {
                name: self.name.clone(),
                value: self.default.as_f64(),
            });
        }
        Ok(())
    }

    /// Checks that `value` has the declared type and lies within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterType`] or [`Error::OutOfBounds`].
    pub fn check(&self, value: ParamValue) -> Result<()> {
        match (&self.bounds, value) {
            (Bounds::Int(_), ParamValue::Float(_)) => Err(Error::ParameterType {
                name: self.name.clone(),
                expected: "an integer",
            }),
            (Bounds::Float(_), ParamValue::Int(_)) => Err(Error::ParameterType {
                name: self.name.clone(),
                expected: "a real",
            }),
            _ if self.bounds.contains(value) => Ok(()),
            _ => {
                let (low, high) = self.bounds.range();
                Err(Error::OutOfBounds {
                    name: self.name.clone(),
                    value: value.as_f64(),
                    low,
                    high,
                })
            }
        }
    }

    /// Returns `value` clamped and snapped onto this control's grid.
    #[must_use]
    pub fn snap(&self, value: impl Into<ParamValue>) -> ParamValue {
        self.bounds.snap(value.into())
    }
}

/// A real-valued parameter with a step size and default.
///
/// The step defaults to `0.1` and the default value to `low`.
///
/// # Example
///
/// ```
/// use distplot::parameter::{FloatParam, Parameter};
///
/// let sigma = FloatParam::new(0.4, 5.0).default(1.0).name("sigma");
/// assert!(sigma.validate().is_ok());
///
/// let broken = FloatParam::new(0.4, 5.0).default(9.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct FloatParam {
    name: Option<String>,
    label: Option<String>,
    low: f64,
    high: f64,
    step: f64,
    default: f64,
}

impl FloatParam {
    /// Creates a new real parameter with the given inclusive bounds.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            name: None,
            label: None,
            low,
            high,
            step: 0.1,
            default: low,
        }
    }

    /// Sets the step granularity.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the human-readable label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Parameter for FloatParam {
    fn key(&self) -> &str {
        self.name.as_deref().unwrap_or("x")
    }

    fn bounds(&self) -> Bounds {
        Bounds::Float(FloatBounds {
            low: self.low,
            high: self.high,
            step: self.step,
        })
    }

    fn default_value(&self) -> ParamValue {
        ParamValue::Float(self.default)
    }

    fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.key().to_string())
    }
}

/// An integer parameter with a step size and default.
///
/// The step defaults to `1` and the default value to `low`.
///
/// # Example
///
/// ```
/// use distplot::parameter::{IntParam, Parameter};
/// use distplot::ParamValue;
///
/// let n = IntParam::new(1, 100).default(10).name("n");
/// assert_eq!(n.default_value(), ParamValue::Int(10));
/// ```
#[derive(Clone, Debug)]
pub struct IntParam {
    name: Option<String>,
    label: Option<String>,
    low: i64,
    high: i64,
    step: i64,
    default: i64,
}

impl IntParam {
    /// Creates a new integer parameter with the given inclusive bounds.
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            name: None,
            label: None,
            low,
            high,
            step: 1,
            default: low,
        }
    }

    /// Sets the step granularity.
    #[must_use]
    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, default: i64) -> Self {
        self.default = default;
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the human-readable label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Parameter for IntParam {
    fn key(&self) -> &str {
        self.name.as_deref().unwrap_or("n")
    }

    fn bounds(&self) -> Bounds {
        Bounds::Int(IntBounds {
            low: self.low,
            high: self.high,
            step: self.step,
        })
    }

    fn default_value(&self) -> ParamValue {
        ParamValue::Int(self.default)
    }

    fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.key().to_string())
    }
}

impl From<FloatParam> for ParamSpec {
    fn from(param: FloatParam) -> Self {
        param.spec()
    }
}

impl From<IntParam> for ParamSpec {
    fn from(param: IntParam) -> Self {
        param.spec()
    }
}
