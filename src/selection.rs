//! The immutable request context: which distribution, at which parameter values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DistributionKind};
use crate::error::{Error, Result};
use crate::param::{ParamValue, ParamValues};

/// The selected distribution and its current parameter values.
///
/// A selection is never mutated; every transition returns a new one, so the
/// rendered output is a function of the selection alone.
///
/// # Examples
///
/// ```
/// use distplot::{Catalog, DistributionKind, ParamValue, Selection};
///
/// let catalog = Catalog::new();
/// let gamma = Selection::defaults(&catalog, DistributionKind::Gamma);
/// let tuned = gamma.with_value(&catalog, "k", 2.0).unwrap();
///
/// assert_eq!(gamma.values().get("k"), Some(ParamValue::Float(1.0)));
/// assert_eq!(tuned.values().get("k"), Some(ParamValue::Float(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    kind: DistributionKind,
    values: ParamValues,
}

impl Selection {
    /// Selects `kind` with every parameter at its default.
    #[must_use]
    pub fn defaults(catalog: &Catalog, kind: DistributionKind) -> Self {
        Self {
            kind,
            values: catalog.spec(kind).default_values(),
        }
    }

    /// The selected distribution.
    #[must_use]
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// The current parameter values.
    #[must_use]
    pub fn values(&self) -> &ParamValues {
        &self.values
    }

    /// Switches to `kind`, discarding the current values in favour of its defaults.
    #[must_use]
    pub fn select(&self, catalog: &Catalog, kind: DistributionKind) -> Self {
        Self::defaults(catalog, kind)
    }

    /// Returns a selection with `name` moved to `value`, clamped to the
    /// parameter's bounds and snapped to its step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if the selected distribution does
    /// not declare `name`.
    pub fn with_value(
        &self,
        catalog: &Catalog,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Self> {
        let param = catalog
            .spec(self.kind)
            .param(name)
            .ok_or_else(|| Error::UnknownParameter {
                distribution: self.kind,
                name: name.to_string(),
            })?;
        let mut values = self.values.clone();
        values.insert(name, param.snap(value));
        Ok(Self {
            kind: self.kind,
            values,
        })
    }
}
