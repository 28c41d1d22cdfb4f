use crate::catalog::{Catalog, DistributionKind};
use crate::error::Result;
use crate::selection::Selection;
use crate::surface::{MemorySurface, Surface};
use crate::types::ControllerState;

use super::Controller;

/// A builder for constructing [`Controller`] instances with a fluent API.
///
/// Created via [`Controller::builder()`].
///
/// # Defaults
///
/// - Distribution: [`Binomial`](DistributionKind::Binomial), the first catalog entry
/// - Surface: [`MemorySurface`]
///
/// # Examples
///
/// ```
/// use distplot::prelude::*;
///
/// let controller = Controller::builder()
///     .distribution(DistributionKind::Weibull)
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.selection().kind(), DistributionKind::Weibull);
/// assert_eq!(controller.surface().frames().len(), 1);
/// ```
pub struct ControllerBuilder<S: Surface = MemorySurface> {
    distribution: DistributionKind,
    surface: S,
}

impl ControllerBuilder<MemorySurface> {
    /// Create a new builder with default settings.
    pub(super) fn new() -> Self {
        Self {
            distribution: DistributionKind::Binomial,
            surface: MemorySurface::new(),
        }
    }
}

impl<S: Surface> ControllerBuilder<S> {
    /// Set the distribution shown first.
    #[must_use]
    pub fn distribution(mut self, kind: DistributionKind) -> Self {
        self.distribution = kind;
        self
    }

    /// Set the surface frames are drawn on.
    ///
    /// Defaults to [`MemorySurface`] if not specified.
    #[must_use]
    pub fn surface<T: Surface>(self, surface: T) -> ControllerBuilder<T> {
        ControllerBuilder {
            distribution: self.distribution,
            surface,
        }
    }

    /// Build the [`Controller`] and render the initial selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to write the first frame.
    pub fn build(self) -> Result<Controller<S>> {
        let catalog = Catalog::new();
        let selection = Selection::defaults(&catalog, self.distribution);
        let mut controller = Controller {
            catalog,
            selection,
            surface: self.surface,
            state: ControllerState::Idle,
        };
        controller.refresh()?;
        Ok(controller)
    }
}
