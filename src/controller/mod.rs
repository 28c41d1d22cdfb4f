//! The interaction controller.
//!
//! A [`Controller`] owns the catalog, the current [`Selection`] and a
//! [`Surface`]. Each user action (choosing a distribution or moving a slider)
//! runs one synchronous evaluate-and-render cycle:
//!
//! ```text
//! Idle --select/set_param--> Rendering --draw or show_error--> Idle
//! ```
//!
//! Validation failures (Uniform with `a >= b`) are shown inline on the
//! surface and returned as [`Outcome::Invalid`]; they never surface as `Err`.
//! A surface write error is returned as `Err` and leaves the previous
//! selection in place, matching what the surface still shows.

mod builder;

pub use builder::ControllerBuilder;

use crate::catalog::{Catalog, DistributionKind};
use crate::curve::Plot;
use crate::error::Result;
use crate::param::ParamValue;
use crate::selection::Selection;
use crate::surface::{MemorySurface, Surface};
use crate::types::ControllerState;

/// What one interaction produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The selection evaluated and was drawn.
    Rendered(Plot),
    /// The selection failed validation; the message was shown instead of a plot.
    Invalid(String),
}

impl Outcome {
    /// The drawn plot, if any.
    #[must_use]
    pub fn plot(&self) -> Option<&Plot> {
        match self {
            Outcome::Rendered(plot) => Some(plot),
            Outcome::Invalid(_) => None,
        }
    }

    /// Whether the interaction was rejected by validation.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }
}

/// Drives a surface from user interactions.
///
/// # Examples
///
/// ```
/// use distplot::prelude::*;
///
/// let mut controller = Controller::new(MemorySurface::new()).unwrap();
///
/// let outcome = controller.select("Uniform").unwrap();
/// assert!(!outcome.is_invalid());
///
/// // Dragging the lower bound past the upper bound is rejected inline.
/// let outcome = controller.set_param("a", 7.5).unwrap();
/// assert!(outcome.is_invalid());
/// assert!(controller.surface().last_plot().is_none());
/// ```
pub struct Controller<S: Surface> {
    catalog: Catalog,
    selection: Selection,
    surface: S,
    state: ControllerState,
}

impl<S: Surface> Controller<S> {
    /// Create a controller showing Binomial at its defaults, and render it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to write the first frame.
    pub fn new(surface: S) -> Result<Self> {
        ControllerBuilder::new().surface(surface).build()
    }

    /// Switch to the distribution named `name`, resetting every parameter to
    /// its default, and render.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDistribution`](crate::Error::UnknownDistribution)
    /// or a surface error, leaving the current selection in place.
    pub fn select(&mut self, name: &str) -> Result<Outcome> {
        let kind: DistributionKind = name.parse()?;
        self.select_kind(kind)
    }

    /// Typed variant of [`select`](Self::select).
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to write.
    pub fn select_kind(&mut self, kind: DistributionKind) -> Result<Outcome> {
        let next = self.selection.select(&self.catalog, kind);
        trace_info!(distribution = kind.name(), "distribution selected");
        self.transition(next)
    }

    /// Move parameter `name` of the current distribution to `value` and render.
    ///
    /// The value is clamped to the parameter's bounds and snapped to its step,
    /// the way the input control would.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`](crate::Error::UnknownParameter) or
    /// a surface error, leaving the current selection in place.
    pub fn set_param(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<Outcome> {
        let next = self.selection.with_value(&self.catalog, name, value)?;
        trace_debug!(
            distribution = next.kind().name(),
            parameter = name,
            value = ?next.values().get(name),
            "parameter updated"
        );
        self.transition(next)
    }

    /// Render the current selection again.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to write.
    pub fn refresh(&mut self) -> Result<Outcome> {
        let current = self.selection.clone();
        self.transition(current)
    }

    /// The catalog this controller evaluates against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// `Idle` between interactions.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The surface frames are drawn on.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the controller, returning its surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run one render cycle for `next`, adopting it once the surface has
    /// accepted the frame. On error the previous selection stays current.
    fn transition(&mut self, next: Selection) -> Result<Outcome> {
        self.state = ControllerState::Rendering;
        let outcome = self.render(&next);
        self.state = ControllerState::Idle;
        if outcome.is_ok() {
            self.selection = next;
        }
        outcome
    }

    fn render(&mut self, selection: &Selection) -> Result<Outcome> {
        match self.catalog.render(selection) {
            Ok(plot) => {
                self.surface.draw(&plot)?;
                trace_debug!(title = plot.title.as_str(), "frame drawn");
                Ok(Outcome::Rendered(plot))
            }
            Err(e) if e.is_validation() => {
                let message = e.to_string();
                trace_info!(reason = message.as_str(), "selection rejected");
                self.surface.show_error(&message)?;
                Ok(Outcome::Invalid(message))
            }
            Err(e) => Err(e),
        }
    }
}

impl Controller<MemorySurface> {
    /// Return a [`ControllerBuilder`] for configuring the initial selection
    /// and the surface.
    #[must_use]
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }
}

impl<S: Surface + core::fmt::Debug> core::fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("selection", &self.selection)
            .field("state", &self.state)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
