//! Core types shared by the catalog, controller and surfaces.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a curve is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlotKind {
    /// One bar per sample; used for probability mass functions.
    Bar,
    /// A connected line; used for probability density functions.
    Line,
}

/// The state of a [`Controller`](crate::Controller) between interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControllerState {
    /// Waiting for input.
    Idle,
    /// Evaluating the current selection and handing it to the surface.
    Rendering,
}
