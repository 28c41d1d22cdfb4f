#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Interactive probability density and mass plots for a fixed catalog of
//! nine statistical distributions. Pick a distribution, move its bounded
//! parameters, and get the recomputed curve plus everything a plotting
//! front-end needs to draw it.
//!
//! # Getting Started
//!
//! ```
//! use distplot::prelude::*;
//!
//! let mut controller = Controller::new(MemorySurface::new()).unwrap();
//!
//! controller.select("Gamma").unwrap();
//! let outcome = controller.set_param("k", 2.0).unwrap();
//!
//! let plot = outcome.plot().unwrap();
//! assert_eq!(plot.title, "Gamma Distribution: k=2.0, θ=1.0");
//! assert_eq!(plot.curve.len(), 1000);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Catalog`] | Registry of the nine [`DistributionSpec`]s: parameters, evaluator, display metadata. |
//! | [`Selection`] | Immutable context: the chosen [`DistributionKind`] and its [`ParamValues`]. |
//! | [`Controller`] | Applies user interactions to a selection and renders it on a [`Surface`](surface::Surface). |
//! | [`Plot`] | A sampled [`Curve`] plus labels, title and y-range. |
//! | [`Parameter`](parameter::Parameter) | Bounded control declarations, [`FloatParam`](parameter::FloatParam) and [`IntParam`](parameter::IntParam). |
//!
//! # Catalog
//!
//! | Distribution | Function | Domain | Fixed y-range |
//! |---|---|---|---|
//! | Binomial | PMF | `0..=n` | auto |
//! | Poisson | PMF | `0..=23` | `[0, 0.4]` |
//! | Normal | PDF | `[-10, 10]` | `[0, 1]` |
//! | Uniform | PDF | `[-10, 10]` | `[0, 1]` |
//! | Exponential | PDF | `[0, 5]` | `[0, 3]` |
//! | Beta | PDF | `[0, 1]` | `[0, 5]` |
//! | Gamma | PDF | `[0, 3kθ]` | auto |
//! | Log-normal | PDF | `[0, e^(μ+4σ)]` | auto |
//! | Weibull | PDF | `[0, 3λ]` | auto |
//!
//! Continuous domains hold 1000 evenly spaced samples. Densities and masses
//! come from [`statrs`](https://docs.rs/statrs).
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public data types, [`Plot::to_json`], `JsonSurface` | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on every interaction | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod bounds;
mod catalog;
mod controller;
mod curve;
mod error;
mod param;
pub mod parameter;
mod selection;
pub mod surface;
mod types;

pub use bounds::{Bounds, FloatBounds, IntBounds};
pub use catalog::{
    CONTINUOUS_SAMPLES, Catalog, DisplayMeta, DistributionKind, DistributionSpec, Evaluator,
};
pub use controller::{Controller, ControllerBuilder, Outcome};
pub use curve::{Curve, Plot, integer_range, linspace};
pub use error::{Error, Result};
pub use param::{ParamValue, ParamValues};
pub use selection::Selection;
pub use types::{ControllerState, PlotKind};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use distplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Catalog, DistributionKind, DistributionSpec};
    pub use crate::controller::{Controller, ControllerBuilder, Outcome};
    pub use crate::curve::{Curve, Plot};
    pub use crate::error::{Error, Result};
    pub use crate::param::{ParamValue, ParamValues};
    pub use crate::parameter::{FloatParam, IntParam, ParamSpec, Parameter};
    pub use crate::selection::Selection;
    #[cfg(feature = "serde")]
    pub use crate::surface::JsonSurface;
    pub use crate::surface::{Frame, HtmlSurface, MemorySurface, Surface};
    pub use crate::types::{ControllerState, PlotKind};
}
