//! Output surfaces.
//!
//! The [`Surface`] trait is where rendered frames leave the crate. A
//! [`Controller`](crate::Controller) owns one surface and hands it either a
//! [`Plot`] or a validation message after every interaction.
//!
//! # Available surfaces
//!
//! | Surface | Description | Feature flag |
//! |---------|-------------|-------------|
//! | [`MemorySurface`] | Records every frame in a `Vec` | none |
//! | [`HtmlSurface`] | Rewrites a self-contained Plotly.js page on every frame | none |
//! | `JsonSurface` | Writes every frame as one JSON line | `serde` |
//!
//! # Implementing a custom surface
//!
//! Implement [`draw`](Surface::draw) and [`show_error`](Surface::show_error).
//! An error frame replaces whatever plot was visible; a surface must not keep
//! showing the previous curve next to the message.
//!
//! ```
//! use distplot::prelude::*;
//!
//! #[derive(Default)]
//! struct Titles(Vec<String>);
//!
//! impl Surface for Titles {
//!     fn draw(&mut self, plot: &Plot) -> distplot::Result<()> {
//!         self.0.push(plot.title.clone());
//!         Ok(())
//!     }
//!
//!     fn show_error(&mut self, message: &str) -> distplot::Result<()> {
//!         self.0.push(format!("error: {message}"));
//!         Ok(())
//!     }
//! }
//!
//! let controller = Controller::new(Titles::default()).unwrap();
//! assert_eq!(controller.surface().0, ["Binomial Distribution: n=10, p=0.5"]);
//! ```

mod html;
#[cfg(feature = "serde")]
mod json;
mod memory;

pub use html::{HtmlSurface, render_error_html, render_plot_html};
#[cfg(feature = "serde")]
pub use json::JsonSurface;
pub use memory::MemorySurface;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::curve::Plot;
use crate::error::Result;

/// Consumer of rendered frames.
pub trait Surface {
    /// Show `plot`, replacing whatever was visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn draw(&mut self, plot: &Plot) -> Result<()>;

    /// Clear the plot and show `message` in its place.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn show_error(&mut self, message: &str) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn draw(&mut self, plot: &Plot) -> Result<()> {
        (**self).draw(plot)
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        (**self).show_error(message)
    }
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Frame {
    /// A plot was drawn.
    Plot(Plot),
    /// The plot was cleared and a validation message shown.
    Error(String),
}
