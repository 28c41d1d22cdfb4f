//! JSON-lines surface.

use std::io::Write;

use super::{Frame, Surface};
use crate::curve::Plot;
use crate::error::{Error, Result};

/// A surface that writes every frame as one JSON line.
///
/// Each line is a serialized [`Frame`]: `{"Plot":{...}}` or `{"Error":"..."}`.
/// Non-finite samples serialize as `null`.
///
/// # Examples
///
/// ```
/// use distplot::prelude::*;
///
/// let controller = Controller::new(JsonSurface::new(Vec::new())).unwrap();
/// let out = String::from_utf8(controller.into_surface().into_inner()).unwrap();
/// assert!(out.starts_with("{\"Plot\":"));
/// ```
#[derive(Debug)]
pub struct JsonSurface<W: Write> {
    writer: W,
}

impl<W: Write> JsonSurface<W> {
    /// Creates a surface writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let line = serde_json::to_string(frame).map_err(|e| Error::Serialization(e.to_string()))?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn draw(&mut self, plot: &Plot) -> Result<()> {
        self.write_frame(&Frame::Plot(plot.clone()))
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.write_frame(&Frame::Error(message.to_string()))
    }
}
