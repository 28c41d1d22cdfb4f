use super::{Frame, Surface};
use crate::curve::Plot;
use crate::error::Result;

/// In-memory surface that records every frame (the default for tests).
///
/// This is a thin wrapper around `Vec<Frame>`.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    frames: Vec<Frame>,
}

impl MemorySurface {
    /// Creates a new, empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame in the order it was shown.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame currently visible, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The visible plot. `None` before the first frame and while an error is shown.
    #[must_use]
    pub fn last_plot(&self) -> Option<&Plot> {
        match self.current() {
            Some(Frame::Plot(plot)) => Some(plot),
            _ => None,
        }
    }

    /// Drops the recorded history.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Surface for MemorySurface {
    fn draw(&mut self, plot: &Plot) -> Result<()> {
        self.frames.push(Frame::Plot(plot.clone()));
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.frames.push(Frame::Error(message.to_string()));
        Ok(())
    }
}
