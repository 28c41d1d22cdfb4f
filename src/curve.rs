//! Sampled curves and the plot records handed to a surface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::PlotKind;

/// Matching x and y samples of one density or mass function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    /// Sample points, in increasing order.
    pub x: Vec<f64>,
    /// Function values at each sample point.
    ///
    /// Non-finite values serialize as `null` and read back as NaN.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_samples"))]
    pub y: Vec<f64>,
}

#[cfg(feature = "serde")]
fn deserialize_samples<'de, D>(deserializer: D) -> core::result::Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let samples = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(samples
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

impl Curve {
    /// Samples `f` at every point of `x`.
    #[must_use]
    pub fn sample(x: Vec<f64>, f: impl Fn(f64) -> f64) -> Self {
        let y = x.iter().map(|&xi| f(xi)).collect();
        Self { x, y }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The largest y value, ignoring NaN. `None` for an empty curve.
    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.y
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }

    /// Index of the sample whose x is closest to `target`.
    #[must_use]
    pub fn nearest_index(&self, target: f64) -> Option<usize> {
        self.x
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
            .map(|(i, _)| i)
    }
}

/// `n` evenly spaced points over `[start, stop]`, both ends included.
///
/// The last point equals `stop` exactly. `n == 1` yields `[start]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// The integers `start..=end` as reals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn integer_range(start: u64, end: u64) -> Vec<f64> {
    (start..=end).map(|k| k as f64).collect()
}

/// A curve plus everything a surface needs to draw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plot {
    /// The sampled function.
    pub curve: Curve,
    /// Bar or line.
    pub kind: PlotKind,
    /// Label of the x axis.
    pub x_label: String,
    /// Label of the y axis.
    pub y_label: String,
    /// Title with the current parameter values filled in.
    pub title: String,
    /// Legend entry for the curve.
    pub legend: String,
    /// Fixed y-axis bounds, or `None` to let the surface auto-scale.
    pub y_range: Option<(f64, f64)>,
}

#[cfg(feature = "serde")]
impl Plot {
    /// Serializes the plot as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if a
    /// value cannot be represented in JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::Error::Serialization(e.to_string()))
    }
}
