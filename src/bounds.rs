//! Parameter bounds types.

use crate::param::ParamValue;

/// Bounds for real-valued parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatBounds {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Slider step granularity.
    pub step: f64,
}

/// Bounds for integer parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct IntBounds {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
    /// Slider step granularity.
    pub step: i64,
}

/// Enum wrapping both parameter bounds types.
#[derive(Clone, Debug, PartialEq)]
pub enum Bounds {
    /// Real-valued bounds.
    Float(FloatBounds),
    /// Integer bounds.
    Int(IntBounds),
}

impl Bounds {
    /// Inclusive `(low, high)` as reals.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Bounds::Float(b) => (b.low, b.high),
            Bounds::Int(b) => (b.low as f64, b.high as f64),
        }
    }

    /// Whether `value` has the right type and lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: ParamValue) -> bool {
        match (self, value) {
            (Bounds::Float(b), ParamValue::Float(v)) => (b.low..=b.high).contains(&v),
            (Bounds::Int(b), ParamValue::Int(v)) => (b.low..=b.high).contains(&v),
            _ => false,
        }
    }

    /// Moves `value` onto the control's grid the way a slider would: clamp to
    /// the bounds, snap to the nearest step from `low`, and convert to the
    /// bounds' numeric type.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn snap(&self, value: ParamValue) -> ParamValue {
        match self {
            Bounds::Float(b) => {
                let v = value.as_f64();
                let v = if v.is_nan() { b.low } else { v.clamp(b.low, b.high) };
                let steps = ((v - b.low) / b.step).round();
                let snapped = round_to_step(b.low + steps * b.step, b.step).clamp(b.low, b.high);
                // Avoid `-0.0` showing up in titles.
                ParamValue::Float(if snapped == 0.0 { 0.0 } else { snapped })
            }
            Bounds::Int(b) => {
                let v = match value {
                    ParamValue::Int(v) => v,
                    ParamValue::Float(v) if v.is_nan() => b.low,
                    ParamValue::Float(v) => v.round() as i64,
                };
                let v = v.clamp(b.low, b.high);
                let steps = (v - b.low + b.step / 2) / b.step;
                ParamValue::Int((b.low + steps * b.step).min(b.high))
            }
        }
    }
}

/// Rounds away the representation noise of `low + k * step` (e.g. `0.30000000000000004`).
fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10()).ceil().clamp(0.0, 12.0);
    let scale = 10_f64.powf(decimals);
    (value * scale).round() / scale
}
