use crate::catalog::DistributionKind;

/// Errors returned by catalog evaluation, controller transitions and surfaces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a lower bound parameter is not strictly below its upper bound.
    ///
    /// This is the only validation error reachable from clamped user input.
    #[error("invalid range: lower bound (a = {low}) must be less than the upper bound (b = {high})")]
    InvalidRange {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a distribution name is not part of the catalog.
    #[error("unknown distribution: '{0}'")]
    UnknownDistribution(String),

    /// Returned when a value is supplied for a parameter the distribution does not declare.
    #[error("{distribution} has no parameter named '{name}'")]
    UnknownParameter {
        /// The distribution being evaluated.
        distribution: DistributionKind,
        /// The undeclared parameter name.
        name: String,
    },

    /// Returned when a declared parameter has no value.
    #[error("missing value for parameter '{0}'")]
    MissingParameter(String),

    /// Returned when a parameter value has the wrong numeric type.
    #[error("parameter '{name}' expects {expected} value")]
    ParameterType {
        /// The parameter name.
        name: String,
        /// The expected kind of value ("an integer" or "a real").
        expected: &'static str,
    },

    /// Returned when a parameter value lies outside its declared bounds.
    #[error("parameter '{name}' = {value} is outside [{low}, {high}]")]
    OutOfBounds {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
        /// The lower bound (inclusive).
        low: f64,
        /// The upper bound (inclusive).
        high: f64,
    },

    /// Returned when a parameter is declared with the lower bound above the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when a parameter default lies outside its bounds.
    #[error("default for '{name}' ({value}) lies outside its bounds")]
    InvalidDefault {
        /// The parameter name.
        name: String,
        /// The declared default.
        value: f64,
    },

    /// Returned when the density library rejects a parameter combination.
    #[error("{distribution} rejected its parameters: {reason}")]
    Numeric {
        /// The distribution being evaluated.
        distribution: DistributionKind,
        /// The library's description of the failure.
        reason: String,
    },

    /// Returned when a surface fails to write a frame.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Returned when a frame cannot be serialized.
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this error is a user-facing validation failure rather than a defect.
    ///
    /// The controller renders validation failures inline and propagates everything else.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}

/// A convenience alias for `core::result::Result<T, distplot::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
