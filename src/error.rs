use thiserror::Error;

/// Hard errors: the caller asked for something that has no meaning.
///
/// Inputs that are merely outside the formulation's validity envelope are
/// *not* errors; they produce `NaN` (or [`Region::Undefined`](crate::Region))
/// and a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XSteamError {
    /// Invalid or physically meaningless input (negative density, vapour
    /// fraction outside `[0, 1]`, non-finite value, …).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `get()` was called with an input pair it cannot resolve.
    #[error("Unsupported input pair ({0}, {1})")]
    UnsupportedPair(String, String),

    /// `get()` was asked for an output it does not know.
    #[error("Unknown output property \"{0}\"")]
    UnknownProperty(String),

    /// A unit system name could not be parsed.
    #[error("Unknown unit system \"{0}\" (expected bare, mks or fls)")]
    UnknownUnitSystem(String),

    /// The ice phase cannot be picked from the temperature alone.
    #[error("Ice type is ambiguous at T = {0} K, a hint is required")]
    AmbiguousIceType(f64),
}

pub type Result<T> = std::result::Result<T, XSteamError>;

/// Soft, recoverable conditions attached to a computed value.
///
/// The computational core never logs; it hands these back and the façade
/// decides how to surface them.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// A bisection stopped because the residual no longer changed between
    /// two iterations. The value is the best available estimate.
    #[error("bisection stagnated at {estimate} with residual {residual:e}")]
    Stagnated { estimate: f64, residual: f64 },

    /// The input lies outside the formulation's validity envelope.
    #[error("{quantity} = {value} is outside the validity range")]
    OutOfEnvelope { quantity: &'static str, value: f64 },
}
