//! Interval-halving solver shared by every backward equation that has no
//! closed form.
//!
//! Each call site states the slope of its residual explicitly through
//! [`Monotonic`] instead of re-deriving which bound to move:
//!
//! ```
//! use xsteam::bisection::{Bisection, Monotonic};
//!
//! // x² = 2 on [0, 2]
//! let root = Bisection::new(0.0, 2.0, Monotonic::Increasing)
//!     .tolerance(1e-12)
//!     .solve(2.0, |x| x * x);
//! assert!((root.value - 2f64.sqrt()).abs() < 1e-9);
//! assert!(root.diagnostic.is_none());
//! ```

use crate::error::Diagnostic;

/// Slope of the residual function over the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    /// `f` grows with `x`: when `f(mid)` exceeds the target the upper bound
    /// moves down.
    Increasing,
    /// `f` falls with `x`: when `f(mid)` is below the target the upper bound
    /// moves down.
    Decreasing,
}

/// A value produced by an iterative solve, with an optional diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solved {
    pub value: f64,
    pub diagnostic: Option<Diagnostic>,
}

impl Solved {
    /// A value obtained without any caveat.
    pub fn exact(value: f64) -> Self {
        Self { value, diagnostic: None }
    }

    /// Apply `f` to the value, keeping the diagnostic.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self { value: f(self.value), diagnostic: self.diagnostic }
    }

    /// Keep this value, falling back to `other`'s diagnostic when this one
    /// has none. Used when a solve depends on bounds that were solved too.
    pub fn after(self, other: Solved) -> Self {
        Self { value: self.value, diagnostic: self.diagnostic.or(other.diagnostic) }
    }
}

impl From<f64> for Solved {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

/// Bisection over a bracket known to contain the root.
#[derive(Debug, Clone, Copy)]
pub struct Bisection {
    lo: f64,
    hi: f64,
    slope: Monotonic,
    tolerance: f64,
    min_width: Option<f64>,
}

impl Bisection {
    pub fn new(lo: f64, hi: f64, slope: Monotonic) -> Self {
        Self { lo, hi, slope, tolerance: 1e-8, min_width: None }
    }

    /// Absolute tolerance on `|target - f(mid)|`.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Also stop once the bracket is narrower than `width`.
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Search `x` in the bracket such that `f(x) ≈ target`.
    ///
    /// Stops on tolerance, on bracket width (when set), or when `f(mid)`
    /// is bit-identical to the previous iterate. The last case returns the
    /// midpoint together with [`Diagnostic::Stagnated`].
    pub fn solve(self, target: f64, mut f: impl FnMut(f64) -> f64) -> Solved {
        let Self { mut lo, mut hi, slope, tolerance, min_width } = self;
        let mut previous: Option<u64> = None;

        loop {
            let mid = 0.5 * (lo + hi);
            let fx = f(mid);
            let residual = target - fx;

            if residual.abs() <= tolerance {
                return Solved::exact(mid);
            }
            if previous == Some(fx.to_bits()) {
                return Solved {
                    value: mid,
                    diagnostic: Some(Diagnostic::Stagnated { estimate: mid, residual }),
                };
            }
            previous = Some(fx.to_bits());

            let move_upper = match slope {
                Monotonic::Increasing => fx > target,
                Monotonic::Decreasing => fx < target,
            };
            if move_upper {
                hi = mid;
            } else {
                lo = mid;
            }

            if min_width.is_some_and(|w| hi - lo <= w) {
                return Solved::exact(mid);
            }
        }
    }
}
