//! Two-variable power sums `Σ nᵢ · x^Iᵢ · y^Jᵢ` and their partial
//! derivatives.
//!
//! Every free-energy surface and backward equation of IF97 is a sum of
//! this shape over a region-specific coefficient table. The region modules
//! keep their tables next to the function that consumes them and only
//! describe *which* derivative they need through [`Partial`]; the
//! accumulation loop lives here once.
//!
//! Exponents are generic over [`Exponent`] because most tables use
//! integer exponents (evaluated with `powi`) while a few backward
//! equations use fractional ones (evaluated with `powf`).

/// Which partial derivative of the power sum to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partial {
    /// The sum itself.
    Value,
    /// ∂/∂x
    X,
    /// ∂/∂y
    Y,
    /// ∂²/∂x²
    XX,
    /// ∂²/∂y²
    YY,
    /// ∂²/∂x∂y
    XY,
}

impl Partial {
    /// Derivative orders `(in x, in y)`.
    const fn orders(self) -> (u8, u8) {
        match self {
            Partial::Value => (0, 0),
            Partial::X => (1, 0),
            Partial::Y => (0, 1),
            Partial::XX => (2, 0),
            Partial::YY => (0, 2),
            Partial::XY => (1, 1),
        }
    }
}

/// An exponent type usable in a coefficient table.
pub trait Exponent: Copy {
    /// The exponent as a float, used for the pulled-down factor.
    fn to_f64(self) -> f64;

    /// `base` raised to `self - lowered`.
    fn raise(self, base: f64, lowered: u8) -> f64;
}

impl Exponent for i32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn raise(self, base: f64, lowered: u8) -> f64 {
        base.powi(self - i32::from(lowered))
    }
}

impl Exponent for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn raise(self, base: f64, lowered: u8) -> f64 {
        base.powf(self - f64::from(lowered))
    }
}

/// Factor pulled down by differentiating `x^e` `order` times.
#[inline]
fn falling(e: f64, order: u8) -> f64 {
    match order {
        0 => 1.0,
        1 => e,
        _ => e * (e - 1.0),
    }
}

/// Evaluate `Σ nᵢ · x^Iᵢ · y^Jᵢ` (or one of its partial derivatives).
///
/// Terms are accumulated in table order. Terms whose derivative factor
/// vanishes are skipped, so a zero base never turns into `0 · ∞`.
pub fn sum<I: Exponent, J: Exponent>(
    i: &[I],
    j: &[J],
    n: &[f64],
    x: f64,
    y: f64,
    partial: Partial,
) -> f64 {
    debug_assert!(i.len() == n.len() && j.len() == n.len());

    let (dx, dy) = partial.orders();
    let mut acc = 0.0;
    for ((&ik, &jk), &nk) in i.iter().zip(j).zip(n) {
        let factor = falling(ik.to_f64(), dx) * falling(jk.to_f64(), dy);
        if factor == 0.0 {
            continue;
        }
        acc += nk * factor * ik.raise(x, dx) * jk.raise(y, dy);
    }
    acc
}

/// Single-variable form `Σ nᵢ · y^Jᵢ`, used by the ideal-gas parts of
/// Regions 2 and 5.
pub fn series<J: Exponent>(j: &[J], n: &[f64], y: f64, order: u8) -> f64 {
    debug_assert!(j.len() == n.len());

    let mut acc = 0.0;
    for (&jk, &nk) in j.iter().zip(n) {
        let factor = falling(jk.to_f64(), order);
        if factor == 0.0 {
            continue;
        }
        acc += nk * factor * jk.raise(y, order);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const I: [i32; 3] = [0, 1, 2];
    const J: [i32; 3] = [2, -1, 3];
    const N: [f64; 3] = [1.5, -2.0, 0.25];

    // f = 1.5 y² − 2 x / y + 0.25 x² y³
    fn f(x: f64, y: f64) -> f64 {
        1.5 * y * y - 2.0 * x / y + 0.25 * x * x * y.powi(3)
    }

    #[test]
    fn value_matches_closed_form() {
        let (x, y) = (0.7, 1.3);
        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::Value), f(x, y), max_relative = 1e-14);
    }

    #[test]
    fn derivatives_match_closed_form() {
        let (x, y): (f64, f64) = (0.7, 1.3);
        let fx = -2.0 / y + 0.5 * x * y.powi(3);
        let fy = 3.0 * y + 2.0 * x / (y * y) + 0.75 * x * x * y * y;
        let fxx = 0.5 * y.powi(3);
        let fyy = 3.0 - 4.0 * x / y.powi(3) + 1.5 * x * x * y;
        let fxy = 2.0 / (y * y) + 1.5 * x * y * y;

        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::X), fx, max_relative = 1e-13);
        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::Y), fy, max_relative = 1e-13);
        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::XX), fxx, max_relative = 1e-13);
        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::YY), fyy, max_relative = 1e-13);
        assert_relative_eq!(sum(&I, &J, &N, x, y, Partial::XY), fxy, max_relative = 1e-13);
    }

    #[test]
    fn zero_base_does_not_poison_derivative() {
        // ∂/∂x at x = 0 : the I = 0 term must be skipped, not 0 · 0⁻¹.
        let d = sum(&I, &J, &N, 0.0, 1.3, Partial::X);
        assert!(d.is_finite());
        assert_relative_eq!(d, -2.0 / 1.3, max_relative = 1e-14);
    }

    #[test]
    fn fractional_exponents() {
        let i = [0.5_f64, -1.25];
        let j = [1_i32, 0];
        let n = [2.0, 3.0];
        let (x, y): (f64, f64) = (1.7, 0.4);
        let expected = 2.0 * x.sqrt() * y + 3.0 * x.powf(-1.25);
        assert_relative_eq!(sum(&i, &j, &n, x, y, Partial::Value), expected, max_relative = 1e-14);
    }

    #[test]
    fn series_second_derivative() {
        let j = [0, 2, -1];
        let n = [5.0, 1.0, 2.0];
        let y = 1.9;
        assert_relative_eq!(series(&j, &n, y, 2), 2.0 + 4.0 / y.powi(3), max_relative = 1e-14);
    }
}
