//! Equality and hashing.
//!
//! `==` / `!=` compare element-wise within the fixed [`Matrix::EPSILON`]
//! tolerance; the [`approx`] traits expose the same element-wise comparison
//! with caller-supplied tolerances, so the two never disagree about what
//! "equal" means. Matrices of different dimensions are simply different
//! types and cannot be compared at all.
//!
//! Hashing reads each element's raw 64-bit IEEE-754 pattern in row-major
//! order. Two matrices that compare equal through the tolerance therefore
//! hash identically only when their elements are bit-identical; callers that
//! key caches on matrices get exact-value semantics, at the cost of the usual
//! equal-implies-equal-hash guarantee for merely-near values.

use core::hash::{Hash, Hasher};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Matrix;

impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    /// Element-wise comparison within [`EPSILON`](Matrix::EPSILON).
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::EPSILON)
    }
}

impl<const R: usize, const C: usize> AbsDiffEq for Matrix<R, C> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Self::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const R: usize, const C: usize> RelativeEq for Matrix<R, C> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const R: usize, const C: usize> UlpsEq for Matrix<R, C> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<const R: usize, const C: usize> Hash for Matrix<R, C> {
    /// Feed each element's 64-bit pattern to the hasher in row-major order.
    ///
    /// Deterministic and based solely on bit patterns, never on
    /// tolerance-adjusted values.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.as_slice() {
            state.write_u64(v.to_bits());
        }
    }
}
