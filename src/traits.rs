//! Scalar abstraction for real-valued elimination
//!
//! Gaussian elimination with pivoting orders candidate pivots by absolute
//! value, so the solver is defined over real scalars only. [`RealField`]
//! bundles the `num-traits` bounds the pipeline needs and fixes the
//! per-type tolerance below which a pivot counts as zero.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable as matrix entries.
///
/// Implemented for `f64` (the default for well-conditioned work) and `f32`
/// (for memory-constrained applications, at reduced accuracy).
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Magnitude below which a pivot is treated as exactly zero.
    ///
    /// Dividing by anything smaller would amplify rounding error beyond
    /// usefulness, so elimination fails with a singularity error instead.
    fn pivot_tolerance() -> Self;
}

impl RealField for f64 {
    #[inline]
    fn pivot_tolerance() -> Self {
        1e-30
    }
}

impl RealField for f32 {
    #[inline]
    fn pivot_tolerance() -> Self {
        1e-20
    }
}
