// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::trace;

/// The precision tier that decided the sign of a determinant.
///
/// Tiers are ordered by cost, see [AdaptivePredicate::evaluate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Plain floating point evaluation.
    Fast,
    /// Exact evaluation over the rounded coordinate differences, or an exact result if the
    /// coordinate differences did not round at all.
    Estimate,
    /// The `Estimate` stage corrected by the first order terms of the coordinate difference
    /// round-off.
    TailCorrected,
    /// Fully exact evaluation.
    Exact,
}

/// The result of the cheapest evaluation tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FastEstimate {
    /// The approximated determinant.
    pub det: f64,
    /// The determinant's permanent: the sum of the magnitudes of its terms. Error bounds
    /// are relative to this value.
    pub permanent: f64,
}

/// A determinant together with the tier that computed it.
///
/// The sign of `det` is always exact. Its magnitude is only an approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The determinant value.
    pub det: f64,
    /// The tier that decided the determinant's sign.
    pub stage: Stage,
}

impl Evaluation {
    pub(crate) fn new(det: f64, stage: Stage) -> Self {
        Evaluation { det, stage }
    }
}

/// A geometric predicate evaluated with adaptive precision.
///
/// Implementors provide each precision tier separately: a cheap approximation, a check whether
/// the approximation's sign is provably correct, a refinement that escalates through more
/// precise tiers, and a non-adaptive exact evaluation. [AdaptivePredicate::evaluate] composes
/// them.
///
/// Every tier must return a determinant of the same sign as [AdaptivePredicate::exact]
/// whenever it claims to be certain.
pub trait AdaptivePredicate {
    /// The points that the predicate is evaluated for.
    type Input;

    /// Name of the predicate used for log output.
    const NAME: &'static str;

    /// Approximates the determinant with plain floating point operations.
    fn fast(&self, input: &Self::Input) -> FastEstimate;

    /// Returns `true` if the sign of `estimate.det` is guaranteed to be correct.
    fn is_certain(&self, estimate: &FastEstimate) -> bool;

    /// Computes the determinant's sign with increasing precision until it is certain.
    ///
    /// `estimate` must be the result of [AdaptivePredicate::fast] for the same input.
    fn refine(&self, input: &Self::Input, estimate: &FastEstimate) -> Evaluation;

    /// Computes the determinant exactly and returns its most significant component.
    fn exact(&self, input: &Self::Input) -> f64;

    /// Evaluates the predicate, escalating to more precise tiers only if required.
    #[inline]
    fn evaluate(&self, input: &Self::Input) -> Evaluation {
        let estimate = self.fast(input);
        if self.is_certain(&estimate) {
            return Evaluation::new(estimate.det, Stage::Fast);
        }
        let evaluation = self.refine(input, &estimate);
        trace!(
            "{}: fast estimate {:e} inconclusive, decided by {:?} stage",
            Self::NAME,
            estimate.det,
            evaluation.stage
        );
        evaluation
    }
}
