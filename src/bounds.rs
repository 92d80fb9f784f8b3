// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::OnceLock;

use log::debug;

use crate::expansion::ExactArithmetic;
use crate::PredicateError;

static PRECISION: OnceLock<ErrorBounds> = OnceLock::new();

/// Rounding error bounds used to decide if an approximate determinant can be trusted.
///
/// The table is derived from the machine epsilon ε (half an ulp of `1.0`). Each predicate
/// compares its approximate result against a bound of the form `coefficient * permanent`,
/// where the permanent is the sum of the magnitudes of all terms of the determinant. The
/// coefficients stem from a forward error analysis of the exact expressions being evaluated.
///
/// An `ErrorBounds` value is immutable and cheap to copy. Construct it once with
/// [ErrorBounds::probe] and pass it to every predicate evaluation, or use
/// [initialize_precision] to create a process wide instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBounds {
    pub(crate) epsilon: f64,
    pub(crate) splitter: f64,
    pub(crate) result_err: f64,
    pub(crate) ccw_err_a: f64,
    pub(crate) ccw_err_b: f64,
    pub(crate) ccw_err_c: f64,
    pub(crate) icc_err_a: f64,
    pub(crate) icc_err_b: f64,
    pub(crate) icc_err_c: f64,
}

impl ErrorBounds {
    /// Determines the rounding unit of `f64` arithmetic and derives all error bounds from it.
    ///
    /// The epsilon is found by halving a probe value until adding it to `1.0` no longer has an
    /// effect. The splitter, used to split a double into two halves that can be multiplied
    /// without rounding, is 2<sup>⌈p/2⌉</sup> + 1 for a p bit mantissa.
    ///
    /// This is a pure computation and will return identical tables on every call.
    pub fn probe() -> Self {
        let half = 0.5;
        let mut epsilon = 1.0f64;
        let mut splitter = 1.0f64;
        let mut check = 1.0f64;
        let mut every_other = true;

        loop {
            let last_check = check;
            epsilon *= half;
            if every_other {
                splitter *= 2.0;
            }
            every_other = !every_other;
            check = 1.0 + epsilon;
            if check == 1.0 || check == last_check {
                break;
            }
        }
        splitter += 1.0;

        let bounds = Self::from_epsilon(epsilon, splitter);
        debug!(
            "probed floating point precision: epsilon = {:e}, splitter = {}",
            bounds.epsilon, bounds.splitter
        );
        bounds
    }

    fn from_epsilon(epsilon: f64, splitter: f64) -> Self {
        ErrorBounds {
            epsilon,
            splitter,
            result_err: (3.0 + 8.0 * epsilon) * epsilon,
            ccw_err_a: (3.0 + 16.0 * epsilon) * epsilon,
            ccw_err_b: (2.0 + 12.0 * epsilon) * epsilon,
            ccw_err_c: (9.0 + 64.0 * epsilon) * epsilon * epsilon,
            icc_err_a: (10.0 + 96.0 * epsilon) * epsilon,
            icc_err_b: (4.0 + 48.0 * epsilon) * epsilon,
            icc_err_c: (44.0 + 576.0 * epsilon) * epsilon * epsilon,
        }
    }

    /// The rounding unit: half an ulp of `1.0`, 2<sup>-53</sup> for IEEE-754 doubles.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The constant used to split a double into two non-overlapping halves,
    /// 2<sup>27</sup> + 1 for IEEE-754 doubles.
    pub fn splitter(&self) -> f64 {
        self.splitter
    }

    /// Relative error of the final estimate of an adaptive evaluation.
    pub fn result_err(&self) -> f64 {
        self.result_err
    }

    /// Relative error bounds of the three approximate stages of the orientation test.
    pub fn orient_err(&self) -> [f64; 3] {
        [self.ccw_err_a, self.ccw_err_b, self.ccw_err_c]
    }

    /// Relative error bounds of the three approximate stages of the in-circle test.
    pub fn incircle_err(&self) -> [f64; 3] {
        [self.icc_err_a, self.icc_err_b, self.icc_err_c]
    }

    #[inline]
    pub(crate) fn arithmetic(&self) -> ExactArithmetic {
        ExactArithmetic::new(self.splitter)
    }
}

impl Default for ErrorBounds {
    fn default() -> Self {
        Self::probe()
    }
}

/// Initializes the process wide error bounds used by [orient2d](crate::orient2d) and
/// [incircle](crate::incircle).
///
/// Must be called before the first use of these functions. Calling it again has no effect
/// and returns the same table. Initialization is synchronized: once this function returns,
/// the table is visible to all threads.
pub fn initialize_precision() -> &'static ErrorBounds {
    PRECISION.get_or_init(ErrorBounds::probe)
}

/// Returns the process wide error bounds.
///
/// Returns [PredicateError::Uninitialized] if [initialize_precision] has not been called yet.
pub fn precision() -> Result<&'static ErrorBounds, PredicateError> {
    PRECISION.get().ok_or(PredicateError::Uninitialized)
}

#[cfg(test)]
mod test {
    use super::{initialize_precision, precision, ErrorBounds};
    use approx::assert_relative_eq;

    #[test]
    fn test_probe_matches_ieee_754() {
        let bounds = ErrorBounds::probe();
        assert_eq!(bounds.epsilon(), f64::EPSILON / 2.0);
        assert_eq!(bounds.splitter(), 134_217_729.0);
    }

    #[test]
    fn test_probe_is_deterministic() {
        assert_eq!(ErrorBounds::probe(), ErrorBounds::probe());
        assert_eq!(ErrorBounds::default(), ErrorBounds::probe());
    }

    #[test]
    fn test_derived_bounds() {
        let bounds = ErrorBounds::probe();
        let eps = bounds.epsilon();
        assert_relative_eq!(bounds.result_err(), 3.0 * eps, max_relative = 1e-14);
        let [a, b, c] = bounds.orient_err();
        assert_relative_eq!(a, 3.0 * eps, max_relative = 1e-14);
        assert_relative_eq!(b, 2.0 * eps, max_relative = 1e-14);
        assert_relative_eq!(c, 9.0 * eps * eps, max_relative = 1e-14);
        let [a, b, c] = bounds.incircle_err();
        assert_relative_eq!(a, 10.0 * eps, max_relative = 1e-14);
        assert_relative_eq!(b, 4.0 * eps, max_relative = 1e-14);
        assert_relative_eq!(c, 44.0 * eps * eps, max_relative = 1e-14);
    }

    #[test]
    fn test_bounds_are_ordered() {
        let bounds = ErrorBounds::probe();
        let [a, b, c] = bounds.orient_err();
        assert!(a > b && b > c && c > 0.0);
        let [a, b, c] = bounds.incircle_err();
        assert!(a > b && b > c && c > 0.0);
    }

    #[test]
    fn test_initialize_precision_is_idempotent() {
        let first = initialize_precision();
        let second = initialize_precision();
        assert!(std::ptr::eq(first, second));
        assert_eq!(precision(), Ok(first));
        assert_eq!(*first, ErrorBounds::probe());
    }
}
