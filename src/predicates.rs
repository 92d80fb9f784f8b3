// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::adaptive::AdaptivePredicate;
use crate::bounds::precision;
use crate::{ErrorBounds, InCircle, Orient2d, Point2, PredicateError, PredicateNum};

impl ErrorBounds {
    /// Returns a positive value if `a`, `b` and `c` occur in counterclockwise order, a negative
    /// value if they occur in clockwise order and zero if they are collinear.
    ///
    /// The result approximates twice the signed area of the triangle `a, b, c`. Its sign is
    /// always exact, its magnitude is not.
    ///
    /// See also [ErrorBounds::orientation].
    #[inline]
    pub fn orient2d<S: PredicateNum>(&self, a: Point2<S>, b: Point2<S>, c: Point2<S>) -> f64 {
        Orient2d::new(self)
            .evaluate(&[a.to_f64(), b.to_f64(), c.to_f64()])
            .det
    }

    /// Returns a positive value if `d` lies inside the circle through `a`, `b` and `c`, a
    /// negative value if it lies outside and zero if all four points are co-circular.
    ///
    /// `a`, `b` and `c` must occur in counterclockwise order, otherwise the sign is reversed.
    /// The sign of the result is always exact, its magnitude is not.
    ///
    /// See also [ErrorBounds::circle_position].
    #[inline]
    pub fn incircle<S: PredicateNum>(
        &self,
        a: Point2<S>,
        b: Point2<S>,
        c: Point2<S>,
        d: Point2<S>,
    ) -> f64 {
        InCircle::new(self)
            .evaluate(&[a.to_f64(), b.to_f64(), c.to_f64(), d.to_f64()])
            .det
    }
}

fn initialized_precision() -> &'static ErrorBounds {
    match precision() {
        Ok(bounds) => bounds,
        Err(error) => panic!("{}", error),
    }
}

/// Orientation test using the process wide error bounds, see [ErrorBounds::orient2d].
///
/// # Panics
/// Panics if [initialize_precision](crate::initialize_precision) has not been called.
/// [try_orient2d] reports this case as an error instead.
pub fn orient2d<S: PredicateNum>(a: Point2<S>, b: Point2<S>, c: Point2<S>) -> f64 {
    initialized_precision().orient2d(a, b, c)
}

/// In-circle test using the process wide error bounds, see [ErrorBounds::incircle].
///
/// # Panics
/// Panics if [initialize_precision](crate::initialize_precision) has not been called.
/// [try_incircle] reports this case as an error instead.
pub fn incircle<S: PredicateNum>(a: Point2<S>, b: Point2<S>, c: Point2<S>, d: Point2<S>) -> f64 {
    initialized_precision().incircle(a, b, c, d)
}

/// Like [orient2d], but returns [PredicateError::Uninitialized] instead of panicking.
pub fn try_orient2d<S: PredicateNum>(
    a: Point2<S>,
    b: Point2<S>,
    c: Point2<S>,
) -> Result<f64, PredicateError> {
    Ok(precision()?.orient2d(a, b, c))
}

/// Like [incircle], but returns [PredicateError::Uninitialized] instead of panicking.
pub fn try_incircle<S: PredicateNum>(
    a: Point2<S>,
    b: Point2<S>,
    c: Point2<S>,
    d: Point2<S>,
) -> Result<f64, PredicateError> {
    Ok(precision()?.incircle(a, b, c, d))
}
