// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Point2, PredicateError, PredicateNum};

/// The smallest allowed coordinate value greater than zero. This value is equal to
/// 2<sup>-142</sup>.
///
/// Coordinates with a smaller, non-zero absolute value may cause an underflow of the `f64`
/// exponent during exact evaluation. The predicates may then return a wrong sign.
///
/// *See also [validate_coordinate], [mitigate_underflow], [MAX_ALLOWED_VALUE]*

// Shewchuk: "The four predicates implemented for this report will not overflow nor underflow if
// their inputs have exponents in the range -[142, 201] and IEEE-745 double precision
// arithmetic is used."
pub const MIN_ALLOWED_VALUE: f64 = 1.793662034335766e-43; // 1.0 * 2^-142

/// The largest allowed coordinate value. This value is equal to 2<sup>201</sup>.
///
/// Coordinates with a larger absolute value may overflow during exact evaluation.
///
/// *See also [validate_coordinate], [MIN_ALLOWED_VALUE]*
pub const MAX_ALLOWED_VALUE: f64 = 3.2138760885179806e60; // 1.0 * 2^201

/// Checks if a coordinate value is within the range for which the predicates are guaranteed
/// to return the correct sign.
///
/// Will return an error if and only if
///  - The coordinate is NaN (not a number)
///  - The absolute value of the coordinate is too small (See [MIN_ALLOWED_VALUE])
///  - The absolute value of the coordinate is too large (See [MAX_ALLOWED_VALUE])
///
/// Passing in any infinite value will result in `Err(PredicateError::TooLarge)`.
///
/// The predicates never validate their input themselves.
pub fn validate_coordinate<S: PredicateNum>(value: S) -> Result<(), PredicateError> {
    let as_f64: f64 = value.into();
    if as_f64.is_nan() {
        Err(PredicateError::NaN)
    } else if as_f64.abs() < MIN_ALLOWED_VALUE && as_f64 != 0.0 {
        Err(PredicateError::TooSmall)
    } else if as_f64.abs() > MAX_ALLOWED_VALUE {
        Err(PredicateError::TooLarge)
    } else {
        Ok(())
    }
}

/// Checks both coordinates of a point, see [validate_coordinate].
pub fn validate_point<S: PredicateNum>(point: Point2<S>) -> Result<(), PredicateError> {
    validate_coordinate(point.x)?;
    validate_coordinate(point.y)?;
    Ok(())
}

/// Prevents underflow issues of a position by setting any coordinate that is too small to zero.
///
/// A point returned by this function will never cause [PredicateError::TooSmall]. Note that
/// this method will _always_ round towards zero, even if rounding to ±[MIN_ALLOWED_VALUE]
/// would result in a smaller rounding error.
///
/// There is no `mitigate_overflow` counterpart since clamping a coordinate to
/// ±`MAX_ALLOWED_VALUE` could result in an arbitrarily large error.
///
/// # Example
/// ```
/// use robust_predicates::{mitigate_underflow, validate_point, Point2, PredicateError};
///
/// let tiny = Point2::new(1.0e-50, 2.0);
/// assert_eq!(validate_point(tiny), Err(PredicateError::TooSmall));
///
/// let mitigated = mitigate_underflow(tiny);
/// assert_eq!(mitigated, Point2::new(0.0, 2.0));
/// assert_eq!(validate_point(mitigated), Ok(()));
/// ```
pub fn mitigate_underflow(position: Point2<f64>) -> Point2<f64> {
    Point2::new(
        mitigate_underflow_for_coordinate(position.x),
        mitigate_underflow_for_coordinate(position.y),
    )
}

fn mitigate_underflow_for_coordinate(coordinate: f64) -> f64 {
    if coordinate != 0.0 && coordinate.abs() < MIN_ALLOWED_VALUE {
        0.0
    } else {
        coordinate
    }
}
