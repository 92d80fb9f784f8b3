// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// The error type of this crate.
///
/// Degenerate geometry is never an error: collinear or co-circular input is valid and yields
/// a determinant of exactly zero. Errors only originate from using the process wide error
/// bounds before they were initialized or from coordinates rejected by
/// [validate_coordinate](crate::validate_coordinate).
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash, Error)]
pub enum PredicateError {
    /// A process wide predicate was evaluated before
    /// [initialize_precision](crate::initialize_precision) was called.
    #[error("error bounds are not initialized, call initialize_precision() first")]
    Uninitialized,

    /// A coordinate value was NaN.
    #[error("coordinate is NaN")]
    NaN,

    /// A coordinate value was too small.
    ///
    /// The absolute value of any coordinate must either be zero or greater than or equal to
    /// [crate::MIN_ALLOWED_VALUE].
    #[error("coordinate magnitude is below the minimum allowed value")]
    TooSmall,

    /// A coordinate value was too large.
    ///
    /// The absolute value of any coordinate must be less than or equal to
    /// [crate::MAX_ALLOWED_VALUE].
    #[error("coordinate magnitude exceeds the maximum allowed value")]
    TooLarge,
}
