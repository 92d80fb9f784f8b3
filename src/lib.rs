// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Robust predicates
//! Adaptive precision geometric predicates for building Delaunay triangulations and related
//! planar subdivisions.
//!
//! Two questions decide every step of a triangulation algorithm:
//!  * *Orientation*: does a point lie left of, right of or on a directed line? See [orient2d].
//!  * *In-circle*: does a point lie inside, outside or on the circle through three other points?
//!    See [incircle].
//!
//! Evaluating either determinant with plain `f64` arithmetic will occasionally round to the
//! wrong sign for nearly degenerate input, which is enough to corrupt a mesh. The predicates
//! in this crate first evaluate the determinant approximately and only fall back to exact
//! arithmetic if the approximation cannot be proven to carry the correct sign. The techniques
//! are described in Jonathan Richard Shewchuk's paper "Adaptive Precision Floating-Point
//! Arithmetic and Fast Robust Geometric Predicates"
//! ([https://www.cs.cmu.edu/~quake/robust.html](https://www.cs.cmu.edu/~quake/robust.html)).
//!
//! # Error bounds
//! Both predicates depend on a table of rounding error bounds, see [ErrorBounds]. The table can
//! either be owned explicitly:
//!
//! ```
//! use robust_predicates::{ErrorBounds, Point2};
//!
//! let bounds = ErrorBounds::probe();
//! let det = bounds.orient2d(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0));
//! assert!(det > 0.0);
//! ```
//!
//! or be initialized once per process:
//!
//! ```
//! use robust_predicates::{incircle, initialize_precision, Point2};
//!
//! initialize_precision();
//! let det = incircle(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.1, 0.1),
//! );
//! assert!(det > 0.0);
//! ```
//!
//! # Features
//! * `serde`: Implements `Serialize` and `Deserialize` for [Point2], [Orientation] and
//!   [CirclePosition].

#![warn(missing_docs)]

mod adaptive;
mod bounds;
mod classify;
mod error;
mod expansion;
mod incircle;
mod orient;
mod point;
mod predicates;
mod validation;

#[cfg(test)]
mod test_utilities;

pub use adaptive::{AdaptivePredicate, Evaluation, FastEstimate, Stage};
pub use bounds::{initialize_precision, precision, ErrorBounds};
pub use classify::{CirclePosition, Orientation};
pub use error::PredicateError;
pub use incircle::InCircle;
pub use orient::Orient2d;
pub use point::{Point2, PredicateNum};
pub use predicates::{incircle, orient2d, try_incircle, try_orient2d};
pub use validation::{
    mitigate_underflow, validate_coordinate, validate_point, MAX_ALLOWED_VALUE, MIN_ALLOWED_VALUE,
};
