// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ErrorBounds, Point2, PredicateNum};

/// The orientation of three points.
///
/// Created by [ErrorBounds::orientation].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum Orientation {
    /// The points occur in counterclockwise order. The third point lies left of the line
    /// through the first two.
    CounterClockwise,
    /// All points lie on a common line.
    Collinear,
    /// The points occur in clockwise order. The third point lies right of the line through
    /// the first two.
    Clockwise,
}

impl Orientation {
    /// Classifies the result of [orient2d](crate::orient2d).
    #[inline]
    pub fn from_determinant(det: f64) -> Orientation {
        if det > 0.0 {
            Orientation::CounterClockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Returns `true` for [Orientation::CounterClockwise].
    ///
    /// For left-handed coordinate systems, this corresponds to a clockwise orientation.
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }

    /// Returns `true` for [Orientation::Clockwise].
    pub fn is_cw(self) -> bool {
        self == Orientation::Clockwise
    }

    /// Returns `true` for [Orientation::Collinear].
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }

    /// Returns the orientation of the same points in reversed order.
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
        }
    }
}

/// The position of a point relative to the circumcircle of a counterclockwise triangle.
///
/// Created by [ErrorBounds::circle_position].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum CirclePosition {
    /// The point lies strictly inside the circle.
    Inside,
    /// The point lies on the circle.
    On,
    /// The point lies strictly outside the circle.
    Outside,
}

impl CirclePosition {
    /// Classifies the result of [incircle](crate::incircle) for a counterclockwise triangle.
    #[inline]
    pub fn from_determinant(det: f64) -> CirclePosition {
        if det > 0.0 {
            CirclePosition::Inside
        } else if det < 0.0 {
            CirclePosition::Outside
        } else {
            CirclePosition::On
        }
    }

    #[allow(missing_docs)]
    pub fn is_inside(self) -> bool {
        self == CirclePosition::Inside
    }

    #[allow(missing_docs)]
    pub fn is_on(self) -> bool {
        self == CirclePosition::On
    }

    #[allow(missing_docs)]
    pub fn is_outside(self) -> bool {
        self == CirclePosition::Outside
    }
}

impl ErrorBounds {
    /// Returns the orientation of `a`, `b` and `c`.
    pub fn orientation<S: PredicateNum>(
        &self,
        a: Point2<S>,
        b: Point2<S>,
        c: Point2<S>,
    ) -> Orientation {
        Orientation::from_determinant(self.orient2d(a, b, c))
    }

    /// Returns the position of `d` relative to the circumcircle of `a`, `b` and `c`.
    ///
    /// The triangle `a, b, c` must be counterclockwise. For a clockwise triangle `Inside`
    /// and `Outside` are swapped.
    pub fn circle_position<S: PredicateNum>(
        &self,
        a: Point2<S>,
        b: Point2<S>,
        c: Point2<S>,
        d: Point2<S>,
    ) -> CirclePosition {
        CirclePosition::from_determinant(self.incircle(a, b, c, d))
    }

    /// Returns `true` if `p` lies strictly left of the directed line from `from` to `to`.
    ///
    /// Returns `false` if `p` lies on the line.
    pub fn lies_left_of<S: PredicateNum>(
        &self,
        p: Point2<S>,
        from: Point2<S>,
        to: Point2<S>,
    ) -> bool {
        self.orientation(from, to, p).is_ccw()
    }

    /// Returns `true` if `p` lies exactly on the line through `from` and `to`.
    pub fn is_collinear<S: PredicateNum>(
        &self,
        p: Point2<S>,
        from: Point2<S>,
        to: Point2<S>,
    ) -> bool {
        self.orientation(from, to, p).is_collinear()
    }

    /// Returns `true` if `p` lies strictly inside the counterclockwise triangle `a, b, c`.
    ///
    /// Points on the triangle's boundary are not contained. A clockwise or degenerate
    /// triangle contains no points.
    pub fn triangle_contains<S: PredicateNum>(
        &self,
        [a, b, c]: [Point2<S>; 3],
        p: Point2<S>,
    ) -> bool {
        self.lies_left_of(p, a, b) && self.lies_left_of(p, b, c) && self.lies_left_of(p, c, a)
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle of the counterclockwise
    /// triangle `a, b, c`.
    pub fn circumcircle_contains<S: PredicateNum>(
        &self,
        [a, b, c]: [Point2<S>; 3],
        p: Point2<S>,
    ) -> bool {
        self.circle_position(a, b, c, p).is_inside()
    }
}

#[cfg(test)]
mod test {
    use super::{CirclePosition, Orientation};
    use crate::{ErrorBounds, Point2};

    #[test]
    fn test_from_determinant() {
        assert_eq!(
            Orientation::from_determinant(1.0e-300),
            Orientation::CounterClockwise
        );
        assert_eq!(Orientation::from_determinant(-0.5), Orientation::Clockwise);
        assert_eq!(Orientation::from_determinant(0.0), Orientation::Collinear);
        assert_eq!(Orientation::from_determinant(-0.0), Orientation::Collinear);

        assert_eq!(CirclePosition::from_determinant(2.0), CirclePosition::Inside);
        assert_eq!(CirclePosition::from_determinant(-2.0), CirclePosition::Outside);
        assert_eq!(CirclePosition::from_determinant(0.0), CirclePosition::On);
    }

    #[test]
    fn test_reversed() {
        use Orientation::*;
        for orientation in [CounterClockwise, Collinear, Clockwise] {
            assert_eq!(orientation.reversed().reversed(), orientation);
        }
        assert!(CounterClockwise.reversed().is_cw());
        assert!(Collinear.reversed().is_collinear());
    }

    #[test]
    fn test_lies_left_of() {
        let bounds = ErrorBounds::probe();
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let c = Point2::new(5.0, 5.0);

        // Cyclic permutations keep the third point on the left.
        assert!(bounds.lies_left_of(c, a, b));
        assert!(bounds.lies_left_of(a, b, c));
        assert!(bounds.lies_left_of(b, c, a));

        assert!(!bounds.lies_left_of(c, b, a));
        assert!(!bounds.lies_left_of(b, a, c));
        assert!(!bounds.lies_left_of(a, c, b));
    }

    #[test]
    fn test_is_collinear() {
        let bounds = ErrorBounds::probe();
        let from = Point2::new(1.0, 1.0);
        let to = Point2::new(4.0, 2.0);
        assert!(bounds.is_collinear(Point2::new(7.0, 3.0), from, to));
        assert!(bounds.is_collinear(Point2::new(-2.0, 0.0), from, to));
        assert!(!bounds.lies_left_of(Point2::new(-2.0, 0.0), from, to));
        assert!(!bounds.is_collinear(Point2::new(7.0, 3.0000001), from, to));
    }

    #[test]
    fn test_triangle_contains() {
        let bounds = ErrorBounds::probe();
        let triangle = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(bounds.triangle_contains(triangle, Point2::new(1.0, 1.0)));
        // Boundary points are excluded.
        assert!(!bounds.triangle_contains(triangle, Point2::new(2.0, 2.0)));
        assert!(!bounds.triangle_contains(triangle, Point2::new(2.0, 0.0)));
        assert!(!bounds.triangle_contains(triangle, Point2::new(0.0, 0.0)));
        assert!(!bounds.triangle_contains(triangle, Point2::new(3.0, 3.0)));

        let [a, b, c] = triangle;
        assert!(!bounds.triangle_contains([a, c, b], Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_circumcircle_contains() {
        let bounds = ErrorBounds::probe();
        let triangle = [
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        ];
        assert!(bounds.circumcircle_contains(triangle, Point2::new(0.0, 0.0)));
        assert!(bounds.circumcircle_contains(triangle, Point2::new(0.0, -0.999)));
        assert!(!bounds.circumcircle_contains(triangle, Point2::new(0.0, -1.0)));
        assert!(!bounds.circumcircle_contains(triangle, Point2::new(2.0, 0.0)));

        assert_eq!(
            bounds.circle_position(
                triangle[0],
                triangle[1],
                triangle[2],
                Point2::new(0.0, -1.0)
            ),
            CirclePosition::On
        );
    }

    #[test]
    fn test_integer_coordinates() {
        let bounds = ErrorBounds::probe();
        let a = Point2::new(0i32, 0);
        let b = Point2::new(3, 0);
        let c = Point2::new(0, 3);
        assert_eq!(bounds.orientation(a, b, c), Orientation::CounterClockwise);
        assert_eq!(bounds.orientation(a, c, b), Orientation::Clockwise);
        assert!(bounds.circle_position(a, b, c, Point2::new(1, 1)).is_inside());
        assert!(bounds.circle_position(a, b, c, Point2::new(3, 3)).is_on());
        assert!(bounds.circle_position(a, b, c, Point2::new(4, 4)).is_outside());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_impls() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<Orientation>();
        assert_serde::<CirclePosition>();
    }
}
