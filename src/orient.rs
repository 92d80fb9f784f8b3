// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::adaptive::{AdaptivePredicate, Evaluation, FastEstimate, Stage};
use crate::expansion::{estimate, two_diff_tail, Expansion};
use crate::{ErrorBounds, Point2};

/// The orientation test: on which side of a directed line does a point lie?
///
/// Evaluates the determinant
/// ```text
/// | a.x - c.x   a.y - c.y |
/// | b.x - c.x   b.y - c.y |
/// ```
/// which is positive if `a`, `b` and `c` occur in counterclockwise order (`c` lies left of the
/// directed line from `a` to `b`), negative if they occur in clockwise order and zero if they
/// are collinear.
///
/// Most users will want [ErrorBounds::orient2d] instead. This type exposes the individual
/// precision tiers.
#[derive(Debug, Clone, Copy)]
pub struct Orient2d<'a> {
    bounds: &'a ErrorBounds,
}

impl<'a> Orient2d<'a> {
    /// Creates an orientation test using the given error bounds.
    pub fn new(bounds: &'a ErrorBounds) -> Self {
        Orient2d { bounds }
    }

    #[inline]
    fn is_certain_within(det: f64, errbound: f64) -> bool {
        det >= errbound || -det >= errbound
    }
}

impl AdaptivePredicate for Orient2d<'_> {
    type Input = [Point2<f64>; 3];

    const NAME: &'static str = "orient2d";

    #[inline]
    fn fast(&self, &[pa, pb, pc]: &Self::Input) -> FastEstimate {
        let detleft = (pa.x - pc.x) * (pb.y - pc.y);
        let detright = (pa.y - pc.y) * (pb.x - pc.x);
        // If both terms differ in sign, |det| equals the permanent and the sign is exact.
        FastEstimate {
            det: detleft - detright,
            permanent: detleft.abs() + detright.abs(),
        }
    }

    #[inline]
    fn is_certain(&self, estimate: &FastEstimate) -> bool {
        Self::is_certain_within(estimate.det, self.bounds.ccw_err_a * estimate.permanent)
    }

    fn refine(&self, &[pa, pb, pc]: &Self::Input, fast: &FastEstimate) -> Evaluation {
        let bounds = self.bounds;
        let arith = bounds.arithmetic();
        let detsum = fast.permanent;

        let acx = pa.x - pc.x;
        let bcx = pb.x - pc.x;
        let acy = pa.y - pc.y;
        let bcy = pb.y - pc.y;

        let b = arith.two_product_diff(acx, bcy, acy, bcx);
        let mut det = estimate(&b);
        if Self::is_certain_within(det, bounds.ccw_err_b * detsum) {
            return Evaluation::new(det, Stage::Estimate);
        }

        let acxtail = two_diff_tail(pa.x, pc.x, acx);
        let bcxtail = two_diff_tail(pb.x, pc.x, bcx);
        let acytail = two_diff_tail(pa.y, pc.y, acy);
        let bcytail = two_diff_tail(pb.y, pc.y, bcy);

        if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
            // No difference was rounded, `b` is exact.
            return Evaluation::new(det, Stage::Estimate);
        }

        let errbound = bounds.ccw_err_c * detsum + bounds.result_err * det.abs();
        det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
        if Self::is_certain_within(det, errbound) {
            return Evaluation::new(det, Stage::TailCorrected);
        }

        let u = arith.two_product_diff(acxtail, bcy, acytail, bcx);
        let c1 = Expansion::<8>::sum(&b, &u);

        let u = arith.two_product_diff(acx, bcytail, acy, bcxtail);
        let c2 = Expansion::<12>::sum(c1.as_slice(), &u);

        let u = arith.two_product_diff(acxtail, bcytail, acytail, bcxtail);
        let d = Expansion::<16>::sum(c2.as_slice(), &u);

        Evaluation::new(d.most_significant(), Stage::Exact)
    }

    fn exact(&self, &[pa, pb, pc]: &Self::Input) -> f64 {
        // Expands the determinant of [[a.x, a.y, 1], [b.x, b.y, 1], [c.x, c.y, 1]] into six
        // products and accumulates them without any rounding.
        let arith = self.bounds.arithmetic();
        let mut det = Expansion::<12>::zero();
        for (left, right) in [
            (pa.x, pb.y),
            (-pa.x, pc.y),
            (pb.x, pc.y),
            (-pb.x, pa.y),
            (pc.x, pa.y),
            (-pc.x, pb.y),
        ] {
            let (product, tail) = arith.two_product(left, right);
            det.push(tail);
            det.push(product);
        }
        det.most_significant()
    }
}

#[cfg(test)]
mod test {
    use super::Orient2d;
    use crate::adaptive::{AdaptivePredicate, Stage};
    use crate::test_utilities::{orient2d_oracle, random_points_in_range, sign, SEED};
    use crate::{ErrorBounds, Point2};
    use float_next_after::NextAfter;

    #[test]
    fn test_orient2d() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let from = Point2::new(-1f64, -1.0);
        let to = Point2::new(1f64, 1.0);
        let p1 = Point2::new(f64::MIN_POSITIVE, f64::MIN_POSITIVE);
        let p2 = Point2::new(-f64::MIN_POSITIVE, -f64::MIN_POSITIVE);
        let p3 = Point2::new(-f64::MIN_POSITIVE, f64::MIN_POSITIVE);
        let p4 = Point2::new(f64::MIN_POSITIVE, -f64::MIN_POSITIVE);

        for &(p, expected) in &[(p1, 0.0), (p2, 0.0), (p3, 1.0), (p4, -1.0)] {
            let det = orient.evaluate(&[from, to, p]).det;
            assert!(det == expected || det.signum() == expected.signum());
        }
    }

    #[test]
    fn test_fast_path_is_taken_for_regular_input() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let evaluation = orient.evaluate(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        assert_eq!(evaluation.stage, Stage::Fast);
        assert_eq!(evaluation.det, 1.0);
    }

    #[test]
    fn test_collinear_input_is_refined_to_zero() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let input = [
            Point2::new(0.1, 0.1),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.7),
        ];
        let fast = orient.fast(&input);
        assert!(!orient.is_certain(&fast));
        let evaluation = orient.refine(&input, &fast);
        assert_eq!(evaluation.det, 0.0);
        assert_eq!(orient.exact(&input), 0.0);
    }

    #[test]
    fn test_exact_stage_for_rounded_differences() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let tiny = 2f64.powi(-60);
        let b = Point2::new(3.0, 3.0);
        let c = Point2::new(1.0, 1.0);

        // `a.x - c.x` and `a.y - c.y` round to -1, so the rounded differences are always
        // collinear and only the tails decide.
        let a = Point2::new(tiny, tiny);
        let evaluation = orient.evaluate(&[a, b, c]);
        assert_eq!(evaluation.stage, Stage::Exact);
        assert_eq!(evaluation.det, 0.0);
        assert_eq!(orient.exact(&[a, b, c]), 0.0);

        // The true determinant is -2^-105, below the bound of the tail corrected stage.
        let a = Point2::new(tiny, tiny + 2f64.powi(-106));
        let evaluation = orient.evaluate(&[a, b, c]);
        assert_eq!(evaluation.stage, Stage::Exact);
        assert!(evaluation.det < 0.0);
        assert_eq!(sign(evaluation.det), orient2d_oracle(a, b, c));
        assert_eq!(sign(orient.exact(&[a, b, c])), sign(evaluation.det));
        assert_eq!(
            sign(orient.evaluate(&[b, a, c]).det),
            orient2d_oracle(a, b, c).reverse()
        );
    }

    #[test]
    fn test_tiers_agree_with_exact() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let points = random_points_in_range(1.0e3, 300, SEED);
        for triple in points.chunks_exact(3) {
            let input = [triple[0], triple[1], triple[2]];
            let exact = orient.exact(&input);
            let fast = orient.fast(&input);
            if orient.is_certain(&fast) {
                assert_eq!(sign(fast.det), sign(exact));
            }
            assert_eq!(sign(orient.refine(&input, &fast).det), sign(exact));
            assert_eq!(sign(exact), orient2d_oracle(input[0], input[1], input[2]));
        }
    }

    #[test]
    fn test_nearly_collinear_perturbations() {
        let bounds = ErrorBounds::probe();
        let orient = Orient2d::new(&bounds);
        let a = Point2::new(0.5, 0.5);
        let b = Point2::new(12.0, 12.0);
        let mut x = 0.5f64;
        for _ in 0..64 {
            let mut y = 0.5f64;
            for _ in 0..64 {
                let c = Point2::new(x, y);
                let det = orient.evaluate(&[a, b, c]).det;
                assert_eq!(sign(det), orient2d_oracle(a, b, c));
                y = y.next_after(f64::INFINITY);
            }
            x = x.next_after(f64::INFINITY);
        }
    }
}
