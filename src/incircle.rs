// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::adaptive::{AdaptivePredicate, Evaluation, FastEstimate, Stage};
use crate::expansion::{two_diff_tail, two_two_sum, ExactArithmetic, Expansion, ExpansionBuffer};
use crate::{ErrorBounds, Point2};

/// Index triples `(p, q, r)` visiting each vertex of the triangle once, together with the
/// two vertices following it in counterclockwise order.
const ROTATIONS: [(usize, usize, usize); 3] = [(0, 1, 2), (1, 2, 0), (2, 0, 1)];

/// The in-circle test: does a point lie inside the circle through three other points?
///
/// For a counterclockwise triangle `a, b, c` the determinant is positive if `d` lies inside
/// their circumcircle, negative if it lies outside and zero if all four points are
/// co-circular. The sign is reversed for a clockwise triangle.
///
/// Most users will want [ErrorBounds::incircle] instead. This type exposes the individual
/// precision tiers.
#[derive(Debug, Clone, Copy)]
pub struct InCircle<'a> {
    bounds: &'a ErrorBounds,
}

impl<'a> InCircle<'a> {
    /// Creates an in-circle test using the given error bounds.
    pub fn new(bounds: &'a ErrorBounds) -> Self {
        InCircle { bounds }
    }
}

/// A triangle vertex relative to the query point: the rounded coordinate differences and their
/// round-off errors.
#[derive(Debug, Clone, Copy)]
struct Relative {
    x: f64,
    y: f64,
    xtail: f64,
    ytail: f64,
}

impl Relative {
    fn new(p: Point2<f64>, d: Point2<f64>) -> Self {
        let x = p.x - d.x;
        let y = p.y - d.y;
        Relative {
            x,
            y,
            xtail: two_diff_tail(p.x, d.x, x),
            ytail: two_diff_tail(p.y, d.y, y),
        }
    }

    fn has_tail(&self) -> bool {
        self.xtail != 0.0 || self.ytail != 0.0
    }

    /// Exact value of `x² + y²`.
    fn lift(&self, arith: &ExactArithmetic) -> [f64; 4] {
        let (xx1, xx0) = arith.square(self.x);
        let (yy1, yy0) = arith.square(self.y);
        two_two_sum(xx1, xx0, yy1, yy0)
    }

    /// First order correction of the determinant's term belonging to this vertex.
    fn tail_correction(&self, q: &Relative, r: &Relative) -> f64 {
        (self.x * self.x + self.y * self.y)
            * ((q.x * r.ytail + r.y * q.xtail) - (q.y * r.xtail + r.x * q.ytail))
            + 2.0 * (self.x * self.xtail + self.y * self.ytail) * (q.x * r.y - q.y * r.x)
    }
}

/// Exact value of `pair * (x² + y²)`.
fn lifted_pair(arith: &ExactArithmetic, pair: &[f64; 4], p: &Relative) -> Expansion<32> {
    let x: Expansion<8> = arith.scale(pair, p.x);
    let xx: Expansion<16> = arith.scale(x.as_slice(), p.x);
    let y: Expansion<8> = arith.scale(pair, p.y);
    let yy: Expansion<16> = arith.scale(y.as_slice(), p.y);
    Expansion::sum(xx.as_slice(), yy.as_slice())
}

/// Adds the terms that are linear in one coordinate tail of a vertex.
///
/// Returns `pair * tail` for reuse by the second order terms.
fn add_first_order(
    arith: &ExactArithmetic,
    fin: &mut ExpansionBuffer<1152>,
    pair: &[f64; 4],
    tail: f64,
    coordinate: f64,
    (first_lift, first_factor): (&[f64; 4], f64),
    (second_lift, second_factor): (&[f64; 4], f64),
) -> Expansion<8> {
    let tail_pair: Expansion<8> = arith.scale(pair, tail);
    let t16a: Expansion<16> = arith.scale(tail_pair.as_slice(), 2.0 * coordinate);

    let tail_first: Expansion<8> = arith.scale(first_lift, tail);
    let t16b: Expansion<16> = arith.scale(tail_first.as_slice(), first_factor);

    let tail_second: Expansion<8> = arith.scale(second_lift, tail);
    let t16c: Expansion<16> = arith.scale(tail_second.as_slice(), second_factor);

    let t32 = Expansion::<32>::sum(t16a.as_slice(), t16b.as_slice());
    let t48 = Expansion::<48>::sum(t16c.as_slice(), t32.as_slice());
    fin.add(t48.as_slice());
    tail_pair
}

/// Adds the terms of second and third order in the tails that involve one coordinate tail
/// of a vertex.
///
/// `cross` and `cross_tail` are the parts of the opposite vertices' cross product that
/// depend on their tails linearly and quadratically.
fn add_higher_order(
    arith: &ExactArithmetic,
    fin: &mut ExpansionBuffer<1152>,
    tail_pair: &Expansion<8>,
    cross: &Expansion<8>,
    cross_tail: &[f64; 4],
    tail: f64,
    coordinate: f64,
) {
    let t16a: Expansion<16> = arith.scale(tail_pair.as_slice(), tail);
    let tail_cross: Expansion<16> = arith.scale(cross.as_slice(), tail);
    let t32a: Expansion<32> = arith.scale(tail_cross.as_slice(), 2.0 * coordinate);
    let t48 = Expansion::<48>::sum(t16a.as_slice(), t32a.as_slice());
    fin.add(t48.as_slice());

    let t32a: Expansion<32> = arith.scale(tail_cross.as_slice(), tail);
    let tail_cross_tail: Expansion<8> = arith.scale(cross_tail, tail);
    let t16a: Expansion<16> = arith.scale(tail_cross_tail.as_slice(), 2.0 * coordinate);
    let t16b: Expansion<16> = arith.scale(tail_cross_tail.as_slice(), tail);
    let t32b = Expansion::<32>::sum(t16a.as_slice(), t16b.as_slice());
    let t64 = Expansion::<64>::sum(t32a.as_slice(), t32b.as_slice());
    fin.add(t64.as_slice());
}

/// Exact value of `sign * e * (p.x² + p.y²)`.
fn lifted_exact(
    arith: &ExactArithmetic,
    e: &Expansion<12>,
    p: Point2<f64>,
    sign: f64,
) -> Expansion<96> {
    let x: Expansion<24> = arith.scale(e.as_slice(), p.x);
    let xx: Expansion<48> = arith.scale(x.as_slice(), sign * p.x);
    let y: Expansion<24> = arith.scale(e.as_slice(), p.y);
    let yy: Expansion<48> = arith.scale(y.as_slice(), sign * p.y);
    Expansion::sum(xx.as_slice(), yy.as_slice())
}

fn sum_of_three(e: &[f64; 4], f: &[f64; 4], g: &[f64; 4]) -> Expansion<12> {
    let ef = Expansion::<8>::sum(e, f);
    Expansion::sum(ef.as_slice(), g)
}

impl AdaptivePredicate for InCircle<'_> {
    type Input = [Point2<f64>; 4];

    const NAME: &'static str = "incircle";

    #[inline]
    fn fast(&self, &[pa, pb, pc, pd]: &Self::Input) -> FastEstimate {
        let adx = pa.x - pd.x;
        let bdx = pb.x - pd.x;
        let cdx = pc.x - pd.x;
        let ady = pa.y - pd.y;
        let bdy = pb.y - pd.y;
        let cdy = pc.y - pd.y;

        let bdxcdy = bdx * cdy;
        let cdxbdy = cdx * bdy;
        let alift = adx * adx + ady * ady;

        let cdxady = cdx * ady;
        let adxcdy = adx * cdy;
        let blift = bdx * bdx + bdy * bdy;

        let adxbdy = adx * bdy;
        let bdxady = bdx * ady;
        let clift = cdx * cdx + cdy * cdy;

        let det = alift * (bdxcdy - cdxbdy)
            + blift * (cdxady - adxcdy)
            + clift * (adxbdy - bdxady);

        let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
            + (cdxady.abs() + adxcdy.abs()) * blift
            + (adxbdy.abs() + bdxady.abs()) * clift;

        FastEstimate { det, permanent }
    }

    #[inline]
    fn is_certain(&self, estimate: &FastEstimate) -> bool {
        let errbound = self.bounds.icc_err_a * estimate.permanent;
        estimate.det > errbound || -estimate.det > errbound
    }

    fn refine(&self, &[pa, pb, pc, pd]: &Self::Input, fast: &FastEstimate) -> Evaluation {
        let bounds = self.bounds;
        let arith = bounds.arithmetic();
        let permanent = fast.permanent;

        let vertices = [
            Relative::new(pa, pd),
            Relative::new(pb, pd),
            Relative::new(pc, pd),
        ];
        // pairs[p] is the cross product of the two vertices following p.
        let pairs = ROTATIONS.map(|(_, q, r)| {
            let (vq, vr) = (&vertices[q], &vertices[r]);
            arith.two_product_diff(vq.x, vr.y, vr.x, vq.y)
        });

        let adet = lifted_pair(&arith, &pairs[0], &vertices[0]);
        let bdet = lifted_pair(&arith, &pairs[1], &vertices[1]);
        let cdet = lifted_pair(&arith, &pairs[2], &vertices[2]);
        let abdet = Expansion::<64>::sum(adet.as_slice(), bdet.as_slice());
        let mut fin = ExpansionBuffer::<1152>::from_sum(abdet.as_slice(), cdet.as_slice());

        let mut det = fin.estimate();
        let errbound = bounds.icc_err_b * permanent;
        if det >= errbound || -det >= errbound {
            return Evaluation::new(det, Stage::Estimate);
        }

        if vertices.iter().all(|v| !v.has_tail()) {
            // No difference was rounded, `fin` is exact.
            return Evaluation::new(det, Stage::Estimate);
        }

        let errbound = bounds.icc_err_c * permanent + bounds.result_err * det.abs();
        det += ROTATIONS
            .iter()
            .map(|&(p, q, r)| vertices[p].tail_correction(&vertices[q], &vertices[r]))
            .sum::<f64>();
        if det >= errbound || -det >= errbound {
            return Evaluation::new(det, Stage::TailCorrected);
        }

        // The lift of a vertex is only required if another vertex has a tail.
        let lifts = ROTATIONS.map(|(p, q, r)| {
            if vertices[q].has_tail() || vertices[r].has_tail() {
                vertices[p].lift(&arith)
            } else {
                [0.0; 4]
            }
        });

        let mut x_tail_pairs = [Expansion::<8>::zero(); 3];
        let mut y_tail_pairs = [Expansion::<8>::zero(); 3];
        for (p, q, r) in ROTATIONS {
            let (vp, vq, vr) = (&vertices[p], &vertices[q], &vertices[r]);
            if vp.xtail != 0.0 {
                x_tail_pairs[p] = add_first_order(
                    &arith,
                    &mut fin,
                    &pairs[p],
                    vp.xtail,
                    vp.x,
                    (&lifts[r], vq.y),
                    (&lifts[q], -vr.y),
                );
            }
            if vp.ytail != 0.0 {
                y_tail_pairs[p] = add_first_order(
                    &arith,
                    &mut fin,
                    &pairs[p],
                    vp.ytail,
                    vp.y,
                    (&lifts[q], vr.x),
                    (&lifts[r], -vq.x),
                );
            }
        }

        for (p, q, r) in ROTATIONS {
            let (vp, vq, vr) = (&vertices[p], &vertices[q], &vertices[r]);
            if !vp.has_tail() {
                continue;
            }

            let (cross, cross_tail) = if vq.has_tail() || vr.has_tail() {
                let u = arith.two_product_sum(vq.xtail, vr.y, vq.x, vr.ytail);
                let v = arith.two_product_sum(vr.xtail, -vq.y, vr.x, -vq.ytail);
                (
                    Expansion::<8>::sum(&u, &v),
                    arith.two_product_diff(vq.xtail, vr.ytail, vr.xtail, vq.ytail),
                )
            } else {
                (Expansion::<8>::zero(), [0.0; 4])
            };

            if vp.xtail != 0.0 {
                add_higher_order(
                    &arith,
                    &mut fin,
                    &x_tail_pairs[p],
                    &cross,
                    &cross_tail,
                    vp.xtail,
                    vp.x,
                );
                if vq.ytail != 0.0 {
                    let t8: Expansion<8> = arith.scale(&lifts[r], vp.xtail);
                    let t16: Expansion<16> = arith.scale(t8.as_slice(), vq.ytail);
                    fin.add(t16.as_slice());
                }
                if vr.ytail != 0.0 {
                    let t8: Expansion<8> = arith.scale(&lifts[q], -vp.xtail);
                    let t16: Expansion<16> = arith.scale(t8.as_slice(), vr.ytail);
                    fin.add(t16.as_slice());
                }
            }
            if vp.ytail != 0.0 {
                add_higher_order(
                    &arith,
                    &mut fin,
                    &y_tail_pairs[p],
                    &cross,
                    &cross_tail,
                    vp.ytail,
                    vp.y,
                );
            }
        }

        Evaluation::new(fin.most_significant(), Stage::Exact)
    }

    fn exact(&self, &[pa, pb, pc, pd]: &Self::Input) -> f64 {
        let arith = self.bounds.arithmetic();

        let ab = arith.two_product_diff(pa.x, pb.y, pb.x, pa.y);
        let bc = arith.two_product_diff(pb.x, pc.y, pc.x, pb.y);
        let cd = arith.two_product_diff(pc.x, pd.y, pd.x, pc.y);
        let da = arith.two_product_diff(pd.x, pa.y, pa.x, pd.y);
        let ac = arith.two_product_diff(pa.x, pc.y, pc.x, pa.y);
        let bd = arith.two_product_diff(pb.x, pd.y, pd.x, pb.y);

        // Orientations of the four sub-triangles, expanded into the cross products above.
        let cda = sum_of_three(&cd, &da, &ac);
        let dab = sum_of_three(&da, &ab, &bd);
        let abc = sum_of_three(&ab, &bc, &ac.map(|v| -v));
        let bcd = sum_of_three(&bc, &cd, &bd.map(|v| -v));

        let adet = lifted_exact(&arith, &bcd, pa, 1.0);
        let bdet = lifted_exact(&arith, &cda, pb, -1.0);
        let cdet = lifted_exact(&arith, &dab, pc, 1.0);
        let ddet = lifted_exact(&arith, &abc, pd, -1.0);

        let abdet = Expansion::<192>::sum(adet.as_slice(), bdet.as_slice());
        let cddet = Expansion::<192>::sum(cdet.as_slice(), ddet.as_slice());
        let deter = Expansion::<384>::sum(abdet.as_slice(), cddet.as_slice());
        deter.most_significant()
    }
}
