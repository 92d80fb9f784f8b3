#![allow(missing_docs)]
use crate::Point2;
use num_rational::BigRational;
use num_traits::Zero;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use std::cmp::Ordering;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f64, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new(-range, range);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        let x = range.sample(&mut rng);
        let y = range.sample(&mut rng);
        points.push(Point2::new(x, y));
    }
    points
}

pub fn random_points_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    random_points_in_range(1.0, size, seed)
}

pub fn to_rational(value: f64) -> BigRational {
    BigRational::from_float(value).expect("finite value")
}

pub fn exact_sum(components: &[f64]) -> BigRational {
    components
        .iter()
        .fold(BigRational::zero(), |acc, &c| acc + to_rational(c))
}

pub fn sign(value: f64) -> Ordering {
    value.partial_cmp(&0.0).expect("determinant is not NaN")
}

fn rational_point(p: Point2<f64>) -> (BigRational, BigRational) {
    (to_rational(p.x), to_rational(p.y))
}

/// Sign of the orientation determinant, computed with arbitrary precision.
///
/// `tests/common/mod.rs` carries a copy for the integration tests.
pub fn orient2d_oracle(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Ordering {
    let (ax, ay) = rational_point(a);
    let (bx, by) = rational_point(b);
    let (cx, cy) = rational_point(c);
    let det = (&ax - &cx) * (&by - &cy) - (&ay - &cy) * (&bx - &cx);
    det.cmp(&BigRational::zero())
}

/// Sign of the in-circle determinant, computed with arbitrary precision.
pub fn incircle_oracle(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
) -> Ordering {
    let (dx, dy) = rational_point(d);
    let relative = |p: Point2<f64>| {
        let (x, y) = rational_point(p);
        let x = x - &dx;
        let y = y - &dy;
        let lift = &x * &x + &y * &y;
        (x, y, lift)
    };
    let (adx, ady, alift) = relative(a);
    let (bdx, bdy, blift) = relative(b);
    let (cdx, cdy, clift) = relative(c);

    let det = alift * (&bdx * &cdy - &cdx * &bdy)
        + blift * (&cdx * &ady - &adx * &cdy)
        + clift * (&adx * &bdy - &bdx * &ady);
    det.cmp(&BigRational::zero())
}
