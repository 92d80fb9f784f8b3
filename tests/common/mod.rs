#![allow(dead_code)]
use num_rational::BigRational;
use num_traits::Zero;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use robust_predicates::Point2;
use std::cmp::Ordering;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f64, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new(-range, range);
    (0..size)
        .map(|_| Point2::new(range.sample(&mut rng), range.sample(&mut rng)))
        .collect()
}

pub fn sign(value: f64) -> Ordering {
    value.partial_cmp(&0.0).expect("determinant is not NaN")
}

fn rational(value: f64) -> BigRational {
    BigRational::from_float(value).expect("finite value")
}

// The oracles mirror `src/test_utilities.rs`, which integration tests cannot import.
// Changes to one copy belong in both.
pub fn orient2d_oracle(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Ordering {
    let (ax, ay) = (rational(a.x), rational(a.y));
    let (bx, by) = (rational(b.x), rational(b.y));
    let (cx, cy) = (rational(c.x), rational(c.y));
    let det = (&ax - &cx) * (&by - &cy) - (&ay - &cy) * (&bx - &cx);
    det.cmp(&BigRational::zero())
}

pub fn incircle_oracle(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
) -> Ordering {
    let (dx, dy) = (rational(d.x), rational(d.y));
    let relative = |p: Point2<f64>| {
        let x = rational(p.x) - &dx;
        let y = rational(p.y) - &dy;
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

/// Points on the line `y = x / 3` that were rounded to the nearest double, perturbed by up
/// to `steps` ulps in each direction.
pub fn nearly_collinear_points(steps: usize) -> Vec<Point2<f64>> {
    use float_next_after::NextAfter;
    let mut result = Vec::new();
    for base in [0.5f64, 17.3, 1.0e-7, 2.0e5] {
        let mut x = base;
        for _ in 0..steps {
            let mut y = base / 3.0;
            for _ in 0..steps {
                result.push(Point2::new(x, y));
                y = y.next_after(f64::INFINITY);
            }
            x = x.next_after(f64::INFINITY);
        }
    }
    result
}
