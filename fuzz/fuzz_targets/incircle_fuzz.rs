#![no_main]
mod fuzz_shared;
use fuzz_shared::{sign, FuzzPoint};
use libfuzzer_sys::fuzz_target;
use robust_predicates::{AdaptivePredicate, ErrorBounds, InCircle};

fuzz_target!(|data: [FuzzPoint; 4]| {
    let mut points = [robust_predicates::Point2::new(0.0, 0.0); 4];
    for (target, source) in points.iter_mut().zip(&data) {
        match source.validated() {
            Some(point) => *target = point,
            None => return,
        }
    }
    let [a, b, c, d] = points;
    let bounds = ErrorBounds::probe();
    let incircle = InCircle::new(&bounds);

    let det = sign(incircle.evaluate(&[a, b, c, d]).det);
    assert_eq!(det, sign(incircle.exact(&[a, b, c, d])));
    assert_eq!(det, sign(incircle.evaluate(&[c, a, b, d]).det));
    assert_eq!(det, -sign(incircle.evaluate(&[a, c, b, d]).det));
});
