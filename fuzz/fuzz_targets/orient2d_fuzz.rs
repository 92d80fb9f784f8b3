#![no_main]
mod fuzz_shared;
use fuzz_shared::{sign, FuzzPoint};
use libfuzzer_sys::fuzz_target;
use robust_predicates::{AdaptivePredicate, ErrorBounds, Orient2d};

fuzz_target!(|data: [FuzzPoint; 3]| {
    let (Some(a), Some(b), Some(c)) = (data[0].validated(), data[1].validated(), data[2].validated())
    else {
        return;
    };
    let bounds = ErrorBounds::probe();
    let orient = Orient2d::new(&bounds);

    let det = sign(orient.evaluate(&[a, b, c]).det);
    assert_eq!(det, sign(orient.exact(&[a, b, c])));
    assert_eq!(det, sign(orient.evaluate(&[b, c, a]).det));
    assert_eq!(det, -sign(orient.evaluate(&[b, a, c]).det));
});
