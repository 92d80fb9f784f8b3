use robust_predicates::{ErrorBounds, Point2};

pub struct RobustPredicatesCrate {
    bounds: ErrorBounds,
}

impl Default for RobustPredicatesCrate {
    fn default() -> Self {
        RobustPredicatesCrate {
            bounds: ErrorBounds::probe(),
        }
    }
}

impl crate::PredicateCrate for RobustPredicatesCrate {
    fn orient2d(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
        self.bounds
            .orient2d(Point2::from(a), Point2::from(b), Point2::from(c))
    }

    fn incircle(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> f64 {
        self.bounds.incircle(
            Point2::from(a),
            Point2::from(b),
            Point2::from(c),
            Point2::from(d),
        )
    }
}
