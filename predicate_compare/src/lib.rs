pub mod naive_crate;
pub mod robust_crate;
pub mod robust_predicates_crate;

/// Abstraction over different implementations of the orientation and in-circle predicates
pub trait PredicateCrate: Default {
    fn orient2d(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64;
    fn incircle(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> f64;
}

/// Counts the orientation tests for which `candidate` returns a different sign than
/// `reference`. Each window of three consecutive points forms one test.
pub fn count_orient2d_disagreements<Reference, Candidate>(points: &[[f64; 2]]) -> usize
where
    Reference: PredicateCrate,
    Candidate: PredicateCrate,
{
    let reference = Reference::default();
    let candidate = Candidate::default();
    points
        .windows(3)
        .filter(|w| {
            let expected = reference.orient2d(w[0], w[1], w[2]);
            let actual = candidate.orient2d(w[0], w[1], w[2]);
            signum(expected) != signum(actual)
        })
        .count()
}

/// Counts the in-circle tests for which `candidate` returns a different sign than
/// `reference`. Each window of four consecutive points forms one test.
pub fn count_incircle_disagreements<Reference, Candidate>(points: &[[f64; 2]]) -> usize
where
    Reference: PredicateCrate,
    Candidate: PredicateCrate,
{
    let reference = Reference::default();
    let candidate = Candidate::default();
    points
        .windows(4)
        .filter(|w| {
            let expected = reference.incircle(w[0], w[1], w[2], w[3]);
            let actual = candidate.incircle(w[0], w[1], w[2], w[3]);
            signum(expected) != signum(actual)
        })
        .count()
}

fn signum(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
