/// Plain floating point evaluation without any error bound checks.
#[derive(Default)]
pub struct NaiveCrate;

impl crate::PredicateCrate for NaiveCrate {
    fn orient2d(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
        (a[0] - c[0]) * (b[1] - c[1]) - (a[1] - c[1]) * (b[0] - c[0])
    }

    fn incircle(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> f64 {
        let [adx, ady] = [a[0] - d[0], a[1] - d[1]];
        let [bdx, bdy] = [b[0] - d[0], b[1] - d[1]];
        let [cdx, cdy] = [c[0] - d[0], c[1] - d[1]];

        (adx * adx + ady * ady) * (bdx * cdy - cdx * bdy)
            + (bdx * bdx + bdy * bdy) * (cdx * ady - adx * cdy)
            + (cdx * cdx + cdy * cdy) * (adx * bdy - bdx * ady)
    }
}
