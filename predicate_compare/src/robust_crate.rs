use robust::Coord;

#[derive(Default)]
pub struct RobustCrate;

fn coord(point: [f64; 2]) -> Coord<f64> {
    Coord {
        x: point[0],
        y: point[1],
    }
}

impl crate::PredicateCrate for RobustCrate {
    fn orient2d(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
        robust::orient2d(coord(a), coord(b), coord(c))
    }

    fn incircle(&self, a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> f64 {
        robust::incircle(coord(a), coord(b), coord(c), coord(d))
    }
}
