use std::f64::consts::PI;

use geo::{Coordinate, LineString, Polygon, Rect};

use rand::Rng;
use rand_distr::Standard;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

/// A star-shaped polygon around `center` with `steps` vertices at
/// increasing angles and random radii in `[radius / 2, radius]`.
pub fn circular_polygon<R: Rng>(
    mut rng: R,
    center: Coordinate<f64>,
    radius: f64,
    steps: usize,
) -> Polygon<f64> {
    let ring: Vec<_> = (0..steps)
        .map(|i| {
            let angle = 2. * PI * i as f64 / steps as f64;
            let r = radius * (0.5 + 0.5 * rng.sample::<f64, _>(Standard));
            Coordinate {
                x: center.x + r * angle.cos(),
                y: center.y + r * angle.sin(),
            }
        })
        .collect();
    Polygon::new(LineString(ring), vec![])
}
