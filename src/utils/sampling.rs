use nalgebra::Vector3;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{HEMISPHERE_MIN_Y_SQ, HEMISPHERE_TANGENT_BOUND, LIGHT_STEP_SHRINK};
use crate::objects::Point;

/// Random unit directions in tangent space, clamped away from the horizon so
/// every sample points into the upper hemisphere.
pub fn hemisphere_points<R: Rng>(count: usize, rng: &mut R) -> Vec<Vector3<f64>> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-HEMISPHERE_TANGENT_BOUND..HEMISPHERE_TANGENT_BOUND);
            let z = rng.gen_range(-HEMISPHERE_TANGENT_BOUND..HEMISPHERE_TANGENT_BOUND);
            let y = (1.0 - x * x - z * z).max(HEMISPHERE_MIN_Y_SQ).sqrt();
            Vector3::new(x, y, z).normalize()
        })
        .collect()
}

/// At least `min_count` jittered points on the quad spanned by two opposite
/// corners, laid out as an x-z grid and shuffled before upload.
pub fn light_points<R: Rng>(llf: Point, urb: Point, min_count: usize, rng: &mut R) -> Vec<Point> {
    let min = llf.coords.inf(&urb.coords);
    let max = llf.coords.sup(&urb.coords);
    let size = max - min;

    let rank = (min_count as f64).sqrt().ceil();
    // Шаг чуть меньше, чтобы последняя колонка не выпала из-за "<=".
    let step = size * (LIGHT_STEP_SHRINK / (rank - 1.0));

    let mut points = Vec::new();
    let mut x = min.x;
    while x <= max.x {
        let mut z = min.z;
        while z <= max.z {
            points.push(Point::new(x, rng.gen_range(min.y..=max.y), z));
            z += step.z;
        }
        x += step.x;
    }

    points.shuffle(rng);
    points
}

/// Side of the square texture the samples fill.
pub fn texture_side(len: usize) -> usize {
    (len as f64).sqrt().floor() as usize
}
