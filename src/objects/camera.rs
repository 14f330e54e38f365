use crate::objects::Point;
use crate::objects::geometry::{Normalize, normalize_point};
use nalgebra::Vector3;

/// Camera placement: eye position, look-at target and up direction.
///
/// The up row is kept as a point because the export maps all three rows
/// through the same affine transform; a renderer picking the constants up
/// substitutes its own unit up vector.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: Point,
    pub center: Point,
    pub up: Point,
}

impl CameraRig {
    pub fn new(eye: Point, center: Point, up: Point) -> Self {
        CameraRig { eye, center, up }
    }

    pub fn from_flat(values: &[f64; 9]) -> Self {
        CameraRig {
            eye: Point::new(values[0], values[1], values[2]),
            center: Point::new(values[3], values[4], values[5]),
            up: Point::new(values[6], values[7], values[8]),
        }
    }

    pub fn rows(&self) -> [Point; 3] {
        [self.eye, self.center, self.up]
    }
}

impl Normalize for CameraRig {
    fn normalize(&mut self, scale: &Vector3<f64>) {
        normalize_point(&mut self.eye, scale);
        normalize_point(&mut self.center, scale);
        normalize_point(&mut self.up, scale);
    }
}
