use crate::objects::Point;
use crate::objects::geometry::{Normalize, normalize_point};
use nalgebra::Vector3;

/// Area light: the four corners of the ceiling quad, in winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct LightQuad {
    corners: [Point; 4],
}

impl LightQuad {
    pub fn from_flat(values: &[f64; 12]) -> Self {
        let mut corners = [Point::origin(); 4];
        for (corner, triple) in corners.iter_mut().zip(values.chunks_exact(3)) {
            *corner = Point::new(triple[0], triple[1], triple[2]);
        }
        LightQuad { corners }
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Opposite corners 0 and 2, the pair the area sampler sweeps between.
    pub fn diagonal(&self) -> (Point, Point) {
        (self.corners[0], self.corners[2])
    }
}

impl Normalize for LightQuad {
    fn normalize(&mut self, scale: &Vector3<f64>) {
        for corner in &mut self.corners {
            normalize_point(corner, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_planar_on_the_ceiling() {
        let quad = LightQuad::from_flat(&crate::scene::LIGHTS);

        for corner in quad.corners() {
            assert_eq!(corner.y, 548.8);
        }
    }

    #[test]
    fn diagonal_spans_the_full_footprint() {
        let quad = LightQuad::from_flat(&crate::scene::LIGHTS);
        let (a, b) = quad.diagonal();

        // Corners 0 and 2 cover the whole x-z footprint of the quad.
        assert_eq!(a.x.min(b.x), 213.0);
        assert_eq!(a.x.max(b.x), 343.0);
        assert_eq!(a.z.min(b.z), 227.0);
        assert_eq!(a.z.max(b.z), 332.0);
    }
}
