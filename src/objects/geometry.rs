use crate::objects::Point;
use nalgebra::Vector3;

/// In-place remap into the room-derived normalized coordinate system.
pub trait Normalize {
    fn normalize(&mut self, scale: &Vector3<f64>);
}

/// Per-axis affine map: scale, then shift by -1 on every axis.
pub fn normalize_point(p: &mut Point, scale: &Vector3<f64>) {
    *p = Point::from(p.coords.component_mul(scale).add_scalar(-1.0));
}

/// Ordered vertex list built from flat, stride-3 component data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexArray {
    points: Vec<Point>,
}

impl VertexArray {
    pub fn from_flat(values: &[f64]) -> Self {
        assert_eq!(values.len() % 3, 0, "vertex data length must be a multiple of 3");

        let points = values
            .chunks_exact(3)
            .map(|triple| Point::new(triple[0], triple[1], triple[2]))
            .collect();

        VertexArray { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Components in flat storage order: x, y, z per point.
    pub fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().flat_map(|p| p.coords.iter().copied())
    }
}

impl Normalize for VertexArray {
    fn normalize(&mut self, scale: &Vector3<f64>) {
        for p in &mut self.points {
            normalize_point(p, scale);
        }
    }
}

/// Axis-aligned bounding box, min and max taken per axis independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Bounds {
    /// Folds all points with component-wise inf/sup. `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = first.coords;
        let mut max = first.coords;

        for p in rest {
            min = min.inf(&p.coords);
            max = max.sup(&p.coords);
        }

        Some(Bounds { min, max })
    }

    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Per-axis factor mapping this box onto [-1, 1] (together with the -1 shift).
    ///
    /// A zero extent would send the scale to infinity, so it is rejected here
    /// instead of leaking non-finite values into the output.
    pub fn unit_scale(&self) -> Result<Vector3<f64>, String> {
        let extent = self.extent();

        for (axis, label) in ["x", "y", "z"].iter().enumerate() {
            if extent[axis] == 0.0 {
                return Err(format!("degenerate bounding box: zero extent on {label} axis"));
            }
        }

        Ok(extent.map(|e| 2.0 / e))
    }
}
