mod data;

pub use data::*;

use crate::objects::camera::CameraRig;
use crate::objects::geometry::{Bounds, Normalize, VertexArray};
use crate::objects::light::LightQuad;
use nalgebra::Vector3;

/// The assembled test scene. Constructed once from the millimeter constants,
/// normalized in place exactly once, then read for export.
#[derive(Clone, Debug)]
pub struct CornellBox {
    pub lights: LightQuad,
    pub room: VertexArray,
    pub short_block: VertexArray,
    pub tall_block: VertexArray,
    pub camera: CameraRig,
}

impl CornellBox {
    pub fn reference() -> Self {
        CornellBox {
            lights: LightQuad::from_flat(&LIGHTS),
            room: VertexArray::from_flat(&ROOM),
            short_block: VertexArray::from_flat(&SHORT_BLOCK),
            tall_block: VertexArray::from_flat(&TALL_BLOCK),
            camera: CameraRig::from_flat(&CAMERA),
        }
    }

    /// Rescales the whole scene so the room spans [-1, 1] on every axis.
    ///
    /// Returns the room bounds and the per-axis scale that were applied; the
    /// other geometry uses the same factors and is not clipped to the cube.
    pub fn normalize_to_unit_cube(&mut self) -> Result<(Bounds, Vector3<f64>), String> {
        // Масштаб задаётся только габаритами комнаты.
        let bounds = Bounds::of(self.room.points()).ok_or("room has no vertices")?;
        let scale = bounds.unit_scale()?;

        self.lights.normalize(&scale);
        self.room.normalize(&scale);
        self.short_block.normalize(&scale);
        self.tall_block.normalize(&scale);
        self.camera.normalize(&scale);

        Ok((bounds, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::join_components;

    fn normalized() -> CornellBox {
        let mut scene = CornellBox::reference();
        scene.normalize_to_unit_cube().unwrap();
        scene
    }

    #[test]
    fn room_spans_the_unit_cube_exactly() {
        let scene = normalized();

        for axis in 0..3 {
            let values: Vec<f64> = scene.room.points().iter().map(|p| p[axis]).collect();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            assert_eq!(min, -1.0, "axis {axis}");
            assert_eq!(max, 1.0, "axis {axis}");
        }
    }

    #[test]
    fn light_quad_stays_on_the_ceiling_plane() {
        let scene = normalized();

        // 548.8 is the room's y extent, so the quad lands exactly on +1.
        for corner in scene.lights.corners() {
            assert_eq!(corner.y, 1.0);
        }

        let first = scene.lights.corners()[0];
        assert!((first.x - 0.233813).abs() < 5e-7);
        assert!((first.z + 0.188126).abs() < 5e-7);
    }

    #[test]
    fn camera_rows_match_the_renderer_constants() {
        let scene = normalized();
        let [eye, center, up] = scene.camera.rows();

        assert_eq!(join_components(&[eye]), "+0.000000, -0.005102, -3.861230");
        assert_eq!(join_components(&[center]), "+0.000000, -0.005102, +0.000000");
        assert_eq!(join_components(&[up]), "-1.000000, -0.996356, -1.000000");
    }

    #[test]
    fn blocks_stay_inside_the_cube_camera_eye_does_not() {
        let scene = normalized();

        for block in [&scene.short_block, &scene.tall_block] {
            for value in block.components() {
                assert!((-1.0..=1.0).contains(&value), "block component {value}");
            }
        }

        let [eye, _, _] = scene.camera.rows();
        assert!(eye.z < -1.0);
    }

    #[test]
    fn flat_room_is_rejected() {
        let mut scene = CornellBox::reference();
        scene.room = VertexArray::from_flat(&[
            0.0, 5.0, 0.0, //
            10.0, 5.0, 0.0, //
            10.0, 5.0, 10.0, //
            0.0, 5.0, 10.0,
        ]);

        let err = scene.normalize_to_unit_cube().unwrap_err();
        assert!(err.contains("zero extent"));
    }
}
