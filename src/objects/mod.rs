use nalgebra::Point3;

pub mod camera;
pub mod geometry;
pub mod light;

pub type Point = Point3<f64>;
