use itertools::Itertools;
use nalgebra::Vector3;

use crate::config::OUTPUT_DECIMALS;
use crate::objects::Point;

/// Fixed-point with an explicit sign, e.g. "+0.003597".
pub fn signed_fixed(value: f64) -> String {
    format!("{:+.prec$}", value, prec = OUTPUT_DECIMALS)
}

pub fn join_components(points: &[Point]) -> String {
    points
        .iter()
        .flat_map(|p| p.coords.iter())
        .map(|&c| signed_fixed(c))
        .join(", ")
}

/// One output line: the array's name, then every component in storage order.
pub fn array_entry(label: &str, points: &[Point]) -> String {
    format!("{} [{}]", label, join_components(points))
}

pub fn vector_entry(label: &str, v: &Vector3<f64>) -> String {
    format!(
        "{} [{}]",
        label,
        v.iter().map(|&c| signed_fixed(c)).join(", ")
    )
}
