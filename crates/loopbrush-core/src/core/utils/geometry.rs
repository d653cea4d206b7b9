use nalgebra::{Point3, Vector3};
use std::f64::consts::TAU;

pub fn helix_turn_length(radius: f64, step: f64) -> f64 {
    ((TAU * radius).powi(2) + step * step).sqrt()
}

pub fn helix_point(phase: f64, radius: f64, step: f64) -> Point3<f64> {
    Point3::new(
        radius * phase.sin(),
        radius * phase.cos(),
        phase / TAU * step,
    )
}

pub fn flatten_axial(v: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, v.y, 0.0)
}
