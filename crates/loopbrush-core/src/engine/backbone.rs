use nalgebra::{Point3, Vector3};
use rand::Rng;
use std::f64::consts::TAU;

use crate::core::models::chain::ChainPartition;
use crate::core::utils::geometry;
use crate::engine::config::HelixConfig;

/// Threads the backbone along the helix, one strictly increasing phase per
/// backbone particle. Equal phase steps on a constant-pitch helix give an
/// exact arc spacing of `1 / linear_density`. Loop-interior indices are left
/// untouched.
pub(crate) fn place_backbone(
    coords: &mut [Point3<f64>],
    partition: &ChainPartition,
    helix: &HelixConfig,
    jitter: f64,
    rng: &mut impl Rng,
) {
    let bb_len = partition.backbone_len();
    let turn_length = geometry::helix_turn_length(helix.radius, helix.step);
    let total_winding = if bb_len > 1 {
        TAU * (bb_len - 1) as f64 / (helix.linear_density * turn_length)
    } else {
        0.0
    };

    for (k, &idx) in partition.backbone().iter().enumerate() {
        let phase = if bb_len > 1 {
            total_winding * k as f64 / (bb_len - 1) as f64
        } else {
            0.0
        };
        coords[idx] = geometry::helix_point(phase, helix.radius, helix.step);
        if jitter > 0.0 {
            coords[idx] += Vector3::new(
                rng.gen_range(0.0..jitter),
                rng.gen_range(0.0..jitter),
                rng.gen_range(0.0..jitter),
            );
        }
    }
}
