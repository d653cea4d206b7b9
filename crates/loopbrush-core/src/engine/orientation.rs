use nalgebra::{Point3, Unit, Vector3};
use rand::Rng;

use crate::core::models::loops::Loop;
use crate::core::utils::geometry;
use crate::engine::error::ConformationError;

const PERTURBATION_SCALE: f64 = 0.1;
const MIN_DIRECTION_NORM: f64 = 1e-9;

/// Resolves the unit direction vector shared by both arms of a loop's hairpin.
///
/// In anchored mode the vector points from the helix axis through the midpoint
/// of the two anchors, keeping the arm radial. In randomized mode the anchor
/// span is crossed with a perturbed copy of itself, which randomizes the
/// orientation while staying roughly perpendicular to the local backbone
/// tangent. The axial component is zero in both modes.
pub(crate) fn resolve_direction(
    lp: &Loop,
    coords: &[Point3<f64>],
    randomize: bool,
    rng: &mut impl Rng,
) -> Result<Vector3<f64>, ConformationError> {
    let anchor_start = coords[lp.start];
    let anchor_end = coords[lp.end];

    let raw = if randomize {
        let span = anchor_end - anchor_start;
        let perturbation = Vector3::new(
            rng.gen_range(-PERTURBATION_SCALE..PERTURBATION_SCALE),
            rng.gen_range(-PERTURBATION_SCALE..PERTURBATION_SCALE),
            0.0,
        );
        geometry::flatten_axial(span.cross(&(span + perturbation)))
    } else {
        geometry::flatten_axial(nalgebra::center(&anchor_start, &anchor_end).coords)
    };

    Unit::try_new(raw, MIN_DIRECTION_NORM)
        .map(|u| u.into_inner())
        .ok_or_else(|| ConformationError::InvalidParameter {
            name: "loops",
            reason: format!(
                "anchors of loop ({}, {}) give a zero-length direction vector",
                lp.start, lp.end
            ),
        })
}
