use nalgebra::{Point3, Vector3};

use crate::core::models::loops::Loop;

/// Folds a loop interior into two parallel straight arms of unit-length bonds.
///
/// Both arms advance from their anchor in the *same* direction, so the
/// ascending arm walks away from `start` while the descending arm walks away
/// from `end`, and the two rods meet near the loop midpoint.
pub(crate) fn place_hairpin(coords: &mut [Point3<f64>], lp: &Loop, direction: Vector3<f64>) {
    let half = lp.interior_len() / 2;
    for j in 0..half {
        coords[lp.start + j + 1] = coords[lp.start + j] + direction;
        coords[lp.end - j - 1] = coords[lp.end - j] + direction;
    }
    // Odd interior: the arm descending from the end anchor takes the one extra
    // step and places the middle particle.
    if lp.interior_len() % 2 == 1 {
        let middle = lp.end - half - 1;
        coords[middle] = coords[middle + 1] + direction;
    }
}
