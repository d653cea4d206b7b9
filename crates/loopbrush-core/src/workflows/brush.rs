use nalgebra::Point3;
use rand::Rng;
use tracing::{info, instrument};

use crate::core::models::chain::ChainPartition;
use crate::engine::config::BrushConfig;
use crate::engine::error::ConformationError;
use crate::engine::{backbone, hairpin, orientation};

/// Builds a helical loop-brush conformation for a chain of `chain_len`
/// particles.
///
/// Backbone particles follow a helix of the configured radius and axial step;
/// each `(start, end)` loop is folded into a hairpin whose two straight arms
/// project from the anchors along a shared unit direction. The returned array
/// always holds exactly `chain_len` points and is exclusively owned by the
/// caller.
///
/// Randomness is only drawn when `backbone_jitter > 0` or
/// `random_loop_orientations` is enabled; with both off, the output is
/// bit-identical across calls, and with either on, a fixed seed reproduces it.
///
/// # Errors
///
/// Returns [`ConformationError::InvalidParameter`] for a non-positive radius,
/// step, or linear density, a negative jitter, or a degenerate loop direction,
/// and [`ConformationError::InvalidLoopSpecification`] for loops that are
/// malformed, out of range, unsorted, or overlapping. Nothing is computed past
/// the first failure.
#[instrument(skip_all, name = "brush_workflow", fields(chain_len, num_loops = loops.len()))]
pub fn run(
    chain_len: usize,
    loops: &[(usize, usize)],
    config: &BrushConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Point3<f64>>, ConformationError> {
    config.validate()?;

    // === Stage 1: Resolve the loop/backbone partition ===
    let partition = ChainPartition::resolve(chain_len, loops)?;
    info!(
        "Resolved a backbone of {} particles carrying {} loops.",
        partition.backbone_len(),
        partition.loops().len()
    );

    let mut coords = vec![Point3::origin(); chain_len];

    // === Stage 2: Thread the backbone along the helix ===
    backbone::place_backbone(
        &mut coords,
        &partition,
        &config.helix,
        config.backbone_jitter,
        rng,
    );

    // === Stage 3: Fold each loop into a hairpin ===
    for lp in partition.loops() {
        let direction =
            orientation::resolve_direction(lp, &coords, config.random_loop_orientations, rng)?;
        hairpin::place_hairpin(&mut coords, lp, direction);
    }

    info!("Conformation complete: {} particles placed.", coords.len());
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::loops::LoopSpecError;
    use crate::core::utils::geometry;
    use crate::engine::config::BrushConfigBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::TAU;

    fn config() -> BrushConfig {
        BrushConfigBuilder::new()
            .helix_radius(1.0)
            .helix_step(2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn output_always_has_exactly_chain_len_points() {
        let mut rng = StdRng::seed_from_u64(0);

        for loops in [vec![], vec![(2, 6)], vec![(1, 4), (5, 9)]] {
            let coords = run(10, &loops, &config(), &mut rng).unwrap();
            assert_eq!(coords.len(), 10);
        }
    }

    #[test]
    fn without_loops_the_output_is_a_pure_helix() {
        let cfg = config();
        let mut rng = StdRng::seed_from_u64(0);

        let coords = run(10, &[], &cfg, &mut rng).unwrap();

        let turn_length = geometry::helix_turn_length(cfg.helix.radius, cfg.helix.step);
        let total_winding = TAU * 9.0 / (cfg.helix.linear_density * turn_length);
        for (k, p) in coords.iter().enumerate() {
            let phase = total_winding * k as f64 / 9.0;
            let expected = geometry::helix_point(phase, cfg.helix.radius, cfg.helix.step);
            assert!((p - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn deterministic_when_no_random_feature_is_enabled() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let coords_a = run(20, &[(3, 9), (12, 17)], &config(), &mut rng_a).unwrap();
        let coords_b = run(20, &[(3, 9), (12, 17)], &config(), &mut rng_b).unwrap();

        // Differently seeded sources, yet bit-identical output: the RNG is
        // never sampled on this path.
        assert_eq!(coords_a, coords_b);
    }

    #[test]
    fn jittered_backbone_reproduces_under_a_fixed_seed() {
        let cfg = BrushConfigBuilder::new()
            .helix_radius(1.0)
            .helix_step(2.0)
            .backbone_jitter(0.2)
            .build()
            .unwrap();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let coords_a = run(12, &[(4, 8)], &cfg, &mut rng_a).unwrap();
        let coords_b = run(12, &[(4, 8)], &cfg, &mut rng_b).unwrap();

        assert_eq!(coords_a, coords_b);
    }

    #[test]
    fn randomized_orientations_reproduce_under_a_fixed_seed() {
        let cfg = BrushConfigBuilder::new()
            .helix_radius(1.0)
            .helix_step(2.0)
            .random_loop_orientations(true)
            .build()
            .unwrap();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let coords_a = run(12, &[(4, 8)], &cfg, &mut rng_a).unwrap();
        let coords_b = run(12, &[(4, 8)], &cfg, &mut rng_b).unwrap();

        assert_eq!(coords_a, coords_b);
    }

    #[test]
    fn folded_loop_arms_step_along_a_shared_unit_direction() {
        let mut rng = StdRng::seed_from_u64(0);

        let coords = run(10, &[(2, 6)], &config(), &mut rng).unwrap();

        let u = coords[3] - coords[2];
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert_eq!(u.z, 0.0);
        // Descending arm steps along the same direction...
        assert!(((coords[5] - coords[6]) - u).norm() < 1e-12);
        // ...and places the middle particle on its final step.
        assert!(((coords[4] - coords[5]) - u).norm() < 1e-12);
    }

    #[test]
    fn anchored_direction_matches_the_flattened_anchor_midpoint() {
        let mut rng = StdRng::seed_from_u64(0);

        let coords = run(10, &[(2, 6)], &config(), &mut rng).unwrap();

        let mid = nalgebra::center(&coords[2], &coords[6]);
        let expected = geometry::flatten_axial(mid.coords).normalize();
        assert!(((coords[3] - coords[2]) - expected).norm() < 1e-12);
    }

    #[test]
    fn backbone_particles_are_untouched_by_loop_folding() {
        let cfg = config();
        let mut rng = StdRng::seed_from_u64(0);

        let coords = run(10, &[(2, 6)], &cfg, &mut rng).unwrap();

        // Every backbone particle, anchors included, stays on the helix built
        // over the backbone traversal order.
        let partition = ChainPartition::resolve(10, &[(2, 6)]).unwrap();
        let turn_length = geometry::helix_turn_length(cfg.helix.radius, cfg.helix.step);
        let bb_len = partition.backbone_len() as f64;
        let total_winding = TAU * (bb_len - 1.0) / (cfg.helix.linear_density * turn_length);
        for (k, &idx) in partition.backbone().iter().enumerate() {
            let phase = total_winding * k as f64 / (bb_len - 1.0);
            let expected = geometry::helix_point(phase, cfg.helix.radius, cfg.helix.step);
            assert!((coords[idx] - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn rejects_overlapping_loops_before_any_geometry() {
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(10, &[(1, 5), (3, 8)], &config(), &mut rng);

        assert_eq!(
            result,
            Err(ConformationError::InvalidLoopSpecification {
                source: LoopSpecError::OutOfOrder {
                    start: 3,
                    end: 8,
                    prev_end: 5,
                },
            })
        );
    }

    #[test]
    fn rejects_invalid_helix_parameters() {
        let cfg = BrushConfigBuilder::new()
            .helix_radius(-1.0)
            .helix_step(2.0)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(10, &[], &cfg, &mut rng);

        assert!(matches!(
            result,
            Err(ConformationError::InvalidParameter {
                name: "helix_radius",
                ..
            })
        ));
    }

    #[test]
    fn empty_chain_yields_an_empty_conformation() {
        let mut rng = StdRng::seed_from_u64(0);

        let coords = run(0, &[], &config(), &mut rng).unwrap();

        assert!(coords.is_empty());
    }
}
