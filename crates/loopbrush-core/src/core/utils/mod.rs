//! Pure geometry utilities for the core module.
//!
//! This module provides the helix parameterization primitives used by the
//! construction engine: the arc length of one full turn, the mapping from a
//! phase angle to a point on the helix, and projection into the plane
//! orthogonal to the helix axis.

pub mod geometry;
