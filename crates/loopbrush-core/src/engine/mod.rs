//! # Engine Module
//!
//! This module implements the conformation construction engine, providing the
//! internally ordered stages that turn a chain description into coordinates.
//!
//! ## Overview
//!
//! The engine consumes a resolved [`ChainPartition`](crate::core::models::chain::ChainPartition)
//! and a validated [`BrushConfig`](config::BrushConfig) and fills the output
//! coordinate array in three steps: backbone particles are threaded along a
//! constant-pitch helix, each loop is assigned a unit direction vector, and
//! the loop interiors are folded into straight hairpin arms along that vector.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Typed brush parameters, builder, and
//!   boundary validation
//! - **Error Handling** ([`error`]) - The construction error taxonomy
//! - **Backbone Placement** (`backbone`) - Helix phase sweep and backbone
//!   coordinates, with optional uniform jitter
//! - **Loop Orientation** (`orientation`) - Anchored or randomized per-loop
//!   direction vectors
//! - **Hairpin Placement** (`hairpin`) - Symmetric two-arm walk over each
//!   loop interior
//!
//! Randomness is never ambient: stages that draw random numbers take an
//! explicit `&mut impl Rng`, so a fixed seed reproduces output bit-for-bit.

pub(crate) mod backbone;
pub mod config;
pub mod error;
pub(crate) mod hairpin;
pub(crate) mod orientation;
