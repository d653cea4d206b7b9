//! # Core Models Module
//!
//! This module contains the data structures used to describe a particle chain
//! and its folded loops, providing the foundation for all construction stages.
//!
//! ## Overview
//!
//! A conformation is built over a linear chain of particles, some of which
//! belong to designated loops. The models here capture that description and
//! its invariants:
//!
//! - **Validate early** - Malformed loop specifications are rejected before
//!   any geometry is computed
//! - **Normalize once** - Loop pairs are stored ordered; later stages never
//!   re-check orientation
//! - **Partition explicitly** - The backbone index sequence is materialized
//!   once and consumed by the helix stage
//!
//! ## Key Components
//!
//! - [`loops`] - A single folded loop: normalized anchor pair and interior
//! - [`chain`] - The backbone/loop partition of the whole chain

pub mod chain;
pub mod loops;
