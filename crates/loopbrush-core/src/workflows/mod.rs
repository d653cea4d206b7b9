//! # Workflows Module
//!
//! This module provides the high-level entry point that orchestrates the
//! complete conformation build.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They tie the `core` models
//! and the `engine` stages together: the loop specification is validated and
//! resolved into a backbone partition, the backbone is threaded along the
//! helix, and every loop is folded into a hairpin. The caller receives the
//! full coordinate array or a synchronous error — there is no partial or
//! recoverable state.
//!
//! ## Architecture
//!
//! - **Brush Workflow** ([`brush`]) - Complete helical loop-brush
//!   conformation construction.

pub mod brush;
