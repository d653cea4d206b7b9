use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoopSpecError {
    #[error("Loop ({a}, {b}) is degenerate: start and end must be distinct particles")]
    DegeneratePair { a: usize, b: usize },

    #[error("Loop ({start}, {end}) lies outside a chain of {chain_len} particles")]
    OutOfRange {
        start: usize,
        end: usize,
        chain_len: usize,
    },

    #[error("Loop ({start}, {end}) must begin after the previous loop ends at {prev_end}")]
    OutOfOrder {
        start: usize,
        end: usize,
        prev_end: usize,
    },
}

/// A contiguous particle range folded into a hairpin projecting from the backbone.
///
/// The `start` and `end` particles are the loop's anchors; they remain on the
/// backbone and are shared with it. Particles strictly between the anchors form
/// the loop interior and are written exclusively by the hairpin arm placer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop {
    /// Index of the first anchor particle.
    pub start: usize,
    /// Index of the second anchor particle; always greater than `start`.
    pub end: usize,
}

impl Loop {
    /// Builds a loop from an unordered index pair, normalizing it to `(min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoopSpecError::DegeneratePair`] if both indices are equal.
    pub fn from_pair(a: usize, b: usize) -> Result<Self, LoopSpecError> {
        if a == b {
            return Err(LoopSpecError::DegeneratePair { a, b });
        }
        Ok(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    /// Number of particles strictly between the two anchors.
    pub fn interior_len(&self) -> usize {
        self.end - self.start - 1
    }

    /// Indices of the interior particles, in ascending order.
    pub fn interior(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}
