use super::loops::{Loop, LoopSpecError};

/// Partition of a linear particle chain into backbone and folded loops.
///
/// The backbone is the complement of all loop interiors: both chain endpoints,
/// every inter-loop gap, and every loop anchor. Its indices are stored in
/// traversal order; they drive the helix parameterization, which assigns one
/// strictly increasing phase per backbone particle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPartition {
    chain_len: usize,
    backbone: Vec<usize>,
    loops: Vec<Loop>,
}

impl ChainPartition {
    /// Resolves a raw loop specification against a chain of `chain_len` particles.
    ///
    /// Each input pair is normalized to `(min, max)`. The normalized sequence
    /// must be strictly ascending with `end_i < start_{i+1}` and stay within
    /// `0..chain_len`; anything else would make the partition ambiguous and is
    /// rejected before any geometry is computed.
    ///
    /// # Errors
    ///
    /// Returns a [`LoopSpecError`] if a pair is degenerate, reaches outside the
    /// chain, or overlaps (or shares an anchor with) its predecessor.
    pub fn resolve(chain_len: usize, loops: &[(usize, usize)]) -> Result<Self, LoopSpecError> {
        let mut normalized: Vec<Loop> = Vec::with_capacity(loops.len());
        for &(a, b) in loops {
            let lp = Loop::from_pair(a, b)?;
            if lp.end >= chain_len {
                return Err(LoopSpecError::OutOfRange {
                    start: lp.start,
                    end: lp.end,
                    chain_len,
                });
            }
            if let Some(prev) = normalized.last() {
                if lp.start <= prev.end {
                    return Err(LoopSpecError::OutOfOrder {
                        start: lp.start,
                        end: lp.end,
                        prev_end: prev.end,
                    });
                }
            }
            normalized.push(lp);
        }

        let mut backbone = Vec::with_capacity(chain_len);
        let mut cursor = 0;
        for lp in &normalized {
            backbone.extend(cursor..=lp.start);
            cursor = lp.end;
        }
        backbone.extend(cursor..chain_len);

        Ok(Self {
            chain_len,
            backbone,
            loops: normalized,
        })
    }

    /// Total number of particles in the chain.
    pub fn chain_len(&self) -> usize {
        self.chain_len
    }

    /// Backbone particle indices, in traversal order.
    pub fn backbone(&self) -> &[usize] {
        &self.backbone
    }

    /// Number of backbone particles.
    pub fn backbone_len(&self) -> usize {
        self.backbone.len()
    }

    /// The normalized loops, in ascending order of their start anchor.
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }
}
