//! Seeded level stream
//!
//! Park-Miller "minimal standard" LCG. Each level id maps to one fixed
//! sequence, so targets can be rebuilt from the id alone.

use crate::error::{PuzzleError, Result};

/// 2^31 - 1
const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;
/// Spreads small ids apart before the first draw
const ID_SCALE: u64 = 15_485_863;

/// Per-level random stream. Owned by a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRng {
    seed: u64,
}

impl LevelRng {
    /// Stream for `level_id`.
    ///
    /// Ids that reduce to zero (0 and multiples of 2^31 - 1) would pin the
    /// generator at zero and are rejected.
    pub fn new(level_id: u32) -> Result<Self> {
        // Reducing first yields the same stream and keeps every later
        // product below 2^46.
        let seed = u64::from(level_id) * ID_SCALE % MODULUS;
        if seed == 0 {
            return Err(PuzzleError::InvalidLevelId { id: level_id });
        }
        Ok(Self { seed })
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.seed = (self.seed * MULTIPLIER) % MODULUS;
        (self.seed as f64 - 1.0) / (MODULUS - 1) as f64
    }

    /// Uniform index in [0, len)
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len - 1)
    }

    /// Uniform pick from a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_index(items.len())]
    }
}
