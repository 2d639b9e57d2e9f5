//! xorshift64* random number generator
//!
//! Drives start/end node sampling in training mode. Same seed and same
//! configuration produce the same sequence of episodes, which keeps
//! controller experiments reproducible.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use mission_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let nodes = ["A", "B", "C"];
/// let picked = rng.choose(&nodes).unwrap();
/// assert!(nodes.contains(picked));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed (zero is mapped to one)
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform index in `[0, len)`
    ///
    /// # Panics
    /// Panics if `len` is zero
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot sample from an empty range");
        (self.next() % len as u64) as usize
    }

    /// Uniformly pick one element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_index(items.len());
        items.get(index)
    }

    /// Current internal state (for checkpointing)
    ///
    /// `RngManager::new(state)` resumes the exact sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
