//! Episode clock
//!
//! The mission has no wall-clock or tick loop: time is counted in caller
//! actions. Every action call advances `step`; `reset()` starts a new episode.

use serde::{Deserialize, Serialize};

/// Counts episodes and actions within the current episode
///
/// # Example
/// ```
/// use mission_simulator_core_rs::EpisodeClock;
///
/// let mut clock = EpisodeClock::new();
/// assert_eq!(clock.advance_step(), 0);
/// assert_eq!(clock.advance_step(), 1);
///
/// clock.start_episode();
/// assert_eq!(clock.episode(), 1);
/// assert_eq!(clock.step(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeClock {
    /// Episodes started since construction (0-indexed)
    episode: usize,
    /// Actions taken in the current episode
    step: usize,
}

impl EpisodeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a clock from checkpointed counters
    pub fn from_parts(episode: usize, step: usize) -> Self {
        Self { episode, step }
    }

    /// Record one action, returning the step number it was assigned
    pub fn advance_step(&mut self) -> usize {
        let step = self.step;
        self.step += 1;
        step
    }

    /// Begin the next episode
    pub fn start_episode(&mut self) {
        self.episode += 1;
        self.step = 0;
    }

    pub fn episode(&self) -> usize {
        self.episode
    }

    /// Number of actions taken so far in this episode
    pub fn step(&self) -> usize {
        self.step
    }
}
