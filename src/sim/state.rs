//! Game state and events
//!
//! Everything a run mutates lives in [`GameState`]; there is no ambient state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::entity::{Bubble, Player};

/// Things that happened during a tick, for the host to react to (sound, logs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new bubble entered below the bottom edge
    BubbleSpawned { pos: Vec2, radius: f32 },
    /// The player popped a bubble (score already incremented)
    BubblePopped { pos: Vec2, radius: f32 },
    /// A bubble left through the top edge
    BubbleCulled { pos: Vec2, radius: f32 },
}

/// Complete state of a run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    seed: u64,
    pub(crate) rng: Pcg32,
    /// Bubbles popped this run (never decreases)
    pub(crate) score: u64,
    /// Ticks completed
    pub(crate) frame: u64,
    pub(crate) player: Player,
    /// Live bubbles, in spawn order
    pub(crate) bubbles: Vec<Bubble>,
}

impl GameState {
    /// Create a new run with the player at its start position
    pub fn new(seed: u64) -> Self {
        Self::with_player(seed, Player::default())
    }

    /// Create a new run with a custom player
    pub fn with_player(seed: u64, player: Player) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            frame: 0,
            player,
            bubbles: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Ticks completed so far (the next tick runs with this value)
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Add a bubble outside the regular spawn cadence
    pub fn insert_bubble(&mut self, bubble: Bubble) {
        self.bubbles.push(bubble);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12345);
        assert_eq!(state.seed(), 12345);
        assert_eq!(state.score(), 0);
        assert_eq!(state.frame(), 0);
        assert!(state.bubbles().is_empty());
        assert_eq!(state.player().pos, Vec2::new(860.0, 300.0));
    }

    #[test]
    fn test_insert_bubble() {
        let mut state = GameState::new(1);
        state.insert_bubble(Bubble::new(Vec2::new(1.0, 2.0), 30.0, 1.0));
        assert_eq!(state.bubbles().len(), 1);
    }
}
