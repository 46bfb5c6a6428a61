//! Deterministic simulation module
//!
//! Game state, the bubble spawner/scan loop and the per-frame driver.
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Drawing goes through the `Surface` trait, never a concrete backend

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ScanOutcome, classify};
pub use spawner::{handle_bubbles, spawns_on};
pub use state::{GameEvent, GameState};
pub use tick::tick;
