//! Game entities
//!
//! Player and bubble share no state; each implements [`Entity`] on its own.

pub mod bubble;
pub mod player;

pub use bubble::Bubble;
pub use player::{Facing, Player, SpriteAnimation};

use glam::Vec2;

use crate::input::InputState;
use crate::renderer::Surface;

/// Per-tick update and draw contract
pub trait Entity {
    /// Advance one tick. `target` is the point the entity reacts to:
    /// the pointer for the player, the player for a bubble.
    fn update(&mut self, target: Vec2);

    /// Draw the entity's current state
    fn draw(&self, surface: &mut dyn Surface, input: &InputState);
}
