//! Frame driver
//!
//! One call to [`tick`] is one animation frame: simulate and draw in a fixed
//! order. The host schedules calls (requestAnimationFrame on the web).

use super::spawner::handle_bubbles;
use super::state::{GameEvent, GameState};
use crate::entity::Entity;
use crate::input::InputState;
use crate::renderer::{Rect, Surface, draw_score};

/// Advance the game by one frame and draw it.
///
/// Order: clear, player update, player draw, score, bubbles, frame counter.
/// Bubbles are measured against the player position computed this tick.
pub fn tick(
    state: &mut GameState,
    input: &InputState,
    surface: &mut dyn Surface,
) -> Vec<GameEvent> {
    surface.clear(Rect::surface());

    state.player.update(input.pos);
    state.player.draw(surface, input);

    draw_score(surface, state.score);

    let mut events = Vec::new();
    handle_bubbles(state, input, surface, &mut events);

    state.frame += 1;

    if !events.is_empty() {
        log::trace!("frame {}: {:?}", state.frame, events);
    }
    events
}
