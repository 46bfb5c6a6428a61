//! Bubble spawner and scan loop
//!
//! Owns the bubble population: spawns on a fixed cadence, updates and draws
//! every bubble, then removes the ones that left or were popped.

use super::collision::{ScanOutcome, classify};
use super::state::{GameEvent, GameState};
use crate::consts::BUBBLE_SPAWN_INTERVAL;
use crate::entity::{Bubble, Entity};
use crate::input::InputState;
use crate::renderer::Surface;

/// Whether a bubble spawns on the given frame
#[inline]
pub fn spawns_on(frame: u64) -> bool {
    frame % BUBBLE_SPAWN_INTERVAL == 0
}

/// Run the bubble lifecycle for one tick.
///
/// The player must already be updated for this tick. Popped bubbles are
/// still drawn this tick; they disappear from the next frame.
pub fn handle_bubbles(
    state: &mut GameState,
    input: &InputState,
    surface: &mut dyn Surface,
    events: &mut Vec<GameEvent>,
) {
    if spawns_on(state.frame) {
        let bubble = Bubble::spawn(&mut state.rng);
        events.push(GameEvent::BubbleSpawned {
            pos: bubble.pos,
            radius: bubble.radius,
        });
        state.bubbles.push(bubble);
    }

    let player_pos = state.player.pos;
    for bubble in &mut state.bubbles {
        bubble.update(player_pos);
        bubble.draw(surface, input);
    }

    // Single retain pass: no element is skipped when a neighbour is removed
    let player_radius = state.player.radius;
    let score = &mut state.score;
    state.bubbles.retain(|bubble| match classify(bubble, player_radius) {
        ScanOutcome::Keep => true,
        ScanOutcome::Cull => {
            events.push(GameEvent::BubbleCulled {
                pos: bubble.pos,
                radius: bubble.radius,
            });
            false
        }
        ScanOutcome::Pop => {
            *score += 1;
            events.push(GameEvent::BubblePopped {
                pos: bubble.pos,
                radius: bubble.radius,
            });
            false
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Player;
    use crate::renderer::RecordingSurface;
    use glam::Vec2;

    fn state_with_player_at(pos: Vec2) -> GameState {
        let mut state = GameState::with_player(42, Player::at(pos));
        // Off the spawn cadence so only inserted bubbles are present
        state.frame = 1;
        state
    }

    fn run(state: &mut GameState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut surface = RecordingSurface::new();
        handle_bubbles(state, &InputState::default(), &mut surface, &mut events);
        events
    }

    #[test]
    fn test_spawn_cadence() {
        assert!(spawns_on(0));
        assert!(!spawns_on(1));
        assert!(!spawns_on(99));
        assert!(spawns_on(100));
        assert!(spawns_on(200));
    }

    #[test]
    fn test_spawns_on_cadence_frame() {
        let mut state = GameState::new(42);
        let events = run(&mut state);
        assert_eq!(state.bubbles.len(), 1);
        assert!(matches!(events[0], GameEvent::BubbleSpawned { .. }));
    }

    #[test]
    fn test_adjacent_removals_are_not_skipped() {
        let player = Vec2::new(430.0, 300.0);
        let mut state = state_with_player_at(player);
        // Three overlapping bubbles back to back, then one far away
        for dx in [10.0, 20.0, 30.0] {
            state.insert_bubble(Bubble::new(player + Vec2::new(dx, 0.0), 30.0, 0.0));
        }
        state.insert_bubble(Bubble::new(Vec2::new(10.0, 300.0), 30.0, 0.0));

        let events = run(&mut state);
        assert_eq!(state.score, 3);
        assert_eq!(state.bubbles.len(), 1);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::BubblePopped { .. }))
                .count(),
            3
        );
    }

    #[test]
    fn test_cull_then_hit_in_neighbouring_slots() {
        let player = Vec2::new(430.0, 0.0);
        let mut state = state_with_player_at(player);
        // Leaves through the top while overlapping the player: culled, no score
        state.insert_bubble(Bubble::new(Vec2::new(430.0, -20.0), 25.0, 10.0));
        // Next in line overlaps the player and is still visible: popped
        state.insert_bubble(Bubble::new(Vec2::new(440.0, 10.0), 25.0, 0.0));

        let events = run(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.bubbles.is_empty());
        assert!(matches!(events[0], GameEvent::BubbleCulled { .. }));
        assert!(matches!(events[1], GameEvent::BubblePopped { .. }));
    }

    #[test]
    fn test_distance_uses_current_player_position() {
        let mut state = state_with_player_at(Vec2::new(100.0, 100.0));
        state.insert_bubble(Bubble::new(Vec2::new(100.0, 300.0), 30.0, 0.0));
        run(&mut state);
        assert!((state.bubbles[0].distance - 200.0).abs() < 1e-4);

        state.player.pos = Vec2::new(100.0, 250.0);
        run(&mut state);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_popped_bubble_is_drawn_on_its_last_tick() {
        let player = Vec2::new(430.0, 300.0);
        let mut state = state_with_player_at(player);
        state.insert_bubble(Bubble::new(player, 30.0, 0.0));

        let mut events = Vec::new();
        let mut surface = RecordingSurface::new();
        handle_bubbles(&mut state, &InputState::default(), &mut surface, &mut events);
        assert_eq!(surface.circle_count(), 1);
        assert!(state.bubbles.is_empty());
    }
}
