//! Bubble cull / hit policy
//!
//! Circles collide when their centers are closer than the sum of the radii.
//! A bubble that has left through the top is culled even if it also
//! overlaps the player, so it never scores.

use crate::entity::Bubble;

/// What the scan does with a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Keep,
    /// Left the play area - remove without scoring
    Cull,
    /// Touched the player - remove and score
    Pop,
}

/// Classify a bubble against the player radius.
///
/// Uses the distance stored by the bubble's last update, so the bubble must
/// have been updated against this tick's player position.
pub fn classify(bubble: &Bubble, player_radius: f32) -> ScanOutcome {
    if bubble.is_above_top() {
        ScanOutcome::Cull
    } else if bubble.touches(player_radius) {
        ScanOutcome::Pop
    } else {
        ScanOutcome::Keep
    }
}
