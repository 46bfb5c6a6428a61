//! Pointer input state
//!
//! The host translates mouse/touch events into [`PointerEvent`]s; entities
//! only ever read the resulting [`InputState`].

use glam::Vec2;

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::surface_center;

/// Pointer event in canvas-local logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Mouse button / touch went down at (x, y)
    Down { x: f32, y: f32 },
    /// Pointer moved to (x, y)
    Move { x: f32, y: f32 },
    /// Mouse button / touch released
    Up,
}

/// Map a point in displayed (CSS) pixels to logical surface coordinates.
///
/// The canvas may be scaled by the page; `display_size` is its on-screen size.
pub fn to_surface_coords(local: Vec2, display_size: Vec2) -> Vec2 {
    if display_size.x <= 0.0 || display_size.y <= 0.0 {
        return local;
    }
    local * Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT) / display_size
}

/// Release for a `touchend`/`touchcancel` that leaves `remaining` touches down
pub fn touch_release(remaining: u32) -> Option<PointerEvent> {
    (remaining == 0).then_some(PointerEvent::Up)
}

/// Last-known pointer position and pressed flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub pos: Vec2,
    pub pressed: bool,
    /// Keep `pressed` latched after release (the guide line never clears)
    pub sticky_press: bool,
    /// Moves while pressed update the target
    pub drag_steering: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pos: surface_center(),
            pressed: false,
            sticky_press: false,
            drag_steering: true,
        }
    }
}

impl InputState {
    pub fn new(sticky_press: bool, drag_steering: bool) -> Self {
        Self {
            sticky_press,
            drag_steering,
            ..Default::default()
        }
    }

    /// Stationary target at `pos`, not pressed
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Apply a pointer event
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.pos = Vec2::new(x, y);
                self.pressed = true;
            }
            // Dragging steers; hovering does not move the target
            PointerEvent::Move { x, y } => {
                if self.pressed && self.drag_steering {
                    self.pos = Vec2::new(x, y);
                }
            }
            PointerEvent::Up => {
                if !self.sticky_press {
                    self.pressed = false;
                }
            }
        }
    }
}
