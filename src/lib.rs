//! Bubble Pop - A pointer-driven arcade mini-game
//!
//! Core modules:
//! - `input`: Pointer state tracked between frames
//! - `entity`: Player and bubble entities (update + draw)
//! - `sim`: Game state, bubble spawner/scan loop, frame driver
//! - `renderer`: 2D drawing surface abstraction (canvas on web)
//! - `audio`: Sound effects (web only playback)
//! - `settings`: Persisted user preferences

pub mod audio;
pub mod entity;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface size
    pub const SURFACE_WIDTH: f32 = 860.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Player defaults - starts at the right edge, vertically centered
    pub const PLAYER_RADIUS: f32 = 50.0;
    /// Player moves 1/EASING_DIVISOR of the remaining distance per tick
    pub const PLAYER_EASING_DIVISOR: f32 = 20.0;
    /// Ticks between sprite animation frames
    pub const PLAYER_ANIMATION_INTERVAL: u32 = 4;

    /// Sprite sheet layout (pixels in the source image)
    pub const SPRITE_SHEET_WIDTH: f32 = 1992.0;
    pub const SPRITE_SHEET_HEIGHT: f32 = 1635.0;
    pub const SPRITE_COLUMNS: u32 = 4;
    pub const SPRITE_ROWS: u32 = 5;
    /// Sprites are drawn at 1/SPRITE_SCALE_DIVISOR of their cell size
    pub const SPRITE_SCALE_DIVISOR: f32 = 4.0;
    /// Sprite offset from player center (in rotated space)
    pub const SPRITE_OFFSET_X: f32 = -60.0;
    pub const SPRITE_OFFSET_Y: f32 = -45.0;

    /// Bubble spawn cadence (ticks)
    pub const BUBBLE_SPAWN_INTERVAL: u64 = 100;
    /// Bubble radius range [min, max)
    pub const BUBBLE_MIN_RADIUS: f32 = 25.0;
    pub const BUBBLE_MAX_RADIUS: f32 = 50.0;
    /// Bubble rise speed range [min, max) in pixels per tick
    pub const BUBBLE_MIN_SPEED: f32 = 1.0;
    pub const BUBBLE_MAX_SPEED: f32 = 4.0;
    pub const BUBBLE_LINE_WIDTH: f32 = 2.0;

    /// Guide line drawn while the pointer is pressed
    pub const GUIDE_LINE_WIDTH: f32 = 0.2;

    /// Score HUD
    pub const SCORE_FONT: &str = "30px Courier New";
    pub const SCORE_TEXT_X: f32 = 5.0;
    pub const SCORE_TEXT_Y: f32 = 25.0;

    /// Asset locations (relative to the page)
    pub const PLAYER_LEFT_IMAGE: &str = "images/red_fish_left.png";
    pub const PLAYER_RIGHT_IMAGE: &str = "images/red_fish_right.png";
    pub const POP_SOUND: &str = "sounds/bubbles-single2.wav";
}

/// Center of the logical drawing surface
#[inline]
pub fn surface_center() -> Vec2 {
    Vec2::new(consts::SURFACE_WIDTH / 2.0, consts::SURFACE_HEIGHT / 2.0)
}
