//! 2D drawing surface abstraction
//!
//! Entities draw through the [`Surface`] trait, an immediate-mode API shaped
//! after the browser's 2D canvas context. On the web it is backed by
//! `CanvasRenderingContext2d`; headless runs and tests use
//! [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::consts::*;

/// RGBA color (alpha 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Translucent bubble body
    pub const BUBBLE_FILL: Color = Color::rgba(255, 255, 255, 0.4);
    /// Bubble outline
    pub const BUBBLE_STROKE: Color = Color::rgba(14, 147, 213, 1.0);
    /// Pointer guide line, in the bubble outline color
    pub const GUIDE_LINE: Color = Color::BUBBLE_STROKE;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(14,147,213,1)`
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The whole logical play area
    pub const fn surface() -> Self {
        Self::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// Image asset handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    /// Player sprite sheet, facing left
    PlayerLeft,
    /// Player sprite sheet, facing right
    PlayerRight,
}

impl ImageId {
    /// Every sprite sheet, in load order
    pub const ALL: [ImageId; 2] = [ImageId::PlayerLeft, ImageId::PlayerRight];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            ImageId::PlayerLeft => PLAYER_LEFT_IMAGE,
            ImageId::PlayerRight => PLAYER_RIGHT_IMAGE,
        }
    }
}

/// Fill and/or stroke for a closed shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: f32,
}

/// Immediate-mode 2D drawing capability
///
/// Implementations are best-effort: a missing asset or a backend error must
/// not abort the frame.
pub trait Surface {
    /// Clear a region to transparent
    fn clear(&mut self, rect: Rect);

    /// Draw a circle, filled then stroked
    fn circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle);

    /// Stroke a straight line
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Blit the `src` region of an image scaled into `dst`
    fn image(&mut self, image: ImageId, src: Rect, dst: Rect);

    /// Fill text with its baseline starting at `pos`
    fn text(&mut self, text: &str, pos: Vec2, color: Color, font: &str);

    /// Push the current transform
    fn save(&mut self);

    /// Translate subsequent drawing
    fn translate(&mut self, offset: Vec2);

    /// Rotate subsequent drawing (radians, clockwise in screen space)
    fn rotate(&mut self, angle: f32);

    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);
}

/// Draw the score HUD
pub fn draw_score(surface: &mut dyn Surface, score: u64) {
    surface.text(
        &format!("score: {}", score),
        Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y),
        Color::BLACK,
        SCORE_FONT,
    );
}
