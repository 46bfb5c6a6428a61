//! The player-controlled fish
//!
//! Eases toward the pointer, faces it, and cycles through a sprite sheet.

use glam::Vec2;

use super::Entity;
use crate::consts::*;
use crate::input::InputState;
use crate::renderer::{Color, ImageId, Rect, Surface};

/// Which sprite sheet to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Left when the player is at or right of the target, right otherwise
    pub fn toward(player_x: f32, target_x: f32) -> Self {
        if player_x >= target_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn image(&self) -> ImageId {
        match self {
            Facing::Left => ImageId::PlayerLeft,
            Facing::Right => ImageId::PlayerRight,
        }
    }
}

/// Sprite sheet cursor (column-major walk, row wraps after the last column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteAnimation {
    pub frame_x: u32,
    pub frame_y: u32,
    /// Ticks since start
    pub timer: u32,
}

impl SpriteAnimation {
    /// Source cell size in the sheet
    pub const CELL_WIDTH: f32 = SPRITE_SHEET_WIDTH / SPRITE_COLUMNS as f32;
    pub const CELL_HEIGHT: f32 = SPRITE_SHEET_HEIGHT / SPRITE_ROWS as f32;

    /// Count one tick; moves to the next cell every `PLAYER_ANIMATION_INTERVAL` ticks
    pub fn tick(&mut self) {
        self.timer = self.timer.wrapping_add(1);
        if self.timer % PLAYER_ANIMATION_INTERVAL != 0 {
            return;
        }

        if self.frame_x < SPRITE_COLUMNS - 1 {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
            self.frame_y += 1;
        }
        if self.frame_y >= SPRITE_ROWS {
            self.frame_y = 0;
        }
    }

    /// Region of the sheet holding the current frame
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.frame_x as f32 * Self::CELL_WIDTH,
            self.frame_y as f32 * Self::CELL_HEIGHT,
            Self::CELL_WIDTH,
            Self::CELL_HEIGHT,
        )
    }

    /// Where the frame lands, relative to the (translated, rotated) player
    pub fn dest_rect() -> Rect {
        Rect::new(
            SPRITE_OFFSET_X,
            SPRITE_OFFSET_Y,
            Self::CELL_WIDTH / SPRITE_SCALE_DIVISOR,
            Self::CELL_HEIGHT / SPRITE_SCALE_DIVISOR,
        )
    }
}

/// The player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Rotation applied to the sprite (radians)
    pub angle: f32,
    pub radius: f32,
    pub animation: SpriteAnimation,
}

impl Default for Player {
    fn default() -> Self {
        Self::at(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT / 2.0))
    }
}

impl Player {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            radius: PLAYER_RADIUS,
            animation: SpriteAnimation::default(),
        }
    }

    pub fn facing(&self, target: Vec2) -> Facing {
        Facing::toward(self.pos.x, target.x)
    }
}

impl Entity for Player {
    fn update(&mut self, target: Vec2) {
        let delta = self.pos - target;
        // Points from the target back to the player; the sprites are drawn for it
        self.angle = delta.y.atan2(delta.x);
        self.pos -= delta / PLAYER_EASING_DIVISOR;
        self.animation.tick();
    }

    fn draw(&self, surface: &mut dyn Surface, input: &InputState) {
        if input.pressed {
            surface.line(self.pos, input.pos, Color::GUIDE_LINE, GUIDE_LINE_WIDTH);
        }

        surface.save();
        surface.translate(self.pos);
        surface.rotate(self.angle);
        surface.image(
            self.facing(input.pos).image(),
            self.animation.source_rect(),
            SpriteAnimation::dest_rect(),
        );
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_default_position() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(860.0, 300.0));
        assert_eq!(player.radius, 50.0);
    }

    #[test]
    fn test_single_step_easing() {
        let mut player = Player::default();
        player.update(Vec2::new(430.0, 300.0));
        assert!((player.pos.x - 838.5).abs() < 1e-4);
        assert_eq!(player.pos.y, 300.0);
    }

    #[test]
    fn test_converges_to_target() {
        let target = Vec2::new(430.0, 300.0);
        let mut player = Player::default();
        for _ in 0..1000 {
            player.update(target);
        }
        assert!((player.pos - target).length() < 1e-3);
    }

    #[test]
    fn test_angle_points_from_target() {
        let mut player = Player::at(Vec2::new(100.0, 100.0));
        // Target to the left: delta is +x, angle 0
        player.update(Vec2::new(0.0, 100.0));
        assert!(player.angle.abs() < 1e-6);

        // Target below (screen y grows downward): delta is -y
        let mut player = Player::at(Vec2::new(100.0, 100.0));
        player.update(Vec2::new(100.0, 200.0));
        assert!((player.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_animation_advances_every_four_ticks() {
        let mut anim = SpriteAnimation::default();
        for _ in 0..3 {
            anim.tick();
        }
        assert_eq!((anim.frame_x, anim.frame_y), (0, 0));
        anim.tick();
        assert_eq!((anim.frame_x, anim.frame_y), (1, 0));
    }

    #[test]
    fn test_animation_wraps_grid() {
        let mut anim = SpriteAnimation::default();
        // 4 columns -> row advances after 4 frame steps
        for _ in 0..16 {
            anim.tick();
        }
        assert_eq!((anim.frame_x, anim.frame_y), (0, 1));

        // 20 cells in total -> back to the origin
        for _ in 0..(4 * 16) {
            anim.tick();
        }
        assert_eq!((anim.frame_x, anim.frame_y), (0, 0));
    }

    #[test]
    fn test_source_rect() {
        let anim = SpriteAnimation {
            frame_x: 2,
            frame_y: 3,
            timer: 0,
        };
        let rect = anim.source_rect();
        assert_eq!(rect, Rect::new(996.0, 981.0, 498.0, 327.0));

        let dst = SpriteAnimation::dest_rect();
        assert_eq!(dst, Rect::new(-60.0, -45.0, 124.5, 81.75));
    }

    #[test]
    fn test_facing() {
        assert_eq!(Facing::toward(500.0, 400.0), Facing::Left);
        assert_eq!(Facing::toward(400.0, 400.0), Facing::Left);
        assert_eq!(Facing::toward(300.0, 400.0), Facing::Right);
    }

    #[test]
    fn test_draw_guide_line_only_when_pressed() {
        let player = Player::default();
        let mut input = InputState::default();

        let mut surface = RecordingSurface::new();
        player.draw(&mut surface, &input);
        assert!(
            !surface
                .commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::Line { .. }))
        );

        input.pressed = true;
        let mut surface = RecordingSurface::new();
        player.draw(&mut surface, &input);
        assert!(matches!(
            surface.commands()[0],
            DrawCommand::Line { width, .. } if width == GUIDE_LINE_WIDTH
        ));
    }

    #[test]
    fn test_draw_picks_sheet_by_side() {
        let player = Player::at(Vec2::new(100.0, 300.0));
        let mut surface = RecordingSurface::new();
        player.draw(&mut surface, &InputState::at(Vec2::new(400.0, 300.0)));
        player.draw(&mut surface, &InputState::at(Vec2::new(50.0, 300.0)));
        assert_eq!(
            surface.images().collect::<Vec<_>>(),
            vec![ImageId::PlayerRight, ImageId::PlayerLeft]
        );
    }

    #[test]
    fn test_draw_transform_is_balanced() {
        let player = Player::default();
        let mut surface = RecordingSurface::new();
        player.draw(&mut surface, &InputState::default());

        assert_eq!(surface.depth(), 0);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate(Vec2::new(860.0, 300.0)),
                DrawCommand::Rotate(0.0),
                DrawCommand::Image {
                    image: ImageId::PlayerLeft,
                    src: Rect::new(0.0, 0.0, 498.0, 327.0),
                    dst: Rect::new(-60.0, -45.0, 124.5, 81.75),
                },
                DrawCommand::Restore,
            ]
        );
    }
}
