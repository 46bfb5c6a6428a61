//! Rising bubbles

use glam::Vec2;
use rand::Rng;

use super::Entity;
use crate::consts::*;
use crate::input::InputState;
use crate::renderer::{Color, ShapeStyle, Surface};

/// A bubble rising from below the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub pos: Vec2,
    pub radius: f32,
    /// Upward speed in pixels per tick
    pub speed: f32,
    /// Distance to the player as of the last update (infinite before the first)
    pub distance: f32,
}

impl Bubble {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            speed,
            distance: f32::INFINITY,
        }
    }

    /// Random bubble just below the bottom edge
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let radius = rng.random_range(BUBBLE_MIN_RADIUS..BUBBLE_MAX_RADIUS);
        let x = rng.random_range(0.0..SURFACE_WIDTH);
        let speed = rng.random_range(BUBBLE_MIN_SPEED..BUBBLE_MAX_SPEED);
        Self::new(Vec2::new(x, SURFACE_HEIGHT + radius), radius, speed)
    }

    /// Bottom edge has risen past the top of the surface
    #[inline]
    pub fn is_above_top(&self) -> bool {
        self.pos.y + self.radius < 0.0
    }

    /// Overlaps a circle of `other_radius` at the last measured distance
    #[inline]
    pub fn touches(&self, other_radius: f32) -> bool {
        self.distance < self.radius + other_radius
    }
}

impl Entity for Bubble {
    fn update(&mut self, target: Vec2) {
        self.pos.y -= self.speed;
        self.distance = self.pos.distance(target);
    }

    fn draw(&self, surface: &mut dyn Surface, _input: &InputState) {
        surface.circle(
            self.pos,
            self.radius,
            ShapeStyle {
                fill: Some(Color::BUBBLE_FILL),
                stroke: Some(Color::BUBBLE_STROKE),
                line_width: BUBBLE_LINE_WIDTH,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let b = Bubble::spawn(&mut rng);
            assert!((25.0..50.0).contains(&b.radius));
            assert!((0.0..860.0).contains(&b.pos.x));
            assert!((1.0..4.0).contains(&b.speed));
            // Starts fully below the visible area
            assert_eq!(b.pos.y, 600.0 + b.radius);
            assert!(b.distance.is_infinite());
        }
    }

    #[test]
    fn test_update_rises_and_measures() {
        let mut b = Bubble::new(Vec2::new(100.0, 200.0), 30.0, 2.0);
        b.update(Vec2::new(100.0, 100.0));
        assert_eq!(b.pos, Vec2::new(100.0, 198.0));
        assert!((b.distance - 98.0).abs() < 1e-4);
    }

    #[test]
    fn test_is_above_top() {
        let b = Bubble::new(Vec2::new(0.0, -30.0), 30.0, 1.0);
        assert!(!b.is_above_top());
        let b = Bubble::new(Vec2::new(0.0, -30.5), 30.0, 1.0);
        assert!(b.is_above_top());
    }

    #[test]
    fn test_touches_is_strict() {
        let mut b = Bubble::new(Vec2::ZERO, 50.0, 0.0);
        b.distance = 99.9;
        assert!(b.touches(50.0));
        b.distance = 100.0;
        assert!(!b.touches(50.0));
    }

    #[test]
    fn test_never_touches_before_first_update() {
        let b = Bubble::new(Vec2::ZERO, 50.0, 0.0);
        assert!(!b.touches(50.0));
    }

    #[test]
    fn test_draw_style() {
        use crate::renderer::{DrawCommand, RecordingSurface};

        let b = Bubble::new(Vec2::new(10.0, 20.0), 30.0, 1.0);
        let mut surface = RecordingSurface::new();
        b.draw(&mut surface, &InputState::default());
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 30.0,
                style: ShapeStyle {
                    fill: Some(Color::BUBBLE_FILL),
                    stroke: Some(Color::BUBBLE_STROKE),
                    line_width: 2.0,
                },
            }]
        );
    }
}
