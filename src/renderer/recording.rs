//! Surface that records draw calls instead of rasterizing
//!
//! Used by the native headless runner and by tests to inspect what a frame
//! would have drawn.

use glam::Vec2;

use super::{Color, ImageId, Rect, ShapeStyle, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Circle {
        center: Vec2,
        radius: f32,
        style: ShapeStyle,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    Image {
        image: ImageId,
        src: Rect,
        dst: Rect,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        font: String,
    },
    Save,
    Translate(Vec2),
    Rotate(f32),
    Restore,
}

/// Recording surface
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Current save/restore nesting
    depth: usize,
    /// Deepest nesting seen
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since the last `take`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands (call once per frame to bound memory)
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current transform stack depth (0 when every save was restored)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of circles drawn
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Images blitted, in draw order
    pub fn images(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { image, .. } => Some(*image),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn image(&mut self, image: ImageId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Image { image, src, dst });
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
            font: font.to_string(),
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, like the canvas
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }
}
