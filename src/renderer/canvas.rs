//! `CanvasRenderingContext2d` backed surface (web only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Color, ImageId, Rect, ShapeStyle, Surface};

/// Canvas surface plus the sprite images it can blit
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: Vec<(ImageId, HtmlImageElement)>,
}

impl CanvasSurface {
    /// Acquire the 2D context and start loading sprite images
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            images: ImageId::ALL
                .into_iter()
                .filter_map(|id| load_image(id).map(|el| (id, el)))
                .collect(),
        })
    }

    fn image_element(&self, image: ImageId) -> Option<&HtmlImageElement> {
        self.images
            .iter()
            .find(|(id, _)| *id == image)
            .map(|(_, el)| el)
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke(&self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }
}

/// Start loading an image; decoding finishes asynchronously
fn load_image(image: ImageId) -> Option<HtmlImageElement> {
    match HtmlImageElement::new() {
        Ok(el) => {
            el.set_src(image.path());
            Some(el)
        }
        Err(e) => {
            log::warn!("Failed to create image for {}: {:?}", image.path(), e);
            None
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle) {
        self.ctx.set_line_width(style.line_width as f64);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        if let Some(fill) = style.fill {
            self.set_fill(fill);
            self.ctx.fill();
        }
        self.ctx.close_path();
        if let Some(stroke) = style.stroke {
            self.set_stroke(stroke);
            self.ctx.stroke();
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.set_stroke(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn image(&mut self, image: ImageId, src: Rect, dst: Rect) {
        let Some(el) = self.image_element(image) else {
            return;
        };
        // Not decoded yet (or failed to load) - skip this frame
        if !el.complete() || el.natural_width() == 0 {
            return;
        }
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                el,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            )
            .ok();
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color, font: &str) {
        self.set_fill(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, offset: Vec2) {
        self.ctx.translate(offset.x as f64, offset.y as f64).ok();
    }

    fn rotate(&mut self, angle: f32) {
        self.ctx.rotate(angle as f64).ok();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
