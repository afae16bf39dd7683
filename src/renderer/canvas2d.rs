//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{LABEL_FONT, Label, Scene, Shape, colors};

/// Draws scenes onto a `CanvasRenderingContext2d`
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    pub fn draw_labels(&self, labels: &[Label]) -> Result<(), JsValue> {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(colors::LABEL.css);
        for label in labels {
            self.ctx
                .fill_text(label.text, label.pos.x as f64, label.pos.y as f64)?;
        }
        Ok(())
    }

    pub fn draw_shapes(&self, shapes: &[Shape]) -> Result<(), JsValue> {
        for shape in shapes {
            match shape {
                Shape::Rect { pos, size, color } => {
                    self.ctx.set_fill_style_str(color.css);
                    self.ctx.fill_rect(
                        pos.x as f64,
                        pos.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.begin_path();
                    self.ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    self.ctx.set_fill_style_str(color.css);
                    self.ctx.fill();
                    self.ctx.close_path();
                }
            }
        }
        Ok(())
    }

    /// Clear, then labels, cells, ball and paddle
    pub fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        self.clear();
        self.draw_labels(&scene.labels)?;
        self.draw_shapes(&scene.shapes)
    }
}
