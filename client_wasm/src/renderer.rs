//! Canvas 2D drawing surface

use game_core::{Canvas, Color};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| JsValue::from_str(&format!("Failed to get 2D context: {:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl Canvas for Renderer {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center_x as f64,
            center_y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
