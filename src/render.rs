use crate::dom;
use dotgrid_core::{Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas implementation of the overlay drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` while the canvas cannot hand out a 2D context; callers retry on
    /// the next frame.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn buffer_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, viewport);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn begin_frame(&mut self, dpr: f32) {
        self.ctx.save();
        _ = self.ctx.scale(dpr as f64, dpr as f64);
    }

    fn end_frame(&mut self) {
        self.ctx.restore();
    }

    fn set_fill(&mut self, color: &str, alpha: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_square(&mut self, center: Vec2, side: f32) {
        let half = side / 2.0;
        self.ctx.fill_rect(
            (center.x - half) as f64,
            (center.y - half) as f64,
            side as f64,
            side as f64,
        );
    }

    fn fill_cross(&mut self, center: Vec2, length: f32, thickness: f32) {
        let (l, t) = (length as f64, thickness as f64);
        let (x, y) = (center.x as f64, center.y as f64);
        self.ctx.begin_path();
        self.ctx.rect(x - t / 2.0, y - l / 2.0, t, l);
        self.ctx.rect(x - l / 2.0, y - t / 2.0, l, t);
        self.ctx.fill();
    }
}
