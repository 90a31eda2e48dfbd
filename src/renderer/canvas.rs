//! HTML canvas backed surface (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::{Color, GameWindow, RenderSurface, TextStyle};
use crate::error::ShmupError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    window: GameWindow,
}

impl CanvasSurface {
    /// Find `<canvas id=...>`, size it for `scale` and grab its 2D context
    pub fn attach(document: &Document, id: &str, scale: f32) -> Result<Self, ShmupError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| ShmupError::MissingCanvas(id.to_string()))?
            .dyn_into()
            .map_err(|_| ShmupError::NotACanvas(id.to_string()))?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(ShmupError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| ShmupError::ContextUnavailable)?;

        let mut surface = Self {
            canvas,
            context,
            window: GameWindow::new(scale),
        };
        surface.apply_resolution();
        Ok(surface)
    }

    fn apply_resolution(&mut self) {
        let resolution = self.window.resolution();
        self.canvas.set_width(resolution.x as u32);
        self.canvas.set_height(resolution.y as u32);
        log::info!(
            "Canvas sized to {}x{} (scale {})",
            resolution.x,
            resolution.y,
            self.window.scale()
        );
    }
}

impl RenderSurface for CanvasSurface {
    fn resolution(&self) -> Vec2 {
        self.window.resolution()
    }

    fn scale(&self) -> f32 {
        self.window.scale()
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.context.set_fill_style_str(color.css());
        self.context
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.context.begin_path();
        self.context.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.context.line_to(p.x as f64, p.y as f64);
        }
        self.context.close_path();
        self.context.set_fill_style_str(color.css());
        self.context.fill();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.context.begin_path();
        // Only fails on negative radii
        if let Err(e) = self.context.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Skipping ellipse: {:?}", e);
            return;
        }
        self.context.close_path();
        self.context.set_fill_style_str(color.css());
        self.context.fill();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.context.set_font(&style.font());
        self.context.set_text_align(style.align.css());
        self.context.set_fill_style_str(style.fill.css());
        if let Err(e) = self.context.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Skipping text {:?}: {:?}", text, e);
            return;
        }
        if let Some(stroke) = style.stroke {
            self.context.set_stroke_style_str(stroke.css());
            if let Err(e) = self.context.stroke_text(text, pos.x as f64, pos.y as f64) {
                log::warn!("Skipping text outline {:?}: {:?}", text, e);
            }
        }
    }
}
