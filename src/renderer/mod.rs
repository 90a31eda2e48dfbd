//! Rendering module
//!
//! The game only issues a handful of 2D primitives (rectangles, filled
//! polygons, ellipses, text) against a [`RenderSurface`]. The browser
//! build draws them on a canvas; tests and the native build record them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::draw_frame;

use glam::Vec2;

use crate::consts::BASE_RESOLUTION;

/// Named colours understood by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    DarkBlue,
    LightGrey,
    Black,
    Red,
    Purple,
    Yellow,
}

impl Color {
    /// CSS colour name
    pub fn css(&self) -> &'static str {
        match self {
            Color::DarkBlue => "darkblue",
            Color::LightGrey => "lightgrey",
            Color::Black => "black",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font and colours for a line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Already scaled font size
    pub size_px: f32,
    pub family: &'static str,
    pub fill: Color,
    /// Outline colour, `None` for fill only
    pub stroke: Option<Color>,
    pub align: TextAlign,
}

impl TextStyle {
    /// CSS font shorthand, e.g. `20px Courier`
    pub fn font(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Drawing target: a fixed-size area with a scale factor
pub trait RenderSurface {
    /// Scaled size in pixels
    fn resolution(&self) -> Vec2;

    fn scale(&self) -> f32;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill the closed polygon through `points`
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fill an axis-aligned ellipse; equal radii give a circle
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Window size bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameWindow {
    scale: f32,
    resolution: Vec2,
}

impl GameWindow {
    pub fn new(scale: f32) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        Self {
            scale,
            resolution: Self::scaled(scale),
        }
    }

    fn scaled(scale: f32) -> Vec2 {
        Vec2::new(BASE_RESOLUTION.0, BASE_RESOLUTION.1) * scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    /// Change the scale. Non-positive or unchanged values are ignored.
    /// Returns whether the resolution changed.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if scale <= 0.0 || scale == self.scale {
            return false;
        }
        self.scale = scale;
        self.resolution = Self::scaled(scale);
        true
    }
}
