//! Surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Color, GameWindow, RenderSurface, TextStyle};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { origin: Vec2, size: Vec2, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    Ellipse { center: Vec2, radii: Vec2, color: Color },
    Text { text: String, pos: Vec2, style: TextStyle },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub window: GameWindow,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(scale: f32) -> Self {
        Self {
            window: GameWindow::new(scale),
            commands: Vec::new(),
        }
    }

    /// Drop everything recorded so far (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn count_color(&self, wanted: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| match c {
                DrawCommand::Rect { color, .. }
                | DrawCommand::Polygon { color, .. }
                | DrawCommand::Ellipse { color, .. } => *color == wanted,
                DrawCommand::Text { .. } => false,
            })
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn resolution(&self) -> Vec2 {
        self.window.resolution()
    }

    fn scale(&self) -> f32 {
        self.window.scale()
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { origin, size, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCommand::Ellipse { center, radii, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}
