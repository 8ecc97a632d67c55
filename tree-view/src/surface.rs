//! [`DrawSurface`] implementation on top of an [`egui::Painter`].

use glam::Vec2;
use tree_core::{color::Color, render::ClosedPath, surface::DrawSurface};

/// Converts a core color into an egui color without any color-space change.
pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Paints draw commands into the screen area whose top-left corner is `origin`.
///
/// ### Fields
/// - `painter` - egui painter, usually clipped to the canvas rect.
/// - `origin` - Screen position of the canvas' top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    /// Maps a canvas-space point to screen space.
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        let rect = egui::Rect::from_min_size(self.to_screen(top_left), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn fill_path(&mut self, path: &ClosedPath, color: Color) {
        let fill = to_color32(color);

        // Every tree layer is a triangle, so each contour is convex and
        // can be filled on its own.
        for contour in path.contours().iter().filter(|c| c.len() >= 3) {
            let points: Vec<egui::Pos2> = contour.iter().map(|&p| self.to_screen(p)).collect();
            self.painter
                .add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}
