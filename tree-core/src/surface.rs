use glam::Vec2;

use crate::{
    color::Color,
    render::{ClosedPath, DrawCommand},
};

/// A 2-D immediate-mode drawing target.
///
/// Coordinates are canvas coordinates (origin top-left, y down). Commands
/// must be applied in the order they are received; later fills paint over
/// earlier ones.
pub trait DrawSurface {
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color);
    fn fill_path(&mut self, path: &ClosedPath, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Surface that rasterizes nothing and records every call instead.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            top_left,
            size,
            color,
        });
    }

    fn fill_path(&mut self, path: &ClosedPath, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
