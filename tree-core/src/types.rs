use glam::Vec2;

/// Position of a single ornament or light, in canvas coordinates.
///
/// Canvas coordinates have their origin at the top-left corner of the
/// drawing surface with y growing downwards.
pub type DecorationPoint = Vec2;

/// Measured size of the drawing surface.
///
/// Supplied by the hosting layout on every frame. The renderer only reads
/// it; zero or negative extents are accepted and yield degenerate geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both extents are strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
