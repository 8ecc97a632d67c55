use crate::color::Color;

pub const DEFAULT_TREE_SCALE: f32 = 1.0;
pub const DEFAULT_ORNAMENT_SIZE: f32 = 10.0;

/// The user-adjustable inputs of a render pass.
///
/// Fields are independent of each other; nothing here is validated; the
/// UI is responsible for keeping values inside their slider ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    /// Multiplier applied to the vertical layer offsets and light offsets.
    pub tree_scale: f32,
    pub tree_color: Color,
    /// Ornament radius in pixels; lights use half of it.
    pub ornament_size: f32,
    pub ornament_color: Color,
    pub light_color: Color,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            tree_scale: DEFAULT_TREE_SCALE,
            tree_color: Color::SEA_GREEN,
            ornament_size: DEFAULT_ORNAMENT_SIZE,
            ornament_color: Color::RED,
            light_color: Color::YELLOW,
        }
    }
}

impl RenderParameters {
    /// Radius used for light circles.
    pub fn light_radius(&self) -> f32 {
        self.ornament_size / 2.0
    }
}
