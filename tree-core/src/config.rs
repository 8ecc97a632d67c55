use std::ops::RangeInclusive;

use crate::params::RenderParameters;

/// Closed interval offered by a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn as_inclusive(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }
}

/// Startup configuration of the configurator screen.
///
/// ### Fields
/// - `tree_scale` - Range offered by the tree size slider.
/// - `ornament_size` - Range offered by the ornament size slider (pixels).
/// - `canvas_height` - Height of the drawing area; its width follows the window.
/// - `initial` - Parameters the store starts with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub tree_scale: SliderRange,
    pub ornament_size: SliderRange,
    pub canvas_height: f32,
    pub initial: RenderParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_scale: SliderRange::new(2.0, 5.0),
            ornament_size: SliderRange::new(5.0, 30.0),
            canvas_height: 400.0,
            initial: RenderParameters::default(),
        }
    }
}
