//! Geometry of the four stacked triangles that form the tree.
//!
//! All offsets are hand-tuned literals. Vertical offsets are measured
//! upwards from the tree base line and scaled by `tree_scale`; horizontal
//! positions are fractions of the canvas width.

use glam::Vec2;

use crate::types::{CanvasSize, DecorationPoint};

pub const LAYER_COUNT: usize = 4;

/// Tree base line (top of the trunk) as a fraction of canvas height.
pub const TREE_BASE_RATIO: f32 = 0.85;

const APEX_X_RATIO: f32 = 0.5;
const APEX_RISE: [f32; LAYER_COUNT] = [40.0, 80.0, 120.0, 160.0];
// The bottom layer's corners hang below the base line.
const CORNER_RISE: [f32; LAYER_COUNT] = [-10.0, 30.0, 70.0, 110.0];
const LEFT_X_RATIO: [f32; LAYER_COUNT] = [0.25, 0.28, 0.31, 0.34];
const RIGHT_X_RATIO: [f32; LAYER_COUNT] = [0.75, 0.72, 0.69, 0.66];

const LIGHT_APEX_DROP: f32 = 15.0;
const LIGHT_CORNER_INSET: f32 = 10.0;

/// One triangular section of the tree silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeLayer {
    pub apex: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

impl TreeLayer {
    /// Vertices in contour order: apex, left corner, right corner.
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.apex, self.left, self.right]
    }

    /// Ornament positions, one on each vertex.
    pub fn ornament_points(&self) -> [DecorationPoint; 3] {
        self.vertices()
    }

    /// Light positions, offset from the ornaments so they do not overlap.
    ///
    /// The apex light sits below the apex; corner lights move inwards and
    /// upwards. All offsets scale with `tree_scale`.
    pub fn light_points(&self, tree_scale: f32) -> [DecorationPoint; 3] {
        let drop = LIGHT_APEX_DROP * tree_scale;
        let inset = LIGHT_CORNER_INSET * tree_scale;
        [
            self.apex + Vec2::new(0.0, drop),
            self.left + Vec2::new(inset, -inset),
            self.right + Vec2::new(-inset, -inset),
        ]
    }
}

/// Y coordinate of the tree base line, which is also the top of the trunk.
pub fn tree_base_y(canvas: CanvasSize) -> f32 {
    canvas.height * TREE_BASE_RATIO
}

/// Computes the four layers, bottom to top.
///
/// ### Parameters
/// - `tree_scale` - Multiplier for every vertical offset.
/// - `canvas` - Measured drawing surface.
///
/// ### Returns
/// The layers ordered from the bottom (index `0`) to the top.
pub fn compute_layers(tree_scale: f32, canvas: CanvasSize) -> [TreeLayer; LAYER_COUNT] {
    let base_y = tree_base_y(canvas);
    let apex_x = canvas.width * APEX_X_RATIO;

    std::array::from_fn(|i| {
        let corner_y = base_y - CORNER_RISE[i] * tree_scale;
        TreeLayer {
            apex: Vec2::new(apex_x, base_y - APEX_RISE[i] * tree_scale),
            left: Vec2::new(canvas.width * LEFT_X_RATIO[i], corner_y),
            right: Vec2::new(canvas.width * RIGHT_X_RATIO[i], corner_y),
        }
    })
}
