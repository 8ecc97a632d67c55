//! The tree renderer: parameters and canvas size in, draw commands out.
//!
//! Commands are always produced in the same order:
//! 1. the trunk rectangle,
//! 2. one compound path with all four layers,
//! 3. twelve ornament circles (layer by layer: apex, left, right),
//! 4. twelve light circles in the same order.

use glam::Vec2;

use crate::{
    color::Color,
    layers::{LAYER_COUNT, compute_layers, tree_base_y},
    params::RenderParameters,
    surface::DrawSurface,
    types::CanvasSize,
};

/// Number of commands emitted by every call to [`render`].
pub const COMMANDS_PER_FRAME: usize = 1 + 1 + 2 * 3 * LAYER_COUNT;

/// Trunk size as fractions of the canvas width and height.
const TRUNK_WIDTH_RATIO: f32 = 0.15;
const TRUNK_HEIGHT_RATIO: f32 = 0.15;

/// A filled shape made of one or more closed polygon contours.
///
/// Each contour is implicitly closed from its last point back to its first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosedPath {
    contours: Vec<Vec<Vec2>>,
}

impl ClosedPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed contour through `points`.
    pub fn push_contour(&mut self, points: impl IntoIterator<Item = Vec2>) {
        self.contours.push(points.into_iter().collect());
    }

    pub fn contours(&self) -> &[Vec<Vec2>] {
        &self.contours
    }
}

/// One primitive instruction for a [`DrawSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        top_left: Vec2,
        size: Vec2,
        color: Color,
    },
    FillPath {
        path: ClosedPath,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Sends this command to `surface`.
    pub fn issue(&self, surface: &mut impl DrawSurface) {
        match self {
            Self::FillRect {
                top_left,
                size,
                color,
            } => surface.fill_rect(*top_left, *size, *color),
            Self::FillPath { path, color } => surface.fill_path(path, *color),
            Self::FillCircle {
                center,
                radius,
                color,
            } => surface.fill_circle(*center, *radius, *color),
        }
    }
}

/// Produces the draw commands for one frame.
///
/// This is a pure function: the same inputs always give identical output.
/// Degenerate canvas sizes are not an error and simply yield degenerate
/// geometry.
///
/// ### Parameters
/// - `params` - Current render parameters.
/// - `canvas` - Measured size of the drawing surface.
///
/// ### Returns
/// Exactly [`COMMANDS_PER_FRAME`] commands, in drawing order.
pub fn render(params: &RenderParameters, canvas: CanvasSize) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(COMMANDS_PER_FRAME);

    // Trunk, hanging below the base line.
    let trunk_size = Vec2::new(
        canvas.width * TRUNK_WIDTH_RATIO,
        canvas.height * TRUNK_HEIGHT_RATIO,
    );
    commands.push(DrawCommand::FillRect {
        top_left: Vec2::new((canvas.width - trunk_size.x) / 2.0, tree_base_y(canvas)),
        size: trunk_size,
        color: Color::TRUNK_BROWN,
    });

    let layers = compute_layers(params.tree_scale, canvas);

    let mut foliage = ClosedPath::new();
    for layer in &layers {
        foliage.push_contour(layer.vertices());
    }
    commands.push(DrawCommand::FillPath {
        path: foliage,
        color: params.tree_color,
    });

    for layer in &layers {
        for center in layer.ornament_points() {
            commands.push(DrawCommand::FillCircle {
                center,
                radius: params.ornament_size,
                color: params.ornament_color,
            });
        }
    }

    for layer in &layers {
        for center in layer.light_points(params.tree_scale) {
            commands.push(DrawCommand::FillCircle {
                center,
                radius: params.light_radius(),
                color: params.light_color,
            });
        }
    }

    commands
}

/// Renders and immediately issues every command to `surface`, in order.
pub fn render_to(params: &RenderParameters, canvas: CanvasSize, surface: &mut impl DrawSurface) {
    for command in render(params, canvas) {
        command.issue(surface);
    }
}
