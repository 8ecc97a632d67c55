//! Core of the Christmas tree configurator: parameters, geometry and rendering.
//!
//! Main components:
//! - [`params`] — the user-adjustable render parameters.
//! - [`store`] — mutable parameter store with a single change observer.
//! - [`layers`] — geometry of the four tree layers and decoration points.
//! - [`render`] — the renderer producing ordered draw commands.
//! - [`surface`] — the drawing-surface port and a recording implementation.
//! - [`binding`] — cached, invalidation-driven link from store to renderer.
//! - [`color`] — RGBA color type and the named colors used by the tree.
//! - [`config`] — slider ranges and startup values.
//! - [`types`] — shared small types (canvas size, decoration points).

pub mod binding;
pub mod color;
pub mod config;
pub mod layers;
pub mod params;
pub mod render;
pub mod store;
pub mod surface;
pub mod types;
