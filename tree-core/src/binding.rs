//! Link between the [`ParameterStore`](crate::store::ParameterStore) and the renderer.
//!
//! The binding caches the last command list. Store mutations only mark
//! it stale through [`RenderBinding::observer`]; the actual recomputation
//! happens lazily in [`RenderBinding::frame`], so any number of mutations
//! between two frames costs a single render.

use std::{cell::Cell, rc::Rc};

use log::{debug, trace};

use crate::{
    params::RenderParameters,
    render::{DrawCommand, render},
    types::CanvasSize,
};

#[derive(Debug)]
pub struct RenderBinding {
    stale: Rc<Cell<bool>>,
    canvas: Option<CanvasSize>,
    params: Option<RenderParameters>,
    commands: Vec<DrawCommand>,
    render_count: u64,
}

impl RenderBinding {
    /// Creates a binding that renders on its first frame.
    pub fn new() -> Self {
        Self {
            stale: Rc::new(Cell::new(true)),
            canvas: None,
            params: None,
            commands: Vec::new(),
            render_count: 0,
        }
    }

    /// Returns a callback that marks this binding stale.
    ///
    /// Meant to be passed to [`ParameterStore::subscribe`](crate::store::ParameterStore::subscribe).
    /// The callback stays valid after the binding is dropped; it then has no effect.
    pub fn observer(&self) -> impl FnMut(&RenderParameters) + 'static {
        let stale = Rc::clone(&self.stale);
        move |_| stale.set(true)
    }

    /// Forces a recomputation on the next frame.
    pub fn invalidate(&self) {
        self.stale.set(true);
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// How many times the command list has been recomputed.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Returns the commands for this frame, rendering only if needed.
    ///
    /// A new render happens when the binding is stale, or when `params` or
    /// `canvas` differ from the inputs of the cached commands.
    ///
    /// ### Parameters
    /// - `params` - Latest store snapshot.
    /// - `canvas` - Size measured by the layout for this frame.
    pub fn frame(&mut self, params: &RenderParameters, canvas: CanvasSize) -> &[DrawCommand] {
        let resized = self.canvas != Some(canvas);
        let changed = self.params != Some(*params);

        if self.stale.get() || resized || changed {
            self.commands = render(params, canvas);
            self.canvas = Some(canvas);
            self.params = Some(*params);
            self.stale.set(false);
            self.render_count += 1;
            debug!(
                "render binding: recomputed {} commands for {}x{} (resized: {resized})",
                self.commands.len(),
                canvas.width,
                canvas.height
            );
        } else {
            trace!("render binding: reusing cached commands");
        }

        &self.commands
    }
}

impl Default for RenderBinding {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, store::ParameterStore};
    use rand::{SeedableRng, rngs::StdRng};

    const CANVAS: CanvasSize = CanvasSize {
        width: 300.0,
        height: 400.0,
    };

    fn bound_store() -> (ParameterStore, RenderBinding) {
        let binding = RenderBinding::new();
        let mut store = ParameterStore::default();
        store.subscribe(binding.observer());
        (store, binding)
    }

    #[test]
    fn first_frame_renders() {
        let (store, mut binding) = bound_store();

        assert!(binding.is_stale());
        let commands = binding.frame(&store.snapshot(), CANVAS).len();

        assert_eq!(commands, 26);
        assert_eq!(binding.render_count(), 1);
        assert!(!binding.is_stale());
    }

    #[test]
    fn unchanged_frame_reuses_cache() {
        let (store, mut binding) = bound_store();

        binding.frame(&store.snapshot(), CANVAS);
        binding.frame(&store.snapshot(), CANVAS);
        binding.frame(&store.snapshot(), CANVAS);

        assert_eq!(binding.render_count(), 1);
    }

    #[test]
    fn mutations_between_frames_are_coalesced() {
        let (mut store, mut binding) = bound_store();
        let mut rng = StdRng::seed_from_u64(5);
        binding.frame(&store.snapshot(), CANVAS);

        store.set_tree_scale(2.0);
        store.set_tree_scale(2.5);
        store.set_ornament_size(20.0);
        store.randomize_light_color(&mut rng);
        assert!(binding.is_stale());

        let commands = binding.frame(&store.snapshot(), CANVAS).to_vec();

        assert_eq!(binding.render_count(), 2);
        assert_eq!(commands, render(&store.snapshot(), CANVAS));
    }

    #[test]
    fn frame_observes_latest_snapshot() {
        let (mut store, mut binding) = bound_store();
        binding.frame(&store.snapshot(), CANVAS);

        store.set_ornament_size(25.0);
        let commands = binding.frame(&store.snapshot(), CANVAS);

        let DrawCommand::FillCircle { radius, color, .. } = &commands[2] else {
            panic!("expected first ornament circle at index 2");
        };
        assert_eq!(*radius, 25.0);
        assert_eq!(*color, Color::RED);
    }

    #[test]
    fn unsubscribed_binding_follows_the_snapshot_it_is_given() {
        let mut binding = RenderBinding::new();
        let first = RenderParameters::default();
        let second = RenderParameters {
            ornament_size: 25.0,
            ..first
        };

        binding.frame(&first, CANVAS);
        let commands = binding.frame(&second, CANVAS).to_vec();

        assert_eq!(commands, render(&second, CANVAS));
        assert_eq!(binding.render_count(), 2);

        binding.frame(&second, CANVAS);
        assert_eq!(binding.render_count(), 2);
    }

    #[test]
    fn canvas_resize_triggers_render_without_mutation() {
        let (store, mut binding) = bound_store();

        binding.frame(&store.snapshot(), CANVAS);
        binding.frame(&store.snapshot(), CanvasSize::new(500.0, 400.0));

        assert_eq!(binding.render_count(), 2);
    }

    #[test]
    fn invalidate_forces_render() {
        let (store, mut binding) = bound_store();
        binding.frame(&store.snapshot(), CANVAS);

        binding.invalidate();
        binding.frame(&store.snapshot(), CANVAS);

        assert_eq!(binding.render_count(), 2);
    }

    #[test]
    fn observer_outlives_binding() {
        let mut store = ParameterStore::default();
        {
            let binding = RenderBinding::new();
            store.subscribe(binding.observer());
        }

        store.set_tree_scale(3.0);
        assert_eq!(store.snapshot().tree_scale, 3.0);
    }
}
