//! Mutable home of the [`RenderParameters`] shown on screen.
//!
//! Every mutation replaces exactly one field, bumps the revision and
//! notifies the single registered observer with the new snapshot.

use log::debug;
use rand::Rng;

use crate::{color::Color, params::RenderParameters};

/// Callback invoked after every mutation of a [`ParameterStore`].
pub type Observer = Box<dyn FnMut(&RenderParameters)>;

/// Holds the current [`RenderParameters`] and notifies one observer on change.
///
/// The store does not validate anything: out-of-range values are stored
/// as given. It is meant to be owned by the UI thread.
pub struct ParameterStore {
    params: RenderParameters,
    revision: u64,
    observer: Option<Observer>,
}

impl ParameterStore {
    /// Creates a store holding `initial`, with revision `0` and no observer.
    pub fn new(initial: RenderParameters) -> Self {
        Self {
            params: initial,
            revision: 0,
            observer: None,
        }
    }

    /// Returns a copy of the current parameters.
    pub fn snapshot(&self) -> RenderParameters {
        self.params
    }

    /// Number of mutations applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers `observer`, replacing any previously registered one.
    ///
    /// The observer is not called on registration, only after mutations.
    pub fn subscribe(&mut self, observer: impl FnMut(&RenderParameters) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the registered observer, if any.
    pub fn unsubscribe(&mut self) {
        self.observer = None;
    }

    pub fn set_tree_scale(&mut self, value: f32) {
        self.params.tree_scale = value;
        self.commit("tree_scale");
    }

    pub fn set_ornament_size(&mut self, value: f32) {
        self.params.ornament_size = value;
        self.commit("ornament_size");
    }

    /// Replaces the ornament color with a random opaque color drawn from `rng`.
    pub fn randomize_ornament_color(&mut self, rng: &mut impl Rng) {
        self.params.ornament_color = Color::random_opaque(rng);
        self.commit("ornament_color");
    }

    /// Replaces the light color with a random opaque color drawn from `rng`.
    pub fn randomize_light_color(&mut self, rng: &mut impl Rng) {
        self.params.light_color = Color::random_opaque(rng);
        self.commit("light_color");
    }

    fn commit(&mut self, field: &str) {
        self.revision += 1;
        debug!(
            "parameter store: {field} changed (revision {}): {:?}",
            self.revision, self.params
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&self.params);
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(RenderParameters::default())
    }
}
