//! Scene controller
//!
//! [`Scene`] ties the store, the generator config and the two external
//! collaborators together. The render consumer and edit surface are traits so
//! a host can plug in a GPU renderer, a GUI binding or nothing at all
//! ([`Headless`]).
//!
//! The scene also remembers the selected object type, so a host can offer a
//! single "generate" action that re-rolls whatever is currently picked. Draws
//! from OS entropy are native-only; a wasm host passes a seed from JavaScript.

use celestial_params::{
    EditOutcome, ParamChange, ParamError, ParamValue, ParameterSet, ParameterStore,
    SubscriptionId,
};
use celestial_presets::{ObjectType, ObjectTypePreset, preset_for, preset_named};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::{debug, info};

use crate::config::ForgeConfig;
use crate::propagation::{ATMOSPHERE_RADIUS, RotationLock, ShellRadius, sync_atmosphere_radius};
use crate::synthesis::synthesize;

/// What the scene needs from the renderer
pub trait RenderConsumer {
    fn set_body_visible(&mut self, visible: bool);
    fn set_atmosphere_visible(&mut self, visible: bool);
    /// Regenerate the particle shell from the current parameters
    fn rebuild_atmosphere(&mut self, params: &ParameterSet);
}

/// What the scene needs from the live-editing UI
pub trait EditSurface {
    /// Re-read every bound control after a bulk change
    fn refresh_display(&mut self, params: &ParameterSet);
}

/// A collaborator that ignores every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl RenderConsumer for Headless {
    fn set_body_visible(&mut self, _visible: bool) {}
    fn set_atmosphere_visible(&mut self, _visible: bool) {}
    fn rebuild_atmosphere(&mut self, _params: &ParameterSet) {}
}

impl EditSurface for Headless {
    fn refresh_display(&mut self, _params: &ParameterSet) {}
}

/// Display names of every object type, in menu order
pub fn object_types() -> impl Iterator<Item = &'static str> {
    ObjectType::ALL.into_iter().map(|t| t.name())
}

#[derive(Debug)]
pub struct Scene<R: RenderConsumer = Headless, E: EditSurface = Headless> {
    store: ParameterStore,
    config: ForgeConfig,
    render: R,
    edit: E,
    selected: ObjectType,
}

impl<R: RenderConsumer, E: EditSurface> Scene<R, E> {
    /// Store at scene-load defaults with the propagation rules registered
    pub fn new(config: ForgeConfig, render: R, edit: E) -> Self {
        let mut params = ParameterSet::default();
        sync_atmosphere_radius(&mut params, config.atmosphere_margin);

        let mut store = ParameterStore::new(params);
        store.add_rule(Box::new(ShellRadius::new(config.atmosphere_margin)));
        store.add_rule(Box::new(RotationLock));

        Self {
            store,
            config,
            render,
            edit,
            selected: ObjectType::Star,
        }
    }

    /// A new scene with one body already generated from the default selection
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(config: ForgeConfig, render: R, edit: E) -> Self {
        let mut scene = Self::new(config, render, edit);
        scene.regenerate();
        scene
    }

    pub fn load_with_seed(config: ForgeConfig, render: R, edit: E, seed: u64) -> Self {
        let mut scene = Self::new(config, render, edit);
        scene.regenerate_with_seed(seed);
        scene
    }

    /// Object type the next [`regenerate_with_rng`](Self::regenerate_with_rng) uses
    pub fn selected(&self) -> ObjectType {
        self.selected
    }

    /// Change the selection without generating. Returns false for unknown names.
    pub fn select(&mut self, object_type: &str) -> bool {
        match ObjectType::from_name(object_type) {
            Some(object_type) => {
                self.selected = object_type;
                true
            }
            None => {
                debug!(object_type, "unknown object type, selection kept");
                false
            }
        }
    }

    /// Re-roll the selected object type with fresh OS entropy
    #[cfg(not(target_arch = "wasm32"))]
    pub fn regenerate(&mut self) {
        let mut rng = ChaChaRng::from_rng(&mut rand::rng());
        self.regenerate_with_rng(&mut rng);
    }

    pub fn regenerate_with_seed(&mut self, seed: u64) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        self.regenerate_with_rng(&mut rng);
    }

    pub fn regenerate_with_rng(&mut self, rng: &mut impl Rng) {
        self.apply(preset_for(self.selected), rng);
    }

    /// Randomize from the named object type with fresh OS entropy
    ///
    /// An unknown name leaves the scene untouched.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn randomize(&mut self, object_type: &str) {
        let mut rng = ChaChaRng::from_rng(&mut rand::rng());
        self.randomize_with_rng(object_type, &mut rng);
    }

    /// Reproducible variant: the same seed yields the same body
    pub fn randomize_with_seed(&mut self, object_type: &str, seed: u64) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        self.randomize_with_rng(object_type, &mut rng);
    }

    /// Randomize from the named object type and make it the selection
    pub fn randomize_with_rng(&mut self, object_type: &str, rng: &mut impl Rng) {
        let Some(preset) = preset_named(object_type) else {
            debug!(object_type, "unknown object type, randomize ignored");
            return;
        };
        self.selected = preset.object_type;
        self.apply(preset, rng);
    }

    fn apply(&mut self, preset: &ObjectTypePreset, rng: &mut impl Rng) {
        let next = synthesize(preset, self.store.params(), &self.config, rng);
        self.store.replace(next);

        let params = self.store.params();
        self.render.set_body_visible(params.scene.body_visible);
        self.render.set_atmosphere_visible(params.scene.atmosphere_visible);
        self.edit.refresh_display(params);
        self.render.rebuild_atmosphere(params);

        info!(object_type = %preset.object_type, "randomized scene");
    }

    /// Manual edit by name: clamped, propagated and broadcast
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<EditOutcome, ParamError> {
        let outcome = self.store.set(name, value.into())?;
        if outcome.touched(ATMOSPHERE_RADIUS) {
            self.render.rebuild_atmosphere(self.store.params());
        }
        Ok(outcome)
    }

    pub fn get(&self, name: &str) -> Result<ParamValue, ParamError> {
        self.store.get(name)
    }

    /// Current parameter set
    pub fn snapshot(&self) -> &ParameterSet {
        self.store.params()
    }

    /// Per-parameter change notifications for manual edits
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ParamChange) + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Per-frame update: shader time and shell spin
    pub fn advance_frame(&mut self, elapsed_seconds: f64) {
        self.store.advance_frame(elapsed_seconds, self.config.frame_spin);
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn edit(&self) -> &E {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut E {
        &mut self.edit
    }
}

impl Scene {
    /// Scene with default config and no collaborators
    pub fn headless() -> Self {
        Self::new(ForgeConfig::default(), Headless, Headless)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::headless()
    }
}
