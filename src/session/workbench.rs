use crate::animation::instance::AnimationNode;
use crate::animation::preset::lookup_preset;
use crate::codegen::cache::{CacheStats, CodeCache};
use crate::codegen::{CodeView, CodegenOpts};
use crate::foundation::error::{WorkshopError, WorkshopResult};
use crate::foundation::ids::{AnimationId, NodeId};
use crate::registry::ComponentRegistry;
use crate::scene::model::Scene;
use crate::scene::node::ComponentNode;
use crate::scene::props::{PropMap, PropValue};

/// Id of the root node of a bootstrapped scene.
pub const ROOT_ID: &str = "root";

/// Preset attached to the root of a bootstrapped scene.
pub const DEFAULT_PRESET: &str = "fade-in";

/// Thin controller that owns the one active [`Scene`].
///
/// Applies editing policy the scene model leaves open, most notably "one animation per target":
/// [`Workbench::set_animation`] replaces whatever was attached to the node before.
#[derive(Debug)]
pub struct Workbench<R> {
    registry: R,
    scene: Scene,
    view: CodeView,
    opts: CodegenOpts,
    cache: CodeCache,
}

impl<R: ComponentRegistry> Workbench<R> {
    /// Default scene: a `type_id` root with registry defaults and a fade-in on the root.
    pub fn bootstrap(registry: R, type_id: &str) -> WorkshopResult<Self> {
        let desc = registry
            .lookup(type_id)
            .ok_or_else(|| WorkshopError::registry(format!("unknown component type '{type_id}'")))?;
        let root = ComponentNode::new(ROOT_ID, desc.id).with_props(desc.default_props);
        let mut scene = Scene::from_root(root)?;

        let preset = lookup_preset(DEFAULT_PRESET).ok_or_else(|| {
            WorkshopError::registry(format!("missing built-in preset '{DEFAULT_PRESET}'"))
        })?;
        scene.add_animation(AnimationNode::from_preset(
            AnimationId::fresh(),
            &preset,
            NodeId::from(ROOT_ID),
        ));
        Ok(Self::with_scene(registry, scene))
    }

    /// Wrap an existing scene.
    pub fn with_scene(registry: R, scene: Scene) -> Self {
        Self {
            registry,
            scene,
            view: CodeView::default(),
            opts: CodegenOpts::default(),
            cache: CodeCache::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn select(&mut self, id: &NodeId) {
        self.scene.select_node(id);
    }

    /// Set one prop on the selected node, or on the root when nothing is selected.
    pub fn set_prop(&mut self, name: &str, value: PropValue) {
        let target = self
            .scene
            .selected_node_id()
            .cloned()
            .unwrap_or_else(|| self.scene.root().id.clone());
        let mut partial = PropMap::new();
        partial.insert(name.to_string(), value);
        self.scene.update_node_props(&target, partial);
    }

    /// Switch the root to another component type, resetting its props to that type's defaults.
    pub fn change_component(&mut self, type_id: &str) -> WorkshopResult<()> {
        let desc = self
            .registry
            .lookup(type_id)
            .ok_or_else(|| WorkshopError::registry(format!("unknown component type '{type_id}'")))?;
        self.scene.set_root_component(desc.id, desc.default_props);
        Ok(())
    }

    /// Replace every animation on `target` with a fresh instance of `preset_id`.
    ///
    /// An unknown preset id leaves the target without animation and returns `None`.
    pub fn set_animation(&mut self, target: &NodeId, preset_id: &str) -> Option<AnimationId> {
        self.scene.remove_animations_for(target);
        let Some(preset) = lookup_preset(preset_id) else {
            tracing::debug!(preset = preset_id, "set_animation: unknown preset id");
            return None;
        };
        let id = AnimationId::fresh();
        self.scene
            .add_animation(AnimationNode::from_preset(id.clone(), &preset, target.clone()));
        Some(id)
    }

    pub fn clear_animations(&mut self, target: &NodeId) {
        self.scene.remove_animations_for(target);
    }

    /// The animation the policy keeps on `target`, if any.
    pub fn current_animation(&self, target: &NodeId) -> Option<&AnimationNode> {
        self.scene.animations().iter().find(|a| a.targets(target))
    }

    pub fn view(&self) -> CodeView {
        self.view
    }

    pub fn set_view(&mut self, view: CodeView) {
        self.view = view;
    }

    pub fn opts(&self) -> &CodegenOpts {
        &self.opts
    }

    pub fn set_opts(&mut self, opts: CodegenOpts) {
        self.opts = opts;
    }

    /// Code for the current view, served from the cache while the scene is unchanged.
    pub fn generate(&mut self) -> String {
        let fp = self.scene.fingerprint();
        self.cache.retain_only(fp);
        self.cache
            .get_or_generate(&self.scene, self.view, &self.opts)
            .to_string()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/workbench.rs"]
mod tests;
