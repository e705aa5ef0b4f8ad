use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::animation::instance::AnimationNode;
use crate::foundation::error::{WorkshopError, WorkshopResult};
use crate::foundation::ids::{AnimationId, NodeId};
use crate::scene::fingerprint::{SceneFingerprint, fingerprint_scene};
use crate::scene::node::ComponentNode;
use crate::scene::props::PropMap;

pub const SCENE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMetadata {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SceneMetadata {
    fn now() -> Self {
        let now = Utc::now();
        Self {
            version: SCENE_VERSION.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A component tree plus the animations attached to it.
///
/// This is the single authoritative editing state. Every edit goes through `&mut Scene`, so a
/// reader holding `&Scene` (or a clone) always sees a consistent tree/animation pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub(crate) root: ComponentNode,
    /// Insertion order.
    #[serde(default)]
    pub(crate) animations: Vec<AnimationNode>,
    pub(crate) metadata: SceneMetadata,
    #[serde(skip)]
    selected: Option<NodeId>,
}

/// What a preview renderer needs to draw the scene and highlight the selection.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    pub root: &'a ComponentNode,
    pub animations: &'a [AnimationNode],
    pub selected: Option<&'a NodeId>,
}

impl Scene {
    /// New scene with a single root node under a fresh id and no animations.
    pub fn new(root_type: impl Into<String>, initial_props: PropMap) -> Self {
        let root = ComponentNode::new(NodeId::fresh(), root_type).with_props(initial_props);
        Self {
            root,
            animations: Vec::new(),
            metadata: SceneMetadata::now(),
            selected: None,
        }
    }

    /// New scene around an already built tree. Fails if the tree repeats an id.
    pub fn from_root(root: ComponentNode) -> WorkshopResult<Self> {
        if let Some(dup) = root.first_duplicate_id() {
            return Err(WorkshopError::validation(format!(
                "node id '{dup}' appears more than once in the tree"
            )));
        }
        Ok(Self {
            root,
            animations: Vec::new(),
            metadata: SceneMetadata::now(),
            selected: None,
        })
    }

    /// Parse a scene from JSON and check its invariants.
    pub fn from_json(json: &str) -> WorkshopResult<Self> {
        let scene: Scene = serde_json::from_str(json)
            .map_err(|e| WorkshopError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_pretty(&self) -> WorkshopResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WorkshopError::serde(format!("encode scene JSON: {e}")))
    }

    /// Check the tree invariant: node ids are unique. The animation list is not checked, since
    /// [`Scene::add_animation`] accepts any instance.
    pub fn validate(&self) -> WorkshopResult<()> {
        if let Some(dup) = self.root.first_duplicate_id() {
            return Err(WorkshopError::validation(format!(
                "node id '{dup}' appears more than once in the tree"
            )));
        }
        Ok(())
    }

    pub fn root(&self) -> &ComponentNode {
        &self.root
    }

    pub fn animations(&self) -> &[AnimationNode] {
        &self.animations
    }

    pub fn metadata(&self) -> &SceneMetadata {
        &self.metadata
    }

    pub fn node(&self, id: &NodeId) -> Option<&ComponentNode> {
        self.root.find(id)
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    pub fn animations_for<'a, 't>(
        &'a self,
        target: &'t NodeId,
    ) -> impl Iterator<Item = &'a AnimationNode> + use<'a, 't> {
        self.animations.iter().filter(move |a| a.targets(target))
    }

    /// Select a node for editing. Unknown ids clear the selection.
    pub fn select_node(&mut self, id: &NodeId) {
        if self.root.find(id).is_some() {
            self.selected = Some(id.clone());
        } else {
            tracing::debug!(node = %id, "select: unknown node id, clearing selection");
            self.selected = None;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_node_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.selected.as_ref().and_then(|id| self.root.find(id))
    }

    pub fn preview(&self) -> Preview<'_> {
        Preview {
            root: &self.root,
            animations: &self.animations,
            selected: self.selected.as_ref(),
        }
    }

    /// Merge `partial` into the node's props. Keys in `partial` overwrite (including with
    /// `null`/`false`); other keys are kept. Unknown ids are a silent no-op.
    pub fn update_node_props(&mut self, id: &NodeId, partial: PropMap) {
        let Some(node) = self.root.find_mut(id) else {
            tracing::debug!(node = %id, "update_node_props: unknown node id, ignoring");
            return;
        };
        node.props.extend(partial);
        self.touch();
    }

    /// Replace the root's component type and props; id, children and animations are kept.
    pub fn set_root_component(&mut self, kind: impl Into<String>, props: PropMap) {
        self.root.kind = kind.into();
        self.root.props = props;
        self.touch();
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Unknown parents are a no-op. Any id in `child` that already exists in the scene (or
    /// repeats inside `child`) is rejected.
    pub fn add_child(&mut self, parent: &NodeId, child: ComponentNode) -> WorkshopResult<()> {
        if let Some(dup) = child.first_duplicate_id() {
            return Err(WorkshopError::validation(format!(
                "node id '{dup}' appears more than once in the attached subtree"
            )));
        }
        if let Some(clash) = child.ids().into_iter().find(|id| self.root.find(id).is_some()) {
            return Err(WorkshopError::validation(format!(
                "node id '{clash}' already exists in the scene"
            )));
        }
        let Some(node) = self.root.find_mut(parent) else {
            tracing::debug!(parent = %parent, "add_child: unknown parent id, ignoring");
            return Ok(());
        };
        node.children.push(child);
        self.touch();
        Ok(())
    }

    /// Detach a non-root subtree. Animations targeting removed nodes are left in place.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<ComponentNode> {
        let removed = self.root.remove_descendant(id)?;
        if self
            .selected
            .as_ref()
            .is_some_and(|sel| removed.find(sel).is_some())
        {
            self.selected = None;
        }
        self.touch();
        Some(removed)
    }

    /// Append an animation. Several animations may target the same node.
    pub fn add_animation(&mut self, animation: AnimationNode) {
        self.animations.push(animation);
        self.touch();
    }

    /// Remove the first animation with `id`; unknown ids are a no-op.
    pub fn remove_animation(&mut self, id: &AnimationId) -> Option<AnimationNode> {
        let Some(pos) = self.animations.iter().position(|a| &a.id == id) else {
            tracing::debug!(animation = %id, "remove_animation: unknown animation id, ignoring");
            return None;
        };
        let removed = self.animations.remove(pos);
        self.touch();
        Some(removed)
    }

    /// Remove every animation targeting `target`, returning how many were dropped.
    pub fn remove_animations_for(&mut self, target: &NodeId) -> usize {
        let before = self.animations.len();
        self.animations.retain(|a| !a.targets(target));
        let removed = before - self.animations.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    pub fn fingerprint(&self) -> SceneFingerprint {
        fingerprint_scene(&self.root, &self.animations)
    }

    fn touch(&mut self) {
        // Never move backwards, even if the wall clock does.
        self.metadata.updated_at = Utc::now().max(self.metadata.updated_at);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
