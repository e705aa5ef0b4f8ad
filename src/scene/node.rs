use serde::{Deserialize, Serialize};

use crate::foundation::ids::NodeId;
use crate::scene::props::{PropMap, PropValue};

/// Informational node metadata. Never affects behavior or generated code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One node of the component tree.
///
/// Children are owned exclusively by their parent, so a node can never appear twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: NodeId,
    /// Component type identifier, resolved through the component registry.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: PropMap,
    /// Document order.
    #[serde(default)]
    pub children: Vec<ComponentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NodeMetadata>,
}

impl ComponentNode {
    pub fn new(id: impl Into<NodeId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            props: PropMap::new(),
            children: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_props(mut self, props: PropMap) -> Self {
        self.props = props;
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Depth-first, pre-order walk over this subtree.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a ComponentNode, usize)) {
        self.walk_at(0, f);
    }

    fn walk_at<'a>(&'a self, depth: usize, f: &mut impl FnMut(&'a ComponentNode, usize)) {
        f(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }

    /// All ids in this subtree in pre-order.
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut out = Vec::with_capacity(self.count());
        self.walk(&mut |n, _| out.push(&n.id));
        out
    }

    pub fn find(&self, id: &NodeId) -> Option<&ComponentNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut ComponentNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Detach the descendant with `id`. `self` itself is never removed.
    pub(crate) fn remove_descendant(&mut self, id: &NodeId) -> Option<ComponentNode> {
        if let Some(pos) = self.children.iter().position(|c| &c.id == id) {
            return Some(self.children.remove(pos));
        }
        self.children
            .iter_mut()
            .find_map(|c| c.remove_descendant(id))
    }

    /// First id that occurs more than once in this subtree.
    pub(crate) fn first_duplicate_id(&self) -> Option<&NodeId> {
        let mut seen = std::collections::HashSet::new();
        self.ids().into_iter().find(|id| !seen.insert(*id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
