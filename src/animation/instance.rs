use serde::{Deserialize, Serialize};

use crate::animation::preset::{AnimationConfig, AnimationPreset, Trigger};
use crate::foundation::ids::{AnimationId, NodeId};

/// An attached instance of a preset.
///
/// `preset` is a copy of the catalog entry. `target` is a non-owning reference and may dangle
/// after the node is removed; dangling targets are simply never matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationNode {
    pub id: AnimationId,
    pub preset: AnimationPreset,
    #[serde(default)]
    pub config: AnimationConfig,
    #[serde(default)]
    pub trigger: Trigger,
    #[serde(rename = "targetComponentId")]
    pub target: NodeId,
}

impl AnimationNode {
    /// Instantiate `preset` on `target`, inheriting the preset's config and default trigger.
    pub fn from_preset(id: AnimationId, preset: &AnimationPreset, target: NodeId) -> Self {
        Self {
            id,
            preset: preset.clone(),
            config: preset.config.clone(),
            trigger: preset.trigger,
            target,
        }
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_config(mut self, config: AnimationConfig) -> Self {
        self.config = config;
        self
    }

    /// The config actually compiled: instance values over preset defaults.
    pub fn effective_config(&self) -> AnimationConfig {
        self.preset.config.merged(&self.config)
    }

    pub fn targets(&self, node: &NodeId) -> bool {
        &self.target == node
    }
}
