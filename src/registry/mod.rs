//! Read-only component registry: what component types exist and what props they start with.

/// Built-in catalog (`button`, `basic-card`).
pub mod builtin;

use serde::{Deserialize, Serialize};

use crate::scene::props::{PropMap, PropValue};

/// One documented property of a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSchema {
    pub name: String,
    /// Type description as shown in docs (e.g. `'xs' | 'sm' | 'md'`).
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<PropValue>,
}

/// Registry entry for a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub default_props: PropMap,
    pub props: Vec<PropSchema>,
}

/// Lookup of component types by id.
pub trait ComponentRegistry {
    fn lookup(&self, type_id: &str) -> Option<ComponentDescriptor>;

    /// Ids of every registered type, in display order.
    fn type_ids(&self) -> Vec<String>;
}
