//! Workshop is the core of a UI component workbench.
//!
//! - Build and edit a [`Scene`]: a component tree plus the animations attached to its nodes
//! - Compile animation presets into motion, CSS and native descriptors
//! - Generate source code for a scene in one of several [`CodeView`]s
#![forbid(unsafe_code)]

mod foundation;

/// Animation presets, instances and the animation compiler.
pub mod animation;
/// Code generation views and emitters.
pub mod codegen;
/// Component type registry.
pub mod registry;
/// Scene model.
pub mod scene;
/// Workbench controller.
pub mod session;

pub use crate::foundation::error::{WorkshopError, WorkshopResult};
pub use crate::foundation::ids::{AnimationId, NodeId};

pub use crate::animation::compile::{compile, compile_animation};
pub use crate::animation::descriptor::AnimationOutput;
pub use crate::animation::instance::AnimationNode;
pub use crate::animation::preset::{
    AnimationConfig, AnimationKind, AnimationPreset, Trigger, builtin_presets, lookup_preset,
};
pub use crate::codegen::motion::Framework;
pub use crate::codegen::{CodeView, CodegenOpts, generate};
pub use crate::registry::builtin::BuiltinRegistry;
pub use crate::registry::{ComponentDescriptor, ComponentRegistry};
pub use crate::scene::fingerprint::SceneFingerprint;
pub use crate::scene::model::Scene;
pub use crate::scene::node::ComponentNode;
pub use crate::scene::props::{IconRef, PropMap, PropValue, props};
pub use crate::session::workbench::Workbench;
