//! Animation presets and the compiler that turns an animation instance into motion, CSS and
//! native descriptors.

/// Preset dispatch into the three output descriptors.
pub mod compile;
/// Compiler output types.
pub mod descriptor;
/// Timing curves.
pub mod easing;
/// Animation instances attached to scene nodes.
pub mod instance;
/// Preset catalog, kinds, triggers and configs.
pub mod preset;
