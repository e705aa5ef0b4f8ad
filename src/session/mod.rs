//! Editing session built on top of the scene model.

/// Workbench controller.
pub mod workbench;
