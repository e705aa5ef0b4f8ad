//! Scene model: the editable component tree and its attached animations.

/// Content fingerprint used to key generated-code caches.
pub mod fingerprint;
/// Scene container and its edit operations.
pub mod model;
/// Component tree nodes.
pub mod node;
/// Dynamically typed property values.
pub mod props;
