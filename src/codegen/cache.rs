use std::collections::HashMap;

use crate::codegen::{CodeView, CodegenOpts, generate};
use crate::scene::fingerprint::SceneFingerprint;
use crate::scene::model::Scene;

/// Generated-code cache keyed by scene fingerprint, view and options.
///
/// Sound only because generation is deterministic in the fingerprinted state.
#[derive(Debug, Default)]
pub struct CodeCache {
    entries: HashMap<(SceneFingerprint, CodeView, CodegenOpts), String>,
    hits: u64,
    misses: u64,
}

/// Hit/miss counters of a [`CodeCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(&mut self, scene: &Scene, view: CodeView, opts: &CodegenOpts) -> &str {
        let key = (scene.fingerprint(), view, *opts);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries
            .entry(key)
            .or_insert_with(|| generate(scene, view, opts))
    }

    /// Drop every entry whose fingerprint differs from `keep`.
    pub fn retain_only(&mut self, keep: SceneFingerprint) {
        self.entries.retain(|(fp, _, _), _| *fp == keep);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
