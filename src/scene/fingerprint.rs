use xxhash_rust::xxh3::Xxh3;

use crate::animation::easing::Easing;
use crate::animation::instance::AnimationNode;
use crate::animation::preset::AnimationConfig;
use crate::scene::node::ComponentNode;
use crate::scene::props::PropValue;

const XXH3_SEED: u64 = 0x5ce4_e1f0_a9d3_7b21;

/// Stable fingerprint of everything that influences generated code.
///
/// Timestamps, node metadata and the current selection are not hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub(crate) fn fingerprint_scene(root: &ComponentNode, animations: &[AnimationNode]) -> SceneFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, root);
    h.write_u64(animations.len() as u64);
    for anim in animations {
        write_animation(&mut h, anim);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    // Length-prefixed so adjacent strings cannot alias.
    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(x) => {
                self.write_u8(1);
                self.write_f64(x);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(self) -> SceneFingerprint {
        let v = self.inner.digest128();
        SceneFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &ComponentNode) {
    h.write_str(node.id.as_str());
    h.write_str(&node.kind);
    h.write_u64(node.props.len() as u64);
    for (key, value) in &node.props {
        h.write_str(key);
        write_prop(h, value);
    }
    h.write_u64(node.children.len() as u64);
    for child in &node.children {
        write_node(h, child);
    }
}

fn write_prop(h: &mut StableHasher, value: &PropValue) {
    match value {
        PropValue::Null => h.write_u8(0),
        PropValue::Bool(b) => {
            h.write_u8(1);
            h.write_bool(*b);
        }
        PropValue::Number(n) => {
            h.write_u8(2);
            h.write_f64(*n);
        }
        PropValue::String(s) => {
            h.write_u8(3);
            h.write_str(s);
        }
        PropValue::Icon(icon) => {
            h.write_u8(4);
            h.write_str(&icon.pack);
            h.write_str(&icon.icon);
        }
    }
}

fn write_animation(h: &mut StableHasher, anim: &AnimationNode) {
    h.write_str(anim.id.as_str());
    h.write_str(&anim.preset.id);
    h.write_str(&anim.preset.name);
    h.write_str(anim.preset.kind.as_str());
    write_config(h, &anim.preset.config);
    h.write_str(anim.preset.trigger.as_str());
    write_config(h, &anim.config);
    h.write_str(anim.trigger.as_str());
    h.write_str(anim.target.as_str());
}

fn write_config(h: &mut StableHasher, config: &AnimationConfig) {
    h.write_opt_f64(config.duration);
    h.write_opt_f64(config.delay);
    h.write_opt_f64(config.stagger);
    match &config.easing {
        None => h.write_u8(0),
        Some(Easing::Named(name)) => {
            h.write_u8(1);
            h.write_str(name);
        }
        Some(Easing::CubicBezier(points)) => {
            h.write_u8(2);
            for p in points {
                h.write_f64(*p);
            }
        }
    }
}
