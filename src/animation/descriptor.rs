//! Output types of the animation compiler.
//!
//! One compiled animation yields three parallel descriptors: a motion-library description
//! (framer-motion vocabulary), a CSS keyframe animation and a native (React Native `Animated`)
//! call description.

use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;
use crate::codegen::literal::js_number;

/// All three representations of one compiled animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOutput {
    pub motion: MotionDescriptor,
    pub style: StyleDescriptor,
    pub native: NativeDescriptor,
}

/// Motion props. Which fields are populated depends on kind and trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub while_hover: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub while_tap: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<MotionTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<StaggerVariants>,
}

/// Animatable values of a motion state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// Per-state transition (used by stagger containers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<MotionTransition>,
}

impl MotionTarget {
    pub fn opacity(v: f64) -> Self {
        Self {
            opacity: Some(v),
            ..Self::default()
        }
    }

    pub fn with_y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn with_scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn with_rotate(mut self, v: f64) -> Self {
        self.rotate = Some(v);
        self
    }
}

/// Motion-library easing: a named curve or bezier control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MotionEase {
    Named(String),
    Bezier([f64; 4]),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTransition {
    /// Transition type (`"spring"`), absent for tweens.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<MotionEase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
}

/// Container/item variant pair produced by the stagger kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaggerVariants {
    pub container: MotionVariant,
    pub item: MotionVariant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<MotionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<MotionTransition>,
}

/// Position of a keyframe stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyframeOffset {
    From,
    To,
    Percent(u8),
}

impl std::fmt::Display for KeyframeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// One keyframe stop: an offset and its declarations in authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub offset: KeyframeOffset,
    pub declarations: Vec<(String, String)>,
}

impl Keyframe {
    pub fn new(offset: KeyframeOffset) -> Self {
        Self {
            offset,
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    /// `offset { prop: value; ... }` on a single line.
    pub fn to_css(&self) -> String {
        let mut out = format!("{} {{", self.offset);
        for (prop, value) in &self.declarations {
            out.push_str(&format!(" {prop}: {value};"));
        }
        out.push_str(" }");
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Forwards,
    Backwards,
    #[default]
    Both,
}

impl FillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

/// CSS keyframe animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub keyframes: Vec<Keyframe>,
    /// Seconds.
    pub duration: f64,
    pub easing: Easing,
    /// Seconds.
    pub delay: f64,
    pub fill_mode: FillMode,
}

impl StyleDescriptor {
    /// Keyframe stops, one per line.
    pub fn keyframes_css(&self) -> String {
        self.keyframes
            .iter()
            .map(Keyframe::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `duration easing delay fill-mode` as used in the `animation` shorthand.
    pub fn timing_css(&self) -> String {
        format!(
            "{}s {} {}s {}",
            js_number(self.duration),
            self.easing,
            js_number(self.delay),
            self.fill_mode.as_str()
        )
    }
}

/// Native `Animated` call: a short kind tag plus its config object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub config: NativeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub use_native_driver: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_delay_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f64>,
}

impl NativeConfig {
    pub fn timed(duration_s: f64, delay_s: f64) -> Self {
        Self {
            duration_ms: duration_s * 1000.0,
            delay_ms: delay_s * 1000.0,
            use_native_driver: true,
            stagger_delay_ms: None,
            tension: None,
            friction: None,
        }
    }

    /// Config entries in emission order, with the `Animated` API key names.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("duration", js_number(self.duration_ms)),
            ("delay", js_number(self.delay_ms)),
        ];
        if let Some(v) = self.stagger_delay_ms {
            out.push(("staggerDelay", js_number(v)));
        }
        out.push(("useNativeDriver", self.use_native_driver.to_string()));
        if let Some(v) = self.tension {
            out.push(("tension", js_number(v)));
        }
        if let Some(v) = self.friction {
            out.push(("friction", js_number(v)));
        }
        out
    }
}
