use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;

/// Closed set of animation kinds the compiler knows how to translate.
///
/// Unknown kind strings deserialize to [`AnimationKind::Default`], which compiles like a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Fade,
    Slide,
    Scale,
    Rotate,
    Stagger,
    Bounce,
    Spring,
    #[serde(other)]
    Default,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 8] = [
        Self::Fade,
        Self::Slide,
        Self::Scale,
        Self::Rotate,
        Self::Stagger,
        Self::Bounce,
        Self::Spring,
        Self::Default,
    ];

    /// Parse a kind tag; anything unrecognized maps to [`AnimationKind::Default`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "fade" => Self::Fade,
            "slide" => Self::Slide,
            "scale" => Self::Scale,
            "rotate" => Self::Rotate,
            "stagger" => Self::Stagger,
            "bounce" => Self::Bounce,
            "spring" => Self::Spring,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Stagger => "stagger",
            Self::Bounce => "bounce",
            Self::Spring => "spring",
            Self::Default => "default",
        }
    }
}

/// Event that starts an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Mount,
    Hover,
    Tap,
    Scroll,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Hover => "hover",
            Self::Tap => "tap",
            Self::Scroll => "scroll",
        }
    }
}

/// Timing configuration. Absent (or zero) fields fall back to per-kind defaults at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Interval between staggered children, in seconds (stagger kind only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
}

impl AnimationConfig {
    pub fn timed(duration: f64, delay: f64) -> Self {
        Self {
            duration: Some(duration),
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merged(&self, other: &AnimationConfig) -> AnimationConfig {
        AnimationConfig {
            duration: other.duration.or(self.duration),
            easing: other.easing.clone().or_else(|| self.easing.clone()),
            delay: other.delay.or(self.delay),
            stagger: other.stagger.or(self.stagger),
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreset {
    pub id: String,
    /// Display label.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    #[serde(default)]
    pub config: AnimationConfig,
    /// Trigger used when the preset is instantiated without an explicit one.
    #[serde(default)]
    pub trigger: Trigger,
}

struct PresetDef {
    id: &'static str,
    name: &'static str,
    kind: AnimationKind,
    duration: f64,
    delay: f64,
    trigger: Trigger,
}

const BUILTIN: &[PresetDef] = &[
    PresetDef {
        id: "fade-in",
        name: "Fade In",
        kind: AnimationKind::Fade,
        duration: 0.3,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "slide-up",
        name: "Slide Up",
        kind: AnimationKind::Slide,
        duration: 0.4,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "scale-in",
        name: "Scale In",
        kind: AnimationKind::Scale,
        duration: 0.2,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "hover-lift",
        name: "Hover Lift",
        kind: AnimationKind::Scale,
        duration: 0.2,
        delay: 0.0,
        trigger: Trigger::Hover,
    },
    PresetDef {
        id: "stagger-children",
        name: "Stagger Children",
        kind: AnimationKind::Stagger,
        duration: 0.3,
        delay: 0.1,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "rotate-in",
        name: "Rotate In",
        kind: AnimationKind::Rotate,
        duration: 0.3,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "bounce-in",
        name: "Bounce In",
        kind: AnimationKind::Bounce,
        duration: 0.6,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
    PresetDef {
        id: "spring-in",
        name: "Spring In",
        kind: AnimationKind::Spring,
        duration: 0.5,
        delay: 0.0,
        trigger: Trigger::Mount,
    },
];

impl PresetDef {
    fn to_preset(&self) -> AnimationPreset {
        let easing = match self.kind {
            AnimationKind::Bounce | AnimationKind::Spring => Easing::bounce(),
            _ => Easing::ease_out(),
        };
        AnimationPreset {
            id: self.id.to_string(),
            name: self.name.to_string(),
            kind: self.kind,
            config: AnimationConfig {
                duration: Some(self.duration),
                easing: Some(easing),
                delay: Some(self.delay),
                stagger: None,
            },
            trigger: self.trigger,
        }
    }
}

/// Look up a built-in preset by id. Returns an owned copy; instances never alias the catalog.
pub fn lookup_preset(id: &str) -> Option<AnimationPreset> {
    BUILTIN.iter().find(|p| p.id == id).map(PresetDef::to_preset)
}

/// The full built-in catalog, in display order.
pub fn builtin_presets() -> Vec<AnimationPreset> {
    BUILTIN.iter().map(PresetDef::to_preset).collect()
}

/// Ids of the built-in catalog, in display order.
pub fn preset_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|p| p.id)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/preset.rs"]
mod tests;
