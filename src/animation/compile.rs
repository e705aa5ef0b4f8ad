//! Animation compiler: one [`AnimationNode`] in, three parallel descriptors out.
//!
//! Pure and deterministic. Dispatch is by [`AnimationKind`]; each handler resolves its own
//! timing defaults and builds the motion, style and native descriptors together.

use crate::animation::descriptor::{
    AnimationOutput, FillMode, Keyframe, KeyframeOffset, MotionDescriptor, MotionEase,
    MotionTarget, MotionTransition, MotionVariant, NativeConfig, NativeDescriptor,
    StaggerVariants, StyleDescriptor,
};
use crate::animation::easing::{BOUNCE_BEZIER, Easing};
use crate::animation::instance::AnimationNode;
use crate::animation::preset::{AnimationConfig, AnimationKind, Trigger};

const SLIDE_OFFSET_PX: f64 = 20.0;
const DEFAULT_STAGGER_S: f64 = 0.1;
const HOVER_LIFT_SCALE: f64 = 1.05;
const HOVER_LIFT_Y_PX: f64 = -2.0;
const SPRING_STIFFNESS: f64 = 100.0;
const SPRING_DAMPING: f64 = 10.0;
const SPRING_TENSION: f64 = 100.0;
const SPRING_FRICTION: f64 = 10.0;

/// Compile an animation instance using its effective (instance-over-preset) config.
#[tracing::instrument(skip(animation), fields(id = %animation.id, kind = animation.preset.kind.as_str()))]
pub fn compile_animation(animation: &AnimationNode) -> AnimationOutput {
    compile(
        animation.preset.kind,
        &animation.effective_config(),
        animation.trigger,
    )
}

/// Compile a bare `(kind, config, trigger)` triple.
pub fn compile(kind: AnimationKind, config: &AnimationConfig, trigger: Trigger) -> AnimationOutput {
    match kind {
        AnimationKind::Fade => fade(config),
        AnimationKind::Slide => slide(config),
        AnimationKind::Scale => scale(config, trigger),
        AnimationKind::Rotate => rotate(config),
        AnimationKind::Stagger => stagger(config),
        AnimationKind::Bounce => bounce(config),
        AnimationKind::Spring => spring(config),
        AnimationKind::Default => fade(config),
    }
}

/// Resolved timing for one handler.
struct Timing {
    duration: f64,
    delay: f64,
    easing: Easing,
}

impl Timing {
    fn resolve(config: &AnimationConfig, default_duration: f64, default_easing: Easing) -> Self {
        Self {
            duration: positive(config.duration).unwrap_or(default_duration),
            delay: positive(config.delay).unwrap_or(0.0),
            easing: config.easing.clone().unwrap_or(default_easing),
        }
    }

    fn tween(&self, ease: MotionEase) -> MotionTransition {
        MotionTransition {
            duration: Some(self.duration),
            delay: Some(self.delay),
            ease: Some(ease),
            ..MotionTransition::default()
        }
    }

    fn style(&self, keyframes: Vec<Keyframe>) -> StyleDescriptor {
        StyleDescriptor {
            keyframes,
            duration: self.duration,
            easing: self.easing.clone(),
            delay: self.delay,
            fill_mode: FillMode::Both,
        }
    }

    fn native(&self, kind: &str) -> NativeDescriptor {
        NativeDescriptor {
            kind: kind.to_string(),
            config: NativeConfig::timed(self.duration, self.delay),
        }
    }
}

// Zero and negative values count as "not set", matching how presets are authored.
fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x > 0.0)
}

fn ease_out() -> MotionEase {
    MotionEase::Named("easeOut".to_string())
}

fn motion_ease(easing: &Easing) -> MotionEase {
    match easing {
        Easing::Named(name) => MotionEase::Named(name.clone()),
        Easing::CubicBezier(points) => MotionEase::Bezier(*points),
    }
}

fn mount(initial: MotionTarget, animate: MotionTarget, transition: MotionTransition) -> MotionDescriptor {
    MotionDescriptor {
        initial: Some(initial),
        animate: Some(animate),
        transition: Some(transition),
        ..MotionDescriptor::default()
    }
}

fn rise_in_keyframes() -> Vec<Keyframe> {
    vec![
        Keyframe::new(KeyframeOffset::From)
            .decl("transform", format!("translateY({SLIDE_OFFSET_PX}px)"))
            .decl("opacity", "0"),
        Keyframe::new(KeyframeOffset::To)
            .decl("transform", "translateY(0)")
            .decl("opacity", "1"),
    ]
}

fn fade(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.3, Easing::ease_out());
    AnimationOutput {
        motion: mount(
            MotionTarget::opacity(0.0),
            MotionTarget::opacity(1.0),
            t.tween(ease_out()),
        ),
        style: t.style(vec![
            Keyframe::new(KeyframeOffset::From).decl("opacity", "0"),
            Keyframe::new(KeyframeOffset::To).decl("opacity", "1"),
        ]),
        native: t.native("opacity"),
    }
}

fn slide(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.4, Easing::ease_out());
    AnimationOutput {
        motion: mount(
            MotionTarget::opacity(0.0).with_y(SLIDE_OFFSET_PX),
            MotionTarget::opacity(1.0).with_y(0.0),
            t.tween(ease_out()),
        ),
        style: t.style(rise_in_keyframes()),
        native: t.native("translateY"),
    }
}

fn scale(config: &AnimationConfig, trigger: Trigger) -> AnimationOutput {
    let t = Timing::resolve(config, 0.2, Easing::ease_out());

    if trigger == Trigger::Hover {
        // Hover only lifts; there is no mount-in pop.
        let half = t.duration * 0.5;
        let lift = MotionTarget {
            scale: Some(HOVER_LIFT_SCALE),
            y: Some(HOVER_LIFT_Y_PX),
            ..MotionTarget::default()
        };
        return AnimationOutput {
            motion: MotionDescriptor {
                while_hover: Some(lift),
                transition: Some(MotionTransition {
                    duration: Some(half),
                    ease: Some(ease_out()),
                    ..MotionTransition::default()
                }),
                ..MotionDescriptor::default()
            },
            style: StyleDescriptor {
                duration: half,
                ..t.style(vec![Keyframe::new(KeyframeOffset::To).decl(
                    "transform",
                    format!("scale({HOVER_LIFT_SCALE}) translateY({HOVER_LIFT_Y_PX}px)"),
                )])
            },
            native: NativeDescriptor {
                kind: "scale".to_string(),
                config: NativeConfig::timed(half, t.delay),
            },
        };
    }

    AnimationOutput {
        motion: mount(
            MotionTarget::opacity(0.0).with_scale(0.9),
            MotionTarget::opacity(1.0).with_scale(1.0),
            t.tween(ease_out()),
        ),
        style: t.style(vec![
            Keyframe::new(KeyframeOffset::From)
                .decl("transform", "scale(0.9)")
                .decl("opacity", "0"),
            Keyframe::new(KeyframeOffset::To)
                .decl("transform", "scale(1)")
                .decl("opacity", "1"),
        ]),
        native: t.native("scale"),
    }
}

fn rotate(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.3, Easing::ease_out());
    AnimationOutput {
        motion: mount(
            MotionTarget::default().with_rotate(-5.0),
            MotionTarget::default().with_rotate(0.0),
            t.tween(motion_ease(&t.easing)),
        ),
        style: t.style(vec![
            Keyframe::new(KeyframeOffset::From).decl("transform", "rotate(-5deg)"),
            Keyframe::new(KeyframeOffset::To).decl("transform", "rotate(0deg)"),
        ]),
        native: t.native("rotate"),
    }
}

fn stagger(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.3, Easing::ease_out());
    let interval = positive(config.stagger)
        .or_else(|| positive(config.delay))
        .unwrap_or(DEFAULT_STAGGER_S);

    let container = MotionVariant {
        animate: Some(MotionTarget {
            transition: Some(MotionTransition {
                stagger_children: Some(interval),
                ..MotionTransition::default()
            }),
            ..MotionTarget::default()
        }),
        ..MotionVariant::default()
    };
    let item = MotionVariant {
        initial: Some(MotionTarget::opacity(0.0).with_y(SLIDE_OFFSET_PX)),
        animate: Some(MotionTarget::opacity(1.0).with_y(0.0)),
        transition: Some(MotionTransition {
            duration: Some(t.duration),
            ease: Some(motion_ease(&t.easing)),
            ..MotionTransition::default()
        }),
    };

    let mut native = t.native("stagger");
    native.config.stagger_delay_ms = Some(interval * 1000.0);

    AnimationOutput {
        motion: MotionDescriptor {
            variants: Some(StaggerVariants { container, item }),
            ..MotionDescriptor::default()
        },
        style: t.style(rise_in_keyframes()),
        native,
    }
}

fn bounce(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.6, Easing::bounce());
    AnimationOutput {
        motion: mount(
            MotionTarget::opacity(0.0).with_scale(0.3),
            MotionTarget::opacity(1.0).with_scale(1.0),
            t.tween(MotionEase::Bezier(BOUNCE_BEZIER)),
        ),
        style: t.style(vec![
            Keyframe::new(KeyframeOffset::Percent(0))
                .decl("transform", "scale(0.3)")
                .decl("opacity", "0"),
            Keyframe::new(KeyframeOffset::Percent(50)).decl("transform", "scale(1.05)"),
            Keyframe::new(KeyframeOffset::Percent(70)).decl("transform", "scale(0.9)"),
            Keyframe::new(KeyframeOffset::Percent(100))
                .decl("transform", "scale(1)")
                .decl("opacity", "1"),
        ]),
        native: t.native("bounce"),
    }
}

fn spring(config: &AnimationConfig) -> AnimationOutput {
    let t = Timing::resolve(config, 0.5, Easing::bounce());
    let transition = MotionTransition {
        kind: Some("spring".to_string()),
        duration: Some(t.duration),
        delay: Some(t.delay),
        stiffness: Some(SPRING_STIFFNESS),
        damping: Some(SPRING_DAMPING),
        ..MotionTransition::default()
    };

    let mut native = t.native("spring");
    native.config.tension = Some(SPRING_TENSION);
    native.config.friction = Some(SPRING_FRICTION);

    AnimationOutput {
        motion: mount(
            MotionTarget::opacity(0.0).with_scale(0.8),
            MotionTarget::opacity(1.0).with_scale(1.0),
            transition,
        ),
        style: StyleDescriptor {
            // The CSS side approximates the spring with the overshooting curve.
            easing: Easing::bounce(),
            ..t.style(vec![
                Keyframe::new(KeyframeOffset::Percent(0))
                    .decl("transform", "scale(0.8)")
                    .decl("opacity", "0"),
                Keyframe::new(KeyframeOffset::Percent(100))
                    .decl("transform", "scale(1)")
                    .decl("opacity", "1"),
            ])
        },
        native,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compile.rs"]
mod tests;
