//! Per-framework emission of compiled animations.
//!
//! Framer Motion covers mount and hover triggers; the CSS and React Native emitters only
//! produce code for mount-triggered animations and emit just their header otherwise.

use serde::{Deserialize, Serialize};

use crate::animation::compile::compile_animation;
use crate::animation::descriptor::{MotionDescriptor, NativeDescriptor, StyleDescriptor};
use crate::animation::instance::AnimationNode;
use crate::animation::preset::Trigger;
use crate::codegen::literal::js_literal;
use crate::foundation::ids::NodeId;

/// Target framework for animation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    #[default]
    FramerMotion,
    Css,
    ReactNative,
}

/// Emit one animation for `framework`.
pub fn animation_code(animation: &AnimationNode, framework: Framework) -> String {
    let output = compile_animation(animation);
    match framework {
        Framework::FramerMotion => motion_code(animation.trigger, &output.motion),
        Framework::Css => css_code(animation, &output.style),
        Framework::ReactNative => native_code(animation.trigger, &output.native),
    }
}

/// All animations targeting `target`, emitted for `framework` and joined by a blank line.
/// Empty when nothing targets the node.
pub fn component_animation_code(
    target: &NodeId,
    animations: &[AnimationNode],
    framework: Framework,
) -> String {
    animations
        .iter()
        .filter(|a| a.targets(target))
        .map(|a| animation_code(a, framework).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn motion_code(trigger: Trigger, motion: &MotionDescriptor) -> String {
    let mut code = String::from("// Framer Motion Animation\n");

    let mut fields: Vec<(&str, String)> = Vec::new();
    match trigger {
        Trigger::Mount => {
            if let Some(v) = &motion.initial {
                fields.push(("initial", js_literal(v)));
            }
            if let Some(v) = &motion.animate {
                fields.push(("animate", js_literal(v)));
            }
            if let Some(v) = &motion.transition {
                fields.push(("transition", js_literal(v)));
            }
            if let Some(v) = &motion.variants {
                fields.push(("variants", js_literal(v)));
            }
        }
        Trigger::Hover => {
            if let Some(v) = &motion.while_hover {
                fields.push(("whileHover", js_literal(v)));
            }
            if let Some(v) = &motion.transition {
                fields.push(("transition", js_literal(v)));
            }
        }
        Trigger::Tap | Trigger::Scroll => return code,
    }

    code.push_str("const motionProps = {\n");
    for (key, value) in fields {
        code.push_str(&format!("  {key}: {value},\n"));
    }
    code.push_str("}\n");
    code
}

pub fn css_code(animation: &AnimationNode, style: &StyleDescriptor) -> String {
    let mut code = String::from("/* CSS Animation */\n");
    if animation.trigger != Trigger::Mount {
        return code;
    }

    let name = &animation.preset.id;
    code.push_str(&format!(".component-{} {{\n", animation.target));
    code.push_str(&format!("  animation: {name} {};\n", style.timing_css()));
    code.push_str("}\n\n");
    code.push_str(&format!("@keyframes {name} {{\n"));
    for frame in &style.keyframes {
        code.push_str(&format!("  {}\n", frame.to_css()));
    }
    code.push_str("}\n");
    code
}

pub fn native_code(trigger: Trigger, native: &NativeDescriptor) -> String {
    let mut code = String::from("// React Native Animation\n");
    if trigger != Trigger::Mount {
        return code;
    }

    code.push_str("import { Animated } from 'react-native';\n\n");
    code.push_str("const animatedValue = new Animated.Value(0);\n\n");
    code.push_str(&format!("Animated.{}(animatedValue, {{\n", native.kind));
    for (key, value) in native.config.entries() {
        code.push_str(&format!("  {key}: {value},\n"));
    }
    code.push_str("}).start();\n");
    code
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/motion.rs"]
mod tests;
