use super::*;
use crate::animation::instance::AnimationNode;
use crate::animation::preset::{AnimationConfig, Trigger, lookup_preset};
use crate::foundation::ids::{AnimationId, NodeId};
use crate::scene::node::ComponentNode;

fn scene_with(animations: &[(&str, &str, &str)]) -> Scene {
    let root = ComponentNode::new("root", "basic-card")
        .with_prop("title", "Card")
        .with_prop("body", r#"<p className="text-zinc-400">Body</p>"#)
        .with_child(
            ComponentNode::new("cta", "button")
                .with_prop("variant", "primary")
                .with_prop("icon", r#"<i className="size-4"/>"#),
        );
    let mut scene = Scene::from_root(root).unwrap();
    for (id, preset, target) in animations {
        scene.add_animation(AnimationNode::from_preset(
            AnimationId::from(*id),
            &lookup_preset(preset).unwrap(),
            NodeId::from(*target),
        ));
    }
    scene
}

#[test]
fn every_view_is_deterministic() {
    let scene = scene_with(&[
        ("a1", "fade-in", "root"),
        ("a2", "hover-lift", "cta"),
        ("a3", "stagger-children", "root"),
        ("a4", "bounce-in", "cta"),
    ]);
    for framework in [Framework::FramerMotion, Framework::Css, Framework::ReactNative] {
        let opts = CodegenOpts {
            framework,
            ..CodegenOpts::default()
        };
        for view in CodeView::ALL {
            assert_eq!(generate(&scene, view, &opts), generate(&scene, view, &opts));
        }
    }
}

#[test]
fn structural_view_has_header_and_tree() {
    let out = generate(&scene_with(&[]), CodeView::Jsx, &CodegenOpts::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "// Generated JSX");
    assert!(lines[1].starts_with("<basic-card title=\"Card\""));
    assert_eq!(
        lines[2],
        r#"  <button variant="primary" icon="<i className="size-4"/>"></button>"#
    );
    assert_eq!(lines[3], "</basic-card>");
}

#[test]
fn style_view_lists_classes() {
    let out = generate(&scene_with(&[]), CodeView::Tailwind, &CodegenOpts::default());
    assert_eq!(out, "/* Tailwind Classes */\ntext-zinc-400\nsize-4");
}

#[test]
fn animation_view_separates_blocks_with_a_blank_line() {
    let scene = scene_with(&[("a1", "fade-in", "root"), ("a2", "hover-lift", "cta")]);
    let out = generate(&scene, CodeView::Animations, &CodegenOpts::default());
    let blocks: Vec<&str> = out.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("initial: { opacity: 0 }"));
    assert!(blocks[1].contains("whileHover"));
    assert!(!blocks[1].contains("initial"));
}

#[test]
fn animation_view_tolerates_dangling_targets() {
    let mut scene = scene_with(&[("a1", "slide-up", "cta")]);
    scene.remove_node(&NodeId::from("cta")).unwrap();
    assert_eq!(scene.animations().len(), 1);
    let out = generate(&scene, CodeView::Animations, &CodegenOpts::default());
    assert!(out.contains("initial: { opacity: 0, y: 20 }"));

    let css = generate(
        &scene,
        CodeView::Animations,
        &CodegenOpts {
            framework: Framework::Css,
            ..CodegenOpts::default()
        },
    );
    assert!(css.contains(".component-cta {"));
}

#[test]
fn empty_animation_list_yields_empty_view() {
    let out = generate(&scene_with(&[]), CodeView::Animations, &CodegenOpts::default());
    assert!(out.is_empty());
}

#[test]
fn combined_view_concatenates_sections_under_headers() {
    let scene = scene_with(&[("a1", "fade-in", "root")]);
    let opts = CodegenOpts::default();
    let all = generate(&scene, CodeView::All, &opts);
    let expected = format!(
        "{}\n\n{}\n\n// Animations\n{}",
        generate(&scene, CodeView::Jsx, &opts),
        generate(&scene, CodeView::Tailwind, &opts),
        generate(&scene, CodeView::Animations, &opts)
    );
    assert_eq!(all, expected);
}

#[test]
fn indent_width_is_configurable() {
    let opts = CodegenOpts {
        indent_width: 4,
        ..CodegenOpts::default()
    };
    let out = generate(&scene_with(&[]), CodeView::Jsx, &opts);
    assert!(out.contains("\n    <button"));
}

#[test]
fn tap_trigger_emits_header_only_block() {
    let mut scene = scene_with(&[]);
    scene.add_animation(
        AnimationNode::from_preset(
            AnimationId::from("t1"),
            &lookup_preset("fade-in").unwrap(),
            NodeId::from("root"),
        )
        .with_trigger(Trigger::Tap)
        .with_config(AnimationConfig::timed(0.3, 0.0)),
    );
    let out = generate(&scene, CodeView::Animations, &CodegenOpts::default());
    assert_eq!(out, "// Framer Motion Animation");
}

#[test]
fn opts_deserialize_with_defaults() {
    let opts: CodegenOpts = serde_json::from_str(r#"{ "framework": "react-native" }"#).unwrap();
    assert_eq!(opts.indent_width, 2);
    assert_eq!(opts.framework, Framework::ReactNative);
}
