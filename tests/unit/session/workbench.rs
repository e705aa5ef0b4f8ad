use super::*;
use crate::animation::preset::{AnimationKind, Trigger};
use crate::registry::builtin::BuiltinRegistry;

fn bench() -> Workbench<BuiltinRegistry> {
    Workbench::bootstrap(BuiltinRegistry, "button").unwrap()
}

#[test]
fn bootstrap_builds_button_scene_with_fade_in() {
    let wb = bench();
    let scene = wb.scene();
    assert_eq!(scene.root().id, NodeId::from(ROOT_ID));
    assert_eq!(scene.root().kind, "button");
    assert_eq!(scene.root().props["variant"], PropValue::from("primary"));
    assert_eq!(scene.animations().len(), 1);
    assert_eq!(scene.animations()[0].preset.id, DEFAULT_PRESET);
    assert_eq!(scene.animations()[0].target, NodeId::from(ROOT_ID));
}

#[test]
fn bootstrap_rejects_unknown_type() {
    assert!(Workbench::bootstrap(BuiltinRegistry, "carousel").is_err());
}

#[test]
fn set_animation_keeps_one_per_target() {
    let mut wb = bench();
    let root = NodeId::from(ROOT_ID);
    wb.set_animation(&root, "hover-lift").unwrap();
    wb.set_animation(&root, "slide-up").unwrap();
    assert_eq!(wb.scene().animations().len(), 1);
    let current = wb.current_animation(&root).unwrap();
    assert_eq!(current.preset.kind, AnimationKind::Slide);
    assert_eq!(current.trigger, Trigger::Mount);

    assert!(wb.set_animation(&root, "wobble").is_none());
    assert!(wb.current_animation(&root).is_none());
}

#[test]
fn set_animation_only_replaces_on_its_target() {
    let mut wb = bench();
    let root = NodeId::from(ROOT_ID);
    wb.scene_mut()
        .add_child(&root, ComponentNode::new("label", "span"))
        .unwrap();
    wb.set_animation(&NodeId::from("label"), "scale-in").unwrap();
    wb.set_animation(&root, "slide-up").unwrap();
    assert_eq!(wb.scene().animations().len(), 2);

    wb.clear_animations(&root);
    assert_eq!(wb.scene().animations().len(), 1);
}

#[test]
fn set_prop_targets_selection_or_root() {
    let mut wb = bench();
    let root = NodeId::from(ROOT_ID);
    wb.set_prop("size", PropValue::from("lg"));
    assert_eq!(wb.scene().root().props["size"], PropValue::from("lg"));

    wb.scene_mut()
        .add_child(&root, ComponentNode::new("label", "span"))
        .unwrap();
    wb.select(&NodeId::from("label"));
    wb.set_prop("children", PropValue::from("Hi"));
    let label = wb.scene().node(&NodeId::from("label")).unwrap();
    assert_eq!(label.props["children"], PropValue::from("Hi"));
}

#[test]
fn change_component_resets_props_and_keeps_animations() {
    let mut wb = bench();
    wb.change_component("basic-card").unwrap();
    let root = wb.scene().root();
    assert_eq!(root.kind, "basic-card");
    assert_eq!(root.props["title"], PropValue::from("Card Title"));
    assert!(!root.props.contains_key("variant"));
    assert_eq!(wb.scene().animations().len(), 1);

    assert!(wb.change_component("carousel").is_err());
    assert_eq!(wb.scene().root().kind, "basic-card");
}

#[test]
fn generate_uses_current_view_and_cache() {
    let mut wb = bench();
    wb.set_view(CodeView::Animations);
    let a = wb.generate();
    let b = wb.generate();
    assert_eq!(a, b);
    assert!(a.contains("initial: { opacity: 0 }"));
    assert_eq!(wb.cache_stats().hits, 1);

    wb.set_prop("size", PropValue::from("xl"));
    wb.set_view(CodeView::Jsx);
    assert!(wb.generate().contains("size=\"xl\""));
    assert_eq!(wb.cache_stats().entries, 1);
}

#[test]
fn current_animation_accepts_a_temporary_target() {
    let mut wb = bench();
    let current = wb.current_animation(&NodeId::from(ROOT_ID));
    assert_eq!(current.map(|a| a.preset.id.as_str()), Some(DEFAULT_PRESET));

    wb.set_animation(&NodeId::from(ROOT_ID), "scale-in").unwrap();
    let kind = wb.current_animation(&NodeId::from(ROOT_ID)).map(|a| a.preset.kind);
    assert_eq!(kind, Some(AnimationKind::Scale));
    assert!(wb.current_animation(&NodeId::from("ghost")).is_none());
}
