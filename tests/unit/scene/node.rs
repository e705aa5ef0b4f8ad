use super::*;

fn card_tree() -> ComponentNode {
    ComponentNode::new("card", "basic-card")
        .with_prop("title", "Card Title")
        .with_child(
            ComponentNode::new("row", "div")
                .with_child(ComponentNode::new("ok", "button"))
                .with_child(ComponentNode::new("cancel", "button")),
        )
        .with_child(ComponentNode::new("footer", "div"))
}

#[test]
fn count_includes_root_and_descendants() {
    assert_eq!(card_tree().count(), 5);
    assert_eq!(ComponentNode::new("x", "button").count(), 1);
}

#[test]
fn ids_are_pre_order() {
    let tree = card_tree();
    let ids: Vec<&str> = tree.ids().into_iter().map(NodeId::as_str).collect();
    assert_eq!(ids, ["card", "row", "ok", "cancel", "footer"]);
}

#[test]
fn walk_reports_depth() {
    let tree = card_tree();
    let mut depths = Vec::new();
    tree.walk(&mut |n, d| depths.push((n.id.as_str().to_string(), d)));
    assert_eq!(depths[0], ("card".to_string(), 0));
    assert_eq!(depths[2], ("ok".to_string(), 2));
    assert_eq!(depths[4], ("footer".to_string(), 1));
}

#[test]
fn find_and_find_mut_resolve_nested_nodes() {
    let mut tree = card_tree();
    assert_eq!(tree.find(&NodeId::from("cancel")).unwrap().kind, "button");
    assert!(tree.find(&NodeId::from("missing")).is_none());

    tree.find_mut(&NodeId::from("ok"))
        .unwrap()
        .props
        .insert("variant".to_string(), PropValue::from("primary"));
    assert_eq!(
        tree.find(&NodeId::from("ok")).unwrap().props["variant"],
        PropValue::from("primary")
    );
}

#[test]
fn remove_descendant_detaches_subtree_but_never_self() {
    let mut tree = card_tree();
    let row = tree.remove_descendant(&NodeId::from("row")).unwrap();
    assert_eq!(row.count(), 3);
    assert_eq!(tree.count(), 2);
    assert!(tree.remove_descendant(&NodeId::from("card")).is_none());
}

#[test]
fn duplicate_ids_are_detected() {
    let tree = card_tree().with_child(ComponentNode::new("ok", "button"));
    assert_eq!(tree.first_duplicate_id(), Some(&NodeId::from("ok")));
    assert!(card_tree().first_duplicate_id().is_none());
}

#[test]
fn json_uses_type_key_and_keeps_prop_order() {
    let node = ComponentNode::new("root", "button")
        .with_prop("variant", "primary")
        .with_prop("size", "md")
        .with_prop("leftIcon", PropValue::Null);
    let s = serde_json::to_string(&node).unwrap();
    assert!(s.contains(r#""type":"button""#));
    assert!(s.find("variant").unwrap() < s.find("size").unwrap());

    let de: ComponentNode = serde_json::from_str(&s).unwrap();
    assert_eq!(de, node);
}
