use super::*;
use crate::scene::props::PropValue;

#[test]
fn extracts_embedded_class_list() {
    assert_eq!(
        embedded_class_list(r#"<span className="px-4 py-2">x</span>"#),
        Some("px-4 py-2")
    );
    assert_eq!(embedded_class_list("px-4 py-2"), None);
    assert_eq!(embedded_class_list(r#"className="unterminated"#), None);
    assert_eq!(
        embedded_class_list(r#"className="" then className="a b""#),
        Some("a b")
    );
}

#[test]
fn collects_depth_first_and_dedups_in_first_seen_order() {
    let tree = ComponentNode::new("root", "div")
        .with_prop("slot", r#"<i className="flex gap-2"/>"#)
        .with_prop("count", 3)
        .with_child(
            ComponentNode::new("a", "button")
                .with_prop("icon", r#"<b className="text-sm"/>"#)
                .with_prop("flag", true),
        )
        .with_child(
            ComponentNode::new("b", "button")
                .with_prop("icon", r#"<b className="flex gap-2"/>"#)
                .with_prop("empty", PropValue::Null),
        );
    assert_eq!(collect_class_lists(&tree), ["flex gap-2", "text-sm"]);
}

#[test]
fn no_matches_is_empty() {
    let tree = ComponentNode::new("root", "button").with_prop("variant", "primary");
    assert!(collect_class_lists(&tree).is_empty());
}
