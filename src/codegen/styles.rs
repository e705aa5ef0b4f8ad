use indexmap::IndexSet;

use crate::scene::node::ComponentNode;

pub(crate) const STYLES_HEADER: &str = "/* Tailwind Classes */";

const CLASS_ATTR: &str = "className=\"";

/// Collect class lists embedded as `className="..."` inside string props, depth-first,
/// de-duplicated in first-seen order.
pub fn collect_class_lists(root: &ComponentNode) -> Vec<String> {
    let mut seen = IndexSet::new();
    root.walk(&mut |node, _| {
        for value in node.props.values() {
            if let Some(classes) = value.as_str().and_then(embedded_class_list) {
                seen.insert(classes.to_string());
            }
        }
    });
    seen.into_iter().collect()
}

/// First non-empty `className="..."` payload in `s`. Unterminated or empty payloads are skipped.
pub fn embedded_class_list(s: &str) -> Option<&str> {
    let mut rest = s;
    while let Some(start) = rest.find(CLASS_ATTR) {
        let body = &rest[start + CLASS_ATTR.len()..];
        let end = body.find('"')?;
        if end > 0 {
            return Some(&body[..end]);
        }
        rest = &body[end + 1..];
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/styles.rs"]
mod tests;
