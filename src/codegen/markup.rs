use crate::codegen::literal::{js_literal, js_number};
use crate::scene::node::ComponentNode;
use crate::scene::props::{PropMap, PropValue};

pub(crate) const MARKUP_HEADER: &str = "// Generated JSX";

/// Render a tree as nested JSX-like tags, `indent_width` spaces per depth level.
pub fn render_markup(root: &ComponentNode, indent_width: usize) -> String {
    let mut lines = Vec::new();
    render_node(root, 0, indent_width, &mut lines);
    lines.join("\n")
}

fn render_node(node: &ComponentNode, depth: usize, indent_width: usize, out: &mut Vec<String>) {
    let indent = " ".repeat(depth * indent_width);
    let attrs = render_attrs(&node.props);
    let open = if attrs.is_empty() {
        format!("<{}>", node.kind)
    } else {
        format!("<{} {}>", node.kind, attrs)
    };
    let close = format!("</{}>", node.kind);

    if node.is_leaf() {
        out.push(format!("{indent}{open}{close}"));
        return;
    }

    out.push(format!("{indent}{open}"));
    for child in &node.children {
        render_node(child, depth + 1, indent_width, out);
    }
    out.push(format!("{indent}{close}"));
}

/// Attribute list in prop order. `false` is omitted, `true` is a bare name.
pub fn render_attrs(props: &PropMap) -> String {
    props
        .iter()
        .filter_map(|(key, value)| render_attr(key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_attr(key: &str, value: &PropValue) -> Option<String> {
    match value {
        PropValue::String(s) => Some(format!("{key}=\"{s}\"")),
        PropValue::Bool(true) => Some(key.to_string()),
        PropValue::Bool(false) => None,
        PropValue::Null => Some(format!("{key}={{null}}")),
        PropValue::Number(n) => Some(format!("{key}={{{}}}", js_number(*n))),
        PropValue::Icon(icon) => Some(format!("{key}={{{}}}", js_literal(icon))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/markup.rs"]
mod tests;

