//! Text serializer: renders the filtered tree as indented, tagged lines.
//!
//! One element per line, tab indentation per depth level, each element line
//! terminated by `/>`. Interactive nodes carry `[n]` (or `*[n]` when new),
//! scroll containers `|SCROLL|`, frames `|IFRAME|`, shadow hosts a
//! `|SHADOW(open)|`/`|SHADOW(closed)|` prefix. Shadow fragments wrap their
//! children in `[Shadow Content]` markers.

use domsnap_snapshot::NodeKind;

use crate::arena::{DomArena, EnhancedNode};
use crate::options::SerializerOptions;
use crate::simplified::SimplifiedNode;

/// Longest attribute value shown before truncation.
const MAX_ATTRIBUTE_LENGTH: usize = 100;

/// Values longer than this that repeat across attributes collapse to their
/// first occurrence.
const DEDUP_MIN_LENGTH: usize = 5;

/// Render the whole filtered tree.
pub fn serialize_text(arena: &DomArena, root: &SimplifiedNode, options: &SerializerOptions) -> String {
    let mut out = String::new();
    write_node(arena, root, options, 0, &mut out);
    out
}

fn write_node(
    arena: &DomArena,
    simplified: &SimplifiedNode,
    options: &SerializerOptions,
    depth: usize,
    out: &mut String,
) {
    // Paint-buried nodes keep their structural slot but render nothing
    // themselves; their children speak for themselves at the same depth.
    if simplified.ignored_by_paint_order {
        for child in &simplified.children {
            write_node(arena, child, options, depth, out);
        }
        return;
    }

    let node = arena.node(simplified.node);
    match node.kind {
        NodeKind::Text => {
            let trimmed = node.node_value.trim();
            if !trimmed.is_empty() {
                push_indent(out, depth);
                out.push_str(trimmed);
                out.push('\n');
            }
        }
        NodeKind::DocumentFragment => {
            push_indent(out, depth);
            out.push_str("[Shadow Content]\n");
            for child in &simplified.children {
                write_node(arena, child, options, depth + 1, out);
            }
            push_indent(out, depth);
            out.push_str("[/Shadow Content]\n");
        }
        NodeKind::Element => {
            write_element(arena, simplified, node, options, depth, out);
            for child in &simplified.children {
                write_node(arena, child, options, depth + 1, out);
            }
        }
        _ => {
            for child in &simplified.children {
                write_node(arena, child, options, depth, out);
            }
        }
    }
}

fn write_element(
    arena: &DomArena,
    simplified: &SimplifiedNode,
    node: &EnhancedNode,
    options: &SerializerOptions,
    depth: usize,
    out: &mut String,
) {
    push_indent(out, depth);

    if let Some(truncation) = node.truncated_frame {
        out.push_str(&format!("|IFRAME|<iframe truncated={}/>\n", truncation.as_str()));
        return;
    }

    if simplified.is_shadow_host {
        out.push_str(&format!("|SHADOW({})|", shadow_mode(arena, node)));
    }

    if let Some(index) = simplified.interactive_index {
        if simplified.is_new {
            out.push('*');
        }
        out.push_str(&format!("[{index}]"));
    } else if arena.is_actually_scrollable(node.id) {
        out.push_str("|SCROLL|");
    } else if node.is_iframe() {
        out.push_str("|IFRAME|");
    }

    out.push('<');
    out.push_str(&node.tag_name);
    for part in attribute_parts(arena, node, options) {
        out.push(' ');
        out.push_str(&part);
    }
    if !node.compound_children.is_empty() {
        let listing: Vec<String> = node
            .compound_children
            .iter()
            .map(|c| c.to_string())
            .collect();
        out.push_str(&format!(" compound={}", listing.join(",")));
    }
    if node.is_scrollable() {
        if let Some(scroll) = node.scroll_info {
            out.push_str(&format!(
                " scroll=\"{}px above, {}px below\"",
                scroll.pixels_above().round() as i64,
                scroll.pixels_below().round() as i64,
            ));
        }
    }
    out.push_str("/>\n");
}

fn shadow_mode(arena: &DomArena, node: &EnhancedNode) -> &'static str {
    let closed = node
        .shadow_roots
        .first()
        .and_then(|&id| arena.node(id).shadow_root_type.as_deref())
        == Some("closed");
    if closed { "closed" } else { "open" }
}

/// Filtered, deduplicated, length-capped `key=value` listing.
fn attribute_parts(arena: &DomArena, node: &EnhancedNode, options: &SerializerOptions) -> Vec<String> {
    let accessible_name = node
        .ax
        .as_ref()
        .and_then(|ax| ax.name.as_deref())
        .map(str::trim)
        .unwrap_or("");
    let own_text = arena.collect_text(node.id, MAX_ATTRIBUTE_LENGTH);
    let own_text = own_text.trim();

    let mut parts = Vec::new();
    let mut seen_values: Vec<String> = Vec::new();
    for name in &options.include_attributes {
        let Some(value) = attribute_value(node, name) else {
            continue;
        };
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        // Redundant with the element's own accessible text.
        if value == accessible_name || value == own_text {
            continue;
        }
        // Identity-bearing values repeated across attributes collapse to
        // the first occurrence.
        if value.len() > DEDUP_MIN_LENGTH && seen_values.contains(&value) {
            continue;
        }
        seen_values.push(value.clone());
        parts.push(format!("{name}={}", cap_length(&value)));
    }
    parts
}

/// Attribute lookup with accessibility-property fallback, so names like
/// `checked` or `aria-expanded` surface state the DOM attribute map lacks.
fn attribute_value(node: &EnhancedNode, name: &str) -> Option<String> {
    if let Some(value) = node.attribute(name) {
        return Some(value.to_string());
    }
    let ax = node.ax.as_ref()?;
    if name == "role" {
        return ax.role.clone();
    }
    let ax_name = name.strip_prefix("aria-").unwrap_or(name);
    ax.property(ax_name).and_then(|value| match value {
        serde_json::Value::Bool(true) => Some("true".to_string()),
        serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn cap_length(value: &str) -> String {
    if value.len() <= MAX_ATTRIBUTE_LENGTH {
        return value.to_string();
    }
    let mut cut = MAX_ATTRIBUTE_LENGTH;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &value[..cut])
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
