//! Tree simplifier: first recursive pass.
//!
//! Prunes the raw tree down to nodes worth keeping: visible, scrollable,
//! shadow-hosting, iframe-hosting, or textual. Shadow content is never
//! silently dropped.

use domsnap_snapshot::NodeKind;

use crate::arena::{DomArena, NodeId};
use crate::simplified::SimplifiedNode;

/// Tags whose subtrees carry nothing useful for an acting agent.
const DISABLED_TAGS: [&str; 4] = ["head", "style", "script", "noscript"];

/// Simplify the subtree rooted at `id`. Returns `None` when nothing under
/// it is worth keeping.
pub fn simplify(arena: &DomArena, id: NodeId) -> Option<SimplifiedNode> {
    let node = arena.node(id);
    match node.kind {
        // Documents are pass-throughs: take the first child that yields
        // anything.
        NodeKind::Document => node
            .children
            .iter()
            .find_map(|&child| simplify(arena, child)),

        // Shadow roots are always retained when they yield children, so
        // shadow content survives even when the host fails its own checks.
        NodeKind::DocumentFragment => {
            let children = simplify_children(arena, &node.children);
            if children.is_empty() {
                None
            } else {
                Some(SimplifiedNode::with_children(id, children))
            }
        }

        NodeKind::Element => simplify_element(arena, id),

        NodeKind::Text => {
            if node.is_visible && node.node_value.trim().len() > 1 {
                Some(SimplifiedNode::new(id))
            } else {
                None
            }
        }

        NodeKind::Comment | NodeKind::Doctype | NodeKind::Other => None,
    }
}

fn simplify_element(arena: &DomArena, id: NodeId) -> Option<SimplifiedNode> {
    let node = arena.node(id);
    if DISABLED_TAGS.contains(&node.tag_name.as_str()) {
        return None;
    }

    // Iframe budget sentinels carry no subtree but must reach the output.
    if node.is_truncated_frame() {
        return Some(SimplifiedNode::new(id));
    }

    // Frames with an attached document flatten the boundary: traversal
    // recurses into the nested document's children, while the iframe node
    // itself stays in the tree for identity and markers.
    if node.is_iframe() {
        if let Some(content) = node.content_document {
            let doc_children = &arena.node(content).children;
            let children = simplify_children(arena, doc_children);
            if !children.is_empty() {
                return Some(SimplifiedNode::with_children(id, children));
            }
        }
    }

    // Shadow roots come first so shadow content precedes light-DOM children.
    let mut children = simplify_children(arena, &node.shadow_roots);
    children.extend(simplify_children(arena, &node.children));

    // aria-*/pseudo* attributes carry semantic state worth surfacing even
    // when the raw visibility check fails.
    let visible = node.is_visible || node.has_aria_or_pseudo_attributes();
    let keep_self = visible || node.is_scrollable() || node.is_shadow_host();

    if !keep_self && children.is_empty() {
        return None;
    }

    let mut simplified = SimplifiedNode::with_children(id, children);
    simplified.is_shadow_host = node.is_shadow_host();
    Some(simplified)
}

fn simplify_children(arena: &DomArena, ids: &[NodeId]) -> Vec<SimplifiedNode> {
    ids.iter().filter_map(|&c| simplify(arena, c)).collect()
}

#[cfg(test)]
#[path = "simplify_tests.rs"]
mod tests;
