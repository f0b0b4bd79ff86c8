//! Tree optimizer: third pass.
//!
//! Collapses structurally uninteresting wrapper nodes to shrink depth.
//! A wrapper with a single surviving child is bypassed; a wrapper with no
//! surviving children is dropped. The underlying arena nodes are untouched.

use domsnap_snapshot::NodeKind;

use crate::arena::DomArena;
use crate::interactive::InteractivityCache;
use crate::simplified::SimplifiedNode;

/// Optimize bottom-up. Returns `None` when the node and its subtree carry
/// no information.
pub fn optimize(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    mut simplified: SimplifiedNode,
) -> Option<SimplifiedNode> {
    let children = std::mem::take(&mut simplified.children);
    simplified.children = children
        .into_iter()
        .filter_map(|child| optimize(arena, cache, child))
        .collect();

    if must_keep(arena, cache, &simplified) || simplified.children.len() > 1 {
        return Some(simplified);
    }

    match simplified.children.len() {
        // Structural bypass: the wrapper's attributes leave the tree, the
        // child takes its place.
        1 => simplified.children.pop(),
        _ => None,
    }
}

fn must_keep(arena: &DomArena, cache: &mut InteractivityCache, simplified: &SimplifiedNode) -> bool {
    let node = arena.node(simplified.node);
    node.kind == NodeKind::Text
        || node.is_shadow_root()
        || node.is_iframe()
        || node.is_truncated_frame()
        || arena.is_actually_scrollable(simplified.node)
        || cache.is_interactive(arena, simplified.node)
}

#[cfg(test)]
#[path = "optimize_tests.rs"]
mod tests;
