//! Containment filter: fourth pass.
//!
//! Links and buttons project their bounding box onto their subtree. A
//! non-interactive, non-scrollable descendant whose rectangle is subsumed by
//! the active projected box is redundant with the ancestor as an actionable
//! target (decorative icons inside a link) and is removed outright.

use tracing::trace;

use domsnap_snapshot::BoundingBox;

use crate::arena::DomArena;
use crate::interactive::InteractivityCache;
use crate::simplified::SimplifiedNode;

/// Element types whose bounds propagate onto descendants.
const PROPAGATING_TAGS: [&str; 2] = ["a", "button"];

/// Remove contained descendants under propagating elements.
pub fn apply_containment_filter(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    root: &mut SimplifiedNode,
    threshold: f64,
) {
    filter_node(arena, cache, root, None, threshold);
}

fn filter_node(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    simplified: &mut SimplifiedNode,
    active: Option<BoundingBox>,
    threshold: f64,
) {
    // A nested propagating element overrides the context for its subtree;
    // only one ancestor's bounds are active at a time.
    let node = arena.node(simplified.node);
    let context = if node.is_element() && PROPAGATING_TAGS.contains(&node.tag_name.as_str()) {
        node.absolute_position.or(active)
    } else {
        active
    };

    let mut children = std::mem::take(&mut simplified.children);
    children.retain_mut(|child| {
        if let Some(bounds) = context {
            if is_contained(arena, cache, child, &bounds, threshold) {
                child.excluded_by_parent = true;
                trace!(node = child.node, "excluded by ancestor bounds");
                return false;
            }
        }
        filter_node(arena, cache, child, context, threshold);
        true
    });
    simplified.children = children;
}

fn is_contained(
    arena: &DomArena,
    cache: &mut InteractivityCache,
    child: &SimplifiedNode,
    context: &BoundingBox,
    threshold: f64,
) -> bool {
    let node = arena.node(child.node);
    if !node.is_element() {
        return false;
    }
    let Some(bounds) = node.absolute_position else {
        return false;
    };

    // Interactive nodes stay unless paint order already buried them;
    // scroll containers always stay.
    if cache.is_interactive(arena, child.node) && !child.ignored_by_paint_order {
        return false;
    }
    if arena.is_actually_scrollable(child.node) {
        return false;
    }

    let area = bounds.area();
    if area == 0.0 {
        // Zero-area elements are trivially contained.
        return true;
    }
    context.intersection_area(&bounds) / area >= threshold
}

#[cfg(test)]
#[path = "containment_tests.rs"]
mod tests;
