//! Paint-order occlusion filter: second pass.
//!
//! Nodes visually buried beneath later-painted opaque content (modal
//! overlays, sticky headers, stacked cards) are flagged
//! `ignored_by_paint_order`. The flag is soft: the node stays in the tree
//! for structural diagnostics, but the indexer and serializer skip it.

use std::collections::HashSet;

use tracing::debug;

use domsnap_snapshot::BoundingBox;

use crate::arena::{DomArena, NodeId};
use crate::simplified::SimplifiedNode;

/// Fraction of a node's area that must be covered before it counts as
/// occluded.
const COVERAGE_THRESHOLD: f64 = 0.99;

/// Flag occluded nodes in the simplified tree.
pub fn apply_paint_order_filter(arena: &DomArena, root: &mut SimplifiedNode) {
    let mut candidates: Vec<Candidate> = Vec::new();
    root.visit(&mut |simplified| {
        let node = arena.node(simplified.node);
        if !node.is_element() {
            return;
        }
        let (Some(bounds), Some(paint_order)) = (node.absolute_position, node.paint_order()) else {
            return;
        };
        candidates.push(Candidate {
            id: simplified.node,
            bounds,
            paint_order,
            is_occluder: is_opaque(arena, simplified.node),
        });
    });

    // Later-painted content wins: walk from topmost to bottommost,
    // accumulating opaque rects and flagging anything they already cover.
    candidates.sort_by(|a, b| b.paint_order.cmp(&a.paint_order));

    let mut covering: Vec<BoundingBox> = Vec::new();
    let mut ignored: HashSet<NodeId> = HashSet::new();
    for candidate in &candidates {
        let area = candidate.bounds.area();
        if area > 0.0 {
            let covered = covering
                .iter()
                .any(|rect| rect.intersection_area(&candidate.bounds) >= COVERAGE_THRESHOLD * area);
            if covered {
                ignored.insert(candidate.id);
            }
        }
        if candidate.is_occluder && area > 0.0 {
            covering.push(candidate.bounds);
        }
    }

    if !ignored.is_empty() {
        debug!(count = ignored.len(), "nodes hidden by paint order");
    }

    root.visit_mut(&mut |simplified| {
        if ignored.contains(&simplified.node) {
            simplified.ignored_by_paint_order = true;
        }
    });
}

struct Candidate {
    id: NodeId,
    bounds: BoundingBox,
    paint_order: i64,
    is_occluder: bool,
}

/// Whether an element paints an opaque background and can therefore hide
/// content beneath it. Transparent wrappers and bare text never occlude.
fn is_opaque(arena: &DomArena, id: NodeId) -> bool {
    let node = arena.node(id);
    match node.style("background-color") {
        None => false,
        Some(color) => {
            let color = color.trim();
            !color.is_empty()
                && color != "transparent"
                && color != "rgba(0, 0, 0, 0)"
                && !color.ends_with(", 0)")
        }
    }
}

impl SimplifiedNode {
    /// Depth-first mutable visit. Lives here because only the flagging
    /// passes need it.
    pub(crate) fn visit_mut(&mut self, f: &mut impl FnMut(&mut SimplifiedNode)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }
}

#[cfg(test)]
#[path = "paint_order_tests.rs"]
mod tests;
