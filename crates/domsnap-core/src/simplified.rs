//! Lightweight pipeline tree built over the arena.

use serde::{Deserialize, Serialize};

use crate::arena::NodeId;

/// A kept node in the pruned tree.
///
/// Wraps an arena node id plus pipeline-local flags. Children are a strict
/// subset/transformation of the underlying node's children; after structural
/// collapsing a child's arena node may not be this node's immediate DOM
/// child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedNode {
    /// Arena index of the wrapped enhanced node.
    pub node: NodeId,
    pub children: Vec<SimplifiedNode>,
    /// Stable interactive index, assigned by the indexer.
    pub interactive_index: Option<u32>,
    /// Whether the structural path was absent from the previous capture.
    pub is_new: bool,
    /// Visually covered by later-painted content. Soft flag: the node stays
    /// in the tree but the serializer and indexer skip it.
    pub ignored_by_paint_order: bool,
    /// Subsumed by a propagating ancestor's bounding box. Set just before
    /// the node is removed from its parent's children.
    pub excluded_by_parent: bool,
    pub is_shadow_host: bool,
}

impl SimplifiedNode {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            children: Vec::new(),
            interactive_index: None,
            is_new: false,
            ignored_by_paint_order: false,
            excluded_by_parent: false,
            is_shadow_host: false,
        }
    }

    pub fn with_children(node: NodeId, children: Vec<SimplifiedNode>) -> Self {
        Self {
            children,
            ..Self::new(node)
        }
    }

    /// Depth-first visit of the whole tree.
    pub fn visit(&self, f: &mut impl FnMut(&SimplifiedNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}
