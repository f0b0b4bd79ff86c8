//! Enhanced DOM node arena.
//!
//! Every raw captured node becomes one [`EnhancedNode`] stored in a flat
//! [`DomArena`]. Children, shadow roots, and nested documents are referenced
//! by arena index; the parent link is a back-reference only and never
//! traversed for ownership.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use domsnap_snapshot::{AxNode, BoundingBox, LayoutInfo, NodeKind, ScrollInfo};

use crate::compound::CompoundComponent;

/// Index of a node inside a [`DomArena`].
pub type NodeId = usize;

/// Which iframe budget stopped expansion of a nested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTruncation {
    DepthLimit,
    CountLimit,
}

impl FrameTruncation {
    /// Value rendered in the sentinel line's `truncated` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameTruncation::DepthLimit => "depth-limit",
            FrameTruncation::CountLimit => "count-limit",
        }
    }
}

/// Attributes that carry element identity, used for content hashing.
const IDENTITY_ATTRIBUTES: [&str; 5] = ["id", "class", "name", "type", "role"];

/// Container tags that need the rendered-text heuristic before they count
/// as genuinely scrollable.
const GENERIC_CONTAINER_TAGS: [&str; 7] =
    ["div", "section", "main", "article", "aside", "ul", "ol"];

/// Minimum descendant text for a generic container to be actually scrollable.
const MIN_SCROLLABLE_TEXT: usize = 100;

/// Enhanced DOM node with computed, cached properties.
#[derive(Debug, Clone)]
pub struct EnhancedNode {
    /// Arena index of this node.
    pub id: NodeId,
    /// Node id from the capture. Not stable across captures.
    pub node_id: i64,
    /// Backend node id from the capture, when present.
    pub backend_node_id: Option<i64>,
    pub kind: NodeKind,
    /// Lowercase tag name for elements, kind literal otherwise.
    pub tag_name: String,
    /// Text payload for text nodes.
    pub node_value: String,
    pub attributes: HashMap<String, String>,
    /// Back-reference to the parent. Never owned.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Shadow roots hosted by this element.
    pub shadow_roots: Vec<NodeId>,
    /// "open" or "closed" when this node is itself a shadow root.
    pub shadow_root_type: Option<String>,
    /// Nested document node for iframe/frame elements.
    pub content_document: Option<NodeId>,
    pub frame_id: Option<String>,
    pub ax: Option<AxNode>,
    pub layout: Option<LayoutInfo>,
    pub is_visible: bool,
    /// Bounding rectangle translated by cumulative frame offsets.
    pub absolute_position: Option<BoundingBox>,
    pub scroll_info: Option<ScrollInfo>,
    /// Scrollability hint supplied by the capture layer.
    pub scrollable_hint: bool,
    /// Tag/ordinal path from the root, crossing shadow boundaries with an
    /// explicit marker segment. The cross-snapshot identity key.
    pub structural_path: String,
    /// Synthesized sub-components (date spinners, sliders, ...).
    pub compound_children: Vec<CompoundComponent>,
    /// Set for iframe placeholders whose nested document was not expanded
    /// because an iframe budget ran out.
    pub truncated_frame: Option<FrameTruncation>,
}

impl EnhancedNode {
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.layout
            .as_ref()
            .and_then(|l| l.styles.get(name))
            .map(|s| s.as_str())
    }

    pub fn paint_order(&self) -> Option<i64> {
        self.layout.as_ref().and_then(|l| l.paint_order)
    }

    pub fn cursor(&self) -> Option<&str> {
        self.layout.as_ref().and_then(|l| l.cursor.as_deref())
    }

    /// Whether overflow styles allow this element to scroll.
    fn has_scroll_overflow(&self) -> bool {
        ["overflow", "overflow-x", "overflow-y"].iter().any(|key| {
            matches!(self.style(key), Some("auto") | Some("scroll"))
        })
    }

    /// Scrollability as reported or styled, without the size/text checks.
    pub fn is_scrollable(&self) -> bool {
        self.scrollable_hint || self.has_scroll_overflow()
    }

    /// Whether this element hosts any shadow root.
    pub fn is_shadow_host(&self) -> bool {
        !self.shadow_roots.is_empty()
    }

    /// Whether this node is a shadow root fragment.
    pub fn is_shadow_root(&self) -> bool {
        self.kind == NodeKind::DocumentFragment
    }

    pub fn is_iframe(&self) -> bool {
        self.is_element() && matches!(self.tag_name.as_str(), "iframe" | "frame")
    }

    /// Whether this is an iframe sentinel left by a budget overrun.
    pub fn is_truncated_frame(&self) -> bool {
        self.truncated_frame.is_some()
    }

    /// Whether the element carries any `aria-*` or `pseudo*` attribute.
    /// These carry semantic state worth surfacing even when the raw
    /// visibility check fails.
    pub fn has_aria_or_pseudo_attributes(&self) -> bool {
        self.attributes
            .keys()
            .any(|k| k.starts_with("aria-") || k.starts_with("pseudo"))
    }
}

/// Flat arena of enhanced nodes.
#[derive(Debug, Default)]
pub struct DomArena {
    nodes: Vec<EnhancedNode>,
}

impl DomArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &EnhancedNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut EnhancedNode {
        &mut self.nodes[id]
    }

    pub fn push(&mut self, node: EnhancedNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnhancedNode> {
        self.nodes.iter()
    }

    /// Scrollability with false-positive suppression: requires non-zero
    /// area and scroll overflow styles, and generic containers must also
    /// render a minimum amount of text.
    pub fn is_actually_scrollable(&self, id: NodeId) -> bool {
        let node = self.node(id);
        if !node.is_element() || !node.has_scroll_overflow() {
            return false;
        }
        let has_area = node
            .absolute_position
            .is_some_and(|b| b.area() > 0.0);
        if !has_area {
            return false;
        }
        if GENERIC_CONTAINER_TAGS.contains(&node.tag_name.as_str()) {
            return self.collect_text(id, MIN_SCROLLABLE_TEXT).len() >= MIN_SCROLLABLE_TEXT;
        }
        true
    }

    /// Concatenated trimmed descendant text, capped at `limit` characters.
    /// Descends into regular children and shadow roots, not nested documents.
    pub fn collect_text(&self, id: NodeId, limit: usize) -> String {
        let mut out = String::new();
        self.collect_text_into(id, limit, &mut out);
        out
    }

    fn collect_text_into(&self, id: NodeId, limit: usize, out: &mut String) {
        if out.len() >= limit {
            return;
        }
        let node = self.node(id);
        if node.kind == NodeKind::Text {
            let trimmed = node.node_value.trim();
            if !trimmed.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(trimmed);
                if out.len() > limit {
                    // Truncate on a char boundary.
                    let mut cut = limit;
                    while !out.is_char_boundary(cut) {
                        cut += 1;
                    }
                    out.truncate(cut);
                }
            }
            return;
        }
        for &child in node.children.iter().chain(node.shadow_roots.iter()) {
            self.collect_text_into(child, limit, out);
        }
    }

    /// Hash over tag name, identity-bearing attributes, and up to the first
    /// 50 characters of descendant text. For deduplication and debugging,
    /// not for indexing.
    pub fn element_content_hash(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        let mut hasher = DefaultHasher::new();
        node.tag_name.hash(&mut hasher);
        for attr in IDENTITY_ATTRIBUTES {
            node.attribute(attr).unwrap_or("").hash(&mut hasher);
        }
        self.collect_text(id, 50).hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;
