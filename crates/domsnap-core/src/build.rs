//! Arena construction from a raw snapshot tree.

use tracing::{debug, warn};

use domsnap_snapshot::{NodeKind, RawNode};

use crate::arena::{DomArena, EnhancedNode, FrameTruncation, NodeId};
use crate::compound;
use crate::options::SerializerOptions;

/// Build the enhanced-node arena for one snapshot.
///
/// Returns the arena and the root's arena index. Nested documents are
/// expanded in place with cumulative frame offsets applied to
/// `absolute_position`, subject to the iframe depth/count budgets.
pub fn build_arena(root: &RawNode, options: &SerializerOptions) -> (DomArena, NodeId) {
    let mut builder = ArenaBuilder {
        arena: DomArena::new(),
        options,
        iframe_count: 0,
    };
    let root_id = builder.add_node(root, None, (0.0, 0.0), 0);
    let mut arena = builder.arena;
    compute_structural_paths(&mut arena, root_id);
    debug!(nodes = arena.len(), iframes = builder.iframe_count, "built enhanced node arena");
    (arena, root_id)
}

struct ArenaBuilder<'a> {
    arena: DomArena,
    options: &'a SerializerOptions,
    iframe_count: usize,
}

impl ArenaBuilder<'_> {
    fn add_node(
        &mut self,
        raw: &RawNode,
        parent: Option<NodeId>,
        offset: (f64, f64),
        iframe_depth: usize,
    ) -> NodeId {
        let tag_name = match raw.kind {
            NodeKind::Element => raw.node_name.to_ascii_lowercase(),
            kind => kind.literal().to_string(),
        };
        let absolute_position = raw.bounds().map(|b| b.offset_by(offset.0, offset.1));
        let compound_children = if raw.kind == NodeKind::Element {
            compound::synthesize(&tag_name, &raw.attributes)
        } else {
            Vec::new()
        };

        let id = self.arena.push(EnhancedNode {
            id: 0, // fixed up below
            node_id: raw.node_id,
            backend_node_id: raw.backend_node_id,
            kind: raw.kind,
            tag_name,
            node_value: raw.node_value.clone(),
            attributes: raw.attributes.clone(),
            parent,
            children: Vec::new(),
            shadow_roots: Vec::new(),
            shadow_root_type: raw.shadow_root_type.clone(),
            content_document: None,
            frame_id: raw.frame_id.clone(),
            ax: raw.ax.clone(),
            layout: raw.layout.clone(),
            is_visible: raw.is_visible.unwrap_or(false),
            absolute_position,
            scroll_info: raw.scroll_info,
            scrollable_hint: raw.is_scrollable.unwrap_or(false),
            structural_path: String::new(),
            compound_children,
            truncated_frame: None,
        });
        self.arena.node_mut(id).id = id;

        let children: Vec<NodeId> = raw
            .children
            .iter()
            .map(|child| self.add_node(child, Some(id), offset, iframe_depth))
            .collect();
        self.arena.node_mut(id).children = children;

        let shadow_roots: Vec<NodeId> = raw
            .shadow_roots
            .iter()
            .map(|shadow| self.add_node(shadow, Some(id), offset, iframe_depth))
            .collect();
        self.arena.node_mut(id).shadow_roots = shadow_roots;

        if let Some(content) = raw.content_document.as_deref() {
            if iframe_depth >= self.options.max_iframe_depth
                || self.iframe_count >= self.options.max_iframe_count
            {
                let truncation = if iframe_depth >= self.options.max_iframe_depth {
                    FrameTruncation::DepthLimit
                } else {
                    FrameTruncation::CountLimit
                };
                warn!(
                    depth = iframe_depth,
                    count = self.iframe_count,
                    reason = truncation.as_str(),
                    "iframe budget exceeded, emitting sentinel"
                );
                self.arena.node_mut(id).truncated_frame = Some(truncation);
            } else {
                self.iframe_count += 1;
                // Children of the nested document are positioned relative to
                // the frame; shift them into the outer coordinate space.
                let child_offset = self
                    .arena
                    .node(id)
                    .absolute_position
                    .map(|b| (b.x, b.y))
                    .unwrap_or(offset);
                let content_id = self.add_node(content, Some(id), child_offset, iframe_depth + 1);
                self.arena.node_mut(id).content_document = Some(content_id);
            }
        }

        id
    }
}

/// Compute structural paths for the whole arena, top-down from the root.
///
/// Segment grammar: elements contribute `tag[n]` with `n` the 1-based
/// ordinal among same-tag siblings; shadow roots contribute a
/// `shadow-root[n]` marker segment; documents contribute nothing, so paths
/// stay stable across iframe flattening.
fn compute_structural_paths(arena: &mut DomArena, root: NodeId) {
    let mut stack = vec![(root, String::new())];
    while let Some((id, parent_path)) = stack.pop() {
        let path = match segment_for(arena, id) {
            Some(segment) if parent_path.is_empty() => segment,
            Some(segment) => format!("{parent_path}/{segment}"),
            None => parent_path.clone(),
        };
        arena.node_mut(id).structural_path = path.clone();

        let node = arena.node(id);
        let mut next: Vec<NodeId> = Vec::with_capacity(
            node.children.len() + node.shadow_roots.len() + usize::from(node.content_document.is_some()),
        );
        next.extend(&node.children);
        next.extend(&node.shadow_roots);
        next.extend(node.content_document);
        for child in next {
            stack.push((child, path.clone()));
        }
    }
}

fn segment_for(arena: &DomArena, id: NodeId) -> Option<String> {
    let node = arena.node(id);
    match node.kind {
        NodeKind::Document => None,
        NodeKind::DocumentFragment => {
            let ordinal = sibling_ordinal(arena, id, |n| n.is_shadow_root());
            Some(format!("shadow-root[{ordinal}]"))
        }
        NodeKind::Element => {
            let tag = node.tag_name.clone();
            let ordinal = sibling_ordinal(arena, id, |n| n.is_element() && n.tag_name == tag);
            Some(format!("{tag}[{ordinal}]"))
        }
        _ => {
            let literal = node.kind.literal();
            let kind = node.kind;
            let ordinal = sibling_ordinal(arena, id, |n| n.kind == kind);
            Some(format!("{literal}[{ordinal}]"))
        }
    }
}

/// 1-based position of `id` among matching siblings in whichever list of the
/// parent holds it.
fn sibling_ordinal(
    arena: &DomArena,
    id: NodeId,
    matches: impl Fn(&EnhancedNode) -> bool,
) -> usize {
    let Some(parent) = arena.node(id).parent else {
        return 1;
    };
    let parent_node = arena.node(parent);
    let siblings: &[NodeId] = if parent_node.children.contains(&id) {
        &parent_node.children
    } else if parent_node.shadow_roots.contains(&id) {
        &parent_node.shadow_roots
    } else {
        return 1; // content document, alone in its slot
    };

    let mut ordinal = 0;
    for &sibling in siblings {
        if matches(arena.node(sibling)) {
            ordinal += 1;
        }
        if sibling == id {
            break;
        }
    }
    ordinal.max(1)
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
