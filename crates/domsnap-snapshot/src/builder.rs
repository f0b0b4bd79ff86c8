//! Fluent construction of raw snapshot trees.
//!
//! Capture layers assemble [`RawNode`] trees field by field; this builder
//! keeps that readable, and doubles as the fixture factory in tests.

use crate::geometry::BoundingBox;
use crate::node::{AxNode, AxProperty, LayoutInfo, NodeKind, RawNode, ScrollInfo};

/// Builder over a single [`RawNode`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: RawNode,
}

impl NodeBuilder {
    /// Element node, visible by default.
    pub fn element(tag: &str) -> Self {
        let mut node = RawNode::new(NodeKind::Element, tag);
        node.is_visible = Some(true);
        Self { node }
    }

    /// Visible text node.
    pub fn text(value: &str) -> Self {
        let mut node = RawNode::new(NodeKind::Text, "#text");
        node.node_value = value.to_string();
        node.is_visible = Some(true);
        Self { node }
    }

    pub fn document() -> Self {
        Self {
            node: RawNode::new(NodeKind::Document, "#document"),
        }
    }

    /// Shadow root fragment ("open" or "closed").
    pub fn shadow_root(mode: &str) -> Self {
        let mut node = RawNode::new(NodeKind::DocumentFragment, "#document-fragment");
        node.shadow_root_type = Some(mode.to_string());
        Self { node }
    }

    pub fn comment(value: &str) -> Self {
        let mut node = RawNode::new(NodeKind::Comment, "#comment");
        node.node_value = value.to_string();
        Self { node }
    }

    pub fn node_id(mut self, id: i64) -> Self {
        self.node.node_id = id;
        self
    }

    pub fn backend_node_id(mut self, id: i64) -> Self {
        self.node.backend_node_id = Some(id);
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.node
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.node.is_visible = Some(visible);
        self
    }

    pub fn scrollable_hint(mut self) -> Self {
        self.node.is_scrollable = Some(true);
        self
    }

    pub fn bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.layout().bounds = Some(BoundingBox::new(x, y, width, height));
        self
    }

    pub fn paint_order(mut self, order: i64) -> Self {
        self.layout().paint_order = Some(order);
        self
    }

    pub fn cursor(mut self, cursor: &str) -> Self {
        self.layout().cursor = Some(cursor.to_string());
        self
    }

    pub fn style(mut self, name: &str, value: &str) -> Self {
        self.layout()
            .styles
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn scroll_info(mut self, info: ScrollInfo) -> Self {
        self.node.scroll_info = Some(info);
        self
    }

    pub fn ax_role(mut self, role: &str) -> Self {
        self.ax().role = Some(role.to_string());
        self
    }

    pub fn ax_name(mut self, name: &str) -> Self {
        self.ax().name = Some(name.to_string());
        self
    }

    pub fn ax_property(mut self, name: &str, value: serde_json::Value) -> Self {
        self.ax().properties.push(AxProperty {
            name: name.to_string(),
            value,
        });
        self
    }

    pub fn child(mut self, child: NodeBuilder) -> Self {
        self.node.children.push(child.build());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NodeBuilder>) -> Self {
        self.node
            .children
            .extend(children.into_iter().map(NodeBuilder::build));
        self
    }

    pub fn shadow(mut self, shadow: NodeBuilder) -> Self {
        self.node.shadow_roots.push(shadow.build());
        self
    }

    pub fn content_document(mut self, document: NodeBuilder) -> Self {
        self.node.content_document = Some(Box::new(document.build()));
        self
    }

    pub fn frame_id(mut self, frame_id: &str) -> Self {
        self.node.frame_id = Some(frame_id.to_string());
        self
    }

    pub fn build(self) -> RawNode {
        self.node
    }

    fn layout(&mut self) -> &mut LayoutInfo {
        self.node.layout.get_or_insert_with(LayoutInfo::default)
    }

    fn ax(&mut self) -> &mut AxNode {
        self.node.ax.get_or_insert_with(AxNode::default)
    }
}
