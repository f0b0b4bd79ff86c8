//! Raw captured node model: DOM shape, accessibility node, layout/paint data.
//!
//! This is the input contract of the pipeline. The capture layer (CDP or
//! otherwise) produces one [`RawNode`] tree per page snapshot, with
//! visibility, bounding boxes, and accessible names already computed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// Kind of captured node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Element,
    Text,
    Document,
    DocumentFragment,
    Comment,
    Doctype,
    Other,
}

impl NodeKind {
    /// Literal name used where a tag name is expected for non-elements.
    pub fn literal(&self) -> &'static str {
        match self {
            NodeKind::Element => "element",
            NodeKind::Text => "#text",
            NodeKind::Document => "#document",
            NodeKind::DocumentFragment => "#document-fragment",
            NodeKind::Comment => "#comment",
            NodeKind::Doctype => "#doctype",
            NodeKind::Other => "#other",
        }
    }
}

/// A single accessibility-tree property (name plus loosely typed value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxProperty {
    pub name: String,
    pub value: serde_json::Value,
}

/// Accessibility node attached to a DOM node, when the capture resolved one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxNode {
    /// Computed accessibility role (e.g. "button", "textbox").
    pub role: Option<String>,
    /// Accessible name, already computed by the capture layer.
    pub name: Option<String>,
    /// Accessible description.
    pub description: Option<String>,
    /// Remaining properties (focusable, disabled, checked, ...).
    #[serde(default)]
    pub properties: Vec<AxProperty>,
}

impl AxNode {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Property interpreted as a boolean; `None` when absent or non-boolean.
    pub fn bool_property(&self, name: &str) -> Option<bool> {
        self.property(name).and_then(|v| v.as_bool())
    }

    /// Whether the property exists at all, regardless of value.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }
}

/// Layout/paint snapshot data for a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutInfo {
    /// Bounding rectangle in the node's own frame coordinates.
    pub bounds: Option<BoundingBox>,
    /// Paint order at this screen location (higher = painted later = on top).
    pub paint_order: Option<i64>,
    /// Computed cursor style.
    pub cursor: Option<String>,
    /// Subset of computed styles relevant for the pipeline
    /// (overflow, background-color, ...).
    #[serde(default)]
    pub styles: HashMap<String, String>,
    /// Clickability hint from the capture layer, when available.
    pub is_clickable: Option<bool>,
}

/// Scroll geometry for scrollable containers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScrollInfo {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollInfo {
    /// Pixels of content hidden above the visible region.
    pub fn pixels_above(&self) -> f64 {
        self.scroll_top.max(0.0)
    }

    /// Pixels of content hidden below the visible region.
    pub fn pixels_below(&self) -> f64 {
        (self.scroll_height - self.client_height - self.scroll_top).max(0.0)
    }
}

/// One node of the raw capture tree.
///
/// Ownership: a `RawNode` owns its children, shadow roots, and nested
/// document outright; there are no parent links at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    /// Node id within this capture. Not stable across captures.
    pub node_id: i64,
    /// Backend node id, when the capture layer provides one.
    pub backend_node_id: Option<i64>,
    pub kind: NodeKind,
    /// Element tag name (any case) or literal node name for non-elements.
    pub node_name: String,
    /// Text payload for text/comment nodes.
    #[serde(default)]
    pub node_value: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
    /// Shadow roots hosted by this element.
    #[serde(default)]
    pub shadow_roots: Vec<RawNode>,
    /// "open" or "closed" when this node is itself a shadow root.
    pub shadow_root_type: Option<String>,
    /// Nested document for iframe/frame elements.
    pub content_document: Option<Box<RawNode>>,
    /// Frame id of the nested document, for iframe identity.
    pub frame_id: Option<String>,
    pub ax: Option<AxNode>,
    pub layout: Option<LayoutInfo>,
    /// Visibility computed by the capture layer.
    pub is_visible: Option<bool>,
    /// Scrollability hint from the capture layer.
    pub is_scrollable: Option<bool>,
    pub scroll_info: Option<ScrollInfo>,
}

impl RawNode {
    /// Bare node of a given kind, for builders and tests.
    pub fn new(kind: NodeKind, node_name: impl Into<String>) -> Self {
        Self {
            node_id: 0,
            backend_node_id: None,
            kind,
            node_name: node_name.into(),
            node_value: String::new(),
            attributes: HashMap::new(),
            children: Vec::new(),
            shadow_roots: Vec::new(),
            shadow_root_type: None,
            content_document: None,
            frame_id: None,
            ax: None,
            layout: None,
            is_visible: None,
            is_scrollable: None,
            scroll_info: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Bounding box from the layout snapshot, if captured.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.layout.as_ref().and_then(|l| l.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_literal() {
        assert_eq!(NodeKind::Text.literal(), "#text");
        assert_eq!(NodeKind::DocumentFragment.literal(), "#document-fragment");
    }

    #[test]
    fn test_ax_property_lookup() {
        let ax = AxNode {
            role: Some("button".to_string()),
            name: Some("Save".to_string()),
            description: None,
            properties: vec![
                AxProperty {
                    name: "focusable".to_string(),
                    value: serde_json::json!(true),
                },
                AxProperty {
                    name: "checked".to_string(),
                    value: serde_json::json!("mixed"),
                },
            ],
        };
        assert_eq!(ax.bool_property("focusable"), Some(true));
        assert_eq!(ax.bool_property("checked"), None);
        assert!(ax.has_property("checked"));
        assert!(!ax.has_property("expanded"));
    }

    #[test]
    fn test_scroll_info_pixels() {
        let scroll = ScrollInfo {
            scroll_top: 120.0,
            scroll_left: 0.0,
            scroll_width: 800.0,
            scroll_height: 2000.0,
            client_width: 800.0,
            client_height: 600.0,
        };
        assert_eq!(scroll.pixels_above(), 120.0);
        assert_eq!(scroll.pixels_below(), 1280.0);
    }

    #[test]
    fn test_raw_node_json_round_trip() {
        let json = serde_json::json!({
            "node_id": 4,
            "backend_node_id": 99,
            "kind": "element",
            "node_name": "BUTTON",
            "attributes": {"id": "save", "class": "btn"},
            "layout": {
                "bounds": {"x": 10.0, "y": 10.0, "width": 80.0, "height": 24.0},
                "paint_order": 7,
                "cursor": "pointer",
                "styles": {"overflow": "visible"}
            },
            "is_visible": true
        });
        let node: RawNode = serde_json::from_value(json).unwrap();
        assert_eq!(node.kind, NodeKind::Element);
        assert_eq!(node.attribute("id"), Some("save"));
        assert_eq!(node.bounds().unwrap().width, 80.0);
        assert_eq!(node.layout.as_ref().unwrap().paint_order, Some(7));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["node_name"], "BUTTON");
    }
}
