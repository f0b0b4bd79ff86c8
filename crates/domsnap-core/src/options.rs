//! Serializer configuration.

use serde::{Deserialize, Serialize};

/// Options for one serialization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializerOptions {
    /// Enable the bounding-box containment filter.
    #[serde(default = "default_true")]
    pub enable_bbox_filtering: bool,

    /// Area-overlap ratio at which a descendant counts as contained by a
    /// propagating ancestor (link/button).
    #[serde(default = "default_containment_threshold")]
    pub containment_threshold: f64,

    /// Enable the paint-order occlusion filter.
    #[serde(default = "default_true")]
    pub paint_order_filtering: bool,

    /// Ordered allow-list of attribute / accessibility-property names shown
    /// in serialized output.
    #[serde(default = "default_include_attributes")]
    pub include_attributes: Vec<String>,

    /// Maximum nesting depth of expanded iframes. Deeper frames become
    /// sentinel nodes.
    #[serde(default = "default_max_iframe_depth")]
    pub max_iframe_depth: usize,

    /// Maximum total number of expanded iframes per snapshot.
    #[serde(default = "default_max_iframe_count")]
    pub max_iframe_count: usize,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            enable_bbox_filtering: true,
            containment_threshold: default_containment_threshold(),
            paint_order_filtering: true,
            include_attributes: default_include_attributes(),
            max_iframe_depth: default_max_iframe_depth(),
            max_iframe_count: default_max_iframe_count(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_containment_threshold() -> f64 {
    0.99
}

fn default_include_attributes() -> Vec<String> {
    [
        "title",
        "type",
        "checked",
        "name",
        "role",
        "value",
        "placeholder",
        "alt",
        "aria-label",
        "aria-expanded",
        "href",
        "class",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_iframe_depth() -> usize {
    5
}

fn default_max_iframe_count() -> usize {
    15
}
