//! The serialization pipeline entry point.
//!
//! One call takes a raw snapshot plus the previous capture's selector map
//! and produces the pruned tree, the rebuilt map, the rendered text, and a
//! per-stage timing breakdown. The pipeline is synchronous, side-effect-free
//! with respect to its input, and runs to completion or fails fast on a
//! contract violation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use domsnap_snapshot::{NodeKind, RawNode};

use crate::build::build_arena;
use crate::containment::apply_containment_filter;
use crate::error::SerializeError;
use crate::index::assign_interactive_indices;
use crate::interactive::InteractivityCache;
use crate::options::SerializerOptions;
use crate::paint_order::apply_paint_order_filter;
use crate::selector_map::SelectorMap;
use crate::simplified::SimplifiedNode;
use crate::simplify::simplify;
use crate::optimize::optimize;
use crate::text::serialize_text;

/// Names of the pipeline stages, in execution order.
pub const STAGE_NAMES: [&str; 8] = [
    "enhanced_node_model",
    "interactivity_classifier",
    "tree_simplifier",
    "paint_order_filter",
    "tree_optimizer",
    "containment_filter",
    "interactive_indexer",
    "text_serializer",
];

/// Per-stage elapsed time, diagnostic only.
#[derive(Debug, Clone, Default)]
pub struct TimingBreakdown {
    stages: HashMap<String, Duration>,
}

impl TimingBreakdown {
    fn record(&mut self, stage: &str, elapsed: Duration) {
        self.stages.insert(stage.to_string(), elapsed);
    }

    /// Fill every stage not yet recorded with zero, so the mapping always
    /// lists all eight stages plus the total.
    fn finish(&mut self, total: Duration) {
        for stage in STAGE_NAMES {
            self.stages.entry(stage.to_string()).or_default();
        }
        self.stages.insert("total".to_string(), total);
    }

    pub fn get(&self, stage: &str) -> Option<Duration> {
        self.stages.get(stage).copied()
    }

    pub fn total(&self) -> Duration {
        self.get("total").unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Duration)> {
        self.stages.iter()
    }
}

/// Final output of one serialization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedTree {
    /// Root of the filtered tree; `None` for an empty page.
    pub root: Option<SimplifiedNode>,
    /// Rebuilt structural-path → index map for this capture.
    pub selector_map: SelectorMap,
    /// Rendered text representation.
    pub text: String,
}

impl SerializedTree {
    fn empty() -> Self {
        Self {
            root: None,
            selector_map: SelectorMap::new(),
            text: String::new(),
        }
    }

    /// Number of indexed interactive nodes in the tree.
    pub fn interactive_count(&self) -> usize {
        let mut count = 0;
        if let Some(root) = &self.root {
            root.visit(&mut |node| {
                if node.interactive_index.is_some() {
                    count += 1;
                }
            });
        }
        count
    }

    /// Number of interactive nodes not present in the previous capture.
    pub fn new_count(&self) -> usize {
        let mut count = 0;
        if let Some(root) = &self.root {
            root.visit(&mut |node| {
                if node.interactive_index.is_some() && node.is_new {
                    count += 1;
                }
            });
        }
        count
    }
}

/// The pipeline.
pub struct DomTreeSerializer;

impl DomTreeSerializer {
    /// Run all eight stages over one snapshot.
    ///
    /// `previous_map` is treated as immutable input; the returned map is
    /// freshly constructed. Identical inputs produce identical outputs.
    pub fn serialize(
        root: &RawNode,
        previous_map: Option<&SelectorMap>,
        options: &SerializerOptions,
    ) -> Result<(SerializedTree, TimingBreakdown), SerializeError> {
        if !matches!(root.kind, NodeKind::Document | NodeKind::Element) {
            return Err(SerializeError::InvalidRoot {
                kind: root.kind.literal(),
            });
        }

        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let (arena, root_id) = build_arena(root, options);
        timings.record("enhanced_node_model", stage.elapsed());

        // Warm the memo cache for every element up front; the optimizer and
        // containment passes re-query the same nodes.
        let stage = Instant::now();
        let mut cache = InteractivityCache::new();
        for node in arena.iter() {
            if node.is_element() {
                cache.is_interactive(&arena, node.id);
            }
        }
        timings.record("interactivity_classifier", stage.elapsed());

        let stage = Instant::now();
        let simplified = simplify(&arena, root_id);
        timings.record("tree_simplifier", stage.elapsed());
        let Some(mut tree) = simplified else {
            debug!("snapshot simplified to nothing");
            timings.finish(total_start.elapsed());
            return Ok((SerializedTree::empty(), timings));
        };

        let stage = Instant::now();
        if options.paint_order_filtering {
            apply_paint_order_filter(&arena, &mut tree);
        }
        timings.record("paint_order_filter", stage.elapsed());

        let stage = Instant::now();
        let optimized = optimize(&arena, &mut cache, tree);
        timings.record("tree_optimizer", stage.elapsed());
        let Some(mut tree) = optimized else {
            debug!("snapshot optimized to nothing");
            timings.finish(total_start.elapsed());
            return Ok((SerializedTree::empty(), timings));
        };

        let stage = Instant::now();
        if options.enable_bbox_filtering {
            apply_containment_filter(&arena, &mut cache, &mut tree, options.containment_threshold);
        }
        timings.record("containment_filter", stage.elapsed());

        let stage = Instant::now();
        let selector_map = assign_interactive_indices(&arena, &mut cache, &mut tree, previous_map);
        timings.record("interactive_indexer", stage.elapsed());

        let stage = Instant::now();
        let rendered = serialize_text(&arena, &tree, options);
        timings.record("text_serializer", stage.elapsed());

        timings.finish(total_start.elapsed());
        debug!(
            nodes = arena.len(),
            interactive = selector_map.len(),
            elapsed = ?timings.total(),
            "serialized snapshot"
        );

        Ok((
            SerializedTree {
                root: Some(tree),
                selector_map,
                text: rendered,
            },
            timings,
        ))
    }
}
