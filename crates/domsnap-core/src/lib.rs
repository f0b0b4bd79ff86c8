//! Snapshot-to-tree serialization pipeline for domsnap.
//!
//! Reduces a raw browser page capture (DOM nodes, accessibility nodes,
//! layout/paint snapshots) to a compact, stable, LLM-consumable tree of
//! meaningful and interactive elements, each carrying a persistent numeric
//! index that survives incremental re-captures of the same page.
//!
//! ## Pipeline
//!
//! 1. **Enhanced node model**: wraps each captured node with computed,
//!    cached properties (arena-based, index back-references).
//! 2. **Interactivity classifier**: ordered guard clauses deciding whether
//!    a node is something a user could act on.
//! 3. **Tree simplifier**: prunes the raw tree down to nodes worth keeping.
//! 4. **Paint-order occlusion filter**: flags nodes buried under
//!    later-painted content.
//! 5. **Tree optimizer**: collapses single-child wrapper nodes.
//! 6. **Containment filter**: removes descendants subsumed by an
//!    interactive ancestor's bounding box.
//! 7. **Interactive indexer**: assigns stable indices keyed by structural
//!    path, diffed against the previous capture.
//! 8. **Text serializer**: renders the indented, tagged text format.
//!
//! ```no_run
//! use domsnap_core::{DomTreeSerializer, SerializerOptions};
//! use domsnap_snapshot::RawNode;
//!
//! # fn run(snapshot: &RawNode) -> Result<(), domsnap_core::SerializeError> {
//! let options = SerializerOptions::default();
//! let (tree, timings) = DomTreeSerializer::serialize(snapshot, None, &options)?;
//! println!("{}", tree.text);
//! println!("{} interactive elements", tree.interactive_count());
//! // Feed tree.selector_map into the next call for stable indices.
//! let (next, _) = DomTreeSerializer::serialize(snapshot, Some(&tree.selector_map), &options)?;
//! assert_eq!(next.new_count(), 0);
//! # let _ = timings;
//! # Ok(())
//! # }
//! ```

mod arena;
mod build;
mod compound;
mod containment;
mod error;
mod index;
mod interactive;
mod optimize;
mod options;
mod paint_order;
mod pipeline;
mod selector_map;
mod simplified;
mod simplify;
mod text;

pub use arena::{DomArena, EnhancedNode, FrameTruncation, NodeId};
pub use compound::CompoundComponent;
pub use error::SerializeError;
pub use options::SerializerOptions;
pub use pipeline::{DomTreeSerializer, SerializedTree, TimingBreakdown, STAGE_NAMES};
pub use selector_map::SelectorMap;
pub use simplified::SimplifiedNode;
