//! Raw browser snapshot data model for domsnap.
//!
//! A snapshot is a single point-in-time capture of a page: DOM shape,
//! accessibility nodes, and layout/paint data, merged into one [`RawNode`]
//! tree by an external capture layer. This crate defines that contract; the
//! `domsnap-core` crate consumes it.
//!
//! All types are serde-serializable so snapshots can cross process
//! boundaries as JSON.

mod builder;
mod geometry;
mod node;

pub use builder::NodeBuilder;
pub use geometry::BoundingBox;
pub use node::{AxNode, AxProperty, LayoutInfo, NodeKind, RawNode, ScrollInfo};
