//! Prism DOM Snapshot
//!
//! Immutable, arena-style representation of a rendered document tree.
//!
//! An audit never owns a live document. The external renderer hands
//! over a [`Snapshot`]: a flat array of node records with parent/child
//! indices, computed colors where the renderer resolved them, and a
//! stable locator string per element. Nothing in this crate mutates a
//! snapshot after [`SnapshotBuilder::build`].

mod node;
mod snapshot;
mod builder;

pub use node::{Attribute, ComputedStyle, ElementData, Node, NodeData};
pub use snapshot::Snapshot;
pub use builder::SnapshotBuilder;

/// Node identifier (index into the snapshot arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document root ID
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}
