use crate::{Error, Extent, NodeId, Point, Result};

use fnv::{FnvBuildHasher, FnvHashMap};
use indexmap::IndexMap;

/// Arranges node IDs into a 3D cubical lattice.
///
/// The two maps are always mutual inverses. The lattice only grows, and since it stores IDs
/// rather than references, cloning it is a plain value copy.
#[derive(Clone, Debug, Default)]
pub struct Lattice {
    // Insertion ordered, so iteration follows ID assignment order.
    id_positions: IndexMap<NodeId, Point, FnvBuildHasher>,
    position_ids: FnvHashMap<Point, NodeId>,
    extent: Extent,
}

impl PartialEq for Lattice {
    fn eq(&self, other: &Self) -> bool {
        self.id_positions == other.id_positions
    }
}

impl Lattice {
    /// Creates an empty lattice whose bounding extent contains no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node into this lattice. Reusing an ID or a position is an error and leaves the
    /// lattice untouched.
    pub fn add_node(&mut self, id: NodeId, position: Point) -> Result<()> {
        if self.id_positions.contains_key(&id) {
            return Err(Error::DuplicateNodeId(id));
        }
        if self.position_ids.contains_key(&position) {
            return Err(Error::DuplicatePosition(position));
        }

        self.id_positions.insert(id, position);
        self.position_ids.insert(position, id);
        self.extent.expand_to_include(&position);

        Ok(())
    }

    pub fn node_position(&self, id: NodeId) -> Option<Point> {
        self.id_positions.get(&id).cloned()
    }

    pub fn node_id(&self, position: &Point) -> Option<NodeId> {
        self.position_ids.get(position).cloned()
    }

    /// All node IDs, in the order they were added.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.id_positions.keys().cloned()
    }

    /// All `(id, position)` pairs, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.id_positions.iter().map(|(id, p)| (*id, *p))
    }

    /// The smallest extent containing every node.
    pub fn bounding_extent(&self) -> Extent {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.id_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_positions.is_empty()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
