use crate::{BlockState, Error, Field, Lattice, NodeId, Point, Result, VecLatticeMap};

/// One complete candidate state: a Gibbs field describing every component's state, and a
/// lattice describing where those components are. Node `i` sits at
/// `lattice.node_position(i)` and is `field.variable(i)`.
#[derive(Clone, Debug, Default)]
pub struct Assembly {
    field: Field,
    lattice: Lattice,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs an existing field and lattice. They must index the same ID space.
    pub fn from_parts(field: Field, lattice: Lattice) -> Self {
        Self { field, lattice }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Both halves at once, so callers can read the lattice while mutating the field.
    pub fn parts_mut(&mut self) -> (&mut Field, &mut Lattice) {
        (&mut self.field, &mut self.lattice)
    }

    pub fn block_state_at(&self, p: &Point) -> Option<BlockState> {
        self.lattice.node_id(p).and_then(|id| self.field.state(id))
    }

    pub fn set_block_state(&mut self, p: &Point, state: BlockState) -> Result<()> {
        let id = self
            .lattice
            .node_id(p)
            .ok_or(Error::UnknownPosition(*p))?;

        self.field.set_state(id, state)
    }

    /// Nodes that are not on the XY boundary of the lattice. Boundary voxels are usually pinned
    /// empty, so restricting the sampler to these avoids wasting steps on them.
    pub fn non_edge_node_ids(&self) -> Vec<NodeId> {
        let extent = self.lattice.bounding_extent();

        self.lattice
            .iter()
            .filter(|(_, p)| !extent.is_on_xy_boundary(p))
            .map(|(id, _)| id)
            .collect()
    }

    /// A dense copy of the block states over the lattice's bounding extent. Cells with no node
    /// are `Empty`.
    pub fn occupancy_grid(&self) -> VecLatticeMap<BlockState> {
        let mut grid = VecLatticeMap::fill(self.lattice.bounding_extent(), BlockState::Empty);
        for (id, p) in self.lattice.iter() {
            if let Some(state) = self.field.state(id) {
                *grid.get_world_ref_mut(&p) = state;
            }
        }

        grid
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_elements_eq, filled_box};
    use crate::Extent;

    #[test]
    fn test_clone_copies_both_halves_consistently() {
        let mut assembly = filled_box(Extent::from_min_and_local_supremum(
            [0, 0, 0].into(),
            [2, 2, 2].into(),
        ));
        assembly
            .set_block_state(&[1, 1, 1].into(), BlockState::Full)
            .unwrap();

        let mut copy = assembly.clone();
        for (id, p) in assembly.lattice().iter() {
            assert_eq!(copy.lattice().node_position(id), Some(p));
            assert_eq!(copy.field().state(id), assembly.field().state(id));
        }

        copy.set_block_state(&[1, 1, 1].into(), BlockState::Half)
            .unwrap();
        assert_eq!(
            assembly.block_state_at(&[1, 1, 1].into()),
            Some(BlockState::Full)
        );
        assert_eq!(copy.block_state_at(&[1, 1, 1].into()), Some(BlockState::Half));
    }

    #[test]
    fn test_non_edge_node_ids() {
        let assembly = filled_box(Extent::from_min_and_local_supremum(
            [0, 0, 0].into(),
            [3, 3, 2].into(),
        ));

        let ids = assembly.non_edge_node_ids();
        let positions: Vec<Point> = ids
            .iter()
            .map(|id| assembly.lattice().node_position(*id).unwrap())
            .collect();
        assert_elements_eq(&positions, &vec![[1, 1, 1].into(), [1, 1, 0].into()]);
    }

    #[test]
    fn test_occupancy_grid_marks_missing_cells_empty() {
        let mut assembly = Assembly::new();
        let (field, lattice) = assembly.parts_mut();
        for (id, p) in [Point::new(0, 0, 0), Point::new(2, 0, 0)].iter().enumerate() {
            field
                .add_variable(crate::Variable::with_state(id, BlockState::Full))
                .unwrap();
            lattice.add_node(id, *p).unwrap();
        }

        let grid = assembly.occupancy_grid();
        assert_eq!(grid.get_extent().volume(), 3);
        assert_eq!(*grid.get_world_ref(&[1, 0, 0].into()), BlockState::Empty);
        assert_eq!(*grid.get_world_ref(&[2, 0, 0].into()), BlockState::Full);
    }
}
