use crate::{Assembly, BlockState, Extent, Point, Variable};

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

pub fn assert_elements_eq<T: Clone + Debug + Eq + Hash>(v1: &Vec<T>, v2: &Vec<T>) {
    let set1: HashSet<T> = HashSet::from_iter(v1.iter().cloned());
    let set2: HashSet<T> = HashSet::from_iter(v2.iter().cloned());
    assert_eq!(set1, set2);
}

/// An assembly with one empty voxel at every point of `extent`, IDs in raster order, and no
/// potentials.
pub fn filled_box(extent: Extent) -> Assembly {
    assembly_with_states(extent.into_iter().map(|p| (p, BlockState::Empty)))
}

/// An assembly with the given voxels, IDs in iteration order, and no potentials.
pub fn assembly_with_states<I>(voxels: I) -> Assembly
where
    I: IntoIterator<Item = (Point, BlockState)>,
{
    let mut assembly = Assembly::new();
    let (field, lattice) = assembly.parts_mut();
    for (id, (p, state)) in voxels.into_iter().enumerate() {
        field.add_variable(Variable::with_state(id, state)).unwrap();
        lattice.add_node(id, p).unwrap();
    }

    assembly
}
