//! Voxel assemblies on 3D integer lattices, modeled as Gibbs fields, perturbed by MCMC sampling
//! and explored with a bounded best-first search.

mod assembly;
mod block;
mod config;
mod distribution;
mod error;
mod extent;
mod field;
mod indexer;
mod lattice;
mod point;
mod potential;
mod sampler;
mod vec_lattice_map;

pub mod constructor;
pub mod render;
pub mod search;
pub mod snapshot;

#[cfg(feature = "vox")]
pub mod vox;

#[cfg(test)]
mod test_util;

pub use assembly::Assembly;
pub use block::BlockState;
pub use config::{CostWeights, SearchConfig};
pub use constructor::{
    AssemblyConstructor, AssemblySlot, PotentialFactory, VariableFactory, SINGLETON_CLIQUE,
    VON_NEUMANN_CLIQUE,
};
pub use distribution::sample_number_line;
pub use error::{Error, Result};
pub use extent::{bounding_extent, Extent, ExtentIterator};
pub use field::{Field, NodeId, Potential, PotentialId, Variable};
pub use indexer::{Indexer, RasterIndexer, StatelessIndexer};
pub use lattice::Lattice;
pub use point::{ContinuousPoint, Point};
pub use potential::{CustomPotential, PotentialKind};
pub use render::{AssemblyVisualizer, RenderRequest};
pub use sampler::{AssemblySampler, McmcSampler};
pub use search::{SearchProperties, TreeSearch};
pub use snapshot::AssemblySnapshot;
pub use vec_lattice_map::VecLatticeMap;

pub mod prelude {
    pub use crate::constructor::{AssemblyConstructor, AssemblySlot};
    pub use crate::extent::{bounding_extent, Extent, ExtentIterator};
    pub use crate::point::{ContinuousPoint, Point};
    pub use crate::{
        Assembly, AssemblySampler, BlockState, Field, Lattice, McmcSampler, SearchConfig,
        TreeSearch,
    };
}
