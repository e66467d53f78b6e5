//! Minimal round-trippable state of an assembly: node positions, variable states, and each
//! potential's clique and kind.
//!
//! `Custom` potentials hold closures and can't be encoded; snapshotting an assembly that has one
//! fails with `Error::Codec`.

use crate::{
    Assembly, BlockState, Error, Field, Lattice, NodeId, Point, Potential, PotentialKind, Result,
    Variable,
};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssemblySnapshot {
    /// `(id, position)` in lattice insertion order.
    pub nodes: Vec<(NodeId, Point)>,
    /// Indexed by variable ID.
    pub states: Vec<BlockState>,
    /// Indexed by potential ID.
    pub potentials: Vec<(Vec<NodeId>, PotentialKind)>,
}

impl AssemblySnapshot {
    pub fn from_assembly(assembly: &Assembly) -> Self {
        Self {
            nodes: assembly.lattice().iter().collect(),
            states: assembly.field().states(),
            potentials: assembly
                .field()
                .potentials()
                .map(|p| (p.clique().to_vec(), p.kind().clone()))
                .collect(),
        }
    }

    /// Rebuilds the assembly, failing on any inconsistency (duplicate or unknown IDs, duplicate
    /// positions, variables without a position).
    pub fn into_assembly(self) -> Result<Assembly> {
        let mut field = Field::new();
        for (id, state) in self.states.into_iter().enumerate() {
            field.add_variable(Variable::with_state(id, state))?;
        }
        for (id, (clique, kind)) in self.potentials.into_iter().enumerate() {
            field.add_potential(Potential::new(id, clique, kind))?;
        }

        let mut lattice = Lattice::new();
        for (id, p) in self.nodes.into_iter() {
            if field.variable(id).is_none() {
                return Err(Error::UnknownVariable(id));
            }
            lattice.add_node(id, p)?;
        }
        if let Some(v) = field.variables().find(|v| lattice.node_position(v.id()).is_none()) {
            return Err(Error::UnplacedVariable(v.id()));
        }

        Ok(Assembly::from_parts(field, lattice))
    }

    /// Encodes with bincode, then compresses with LZ4.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded = bincode::serialize(self)?;

        Ok(lz4::block::compress(&encoded, None, true)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let encoded = lz4::block::decompress(bytes, None)?;

        Ok(bincode::deserialize(&encoded)?)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
