//! Builds the structure of an assembly's field from a set of voxel positions.
//!
//! Construction is two-phase. `AssemblyConstructor::add_voxel` only registers variables and
//! lattice nodes; `build_potentials` then runs every slot over every occupied position. Slots
//! whose cliques span voxels inserted later therefore still get built, and factories that depend
//! on the finished lattice (heights, boundaries, the desired center of mass) see its final
//! bounding extent.

use crate::{
    Assembly, BlockState, ContinuousPoint, Error, Extent, Field, Lattice, NodeId, Point,
    Potential, PotentialId, PotentialKind, Result, Variable,
};

use log::debug;

/// Creates the variable for a newly added voxel. Must return a variable with the given ID in
/// the default (empty) state.
pub type VariableFactory = Box<dyn Fn(&Field, NodeId) -> Variable>;

/// Creates the potential for a completed clique. Receives read-only access to the field and
/// lattice, the ID to assign, and the ordered clique.
pub type PotentialFactory =
    Box<dyn Fn(&Field, &Lattice, PotentialId, &[NodeId]) -> Result<Potential>>;

/// Self, top, bottom, then the four sides (+X, +Y, -X, -Y).
pub const VON_NEUMANN_CLIQUE: [Point; 7] = [
    Point { x: 0, y: 0, z: 0 },
    Point { x: 0, y: 0, z: 1 },
    Point { x: 0, y: 0, z: -1 },
    Point { x: 1, y: 0, z: 0 },
    Point { x: 0, y: 1, z: 0 },
    Point { x: -1, y: 0, z: 0 },
    Point { x: 0, y: -1, z: 0 },
];

/// A clique of just the center voxel.
pub const SINGLETON_CLIQUE: [Point; 1] = [Point { x: 0, y: 0, z: 0 }];

/// Describes a "slot" in a 3D lattice for a potential. The slot is centered on a node and
/// identifies the other required nodes by offsets from the center. The order of the offsets is
/// the order of the resulting clique.
pub struct AssemblySlot {
    offsets: Vec<Point>,
    factory: PotentialFactory,
}

impl AssemblySlot {
    pub fn new<F>(offsets: Vec<Point>, factory: F) -> Self
    where
        F: Fn(&Field, &Lattice, PotentialId, &[NodeId]) -> Result<Potential> + 'static,
    {
        Self {
            offsets,
            factory: Box::new(factory),
        }
    }

    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// The smallest extent containing the slot's offsets.
    pub fn bounding_extent(&self) -> Extent {
        crate::bounding_extent(self.offsets.iter().cloned())
    }

    /// Attempts to construct this slot's potential centered at `center`.
    ///
    /// Returns `Ok(None)` without touching the assembly if any clique member has no node yet.
    /// Otherwise the potential gets the next potential ID, is added to the field, and is
    /// registered on every clique member.
    pub fn update_slot(
        &self,
        assembly: &mut Assembly,
        center: &Point,
    ) -> Result<Option<PotentialId>> {
        let mut clique = Vec::with_capacity(self.offsets.len());
        for offset in self.offsets.iter() {
            match assembly.lattice().node_id(&(*center + *offset)) {
                Some(id) => clique.push(id),
                None => return Ok(None),
            }
        }

        let (field, lattice) = assembly.parts_mut();
        let id = field.num_potentials();
        let potential = (self.factory)(field, lattice, id, &clique)?;
        field.add_potential(potential)?;

        Ok(Some(id))
    }
}

/// Constructs 3D lattice Gibbs fields from voxel positions, adding potentials into slots. Can
/// also be used to extend existing assemblies.
pub struct AssemblyConstructor {
    variable_factory: VariableFactory,
    slots: Vec<AssemblySlot>,
    global_slots: Vec<PotentialFactory>,
}

impl Default for AssemblyConstructor {
    fn default() -> Self {
        Self::new(|_, id| Variable::new(id))
    }
}

impl AssemblyConstructor {
    pub fn new<F>(variable_factory: F) -> Self
    where
        F: Fn(&Field, NodeId) -> Variable + 'static,
    {
        Self {
            variable_factory: Box::new(variable_factory),
            slots: Vec::new(),
            global_slots: Vec::new(),
        }
    }

    pub fn add_slot(&mut self, slot: AssemblySlot) {
        self.slots.push(slot);
    }

    /// Adds a potential whose clique is every voxel of the assembly, in ID order.
    pub fn add_global_slot<F>(&mut self, factory: F)
    where
        F: Fn(&Field, &Lattice, PotentialId, &[NodeId]) -> Result<Potential> + 'static,
    {
        self.global_slots.push(Box::new(factory));
    }

    /// Adds a voxel at `position` with the next variable ID. Does not build potentials.
    pub fn add_voxel(&self, assembly: &mut Assembly, position: Point) -> Result<NodeId> {
        if assembly.lattice().node_id(&position).is_some() {
            return Err(Error::DuplicatePosition(position));
        }

        let (field, lattice) = assembly.parts_mut();
        let id = field.num_variables();
        let variable = (self.variable_factory)(field, id);
        field.add_variable(variable)?;
        lattice.add_node(id, position)?;

        Ok(id)
    }

    /// Adds a voxel at every point of `extent`, in raster order.
    pub fn add_extent(&self, assembly: &mut Assembly, extent: &Extent) -> Result<()> {
        for p in extent {
            self.add_voxel(assembly, p)?;
        }

        Ok(())
    }

    /// Checks every slot at every lattice position and builds the potentials whose cliques are
    /// complete, then builds the global potentials. Returns how many potentials were added.
    ///
    /// Running this twice on the same assembly builds every potential twice.
    pub fn build_potentials(&self, assembly: &mut Assembly) -> Result<usize> {
        let before = assembly.field().num_potentials();
        let positions: Vec<Point> = assembly.lattice().iter().map(|(_, p)| p).collect();

        for slot in self.slots.iter() {
            for p in positions.iter() {
                slot.update_slot(assembly, p)?;
            }
        }

        let everything: Vec<NodeId> = assembly.lattice().node_ids().collect();
        for factory in self.global_slots.iter() {
            let (field, lattice) = assembly.parts_mut();
            let id = field.num_potentials();
            let potential = factory(field, lattice, id, &everything)?;
            field.add_potential(potential)?;
        }

        let built = assembly.field().num_potentials() - before;
        debug!(
            "built {} potentials over {} voxels",
            built,
            assembly.lattice().len()
        );

        Ok(built)
    }
}

//  ___         _               _
// | __|_ _ __ | |_ ___ _ _ ___ (_)___ ___
// | _/ _` / _||  _/ _ \ '_/ -_)| / -_|_-<
// |_|\__,_\__| \__\___/_| \___||_\___/__/

fn position_of(lattice: &Lattice, id: NodeId) -> Result<Point> {
    lattice.node_position(id).ok_or(Error::UnknownVariable(id))
}

/// Support potentials over `VON_NEUMANN_CLIQUE`.
pub fn support_slot() -> AssemblySlot {
    AssemblySlot::new(VON_NEUMANN_CLIQUE.to_vec(), |_, _, id, clique| {
        Ok(Potential::new(id, clique.to_vec(), PotentialKind::Support))
    })
}

/// Height potentials on every voxel, relative to the lattice's final height.
pub fn height_slot() -> AssemblySlot {
    AssemblySlot::new(SINGLETON_CLIQUE.to_vec(), |_, lattice, id, clique| {
        let extent = lattice.bounding_extent();
        let p = position_of(lattice, clique[0])?;
        let height = extent.get_local_supremum().z as f64;
        let relative_height = (p.z - extent.get_minimum().z + 1) as f64 / height;

        Ok(Potential::new(
            id,
            clique.to_vec(),
            PotentialKind::Height { relative_height },
        ))
    })
}

/// Edge potentials on every voxel; those on the XY boundary of the lattice are forced empty.
pub fn edge_slot() -> AssemblySlot {
    AssemblySlot::new(SINGLETON_CLIQUE.to_vec(), |_, lattice, id, clique| {
        let p = position_of(lattice, clique[0])?;
        let on_edge = lattice.bounding_extent().is_on_xy_boundary(&p);

        Ok(Potential::new(
            id,
            clique.to_vec(),
            PotentialKind::Edge { on_edge },
        ))
    })
}

/// Repel potentials pushing blocks away from `obstacle`.
pub fn repel_slot(obstacle: ContinuousPoint, threshold: f64) -> AssemblySlot {
    AssemblySlot::new(SINGLETON_CLIQUE.to_vec(), move |_, lattice, id, clique| {
        let p = position_of(lattice, clique[0])?;
        let distance = p.to_continuous().distance(&obstacle);

        Ok(Potential::new(
            id,
            clique.to_vec(),
            PotentialKind::Repel {
                distance,
                threshold,
            },
        ))
    })
}

/// Adds a `Fixed` potential pinning the voxel at `position` to `state`.
pub fn pin_voxel(
    assembly: &mut Assembly,
    position: &Point,
    state: BlockState,
) -> Result<PotentialId> {
    let node = assembly
        .lattice()
        .node_id(position)
        .ok_or(Error::UnknownPosition(*position))?;
    let field = assembly.field_mut();
    let id = field.num_potentials();
    field.add_potential(Potential::new(id, vec![node], PotentialKind::Fixed { state }))?;

    Ok(id)
}

/// A global mass potential factory for `AssemblyConstructor::add_global_slot`.
pub fn mass_factory(
    half_mass: f64,
    mass_coeff: f64,
    max_mass: f64,
) -> impl Fn(&Field, &Lattice, PotentialId, &[NodeId]) -> Result<Potential> {
    move |_: &Field, _: &Lattice, id: PotentialId, clique: &[NodeId]| {
        Ok(Potential::new(
            id,
            clique.to_vec(),
            PotentialKind::Mass {
                half_mass,
                mass_coeff,
                max_mass,
            },
        ))
    }
}

/// A global center-of-mass potential factory for `AssemblyConstructor::add_global_slot`. The
/// target is the XY center of the lattice at ground level.
pub fn center_of_mass_factory(
    half_mass: f64,
    max_deviation: f64,
) -> impl Fn(&Field, &Lattice, PotentialId, &[NodeId]) -> Result<Potential> {
    move |_: &Field, lattice: &Lattice, id: PotentialId, clique: &[NodeId]| {
        let extent = lattice.bounding_extent();
        let center = extent.get_center();
        let desired = ContinuousPoint::new(center.x, center.y, extent.get_minimum().z as f64);
        let positions = clique
            .iter()
            .map(|v| position_of(lattice, *v))
            .collect::<Result<Vec<_>>>()?;

        Ok(Potential::new(
            id,
            clique.to_vec(),
            PotentialKind::CenterOfMass {
                positions,
                desired,
                half_mass,
                max_deviation,
            },
        ))
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
