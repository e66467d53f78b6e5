//! Reachability of the ground layer through occupied voxels.
//!
//! Both checks run a multi-source breadth-first search seeded with every occupied voxel in the
//! bottom layer of the lattice's bounding extent, stepping only through face-adjacent occupied
//! voxels. On an unweighted grid this gives the same distances as relaxing to a fixed point.

use crate::{Assembly, BlockState, Point, VecLatticeMap};

use std::collections::VecDeque;

const FACE_ADJACENT_OFFSETS: [Point; 6] = [
    Point { x: 1, y: 0, z: 0 },
    Point { x: 0, y: 1, z: 0 },
    Point { x: 0, y: 0, z: 1 },
    Point { x: -1, y: 0, z: 0 },
    Point { x: 0, y: -1, z: 0 },
    Point { x: 0, y: 0, z: -1 },
];

/// For every cell of `occupancy`, the number of face-adjacent steps through occupied cells to
/// the bottom layer. Empty cells and occupied cells with no path are `None`.
pub fn ground_distances(occupancy: &VecLatticeMap<BlockState>) -> VecLatticeMap<Option<u32>> {
    let mut distances = occupancy.map(|_| None);
    let extent = *occupancy.get_extent();
    if extent.is_empty() {
        return distances;
    }
    let ground_z = extent.get_minimum().z;

    let mut queue = VecDeque::new();
    for (p, state) in occupancy.iter() {
        if p.z == ground_z && !state.is_empty() {
            *distances.get_world_ref_mut(&p) = Some(0);
            queue.push_back(p);
        }
    }

    while let Some(p) = queue.pop_front() {
        let next = distances.get_world_ref(&p).map_or(0, |d| d + 1);
        for offset in FACE_ADJACENT_OFFSETS.iter() {
            let q = p + *offset;
            let occupied = occupancy
                .maybe_get_world_ref(&q)
                .map_or(false, |s| !s.is_empty());
            if !occupied {
                continue;
            }
            let d = distances.get_world_ref_mut(&q);
            if d.is_none() {
                *d = Some(next);
                queue.push_back(q);
            }
        }
    }

    distances
}

/// True iff every occupied voxel of `assembly` has a path of occupied voxels down to the ground
/// layer.
pub fn is_grounded(assembly: &Assembly) -> bool {
    let occupancy = assembly.occupancy_grid();
    let distances = ground_distances(&occupancy);

    occupancy
        .values()
        .iter()
        .zip(distances.values().iter())
        .all(|(state, d)| state.is_empty() || d.is_some())
}

/// Ground distances of `assembly`'s voxels over its bounding extent.
pub fn wavefront(assembly: &Assembly) -> VecLatticeMap<Option<u32>> {
    ground_distances(&assembly.occupancy_grid())
}

/// The sum of every finite ground distance.
pub fn wavefront_sum(distances: &VecLatticeMap<Option<u32>>) -> u64 {
    distances.values().iter().flatten().map(|d| *d as u64).sum()
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
