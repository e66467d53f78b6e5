use crate::{Assembly, BlockState, Error, Point, Result};

use dot_vox::*;

/// Palette index of a half block in exported models.
pub const HALF_VOX_COLOR: u8 = 1;
/// Palette index of a full block in exported models.
pub const FULL_VOX_COLOR: u8 = 2;

/// Exports the non-empty voxels of `assembly` as a single MagicaVoxel model, relative to the
/// minimum of the lattice's bounding extent.
pub fn assembly_to_vox(assembly: &Assembly) -> Result<DotVoxData> {
    let extent = assembly.lattice().bounding_extent();
    let size = extent.get_local_supremum();
    // Voxel coordinates are limited to u8.
    let max = std::u8::MAX as i32 + 1;
    if size.x > max || size.y > max || size.z > max {
        return Err(Error::Codec(format!(
            "extent of size {} does not fit in a vox model",
            size
        )));
    }

    let mut voxels = Vec::new();
    for (id, p) in assembly.lattice().iter() {
        let i = match assembly.field().state(id) {
            Some(BlockState::Half) => HALF_VOX_COLOR,
            Some(BlockState::Full) => FULL_VOX_COLOR,
            _ => continue,
        };
        let local = extent.local_point_from_world_point(&p);
        voxels.push(Voxel {
            x: local.x as u8,
            y: local.y as u8,
            z: local.z as u8,
            i,
        });
    }

    let model = Model {
        size: Size {
            x: size.x as u32,
            y: size.y as u32,
            z: size.z as u32,
        },
        voxels,
    };

    Ok(DotVoxData {
        version: 150,
        models: vec![model],
        palette: Vec::new(),
        materials: Vec::new(),
    })
}

/// Reads back the block states of one model written by `assembly_to_vox`, in local
/// coordinates. Unknown palette indices are treated as full blocks.
pub fn block_states_from_vox(
    data: &DotVoxData,
    model_index: usize,
) -> Result<Vec<(Point, BlockState)>> {
    let Model { voxels, .. } = data
        .models
        .get(model_index)
        .ok_or_else(|| Error::Codec(format!("vox data has no model {}", model_index)))?;

    Ok(voxels
        .iter()
        .map(|Voxel { x, y, z, i }| {
            let state = if *i == HALF_VOX_COLOR {
                BlockState::Half
            } else {
                BlockState::Full
            };

            (Point::new(*x as i32, *y as i32, *z as i32), state)
        })
        .collect())
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
    use crate::test_util::filled_box;
    use crate::Extent;

    #[test]
    fn test_export_is_relative_to_extent_minimum() {
        let mut assembly = filled_box(Extent::from_min_and_local_supremum(
            [-2, 5, 1].into(),
            [2, 2, 3].into(),
        ));
        assembly
            .set_block_state(&[-2, 5, 1].into(), BlockState::Full)
            .unwrap();
        assembly
            .set_block_state(&[-1, 6, 3].into(), BlockState::Half)
            .unwrap();

        let data = assembly_to_vox(&assembly).unwrap();
        assert_eq!(data.models[0].size, Size { x: 2, y: 2, z: 3 });

        let mut states = block_states_from_vox(&data, 0).unwrap();
        states.sort_by_key(|(p, _)| p.xyz());
        assert_eq!(
            states,
            vec![
                ([0, 0, 0].into(), BlockState::Full),
                ([1, 1, 2].into(), BlockState::Half)
            ]
        );
        assert!(block_states_from_vox(&data, 1).is_err());
    }
}
