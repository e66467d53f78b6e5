use ilattice3_assembly::{
    constructor::{center_of_mass_factory, edge_slot, mass_factory, pin_voxel, support_slot},
    prelude::*,
    search::is_grounded,
    snapshot::AssemblySnapshot,
};

use std::sync::Arc;

fn planning_box() -> Assembly {
    let mut constructor = AssemblyConstructor::default();
    constructor.add_slot(support_slot());
    constructor.add_slot(edge_slot());
    constructor.add_global_slot(mass_factory(0.5, -0.1, 20.0));
    constructor.add_global_slot(center_of_mass_factory(0.5, 3.0));

    let mut assembly = Assembly::new();
    constructor
        .add_extent(
            &mut assembly,
            &Extent::from_min_and_local_supremum([0, 0, 0].into(), [5, 5, 4].into()),
        )
        .unwrap();
    constructor.build_potentials(&mut assembly).unwrap();

    assembly
}

fn search_from(assembly: Assembly, seed: u64) -> TreeSearch {
    let mut mcmc = McmcSampler::new();
    mcmc.set_index_set(Some(assembly.non_edge_node_ids()));
    let config = SearchConfig::default()
        .with_seed(seed)
        .with_max_queue_size(20);
    let mut search = TreeSearch::new(AssemblySampler::new(mcmc), config);
    assert!(search.add(Arc::new(assembly)));

    search
}

#[test]
fn test_search_only_keeps_grounded_assemblies_within_bounds() {
    let mut search = search_from(planning_box(), 3);

    for _ in 0..30 {
        let expanded = search.next().unwrap().unwrap();
        assert!(is_grounded(&expanded));
        assert!(search.len() <= 20);
    }

    let costs: Vec<f64> = search.frontier().iter().map(|(p, _)| -p).collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(search.best_cost(), costs.first().cloned());
    for (_, assembly) in search.frontier().iter() {
        assert!(is_grounded(assembly));
        // Edge potentials forbid blocks on the XY boundary, and the sampler never touches them.
        let extent = assembly.lattice().bounding_extent();
        for (id, p) in assembly.lattice().iter() {
            if extent.is_on_xy_boundary(&p) {
                assert_eq!(assembly.field().state(id), Some(BlockState::Empty));
            }
        }
    }
}

#[test]
fn test_same_seed_gives_same_search() {
    let mut a = search_from(planning_box(), 11);
    let mut b = search_from(planning_box(), 11);

    for _ in 0..10 {
        let x = a.next().unwrap().unwrap();
        let y = b.next().unwrap().unwrap();
        assert_eq!(x.field().states(), y.field().states());
    }
    assert_eq!(a.best_cost(), b.best_cost());
}

#[test]
fn test_pinned_voxel_survives_search_and_snapshot() {
    let mut assembly = planning_box();
    pin_voxel(&mut assembly, &[2, 2, 0].into(), BlockState::Full).unwrap();
    assembly
        .set_block_state(&[2, 2, 0].into(), BlockState::Full)
        .unwrap();

    let mut search = search_from(assembly, 5);
    for _ in 0..10 {
        search.next().unwrap();
    }

    let best = search.peek().unwrap();
    assert_eq!(
        best.block_state_at(&[2, 2, 0].into()),
        Some(BlockState::Full)
    );

    let bytes = AssemblySnapshot::from_assembly(&best).to_bytes().unwrap();
    let restored = AssemblySnapshot::from_bytes(&bytes)
        .unwrap()
        .into_assembly()
        .unwrap();
    assert_eq!(restored.field().states(), best.field().states());
    assert_eq!(restored.lattice(), best.lattice());
}
