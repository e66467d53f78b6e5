//! Plans a small structure inside a box of voxels and logs the best candidate found.
//!
//! Usage: `plan_assembly [ITERATIONS] [SEED]`. Set `RUST_LOG=debug` to watch the frontier.

use ilattice3_assembly::{
    constructor::{center_of_mass_factory, edge_slot, height_slot, mass_factory, support_slot},
    prelude::*,
    snapshot::AssemblySnapshot,
};

use log::{error, info};
use std::sync::Arc;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let iterations: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(100);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);

    if let Err(e) = run(iterations, seed) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(iterations: usize, seed: u64) -> ilattice3_assembly::Result<()> {
    let config = SearchConfig::default().with_seed(seed);

    let mut constructor = AssemblyConstructor::default();
    constructor.add_slot(support_slot());
    constructor.add_slot(height_slot());
    constructor.add_slot(edge_slot());
    constructor.add_global_slot(mass_factory(config.half_mass, -0.05, 40.0));
    constructor.add_global_slot(center_of_mass_factory(config.half_mass, 3.0));

    let mut assembly = Assembly::new();
    let extent = Extent::from_min_and_local_supremum([0, 0, 0].into(), [6, 6, 5].into());
    constructor.add_extent(&mut assembly, &extent)?;
    constructor.build_potentials(&mut assembly)?;
    info!(
        "built {} voxels and {} potentials",
        assembly.field().num_variables(),
        assembly.field().num_potentials()
    );

    let mut mcmc = McmcSampler::new();
    mcmc.set_index_set(Some(assembly.non_edge_node_ids()));
    let mut search = TreeSearch::new(AssemblySampler::new(mcmc), config);
    search.add(Arc::new(assembly));

    for i in 0..iterations {
        if search.next()?.is_none() {
            info!("frontier exhausted after {} iterations", i);
            break;
        }
    }

    if let (Some(best), Some(cost)) = (search.peek(), search.best_cost()) {
        let blocks = best.field().states().iter().filter(|s| !s.is_empty()).count();
        let bytes = AssemblySnapshot::from_assembly(&best).to_bytes()?;
        info!(
            "best cost {:.4} with {} blocks; frontier holds {}; snapshot is {} bytes",
            cost,
            blocks,
            search.len(),
            bytes.len()
        );
    }

    Ok(())
}
