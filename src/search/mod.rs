//! Anytime best-first search over assemblies.
//!
//! The frontier holds at most `SearchConfig::max_queue_size` assemblies keyed by negated cost.
//! Every call to `TreeSearch::next` returns the cheapest assembly and expands it by sampling
//! short Gibbs chains from it; the expanded assembly stays in the frontier and may be expanded
//! again. There is no terminal state, so the caller decides when to stop.

mod cost;
mod frontier;
mod grid;

pub use cost::SearchProperties;
pub use frontier::Frontier;
pub use grid::{ground_distances, is_grounded, wavefront, wavefront_sum};

use crate::{Assembly, AssemblySampler, Result, SearchConfig};

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

pub struct TreeSearch<R = ChaCha8Rng> {
    sampler: AssemblySampler,
    config: SearchConfig,
    frontier: Frontier<Arc<Assembly>>,
    rng: R,
}

impl TreeSearch<ChaCha8Rng> {
    /// Seeds the search's RNG from `config.seed`.
    pub fn new(sampler: AssemblySampler, config: SearchConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self::with_rng(sampler, config, rng)
    }
}

impl<R: rand::Rng> TreeSearch<R> {
    pub fn with_rng(sampler: AssemblySampler, config: SearchConfig, rng: R) -> Self {
        Self {
            sampler,
            frontier: Frontier::new(config.max_queue_size),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn frontier(&self) -> &Frontier<Arc<Assembly>> {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn cost(&self, assembly: &Assembly) -> f64 {
        SearchProperties::compute(assembly, self.config.half_mass).cost(&self.config.weights)
    }

    /// Offers `assembly` to the frontier. Ungrounded assemblies and assemblies without variables
    /// are rejected outright. Returns whether the assembly is in the frontier afterwards; an
    /// accepted assembly can push out the worst entry, or be the worst entry itself.
    pub fn add<A: Into<Arc<Assembly>>>(&mut self, assembly: A) -> bool {
        let assembly = assembly.into();
        if assembly.field().num_variables() == 0 {
            debug!("rejected assembly without variables");
            return false;
        }
        if !is_grounded(&assembly) {
            debug!("rejected ungrounded assembly");
            return false;
        }

        let cost = self.cost(&assembly);
        let inserted = Arc::clone(&assembly);
        match self.frontier.insert(-cost, assembly) {
            Some((priority, evicted)) => {
                debug!("evicted assembly with cost {}", -priority);

                !Arc::ptr_eq(&evicted, &inserted)
            }
            None => {
                debug!("admitted assembly with cost {}", cost);

                true
            }
        }
    }

    /// Returns the cheapest assembly after adding `num_successors` samples drawn from it. The
    /// returned assembly is not removed. `None` if the frontier is empty.
    pub fn next(&mut self) -> Result<Option<Arc<Assembly>>> {
        let best = match self.peek() {
            Some(best) => best,
            None => return Ok(None),
        };

        self.sampler.set_base(Arc::clone(&best));
        let children = self.sampler.sample(
            self.config.num_successors,
            self.config.sample_depth,
            &mut self.rng,
        )?;
        let admitted = children
            .into_iter()
            .map(|child| self.add(child))
            .filter(|admitted| *admitted)
            .count();
        debug!(
            "expanded assembly into {}/{} admitted children; frontier size {}",
            admitted,
            self.config.num_successors,
            self.frontier.len()
        );

        Ok(Some(best))
    }

    /// The cheapest assembly, if any.
    pub fn peek(&self) -> Option<Arc<Assembly>> {
        self.frontier
            .peek_max()
            .map(|(_, assembly)| Arc::clone(assembly))
    }

    /// The cost of the cheapest assembly, if any.
    pub fn best_cost(&self) -> Option<f64> {
        self.frontier.peek_max().map(|(priority, _)| -priority)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
