use crate::{Assembly, Error, Field, NodeId, Result};

use log::trace;
use rand::Rng;
use std::sync::Arc;

/// Single-site Gibbs sampler. Each step picks one variable uniformly at random and redraws its
/// state from its conditional distribution given every other variable.
#[derive(Clone, Debug, Default)]
pub struct McmcSampler {
    index_set: Option<Vec<NodeId>>,
}

impl McmcSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts sampling to these variables. `None` samples the whole field.
    pub fn set_index_set(&mut self, index_set: Option<Vec<NodeId>>) {
        self.index_set = index_set;
    }

    pub fn index_set(&self) -> Option<&[NodeId]> {
        self.index_set.as_deref()
    }

    /// Runs `num_samples` single-site updates on `field`.
    pub fn sample<R: Rng>(
        &self,
        field: &mut Field,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<()> {
        if num_samples == 0 {
            return Ok(());
        }

        match &self.index_set {
            Some(ids) => {
                if ids.is_empty() {
                    return Err(Error::EmptyIndexSet);
                }
                for _ in 0..num_samples {
                    let id = ids[rng.random_range(0..ids.len())];
                    field.sample_variable(id, rng.random::<f64>())?;
                }
            }
            None => {
                let n = field.num_variables();
                if n == 0 {
                    return Err(Error::EmptyField);
                }
                for _ in 0..num_samples {
                    let id = rng.random_range(0..n);
                    field.sample_variable(id, rng.random::<f64>())?;
                }
            }
        }

        Ok(())
    }
}

/// Produces short, independent Markov chains from a shared base assembly.
#[derive(Clone, Debug, Default)]
pub struct AssemblySampler {
    sampler: McmcSampler,
    base: Option<Arc<Assembly>>,
}

impl AssemblySampler {
    pub fn new(sampler: McmcSampler) -> Self {
        Self {
            sampler,
            base: None,
        }
    }

    pub fn set_base(&mut self, base: Arc<Assembly>) {
        self.base = Some(base);
    }

    pub fn base(&self) -> Option<&Arc<Assembly>> {
        self.base.as_ref()
    }

    pub fn sampler(&self) -> &McmcSampler {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut McmcSampler {
        &mut self.sampler
    }

    /// Clones the base `num_samples` times and runs `sample_depth` Gibbs updates on each clone.
    pub fn sample<R: Rng>(
        &self,
        num_samples: usize,
        sample_depth: usize,
        rng: &mut R,
    ) -> Result<Vec<Assembly>> {
        let base = self.base.as_ref().ok_or(Error::NoBaseAssembly)?;

        let mut samples = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            let mut sample = Assembly::clone(base);
            self.sampler
                .sample(sample.field_mut(), sample_depth, rng)?;
            samples.push(sample);
        }
        trace!(
            "drew {} samples of depth {} from base with {} voxels",
            num_samples,
            sample_depth,
            base.lattice().len()
        );

        Ok(samples)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
