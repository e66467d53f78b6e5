use serde::{Deserialize, Serialize};

/// Tunable weights of the search cost. Lower cost is better.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CostWeights {
    /// Scales the squared XY distance between the actual and desired center of mass.
    pub com_xy: f64,
    /// Scales the squared Z distance between the actual and desired center of mass.
    pub com_z: f64,
    /// Scales the total mass relative to the lattice volume.
    pub density: f64,
    /// Multiplies the mass-weighted sum of squared heights. Negative values reward tall
    /// structures.
    pub z_fill: f64,
    /// Multiplies the summed ground distance of every occupied voxel.
    pub wavefront: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            com_xy: 1.0,
            com_z: 0.5,
            density: 2.0,
            z_fill: -0.01,
            wavefront: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The frontier never holds more than this many assemblies.
    pub max_queue_size: usize,
    /// Children generated per expansion.
    pub num_successors: usize,
    /// Gibbs updates per child.
    pub sample_depth: usize,
    pub seed: u64,
    /// Mass of a half block; a full block weighs 1.
    pub half_mass: f64,
    pub weights: CostWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 100,
            num_successors: 5,
            sample_depth: 10,
            seed: 0,
            half_mass: 0.5,
            weights: CostWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_max_queue_size(mut self, max_queue_size: usize) -> Self {
        self.max_queue_size = max_queue_size;
        self
    }

    pub fn with_num_successors(mut self, num_successors: usize) -> Self {
        self.num_successors = num_successors;
        self
    }

    pub fn with_sample_depth(mut self, sample_depth: usize) -> Self {
        self.sample_depth = sample_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_half_mass(mut self, half_mass: f64) -> Self {
        self.half_mass = half_mass;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
