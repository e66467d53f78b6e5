use enum_primitive_derive::Primitive;
use serde::{Deserialize, Serialize};

/// The discrete state of one voxel.
///
/// The integer order is the candidate order used by the Gibbs sampler, so a sampled index maps
/// straight back to a state via `FromPrimitive`.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Primitive, Serialize,
)]
pub enum BlockState {
    Empty = 0,
    Half = 1,
    Full = 2,
}

impl Default for BlockState {
    fn default() -> Self {
        BlockState::Empty
    }
}

impl BlockState {
    /// Every state a variable may be resampled into, in index order.
    pub const CANDIDATES: [BlockState; 3] = [BlockState::Empty, BlockState::Half, BlockState::Full];

    pub fn is_empty(self) -> bool {
        self == BlockState::Empty
    }

    /// Mass contributed by a voxel in this state. `half_mass` is the (tunable) mass of a half
    /// block; full blocks always weigh 1.
    pub fn mass(self, half_mass: f64) -> f64 {
        match self {
            BlockState::Empty => 0.0,
            BlockState::Half => half_mass,
            BlockState::Full => 1.0,
        }
    }

    /// Fraction of the cell that is occupied, as seen by neighboring potentials.
    pub fn fill(self) -> f64 {
        match self {
            BlockState::Empty => 0.0,
            BlockState::Half => 0.5,
            BlockState::Full => 1.0,
        }
    }
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
    use num_traits::FromPrimitive;

    #[test]
    fn test_candidate_index_round_trips() {
        for (i, state) in BlockState::CANDIDATES.iter().enumerate() {
            assert_eq!(BlockState::from_usize(i), Some(*state));
        }
        assert_eq!(BlockState::from_usize(3), None);
    }

    #[test]
    fn test_mass() {
        assert_eq!(BlockState::Empty.mass(0.5), 0.0);
        assert_eq!(BlockState::Half.mass(0.5), 0.5);
        assert_eq!(BlockState::Half.mass(0.1), 0.1);
        assert_eq!(BlockState::Full.mass(0.1), 1.0);
    }
}
