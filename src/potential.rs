//! The kinds of potentials a `Field` can hold.
//!
//! A potential scores the current states of its clique with a non-negative number; a variable's
//! conditional likelihood is the product of the scores of every potential touching it. Clique
//! order is significant: position 0 is always "self", and the support potential expects the
//! remaining positions in `VON_NEUMANN_CLIQUE` order (top, bottom, then the four sides).
//!
//! Everything a kind needs from the lattice (heights, positions, boundary membership) is
//! captured when the potential is built, so evaluation only ever reads clique states.

use crate::{BlockState, ContinuousPoint, Error, Point, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A closure-backed potential for kinds this crate doesn't know about.
#[derive(Clone)]
pub struct CustomPotential {
    name: &'static str,
    score: Arc<dyn Fn(&[BlockState]) -> f64 + Send + Sync>,
}

impl CustomPotential {
    pub fn new<F>(name: &'static str, score: F) -> Self
    where
        F: Fn(&[BlockState]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name,
            score: Arc::new(score),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for CustomPotential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CustomPotential")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum PotentialKind {
    /// Rewards blocks that rest on (and are flanked by) other blocks. Clique: self, top, bottom,
    /// four sides.
    Support,
    /// Prefers low blocks. `relative_height` is in `(0, 1]`, 1 at the top of the lattice.
    Height { relative_height: f64 },
    /// Caps and shapes the total mass of the clique (usually the whole assembly).
    Mass {
        half_mass: f64,
        mass_coeff: f64,
        max_mass: f64,
    },
    /// Forces voxels on the XY boundary of the lattice to stay empty.
    Edge { on_edge: bool },
    /// Pulls the clique's center of mass toward `desired`. `positions` lines up with the clique.
    CenterOfMass {
        positions: Vec<Point>,
        desired: ContinuousPoint,
        half_mass: f64,
        max_deviation: f64,
    },
    /// Pushes blocks away from an obstacle `distance` away from this voxel.
    Repel { distance: f64, threshold: f64 },
    /// Pins a voxel to `state`.
    Fixed { state: BlockState },
    #[serde(skip)]
    Custom(CustomPotential),
}

/// Score given to a center of mass further than `max_deviation` from the target, or to a clique
/// with no mass at all.
const FAR_COM_SCORE: f64 = 1e-6;

/// Score of an empty voxel under the height potential.
const EMPTY_HEIGHT_SCORE: f64 = 0.01;

impl PotentialKind {
    pub fn name(&self) -> &'static str {
        match self {
            PotentialKind::Support => "support",
            PotentialKind::Height { .. } => "height",
            PotentialKind::Mass { .. } => "mass",
            PotentialKind::Edge { .. } => "edge",
            PotentialKind::CenterOfMass { .. } => "center of mass",
            PotentialKind::Repel { .. } => "repel",
            PotentialKind::Fixed { .. } => "fixed",
            PotentialKind::Custom(c) => c.name(),
        }
    }

    fn min_clique_size(&self) -> usize {
        match self {
            PotentialKind::Support => 7,
            PotentialKind::Mass { .. } | PotentialKind::Custom(_) => 0,
            PotentialKind::CenterOfMass { positions, .. } => positions.len(),
            _ => 1,
        }
    }

    /// Scores the given clique states. Reads nothing but its arguments, so the caller is
    /// responsible for passing current (not cached) states.
    pub fn evaluate(&self, clique: &[BlockState]) -> Result<f64> {
        let expected = self.min_clique_size();
        if clique.len() < expected {
            return Err(Error::CliqueShape {
                kind: self.name(),
                expected,
                found: clique.len(),
            });
        }

        let score = match self {
            PotentialKind::Support => support_score(clique),
            PotentialKind::Height { relative_height } => {
                if clique[0].is_empty() {
                    EMPTY_HEIGHT_SCORE
                } else {
                    *relative_height
                }
            }
            PotentialKind::Mass {
                half_mass,
                mass_coeff,
                max_mass,
            } => {
                let total: f64 = clique.iter().map(|s| s.mass(*half_mass)).sum();
                if total > *max_mass {
                    0.0
                } else {
                    (mass_coeff * total).exp()
                }
            }
            PotentialKind::Edge { on_edge } => {
                if *on_edge && !clique[0].is_empty() {
                    0.0
                } else {
                    1.0
                }
            }
            PotentialKind::CenterOfMass {
                positions,
                desired,
                half_mass,
                max_deviation,
            } => center_of_mass_score(clique, positions, desired, *half_mass, *max_deviation),
            PotentialKind::Repel {
                distance,
                threshold,
            } => {
                if !clique[0].is_empty() && *distance < *threshold {
                    (-3.0 * distance).exp()
                } else {
                    1.0
                }
            }
            PotentialKind::Fixed { state } => {
                if clique[0] == *state {
                    1.0
                } else {
                    0.0
                }
            }
            PotentialKind::Custom(c) => (c.score)(clique),
        };

        Ok(score)
    }
}

fn support_score(clique: &[BlockState]) -> f64 {
    let fill: Vec<f64> = clique.iter().map(|s| s.fill()).collect();
    let (me, top, bottom) = (fill[0], fill[1], fill[2]);

    // Resting on or carrying a block counts three times as much as a side neighbor.
    let points = 3.0 * top + 3.0 * bottom + fill[3..7].iter().sum::<f64>();

    if me == 0.0 {
        0.5
    } else if me < 1.0 {
        1.0 - (-points / me).exp()
    } else if bottom == 0.0 {
        // A full block needs something underneath it.
        0.0
    } else {
        1.0 - (-points).exp()
    }
}

fn center_of_mass_score(
    clique: &[BlockState],
    positions: &[Point],
    desired: &ContinuousPoint,
    half_mass: f64,
    max_deviation: f64,
) -> f64 {
    let mut weighted = ContinuousPoint::default();
    let mut total_mass = 0.0;
    for (state, p) in clique.iter().zip(positions.iter()) {
        let mass = state.mass(half_mass);
        total_mass += mass;
        weighted = weighted + p.to_continuous() * mass;
    }
    if total_mass == 0.0 {
        return FAR_COM_SCORE;
    }

    let com = weighted * (1.0 / total_mass);
    let deviation =
        (com.x - desired.x).abs() + (com.y - desired.y).abs() + (com.z - desired.z).abs();
    if deviation > max_deviation {
        FAR_COM_SCORE
    } else {
        (-deviation).exp()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
