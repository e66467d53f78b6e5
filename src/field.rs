//! A Gibbs field over discrete block states.
//!
//! Variables (nodes) and potentials (edges) never hold references to each other. Each stores
//! the IDs of the other side, and every traversal looks those IDs up in whichever field
//! currently owns it. Lookups pay an indirection, but a field is a flat pair of vectors, so
//! `clone` is a plain deep copy with nothing to repair. Search clones fields on every
//! expansion, which is the cost this layout optimizes.

use crate::{sample_number_line, BlockState, Error, PotentialKind, Result};

use log::trace;
use num_traits::FromPrimitive;

/// Field-unique ID of a variable. Also the ID of the lattice node the variable sits on.
pub type NodeId = usize;

/// Field-unique ID of a potential.
pub type PotentialId = usize;

/// One voxel's random variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    id: NodeId,
    potential_ids: Vec<PotentialId>,
    state: BlockState,
}

impl Variable {
    /// A variable in the default (empty) state, touching no potentials yet.
    pub fn new(id: NodeId) -> Self {
        Self::with_state(id, BlockState::Empty)
    }

    pub fn with_state(id: NodeId, state: BlockState) -> Self {
        Self {
            id,
            potential_ids: Vec::new(),
            state,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// IDs of the potentials whose cliques include this variable.
    pub fn potential_ids(&self) -> &[PotentialId] {
        &self.potential_ids
    }
}

/// A factor over an ordered clique of variables.
#[derive(Clone, Debug)]
pub struct Potential {
    id: PotentialId,
    variable_ids: Vec<NodeId>,
    kind: PotentialKind,
}

impl Potential {
    pub fn new(id: PotentialId, variable_ids: Vec<NodeId>, kind: PotentialKind) -> Self {
        Self {
            id,
            variable_ids,
            kind,
        }
    }

    pub fn id(&self) -> PotentialId {
        self.id
    }

    /// The ordered clique. Position 0 is "self".
    pub fn clique(&self) -> &[NodeId] {
        &self.variable_ids
    }

    pub fn kind(&self) -> &PotentialKind {
        &self.kind
    }

    /// Scores the current states of the clique, as read from `field` right now.
    pub fn calculate(&self, field: &Field) -> Result<f64> {
        let states = self
            .variable_ids
            .iter()
            .map(|id| field.state(*id).ok_or(Error::UnknownVariable(*id)))
            .collect::<Result<Vec<_>>>()?;

        self.kind.evaluate(&states)
    }
}

/// The arena of variables and potentials. IDs are handed out by whoever adds to the field (the
/// assembly constructor), densely and in order.
#[derive(Clone, Debug, Default)]
pub struct Field {
    variables: Vec<Variable>,
    potentials: Vec<Potential>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_potentials(&self) -> usize {
        self.potentials.len()
    }

    pub fn add_variable(&mut self, variable: Variable) -> Result<()> {
        let expected = self.variables.len();
        if variable.id < expected {
            return Err(Error::DuplicateVariable(variable.id));
        }
        if variable.id > expected {
            return Err(Error::NonSequentialId {
                kind: "variable",
                id: variable.id,
                expected,
            });
        }
        self.variables.push(variable);

        Ok(())
    }

    /// Adds `potential` and registers its ID on every member of its clique.
    pub fn add_potential(&mut self, potential: Potential) -> Result<()> {
        let expected = self.potentials.len();
        if potential.id < expected {
            return Err(Error::DuplicatePotential(potential.id));
        }
        if potential.id > expected {
            return Err(Error::NonSequentialId {
                kind: "potential",
                id: potential.id,
                expected,
            });
        }
        if let Some(missing) = potential
            .variable_ids
            .iter()
            .find(|id| **id >= self.variables.len())
        {
            return Err(Error::UnknownVariable(*missing));
        }

        for var_id in potential.variable_ids.iter() {
            let touching = &mut self.variables[*var_id].potential_ids;
            if !touching.contains(&potential.id) {
                touching.push(potential.id);
            }
        }
        self.potentials.push(potential);

        Ok(())
    }

    pub fn variable(&self, id: NodeId) -> Option<&Variable> {
        self.variables.get(id)
    }

    pub fn potential(&self, id: PotentialId) -> Option<&Potential> {
        self.potentials.get(id)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn potentials(&self) -> impl Iterator<Item = &Potential> {
        self.potentials.iter()
    }

    pub fn state(&self, id: NodeId) -> Option<BlockState> {
        self.variables.get(id).map(|v| v.state)
    }

    /// Every variable's state, indexed by ID.
    pub fn states(&self) -> Vec<BlockState> {
        self.variables.iter().map(|v| v.state).collect()
    }

    pub fn set_state(&mut self, id: NodeId, state: BlockState) -> Result<()> {
        let variable = self
            .variables
            .get_mut(id)
            .ok_or(Error::UnknownVariable(id))?;
        variable.state = state;

        Ok(())
    }

    /// The unnormalized conditional likelihood of variable `id`'s current state: the product of
    /// the scores of every potential touching it.
    pub fn conditional_score(&self, id: NodeId) -> Result<f64> {
        let variable = self.variable(id).ok_or(Error::UnknownVariable(id))?;

        let mut score = 1.0;
        for pot_id in variable.potential_ids.iter() {
            let potential = self
                .potential(*pot_id)
                .ok_or(Error::UnknownPotential(*pot_id))?;
            score *= potential.calculate(self)?;
        }

        Ok(score)
    }

    /// One Gibbs step on variable `id`: holding every other variable fixed, score each candidate
    /// state, then draw the new state from that distribution using the uniform value `rng` in
    /// `[0, 1)`.
    pub fn sample_variable(&mut self, id: NodeId, rng: f64) -> Result<BlockState> {
        let original = self.state(id).ok_or(Error::UnknownVariable(id))?;

        let mut scores = [0.0; 3];
        for (score, candidate) in scores.iter_mut().zip(BlockState::CANDIDATES.iter()) {
            self.variables[id].state = *candidate;
            match self.conditional_score(id) {
                Ok(s) => *score = s,
                Err(e) => {
                    self.variables[id].state = original;
                    return Err(e);
                }
            }
        }

        let index = match sample_number_line(&scores, rng) {
            Ok(i) => i,
            Err(e) => {
                self.variables[id].state = original;
                return Err(e);
            }
        };
        self.variables[id].state = original;
        let chosen = BlockState::from_usize(index).ok_or(Error::InvalidSampleIndex {
            scaled: rng,
            total: scores.iter().sum(),
        })?;
        trace!(
            "variable {} resampled {:?} -> {:?} from {:?}",
            id,
            original,
            chosen,
            scores
        );
        self.variables[id].state = chosen;

        Ok(chosen)
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
    use crate::CustomPotential;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn field_with_variables(n: usize) -> Field {
        let mut field = Field::new();
        for id in 0..n {
            field.add_variable(Variable::new(id)).unwrap();
        }

        field
    }

    /// A potential on one variable scoring the candidates (empty, half, full) as (1, 2, 1).
    fn one_two_one() -> PotentialKind {
        PotentialKind::Custom(CustomPotential::new("one two one", |clique| match clique[0] {
            BlockState::Half => 2.0,
            _ => 1.0,
        }))
    }

    #[test]
    fn test_duplicate_and_sparse_ids_are_rejected() {
        let mut field = field_with_variables(2);

        assert_eq!(
            field.add_variable(Variable::new(1)),
            Err(Error::DuplicateVariable(1))
        );
        assert_eq!(
            field.add_variable(Variable::new(5)),
            Err(Error::NonSequentialId {
                kind: "variable",
                id: 5,
                expected: 2
            })
        );

        field
            .add_potential(Potential::new(0, vec![0], PotentialKind::Support))
            .unwrap();
        assert!(matches!(
            field.add_potential(Potential::new(0, vec![1], PotentialKind::Support)),
            Err(Error::DuplicatePotential(0))
        ));
        assert!(matches!(
            field.add_potential(Potential::new(1, vec![0, 9], PotentialKind::Support)),
            Err(Error::UnknownVariable(9))
        ));
        assert_eq!(field.num_potentials(), 1);
    }

    #[test]
    fn test_add_potential_registers_on_clique_members() {
        let mut field = field_with_variables(3);
        field
            .add_potential(Potential::new(
                0,
                vec![0, 2],
                PotentialKind::Edge { on_edge: false },
            ))
            .unwrap();
        field
            .add_potential(Potential::new(
                1,
                vec![2, 2],
                PotentialKind::Edge { on_edge: false },
            ))
            .unwrap();

        assert_eq!(field.variable(0).unwrap().potential_ids(), &[0]);
        assert_eq!(field.variable(1).unwrap().potential_ids(), &[] as &[PotentialId]);
        assert_eq!(field.variable(2).unwrap().potential_ids(), &[0, 1]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut field = field_with_variables(4);
        field
            .add_potential(Potential::new(0, vec![0, 1], one_two_one()))
            .unwrap();

        let mut copy = field.clone();
        copy.set_state(1, BlockState::Full).unwrap();

        assert_eq!(field.state(1), Some(BlockState::Empty));
        assert_eq!(copy.state(1), Some(BlockState::Full));
        assert_eq!(copy.potential(0).unwrap().clique(), &[0, 1]);
    }

    #[test]
    fn test_conditional_score_is_product_of_current_scores() {
        let mut field = field_with_variables(2);
        field
            .add_potential(Potential::new(0, vec![0], one_two_one()))
            .unwrap();
        field
            .add_potential(Potential::new(1, vec![0], one_two_one()))
            .unwrap();
        field
            .add_potential(Potential::new(
                2,
                vec![0, 1],
                PotentialKind::Fixed {
                    state: BlockState::Half,
                },
            ))
            .unwrap();

        assert_eq!(field.conditional_score(0), Ok(0.0));
        field.set_state(0, BlockState::Half).unwrap();
        assert_eq!(field.conditional_score(0), Ok(4.0));
        field.set_state(0, BlockState::Full).unwrap();
        assert_eq!(field.conditional_score(0), Ok(0.0));
    }

    #[test]
    fn test_sample_variable_distribution() {
        let mut field = field_with_variables(1);
        field
            .add_potential(Potential::new(0, vec![0], one_two_one()))
            .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trials = 20_000;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            let state = field.sample_variable(0, rng.random::<f64>()).unwrap();
            counts[state as usize] += 1;
        }

        let freq: Vec<f64> = counts.iter().map(|c| *c as f64 / trials as f64).collect();
        assert!((freq[0] - 0.25).abs() < 0.02, "{:?}", freq);
        assert!((freq[1] - 0.5).abs() < 0.02, "{:?}", freq);
        assert!((freq[2] - 0.25).abs() < 0.02, "{:?}", freq);
    }

    #[test]
    fn test_sample_variable_uses_current_neighbor_states() {
        let mut field = field_with_variables(2);
        // Variable 0 must copy variable 1.
        field
            .add_potential(Potential::new(
                0,
                vec![0, 1],
                PotentialKind::Custom(CustomPotential::new("copy", |c| {
                    if c[0] == c[1] {
                        1.0
                    } else {
                        0.0
                    }
                })),
            ))
            .unwrap();

        for state in BlockState::CANDIDATES.iter() {
            field.set_state(1, *state).unwrap();
            assert_eq!(field.sample_variable(0, 0.5), Ok(*state));
        }
    }

    #[test]
    fn test_degenerate_distribution_is_an_error_and_keeps_state() {
        let mut field = field_with_variables(1);
        field.set_state(0, BlockState::Half).unwrap();
        field
            .add_potential(Potential::new(
                0,
                vec![0],
                PotentialKind::Custom(CustomPotential::new("zero", |_| 0.0)),
            ))
            .unwrap();

        assert!(matches!(
            field.sample_variable(0, 0.3),
            Err(Error::InvalidSampleIndex { .. })
        ));
        assert_eq!(field.state(0), Some(BlockState::Half));
    }
}
