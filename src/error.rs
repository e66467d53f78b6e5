//! Error types for field construction, sampling, and persistence.

use crate::{NodeId, Point, PotentialId};

use std::fmt;

/// Errors arising from building, sampling, or (de)serializing assemblies.
///
/// Missing neighbors during clique resolution are not errors; those lookups return `Option`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A variable with this ID is already registered in the field.
    DuplicateVariable(NodeId),
    /// A potential with this ID is already registered in the field.
    DuplicatePotential(PotentialId),
    /// IDs must be assigned densely: the next ID is always the current count.
    NonSequentialId {
        /// Which arena rejected the ID.
        kind: &'static str,
        /// The ID the caller supplied.
        id: usize,
        /// The only ID that would have been accepted.
        expected: usize,
    },
    /// The lattice already maps this ID to a position.
    DuplicateNodeId(NodeId),
    /// The lattice already has a node at this position.
    DuplicatePosition(Point),
    /// A lookup referenced a variable that is not in the field.
    UnknownVariable(NodeId),
    /// A lookup referenced a potential that is not in the field.
    UnknownPotential(PotentialId),
    /// A lookup referenced a position that has no lattice node.
    UnknownPosition(Point),
    /// A variable has no position in the lattice.
    UnplacedVariable(NodeId),
    /// The cumulative scan ran past the accumulated mass of the distribution.
    InvalidSampleIndex {
        /// The scaled random value that overran the scan.
        scaled: f64,
        /// The accumulated mass of the distribution.
        total: f64,
    },
    /// A potential was handed a clique it cannot interpret.
    CliqueShape {
        /// Name of the potential kind.
        kind: &'static str,
        /// Minimum number of clique members the kind requires.
        expected: usize,
        /// Number of clique members it was given.
        found: usize,
    },
    /// Sampling was requested on a field with no variables.
    EmptyField,
    /// Sampling was restricted to an empty index set.
    EmptyIndexSet,
    /// An assembly sampler was asked for samples before a base assembly was set.
    NoBaseAssembly,
    /// Encoding or decoding a snapshot failed.
    Codec(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVariable(id) => write!(f, "field already has variable with id {}", id),
            Self::DuplicatePotential(id) => {
                write!(f, "field already has potential with id {}", id)
            }
            Self::NonSequentialId { kind, id, expected } => write!(
                f,
                "{} id {} is not sequential (expected {})",
                kind, id, expected
            ),
            Self::DuplicateNodeId(id) => write!(f, "lattice already has node with id {}", id),
            Self::DuplicatePosition(p) => write!(f, "lattice already has node at position {}", p),
            Self::UnknownVariable(id) => write!(f, "no variable with id {}", id),
            Self::UnknownPotential(id) => write!(f, "no potential with id {}", id),
            Self::UnknownPosition(p) => write!(f, "no lattice node at position {}", p),
            Self::UnplacedVariable(id) => write!(f, "variable {} has no lattice position", id),
            Self::InvalidSampleIndex { scaled, total } => write!(
                f,
                "sampled value {} overran distribution with total mass {}",
                scaled, total
            ),
            Self::CliqueShape {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} potential needs at least {} clique members, got {}",
                kind, expected, found
            ),
            Self::EmptyField => write!(f, "cannot sample a field with no variables"),
            Self::EmptyIndexSet => write!(f, "cannot sample from an empty index set"),
            Self::NoBaseAssembly => write!(f, "assembly sampler has no base assembly"),
            Self::Codec(reason) => write!(f, "snapshot codec error: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Codec(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Codec(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
