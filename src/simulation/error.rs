//! Error types for the simulation core.

use std::path::PathBuf;

use crate::simulation::organism::Kind;

/// Errors surfaced by the simulation core.
///
/// Configuration and DNA-loading problems are reported before any simulation
/// state exists. [`SimulationError::SelectionExhausted`] signals a broken
/// invariant in the breeding pool and is always fatal.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A configuration value fails validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A DNA vector does not match the network topology.
    #[error("DNA vector has {found} genes, expected {expected}")]
    DnaLengthMismatch {
        /// Gene count required by the network topology.
        expected: usize,
        /// Gene count actually present.
        found: usize,
    },

    /// The weighted parent draw walked the whole pool without a match.
    ///
    /// Unreachable for well-formed weights summing to the drawn range; hitting
    /// it means the fitness pool itself is inconsistent.
    #[error("selection pool exhausted without a match; fitness weights are inconsistent")]
    SelectionExhausted,

    /// The spatial index rejected an organism position.
    #[error("spatial index rejected organism position: {0:?}")]
    SpatialIndex(kdtree::ErrorKind),

    /// A DNA snapshot holds the other role's population.
    #[error("snapshot {path}: holds {found:?} DNA, expected {expected:?}")]
    SnapshotRoleMismatch {
        /// File that was loaded.
        path: PathBuf,
        /// Role requested by the caller.
        expected: Kind,
        /// Role recorded in the file.
        found: Kind,
    },

    /// Snapshot file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failed.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl From<kdtree::ErrorKind> for SimulationError {
    fn from(err: kdtree::ErrorKind) -> Self {
        SimulationError::SpatialIndex(err)
    }
}
