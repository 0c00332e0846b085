//! DNA persistence.
//!
//! Evolved weight vectors are exported per role as an ordered list, keyed by
//! a content hash of the generation so runs can be traced back to the exact
//! population that produced them. Loading validates every vector's length
//! before a single organism is constructed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::dna::Dna;
use super::error::SimulationError;
use super::organism::{Kind, Organism};

/// One role's DNA, exported at a generation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaSnapshot {
    /// Role whose population this is.
    pub role: Kind,
    /// Generation index the snapshot was taken at.
    pub generation: u32,
    /// Wall-clock save time, RFC 3339.
    pub saved_at: String,
    /// One gene vector per organism, in cohort order.
    pub dna: Vec<Vec<f32>>,
}

impl DnaSnapshot {
    /// Captures a cohort's DNA.
    pub fn capture(role: Kind, generation: u32, cohort: &[Organism]) -> Self {
        Self {
            role,
            generation,
            saved_at: chrono::Utc::now().to_rfc3339(),
            dna: cohort.iter().map(|o| o.dna.genes().to_vec()).collect(),
        }
    }

    /// Content hash over the gene data, hex-encoded and truncated for use as
    /// a filename key. Independent of the save timestamp.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for vector in &self.dna {
            for gene in vector {
                hasher.update(&gene.to_le_bytes());
            }
        }
        let mut hex = hasher.finalize().to_hex().to_string();
        hex.truncate(12);
        hex
    }

    /// Writes the snapshot as JSON under `dir`, returning the path.
    ///
    /// Filename layout: `{role}_dna_gen_{generation}_{hash}.json`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, SimulationError> {
        let path = dir.join(format!(
            "{}_dna_gen_{}_{}.json",
            self.role.as_str(),
            self.generation,
            self.content_hash()
        ));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    /// Reads a snapshot back from disk.
    pub fn load(path: &Path) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&json)?;
        Ok(snapshot)
    }

    /// Validates the snapshot against the expected role and converts every
    /// vector, failing before any partial application.
    pub fn into_dna(self, expected: Kind, path: &Path) -> Result<Vec<Dna>, SimulationError> {
        if self.role != expected {
            return Err(SimulationError::SnapshotRoleMismatch {
                path: path.to_path_buf(),
                expected,
                found: self.role,
            });
        }
        self.dna.into_iter().map(Dna::from_genes).collect()
    }
}
