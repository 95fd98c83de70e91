//! Binary checkpoints of the full engine state.
//!
//! Unlike the text format, a snapshot keeps both history generations and the
//! generation counter, so a restored grid answers `is_stable` exactly as the
//! grid that wrote it would have.

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use crate::core::{CellMatrix, Grid};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    current: &'a CellMatrix,
    previous: &'a CellMatrix,
    two_ago: &'a CellMatrix,
    generation: u64,
}

#[derive(Deserialize)]
struct Snapshot {
    current: CellMatrix,
    previous: CellMatrix,
    two_ago: CellMatrix,
    generation: u64,
}

impl Grid {
    /// Encode the whole grid, history included.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        let (previous, two_ago) = self.history();
        let bytes = bincode::serialize(&SnapshotRef {
            current: self.current(),
            previous,
            two_ago,
            generation: self.generation(),
        })?;
        log::debug!(
            "snapshot of {}x{} grid at generation {}: {} bytes",
            self.height(),
            self.width(),
            self.generation(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decode a grid written by [`Grid::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        Grid::from_parts(
            snapshot.current,
            snapshot.previous,
            snapshot.two_ago,
            snapshot.generation,
        )
        .ok_or(SnapshotError::Inconsistent)
    }
}
