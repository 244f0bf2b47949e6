//! Read-only snapshots of the current buffer for renderers and hosts.
//! Scratch is never exposed.

use serde::Serialize;

use crate::elements::{Kind, KIND_COUNT};

use super::Simulation;

/// Cell counts per kind plus the total fluid amount.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Census {
    pub counts: [u32; KIND_COUNT],
    pub fluid_mass: f64,
}

impl Census {
    pub fn count(&self, kind: Kind) -> u32 {
        self.counts[kind.id() as usize]
    }

    /// Cells holding anything other than empty or wall.
    pub fn particles(&self) -> u32 {
        Kind::ALL
            .iter()
            .filter(|k| !k.is_inert())
            .map(|&k| self.count(k))
            .sum()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(super) fn census(sim: &Simulation) -> Census {
    let mut counts = [0u32; KIND_COUNT];
    let mut fluid_mass = 0.0f64;
    for cell in sim.lattice.cells() {
        counts[cell.kind().id() as usize] += 1;
        if let Some(amount) = cell.amount() {
            fluid_mass += amount as f64;
        }
    }
    Census { counts, fluid_mass }
}

/// Kind id per cell, row-major.
pub(super) fn kind_ids(sim: &Simulation) -> Vec<u8> {
    sim.lattice.cells().iter().map(|c| c.kind().id()).collect()
}

/// Fluid amount per cell, row-major; 0 for non-fluid cells.
pub(super) fn amounts(sim: &Simulation) -> Vec<f32> {
    sim.lattice.cells().iter().map(|c| c.amount().unwrap_or(0.0)).collect()
}
