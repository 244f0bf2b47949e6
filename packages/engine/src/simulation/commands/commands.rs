use crate::elements::{Cell, Kind};
use crate::error::Result;
use crate::systems::terrain::TerrainParams;

use super::Simulation;

pub(super) fn place(sim: &mut Simulation, x: i32, y: i32, kind: Kind) -> bool {
    match sim.lattice.get(x, y) {
        None | Some(Cell::Wall) => return false,
        Some(_) => {}
    }

    sim.lattice.set(x, y, Cell::of_kind(kind, sim.config.fluid.max));

    // Keep the registry in step with the grid: new gas gets a fresh
    // countdown, anything else drops whatever was there.
    if kind.is_gas() {
        sim.lifetimes.spawn((x, y), kind, &mut sim.rng);
    } else {
        sim.lifetimes.remove((x, y));
    }
    true
}

pub(super) fn place_in_radius(sim: &mut Simulation, cx: i32, cy: i32, radius: i32, kind: Kind) -> u32 {
    // No disc wider than the lattice can touch more cells than the lattice.
    let reach = sim.lattice.width().max(sim.lattice.height()).min(i32::MAX as u32) as i32;
    let radius = radius.min(reach);
    let r2 = i64::from(radius) * i64::from(radius);
    let mut placed = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy);
            if d2 <= r2 && place(sim, cx.saturating_add(dx), cy.saturating_add(dy), kind) {
                placed += 1;
            }
        }
    }
    placed
}

pub(super) fn clear(sim: &mut Simulation) -> Result<()> {
    sim.lattice.clear();
    sim.lifetimes.clear();
    sim.frame = 0;
    sim.perf_stats.reset();

    let params = sim.terrain.unwrap_or(TerrainParams {
        fill_ratio: sim.config.fill_ratio,
        iterations: sim.config.iterations,
    });
    super::init::generate_terrain(sim, params)?;

    tracing::debug!(fill_ratio = params.fill_ratio, iterations = params.iterations, "simulation cleared");
    Ok(())
}

/// Replace the whole current buffer (e.g. a saved snapshot). Gas cells get
/// fresh countdowns; fluid amounts are taken as given.
pub(super) fn load_cells(sim: &mut Simulation, cells: Vec<Cell>) -> Result<()> {
    sim.lattice.load(cells)?;
    sim.lifetimes.clear();
    for idx in 0..sim.lattice.size() {
        let cell = sim.lattice.cells()[idx];
        if cell.is_gas() {
            let pos = sim.lattice.coords(idx);
            sim.lifetimes.spawn(pos, cell.kind(), &mut sim.rng);
        }
    }
    Ok(())
}
