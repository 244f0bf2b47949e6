use rand::seq::SliceRandom;

use crate::error::Result;
use crate::systems::behaviors::UpdateContext;

use super::{PerfTimer, Simulation};

/// One tick:
/// 1. copy current into scratch
/// 2. shuffle the dispatch order
/// 3. run the rule of every non-inert cell, in that order
/// 4. publish scratch as current
/// 5. count gas lifetimes down and clear expired gas
pub(super) fn step(sim: &mut Simulation) -> Result<()> {
    let timer = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    sim.lattice.begin_tick()?;
    sim.order.shuffle(&mut sim.rng);

    let fluid = sim.config.fluid;
    let mut dispatched = 0u32;
    for &idx in sim.order.iter() {
        let cell = sim.lattice.cells()[idx];
        let kind = cell.kind();
        if kind.is_inert() {
            continue;
        }

        // Dispatch on the pre-tick kind, even if scratch was overwritten
        // earlier this tick (wood ignited from above still falls).
        let (x, y) = sim.lattice.coords(idx);
        let mut ctx = UpdateContext {
            lattice: &mut sim.lattice,
            lifetimes: &mut sim.lifetimes,
            rng: &mut sim.rng,
            fluid,
            x,
            y,
            cell,
        };
        sim.behaviors.update(kind, &mut ctx);
        dispatched += 1;
    }

    sim.lattice.swap();
    let expired = sim.lifetimes.sweep(&mut sim.lattice);
    sim.frame += 1;

    tracing::trace!(frame = sim.frame, dispatched, expired, live_gas = sim.lifetimes.len(), "tick");

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.step_ms = timer.elapsed_ms();
        stats.dispatched = dispatched;
        stats.gas_expired = expired;
        stats.live_gas = sim.lifetimes.len() as u32;
        stats.grid_size = sim.lattice.size() as u32;
    }

    Ok(())
}
