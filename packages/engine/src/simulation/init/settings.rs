use crate::systems::terrain::TerrainParams;

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn set_terrain_params(sim: &mut Simulation, fill_ratio: f64, iterations: u32) {
    sim.terrain = Some(TerrainParams { fill_ratio, iterations });
}

pub(super) fn enable_perf_metrics(sim: &mut Simulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &Simulation) -> PerfStats {
    sim.perf_stats.clone()
}
