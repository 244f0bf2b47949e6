use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::config::SimConfig;
use crate::error::Result;
use crate::spatial::Lattice;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::lifetimes::GasLifetimes;
use crate::systems::terrain::{self, TerrainParams};

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn create_simulation(config: SimConfig) -> Result<Simulation> {
    let rng = ChaCha8Rng::seed_from_u64(config.seed);
    create_simulation_with_rng(config, rng)
}

pub(super) fn create_simulation_with_rng(config: SimConfig, rng: ChaCha8Rng) -> Result<Simulation> {
    config.validate()?;
    let lattice = Lattice::new(config.width, config.height)?;
    let lifetimes = GasLifetimes::new(config.dark_gas_lifetime, config.light_gas_lifetime);
    let order = (0..lattice.size()).collect();

    tracing::debug!(width = config.width, height = config.height, seed = config.seed, "simulation created");

    Ok(Simulation {
        config,
        lattice,
        lifetimes,
        behaviors: BehaviorRegistry::new(),
        rng,
        terrain: None,
        order,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Overwrite every cell with a new cave layout. Any gas the layout replaced
/// is gone, so the registry starts over too.
pub(super) fn generate_terrain(sim: &mut Simulation, params: TerrainParams) -> Result<()> {
    let cells = terrain::generate(sim.lattice.width(), sim.lattice.height(), params, &mut sim.rng);
    sim.lattice.load(cells)?;
    sim.lifetimes.clear();
    sim.terrain = Some(params);
    Ok(())
}
