//! Simulation - the tick engine and the API hosts drive it through
//!
//! `Simulation` owns the double-buffered lattice, the gas lifetime registry
//! and the random source. It only orchestrates:
//! - material rules live in `systems/behaviors`
//! - cave generation lives in `systems/terrain`
//! - gas expiry lives in `systems/lifetimes`
//!
//! The wasm-facing `World` wraps a `Simulation` (see `facade.rs`).

use rand_chacha::ChaCha8Rng;

use crate::domain::config::SimConfig;
use crate::elements::{Cell, Kind};
use crate::error::Result;
use crate::spatial::Lattice;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::lifetimes::GasLifetimes;
use crate::systems::terrain::TerrainParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::Census;

use perf_timer::PerfTimer;

/// A running cave simulation
pub struct Simulation {
    config: SimConfig,
    lattice: Lattice,
    lifetimes: GasLifetimes,
    behaviors: BehaviorRegistry,
    rng: ChaCha8Rng,

    // Set by the last terrain generation; `clear()` regenerates with it
    // (falling back to the config's parameters).
    terrain: Option<TerrainParams>,
    // Dispatch order, reshuffled every tick.
    order: Vec<usize>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// All-empty lattice with default settings.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_config(SimConfig::with_size(width, height))
    }

    /// Validate `config` and seed the random source from `config.seed`.
    pub fn with_config(config: SimConfig) -> Result<Self> {
        init::create_simulation(config)
    }

    /// Like `with_config`, but with a caller-provided generator.
    pub fn with_rng(config: SimConfig, rng: ChaCha8Rng) -> Result<Self> {
        init::create_simulation_with_rng(config, rng)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn width(&self) -> u32 { self.lattice.width() }

    pub fn height(&self) -> u32 { self.lattice.height() }

    /// Ticks since construction or the last `clear()`.
    pub fn frame(&self) -> u64 { self.frame }

    /// Replace the lattice with a freshly generated cave layout.
    pub fn generate_terrain(&mut self, fill_ratio: f64, iterations: u32) -> Result<()> {
        init::generate_terrain(self, TerrainParams { fill_ratio, iterations })
    }

    /// Generate terrain with the config's `fill_ratio` and `iterations`.
    pub fn generate_default_terrain(&mut self) -> Result<()> {
        let params = TerrainParams {
            fill_ratio: self.config.fill_ratio,
            iterations: self.config.iterations,
        };
        init::generate_terrain(self, params)
    }

    /// Terrain parameters `clear()` regenerates with.
    pub fn set_terrain_params(&mut self, fill_ratio: f64, iterations: u32) {
        settings::set_terrain_params(self, fill_ratio, iterations);
    }

    pub fn terrain_params(&self) -> Option<TerrainParams> {
        self.terrain
    }

    /// Advance exactly one tick.
    pub fn tick(&mut self) -> Result<()> {
        step::step(self)
    }

    /// Put a fresh cell of `kind` at (x, y). No-op (returns false) out of
    /// bounds or on a wall.
    pub fn place(&mut self, x: i32, y: i32, kind: Kind) -> bool {
        commands::place(self, x, y, kind)
    }

    /// Place `kind` in every cell of a disc. Returns how many cells changed.
    pub fn place_in_radius(&mut self, cx: i32, cy: i32, radius: i32, kind: Kind) -> u32 {
        commands::place_in_radius(self, cx, cy, radius, kind)
    }

    /// Replace every cell at once. `cells` is row-major and must match the
    /// lattice size.
    pub fn load_cells(&mut self, cells: Vec<Cell>) -> Result<()> {
        commands::load_cells(self, cells)
    }

    /// Cell in the current buffer; out-of-bounds reads as wall.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        self.lattice.get(x, y).unwrap_or(Cell::Wall)
    }

    /// Row-major view of the current buffer.
    pub fn cells(&self) -> &[Cell] {
        self.lattice.cells()
    }

    pub fn gas_lifetime(&self, x: i32, y: i32) -> Option<u32> {
        self.lifetimes.get((x, y))
    }

    pub fn gas_lifetime_count(&self) -> usize {
        self.lifetimes.len()
    }

    /// Reset to an empty lattice, drop every gas countdown and regenerate
    /// terrain with the stored parameters, or the config's when none were
    /// set yet.
    pub fn clear(&mut self) -> Result<()> {
        commands::clear(self)
    }

    /// Per-kind counts and fluid mass of the current buffer.
    pub fn census(&self) -> Census {
        render_extract::census(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
