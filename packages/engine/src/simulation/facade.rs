use wasm_bindgen::prelude::*;

use crate::domain::config::SimConfig;
use crate::elements::Kind;
use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::render_extract;
use super::Simulation;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle to a simulation
#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

#[wasm_bindgen]
impl World {
    /// Create an all-empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = Simulation::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON `SimConfig`; missing fields use defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let config = SimConfig::from_json(json).map_err(to_js)?;
        let core = Simulation::with_config(config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn generate_terrain(&mut self, fill_ratio: f64, iterations: u32) -> Result<(), JsValue> {
        self.core.generate_terrain(fill_ratio, iterations).map_err(to_js)
    }

    pub fn set_terrain_params(&mut self, fill_ratio: f64, iterations: u32) {
        self.core.set_terrain_params(fill_ratio, iterations);
    }

    /// Advance one tick
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core.tick().map_err(to_js)
    }

    /// Place an element by kind id. Unknown ids, walls and out-of-bounds
    /// positions are ignored.
    pub fn add_particle(&mut self, x: i32, y: i32, kind: u8) -> bool {
        match Kind::from_id(kind) {
            Ok(kind) => self.core.place(x, y, kind),
            Err(_) => false,
        }
    }

    /// Brush: place an element in a disc, returns the number of cells placed
    pub fn add_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32, kind: u8) -> u32 {
        match Kind::from_id(kind) {
            Ok(kind) => self.core.place_in_radius(cx, cy, radius, kind),
            Err(_) => 0,
        }
    }

    pub fn cell_kind(&self, x: i32, y: i32) -> u8 {
        self.core.cell_at(x, y).kind().id()
    }

    /// Fluid amount at (x, y), 0 for anything else
    pub fn fluid_amount(&self, x: i32, y: i32) -> f32 {
        self.core.cell_at(x, y).amount().unwrap_or(0.0)
    }

    pub fn gas_lifetime(&self, x: i32, y: i32) -> Option<u32> {
        self.core.gas_lifetime(x, y)
    }

    /// Row-major kind ids of the current buffer (for rendering)
    pub fn kinds(&self) -> Vec<u8> {
        render_extract::kind_ids(&self.core)
    }

    /// Row-major fluid amounts of the current buffer
    pub fn amounts(&self) -> Vec<f32> {
        render_extract::amounts(&self.core)
    }

    pub fn census_json(&self) -> String {
        self.core.census().to_json()
    }

    /// Reset and regenerate terrain with the last parameters
    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.core.clear().map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

impl World {
    pub fn simulation(&self) -> &Simulation {
        &self.core
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.core
    }
}
