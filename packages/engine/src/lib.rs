//! Grotto Engine - falling-sand cave simulation in WASM
//!
//! Architecture:
//! - domain/      - element kinds, cells, settings
//! - spatial/     - the double-buffered lattice
//! - systems/     - terrain generator, gas lifetimes, material behaviors
//! - simulation/  - tick engine, commands, snapshots and the JS facade

pub mod domain;
pub mod error;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use domain::elements;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Thread pool for the `parallel` feature on wasm32
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::elements::{Cell, Kind};
pub use error::{EngineError, Result};
pub use simulation::{Census, PerfStats, Simulation, World};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Grotto engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export kind ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { Kind::Empty.id() }
#[wasm_bindgen]
pub fn el_wall() -> u8 { Kind::Wall.id() }
#[wasm_bindgen]
pub fn el_sand() -> u8 { Kind::GranularSolid.id() }
#[wasm_bindgen]
pub fn el_wood() -> u8 { Kind::CombustibleSolid.id() }
#[wasm_bindgen]
pub fn el_fire() -> u8 { Kind::Combustion.id() }
#[wasm_bindgen]
pub fn el_smoke_dark() -> u8 { Kind::GasDark.id() }
#[wasm_bindgen]
pub fn el_smoke_light() -> u8 { Kind::GasLight.id() }
#[wasm_bindgen]
pub fn el_balloon() -> u8 { Kind::BuoyantBody.id() }
#[wasm_bindgen]
pub fn el_water() -> u8 { Kind::Fluid.id() }
