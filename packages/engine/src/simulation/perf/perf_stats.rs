use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) dispatched: u32,
    pub(super) gas_expired: u32,
    pub(super) live_gas: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Cells whose rule ran during the last tick.
    #[wasm_bindgen(getter)]
    pub fn dispatched(&self) -> u32 { self.dispatched }
    /// Gas cells removed by the end-of-tick sweep.
    #[wasm_bindgen(getter)]
    pub fn gas_expired(&self) -> u32 { self.gas_expired }
    #[wasm_bindgen(getter)]
    pub fn live_gas(&self) -> u32 { self.live_gas }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
