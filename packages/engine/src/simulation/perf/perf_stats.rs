use wasm_bindgen::prelude::*;

/// Snapshot of the last step (and render) when perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) body_count: u32,
    pub(super) pair_checks: u32,
    pub(super) contacts: u32,
    pub(super) collisions_resolved: u32,
    pub(super) wall_bounces: u32,
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
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
}
