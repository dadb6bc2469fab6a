use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::api::canvas::CanvasSurface;
use crate::domain::SimConfig;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JavaScript handle to a simulation.
///
/// Either drive it yourself (`step()` + read `render_buffer_ptr()` from wasm
/// memory) or attach a canvas and call `tick()` from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    surface: Option<CanvasSurface>,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given arena size and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        let config = SimConfig {
            seed: Some(host_seed()),
            ..SimConfig::default()
        };
        Self {
            core: WorldCore::with_config(width as f32, height as f32, config),
            surface: None,
        }
    }

    /// Create a world from a JSON config (see `SimConfig`)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, config_json: &str) -> Result<World, JsValue> {
        let mut config = SimConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        if config.seed.is_none() {
            config.seed = Some(host_seed());
        }
        Ok(Self {
            core: WorldCore::with_config(width as f32, height as f32, config),
            surface: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Re-run placement in the current arena
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// New arena size (e.g. after a window resize); full reset
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width as f32, height as f32);
    }

    /// Spawn a body at a pointer position. Returns the new body count.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> usize {
        self.core.spawn_at(x, y)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one frame (no drawing)
    pub fn step(&mut self) {
        self.core.step();
    }

    // === CANVAS ===

    /// Draw into `canvas` on every `tick()`
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let surface = CanvasSurface::new(canvas).map_err(|e| JsValue::from_str(&e))?;
        self.surface = Some(surface);
        Ok(())
    }

    pub fn detach_canvas(&mut self) {
        self.surface = None;
    }

    /// Step, then redraw the attached canvas (if any)
    pub fn tick(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => self.core.tick(surface),
            None => self.core.step(),
        }
    }

    // === RENDER BUFFER ===

    /// Refresh the `[x, y, radius]` buffer; returns the circle count
    pub fn extract_render_buffer(&mut self) -> usize {
        self.core.extract_render_buffer()
    }

    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.core.render_buffer_ptr()
    }

    /// Length in f32 elements (3 per circle)
    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer_len()
    }

    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.core.total_kinetic_energy()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

/// Fresh seed per page load in the browser; fixed natively for reproducible tests
fn host_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::utils::random::DEFAULT_SEED
    }
}
