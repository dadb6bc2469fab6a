//! World - elastic-collision circle simulation
//!
//! `WorldCore` owns everything one simulation needs (arena, bodies, config,
//! random state) and is plain Rust, so it runs and tests natively.
//! `World` (facade.rs) wraps it for JavaScript.
//!
//! A frame is two passes:
//! - `step()`   - advance every body, reflect off walls, resolve contacts
//! - `render()` - clear the surface and draw every body
//!
//! Physics lives in `systems/`; this module only orchestrates.

use crate::body::{Body, Vec2};
use crate::domain::SimConfig;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/surface.rs"]
mod surface;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use surface::Surface;

use perf_timer::PerfTimer;

/// Summary of the most recent placement run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
    pub aborted: bool,
}

pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per body, refreshed by `extract_render_buffer`
    pub(crate) circles: Vec<f32>,
}

/// The simulation world
pub struct WorldCore {
    config: SimConfig,

    // Arena
    width: f32,
    height: f32,

    // State
    bodies: Vec<Body>,
    frame: u64,
    rng_state: u32,
    last_placement: PlacementReport,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default settings and seed it with bodies
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height, SimConfig::default())
    }

    /// Create a world from an already validated config
    pub fn with_config(width: f32, height: f32, config: SimConfig) -> Self {
        init::create_world_core(width, height, config)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn last_placement(&self) -> PlacementReport { self.last_placement }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Parse, validate and apply a JSON config. Resets the world on success;
    /// leaves it untouched on error.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Apply a config and reset the world
    pub fn apply_config(&mut self, config: SimConfig) -> Result<(), String> {
        settings::apply_config(self, config)
    }

    /// Reseed the random source (takes effect on the next reset or spawn)
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Discard all bodies and re-run placement
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// New arena size; full reset
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    /// Add a randomly sized body centered on (x, y). No overlap check.
    /// Returns the new body count.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> usize {
        commands::spawn_at(self, x, y)
    }

    /// Append a fully specified body. No overlap check.
    pub fn push_body(&mut self, body: Body) -> usize {
        commands::push_body(self, body)
    }

    /// Remove all bodies without re-running placement
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Advance physics by one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Clear `surface` and draw every body at its current position
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        render_extract::render(self, surface);
    }

    /// One animation frame: physics, then drawing
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }

    /// Fill the `[x, y, radius]` buffer; returns the number of circles
    pub fn extract_render_buffer(&mut self) -> usize {
        render_extract::extract_circles(self)
    }

    /// Get pointer to the circle buffer (for JS rendering)
    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.render.circles.as_ptr()
    }

    /// Circle buffer length in f32 elements
    pub fn render_buffer_len(&self) -> usize {
        self.render.circles.len()
    }

    pub fn bodies_json(&self) -> String {
        render_extract::bodies_json(self)
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .fold(Vec2::zero(), |acc, b| acc + b.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
