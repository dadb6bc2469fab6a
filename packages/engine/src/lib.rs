//! Collisions Engine - elastic circle collisions for canvas hosts, in WASM
//!
//! Architecture:
//! - utils/       - Console logging macros, seeded random source
//! - domain/      - Configuration and drawing style
//! - systems/     - Bodies, collision resolution, placement
//! - simulation/  - World orchestration + wasm facade
//! - api/         - Canvas surface and self-driving browser loop

// Logging macros (must be first for macro scope!)
#[macro_use]
pub mod utils;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Short paths used throughout the crate
pub use systems::body;
pub use systems::collision;
pub use systems::placement;

use wasm_bindgen::prelude::*;

// Smaller binaries at the cost of allocator speed
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

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

    engine_log!("🦀 Collisions WASM Engine v{} initialized!", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::app::start;
pub use api::canvas::CanvasSurface;
pub use body::{Body, Vec2};
pub use domain::{BodyStyle, SimConfig};
pub use simulation::{PerfStats, PlacementReport, Surface, World, WorldCore};
