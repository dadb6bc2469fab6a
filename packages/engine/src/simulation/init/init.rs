use crate::domain::SimConfig;
use crate::placement::reserve_hint;
use crate::utils::random::{sanitize_seed, DEFAULT_SEED};

use super::perf_stats::PerfStats;
use super::{PlacementReport, RenderBuffers, WorldCore};

pub(super) fn create_world_core(width: f32, height: f32, config: SimConfig) -> WorldCore {
    let rng_state = sanitize_seed(config.seed.unwrap_or(DEFAULT_SEED));
    let body_capacity = reserve_hint(config.body_count);

    let mut world = WorldCore {
        config,
        width: width.max(0.0),
        height: height.max(0.0),
        bodies: Vec::with_capacity(body_capacity),
        frame: 0,
        rng_state,
        last_placement: PlacementReport::default(),

        render: RenderBuffers {
            // Grows on demand in `extract_circles`
            circles: Vec::with_capacity(body_capacity.saturating_mul(3)),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    world.reset();
    world
}
