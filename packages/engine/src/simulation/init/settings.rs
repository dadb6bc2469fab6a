use crate::domain::SimConfig;
use crate::utils::random::sanitize_seed;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let config = SimConfig::from_json(json)?;
    apply_config(world, config)
}

pub(super) fn apply_config(world: &mut WorldCore, config: SimConfig) -> Result<(), String> {
    config.validate()?;
    if let Some(seed) = config.seed {
        world.rng_state = sanitize_seed(seed);
    }
    engine_log!(
        "config applied: {} bodies, radius {}..{}, mass {}",
        config.body_count,
        config.radius_min,
        config.radius_max,
        config.mass
    );
    world.config = config;
    world.reset();
    Ok(())
}

pub(super) fn config_json(world: &WorldCore) -> String {
    world.config.to_json()
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    world.rng_state = sanitize_seed(seed);
}
