use crate::collision::resolve_overlapping_pairs;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let timer = PerfTimer::start_if(world.perf_enabled);

    // === MOTION + WALLS ===
    // Every body moves before any contact is resolved, so contacts see the
    // whole frame's positions regardless of storage order.
    let (width, height) = (world.width, world.height);
    let mut wall_bounces = 0u32;
    for body in world.bodies.iter_mut() {
        wall_bounces += body.advance(width, height);
    }

    // === CONTACTS ===
    // Unique pairs only: one impulse per pair per frame at most.
    let pass = resolve_overlapping_pairs(&mut world.bodies);

    world.frame += 1;

    if let Some(timer) = timer {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.body_count = world.bodies.len() as u32;
        stats.pair_checks = pass.pair_checks;
        stats.contacts = pass.contacts;
        stats.collisions_resolved = pass.resolved;
        stats.wall_bounces = wall_bounces;
        stats.step_ms = timer.elapsed_ms();
    }
}
