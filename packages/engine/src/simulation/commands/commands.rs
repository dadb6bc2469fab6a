use crate::body::{Body, Vec2};
use crate::placement;

use super::{PlacementReport, WorldCore};

pub(super) fn reset(world: &mut WorldCore) {
    let placement = placement::generate(&world.config, world.width, world.height, &mut world.rng_state);

    if placement.aborted {
        engine_warn!(
            "placement stopped after {} consecutive rejections: {}/{} bodies placed in {}x{}",
            world.config.max_placement_failures.saturating_add(1),
            placement.placed(),
            placement.requested,
            world.width,
            world.height
        );
    }

    world.last_placement = PlacementReport {
        requested: placement.requested,
        placed: placement.placed(),
        aborted: placement.aborted,
    };
    world.bodies = placement.bodies;
    world.frame = 0;

    engine_log!(
        "world reset: {}x{} arena, {} bodies",
        world.width,
        world.height,
        world.bodies.len()
    );
}

pub(super) fn resize(world: &mut WorldCore, width: f32, height: f32) {
    world.width = width.max(0.0);
    world.height = height.max(0.0);
    reset(world);
}

pub(super) fn spawn_at(world: &mut WorldCore, x: f32, y: f32) -> usize {
    let body = placement::random_body_at(Vec2::new(x, y), &world.config, &mut world.rng_state);
    push_body(world, body)
}

pub(super) fn push_body(world: &mut WorldCore, body: Body) -> usize {
    world.bodies.push(body);
    world.bodies.len()
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.render.circles.clear();
    world.frame = 0;
}
