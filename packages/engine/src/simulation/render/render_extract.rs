use super::surface::Surface;
use super::{PerfTimer, WorldCore};

pub(super) fn render<S: Surface + ?Sized>(world: &mut WorldCore, surface: &mut S) {
    let timer = PerfTimer::start_if(world.perf_enabled);

    let (w, h) = (surface.width(), surface.height());
    surface.clear(0.0, 0.0, w, h);

    let style = &world.config.style;
    for body in world.bodies.iter() {
        surface.draw_circle(body.pos, body.radius, style);
    }

    if let Some(timer) = timer {
        world.perf_stats.render_ms = timer.elapsed_ms();
    }
}

/// Pack `[x, y, radius]` per body into the transfer buffer so JS can draw
/// straight from wasm memory.
pub(super) fn extract_circles(world: &mut WorldCore) -> usize {
    let circles = &mut world.render.circles;
    circles.clear();
    circles.reserve(world.bodies.len() * 3);
    for body in world.bodies.iter() {
        circles.extend_from_slice(&[body.pos.x, body.pos.y, body.radius]);
    }
    world.bodies.len()
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    serde_json::to_string(&world.bodies).unwrap_or_else(|_| "[]".to_string())
}
