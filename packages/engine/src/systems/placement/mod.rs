//! Placement - seeds the arena with non-overlapping bodies
//!
//! Rejection sampling with a bounded retry budget: a candidate that overlaps
//! an already placed body (or cannot fit the arena at all) is discarded, and
//! after `max_placement_failures` consecutive discards placement stops and
//! keeps what it has. Crowded arenas therefore yield fewer bodies instead of
//! looping forever.

use crate::body::{Body, Vec2};
use crate::collision::overlaps_any;
use crate::domain::SimConfig;
use crate::utils::random::range;

/// Upper bound on up-front reservation. `body_count` is only a request; the
/// arena usually fits far fewer, so larger counts grow the Vec as placed.
pub const MAX_RESERVED_BODIES: usize = 4096;

/// Capacity to reserve for a run asking for `requested` bodies
pub fn reserve_hint(requested: usize) -> usize {
    requested.min(MAX_RESERVED_BODIES)
}

/// Outcome of a placement run
#[derive(Clone, Debug, Default)]
pub struct Placement {
    pub bodies: Vec<Body>,
    /// Requested body count
    pub requested: usize,
    /// Total rejected candidates
    pub rejections: u32,
    /// True if the failure budget ran out before `requested` was reached
    pub aborted: bool,
}

impl Placement {
    pub fn placed(&self) -> usize {
        self.bodies.len()
    }
}

pub fn sample_radius(config: &SimConfig, rng: &mut u32) -> f32 {
    range(rng, config.radius_min, config.radius_max)
}

pub fn sample_velocity(config: &SimConfig, rng: &mut u32) -> Vec2 {
    Vec2::new(
        range(rng, -config.max_speed, config.max_speed),
        range(rng, -config.max_speed, config.max_speed),
    )
}

/// Uniform center such that the whole circle lies inside the arena.
/// `None` if the circle is wider or taller than the arena.
pub fn sample_position(radius: f32, width: f32, height: f32, rng: &mut u32) -> Option<Vec2> {
    let span_x = width - 2.0 * radius;
    let span_y = height - 2.0 * radius;
    if span_x < 0.0 || span_y < 0.0 {
        return None;
    }
    Some(Vec2::new(
        range(rng, 0.0, span_x) + radius,
        range(rng, 0.0, span_y) + radius,
    ))
}

/// A body at `pos` with a fresh radius and velocity. Used for pointer spawns,
/// which skip the overlap check.
pub fn random_body_at(pos: Vec2, config: &SimConfig, rng: &mut u32) -> Body {
    let radius = sample_radius(config, rng);
    let velocity = sample_velocity(config, rng);
    Body::new(pos.x, pos.y, radius, config.mass).with_velocity(velocity.x, velocity.y)
}

/// Place up to `config.body_count` mutually non-overlapping bodies.
pub fn generate(config: &SimConfig, width: f32, height: f32, rng: &mut u32) -> Placement {
    let mut placement = Placement {
        bodies: Vec::with_capacity(reserve_hint(config.body_count)),
        requested: config.body_count,
        ..Placement::default()
    };
    let mut consecutive_failures = 0u32;

    while placement.bodies.len() < config.body_count {
        let radius = sample_radius(config, rng);
        let candidate = sample_position(radius, width, height, rng)
            .map(|pos| Body::new(pos.x, pos.y, radius, config.mass))
            .filter(|body| !overlaps_any(&placement.bodies, body));

        let Some(body) = candidate else {
            placement.rejections += 1;
            consecutive_failures += 1;
            if consecutive_failures > config.max_placement_failures {
                placement.aborted = true;
                break;
            }
            continue;
        };

        consecutive_failures = 0;
        let velocity = sample_velocity(config, rng);
        placement.bodies.push(body.with_velocity(velocity.x, velocity.y));
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::DEFAULT_SEED;

    fn assert_no_overlaps(bodies: &[Body]) {
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let d = a.pos.distance(b.pos);
                assert!(
                    d >= a.radius + b.radius,
                    "bodies overlap: {a:?} {b:?} (distance {d})"
                );
            }
        }
    }

    #[test]
    fn roomy_arena_places_everything() {
        let config = SimConfig { body_count: 20, ..SimConfig::default() };
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 2000.0, 2000.0, &mut rng);

        assert_eq!(placement.placed(), 20);
        assert!(!placement.aborted);
        assert_no_overlaps(&placement.bodies);
        for body in &placement.bodies {
            assert!(body.radius >= 20.0 && body.radius < 30.0);
            assert!(body.pos.x >= body.radius && body.pos.x <= 2000.0 - body.radius);
            assert!(body.pos.y >= body.radius && body.pos.y <= 2000.0 - body.radius);
            assert!(body.velocity.x.abs() <= 2.5 && body.velocity.y.abs() <= 2.5);
            assert_eq!(body.mass, 5.0);
        }
    }

    #[test]
    fn crowded_arena_degrades_without_overlap() {
        let config = SimConfig::default();
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 400.0, 300.0, &mut rng);

        assert!(placement.aborted);
        assert!(placement.placed() > 0);
        assert!(placement.placed() < config.body_count);
        assert!(placement.rejections > config.max_placement_failures);
        assert_no_overlaps(&placement.bodies);
    }

    #[test]
    fn arena_for_a_single_body_terminates() {
        // 60x60 fits one body of radius <= 30 but never two.
        let config = SimConfig::default();
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 60.0, 60.0, &mut rng);

        assert!(placement.placed() <= 1);
        assert!(placement.aborted);
    }

    #[test]
    fn arena_smaller_than_any_body_places_nothing() {
        let config = SimConfig::default();
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 30.0, 500.0, &mut rng);

        assert_eq!(placement.placed(), 0);
        assert_eq!(placement.rejections, config.max_placement_failures + 1);
    }

    #[test]
    fn zero_budget_stops_on_first_rejection() {
        let config = SimConfig { max_placement_failures: 0, ..SimConfig::default() };
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 10.0, 10.0, &mut rng);
        assert_eq!(placement.rejections, 1);
    }

    #[test]
    fn huge_request_reserves_a_bounded_vec_and_terminates() {
        assert_eq!(reserve_hint(20), 20);
        assert_eq!(reserve_hint(usize::MAX), MAX_RESERVED_BODIES);

        let config = SimConfig { body_count: usize::MAX, ..SimConfig::default() };
        let mut rng = DEFAULT_SEED;
        let placement = generate(&config, 200.0, 200.0, &mut rng);

        assert!(placement.aborted);
        assert_eq!(placement.requested, usize::MAX);
        assert!(placement.placed() > 0 && placement.placed() < 100);
        assert_no_overlaps(&placement.bodies);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = SimConfig { body_count: 30, ..SimConfig::default() };
        let (mut a, mut b) = (7u32, 7u32);
        let first = generate(&config, 800.0, 600.0, &mut a);
        let second = generate(&config, 800.0, 600.0, &mut b);
        assert_eq!(first.bodies, second.bodies);
    }

    #[test]
    fn spawned_body_sits_exactly_at_pointer() {
        let config = SimConfig::default();
        let mut rng = DEFAULT_SEED;
        let body = random_body_at(Vec2::new(12.0, 34.0), &config, &mut rng);
        assert_eq!(body.pos, Vec2::new(12.0, 34.0));
        assert!(body.radius >= config.radius_min && body.radius < config.radius_max);
    }
}
