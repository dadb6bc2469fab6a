use crate::body::{Body, Vec2};

/// Apply a 1D elastic collision along the line between the two centers.
///
/// Both velocities are rotated into the contact frame (x-axis through both
/// centers), the x components are exchanged with the elastic formula, the y
/// components pass through, and the result is rotated back.
///
/// Only a closing pair (relative velocity pointing toward the other center,
/// `dv · d >= 0`) is resolved; a separating pair is left untouched. No
/// positional correction is applied.
///
/// Returns `true` if velocities were written.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> bool {
    let dv = a.velocity - b.velocity;
    let d = b.pos - a.pos;

    if dv.dot(d) < 0.0 {
        return false;
    }

    let angle = -d.y.atan2(d.x);

    let m1 = a.mass;
    let m2 = b.mass;
    let total = m1 + m2;

    // Contact frame
    let u1 = a.velocity.rotate(angle);
    let u2 = b.velocity.rotate(angle);

    let v1 = Vec2::new(u1.x * (m1 - m2) / total + u2.x * 2.0 * m2 / total, u1.y);
    let v2 = Vec2::new(u2.x * (m2 - m1) / total + u1.x * 2.0 * m1 / total, u2.y);

    a.velocity = v1.rotate(-angle);
    b.velocity = v2.rotate(-angle);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::{range, DEFAULT_SEED};

    fn approx(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn equal_masses_head_on_swap_velocities() {
        let mut a = Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(1.0, 0.0);
        let mut b = Body::new(15.0, 0.0, 10.0, 5.0).with_velocity(-1.0, 0.0);

        assert!(resolve_collision(&mut a, &mut b));

        assert!(approx(a.velocity.x, -1.0, 1e-6));
        assert!(approx(a.velocity.y, 0.0, 1e-6));
        assert!(approx(b.velocity.x, 1.0, 1e-6));
        assert!(approx(b.velocity.y, 0.0, 1e-6));
    }

    #[test]
    fn separating_pair_is_untouched() {
        let mut a = Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(-1.0, 0.3);
        let mut b = Body::new(15.0, 0.0, 10.0, 5.0).with_velocity(1.0, -0.2);
        let (va, vb) = (a.velocity, b.velocity);

        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
    }

    #[test]
    fn second_call_after_resolution_is_a_no_op() {
        let mut a = Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(2.0, 1.0);
        let mut b = Body::new(12.0, 9.0, 10.0, 5.0).with_velocity(-1.0, 0.0);

        assert!(resolve_collision(&mut a, &mut b));
        let (va, vb) = (a.velocity, b.velocity);

        // Reverse order, as a per-body sweep would call it.
        assert!(!resolve_collision(&mut b, &mut a));
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
    }

    #[test]
    fn glancing_hit_keeps_tangential_components() {
        // Contact axis is x; only x components are exchanged.
        let mut a = Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(1.0, 3.0);
        let mut b = Body::new(18.0, 0.0, 10.0, 5.0).with_velocity(0.0, -2.0);

        resolve_collision(&mut a, &mut b);

        assert!(approx(a.velocity.x, 0.0, 1e-6));
        assert!(approx(a.velocity.y, 3.0, 1e-6));
        assert!(approx(b.velocity.x, 1.0, 1e-6));
        assert!(approx(b.velocity.y, -2.0, 1e-6));
    }

    #[test]
    fn conserves_momentum_and_energy_for_mixed_masses() {
        let mut rng = DEFAULT_SEED;
        let mut resolved = 0;

        for _ in 0..500 {
            let mut a = Body::new(0.0, 0.0, 10.0, range(&mut rng, 0.5, 20.0))
                .with_velocity(range(&mut rng, -3.0, 3.0), range(&mut rng, -3.0, 3.0));
            let mut b = Body::new(
                range(&mut rng, -15.0, 15.0),
                range(&mut rng, -15.0, 15.0),
                10.0,
                range(&mut rng, 0.5, 20.0),
            )
            .with_velocity(range(&mut rng, -3.0, 3.0), range(&mut rng, -3.0, 3.0));

            let p_before = a.momentum() + b.momentum();
            let e_before = a.kinetic_energy() + b.kinetic_energy();

            if !resolve_collision(&mut a, &mut b) {
                continue;
            }
            resolved += 1;

            let p_after = a.momentum() + b.momentum();
            let e_after = a.kinetic_energy() + b.kinetic_energy();

            assert!(approx(p_before.x, p_after.x, 1e-3), "px {} vs {}", p_before.x, p_after.x);
            assert!(approx(p_before.y, p_after.y, 1e-3), "py {} vs {}", p_before.y, p_after.y);
            assert!(approx(e_before, e_after, 1e-3), "energy {e_before} vs {e_after}");
        }

        assert!(resolved > 100, "too few closing pairs sampled: {resolved}");
    }

    #[test]
    fn heavy_body_barely_moves() {
        let mut light = Body::new(0.0, 0.0, 10.0, 1.0).with_velocity(2.0, 0.0);
        let mut heavy = Body::new(15.0, 0.0, 10.0, 1000.0);

        resolve_collision(&mut light, &mut heavy);

        assert!(light.velocity.x < -1.9);
        assert!(heavy.velocity.x > 0.0 && heavy.velocity.x < 0.01);
    }
}
