use crate::body::Body;

use super::resolve::resolve_collision;

/// Counters from one collision sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionPass {
    /// Pairs tested for overlap
    pub pair_checks: u32,
    /// Overlapping pairs
    pub contacts: u32,
    /// Contacts that were closing and received an impulse
    pub resolved: u32,
}

/// Resolve every overlapping pair exactly once.
///
/// Pairs are visited as `(i, j)` with `i < j` in storage order, so a pair can
/// receive at most one impulse per sweep.
pub fn resolve_overlapping_pairs(bodies: &mut [Body]) -> CollisionPass {
    let mut pass = CollisionPass::default();

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            pass.pair_checks += 1;
            if !a.overlaps(b) {
                continue;
            }
            pass.contacts += 1;
            if resolve_collision(a, b) {
                pass.resolved += 1;
            }
        }
    }

    pass
}

/// True if `candidate` overlaps any body in `bodies`.
pub fn overlaps_any(bodies: &[Body], candidate: &Body) -> bool {
    bodies.iter().any(|b| b.overlaps(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_each_unique_pair_once() {
        let mut bodies: Vec<Body> = (0..5)
            .map(|i| Body::new(i as f32 * 100.0, 0.0, 10.0, 5.0))
            .collect();
        let pass = resolve_overlapping_pairs(&mut bodies);
        assert_eq!(pass.pair_checks, 10);
        assert_eq!(pass.contacts, 0);
        assert_eq!(pass.resolved, 0);
    }

    #[test]
    fn overlapping_pair_gets_one_impulse() {
        let mut bodies = vec![
            Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(1.0, 0.0),
            Body::new(500.0, 500.0, 10.0, 5.0),
            Body::new(15.0, 0.0, 10.0, 5.0).with_velocity(-1.0, 0.0),
        ];
        let pass = resolve_overlapping_pairs(&mut bodies);

        assert_eq!(pass.contacts, 1);
        assert_eq!(pass.resolved, 1);
        assert!((bodies[0].velocity.x + 1.0).abs() < 1e-6);
        assert!((bodies[2].velocity.x - 1.0).abs() < 1e-6);
        assert_eq!(bodies[1].velocity.x, 0.0);
    }

    #[test]
    fn separating_contact_is_counted_but_not_resolved() {
        let mut bodies = vec![
            Body::new(0.0, 0.0, 10.0, 5.0).with_velocity(-1.0, 0.0),
            Body::new(15.0, 0.0, 10.0, 5.0).with_velocity(1.0, 0.0),
        ];
        let pass = resolve_overlapping_pairs(&mut bodies);
        assert_eq!(pass.contacts, 1);
        assert_eq!(pass.resolved, 0);
    }

    #[test]
    fn overlaps_any_finds_conflict() {
        let placed = vec![Body::new(50.0, 50.0, 20.0, 5.0)];
        assert!(overlaps_any(&placed, &Body::new(80.0, 50.0, 20.0, 5.0)));
        assert!(!overlaps_any(&placed, &Body::new(90.0, 50.0, 20.0, 5.0)));
        assert!(!overlaps_any(&[], &Body::new(0.0, 0.0, 1.0, 1.0)));
    }
}
