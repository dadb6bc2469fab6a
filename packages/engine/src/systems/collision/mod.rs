//! Body-to-body collisions
//!
//! - `resolve` - elastic impulse for a single pair, computed in the contact frame
//! - `detect`  - O(n²) unique-pair sweep that feeds overlapping pairs to `resolve`

mod detect;
mod resolve;

pub use detect::{overlaps_any, resolve_overlapping_pairs, CollisionPass};
pub use resolve::resolve_collision;
