//! Physics systems
//!
//! - `body`      - circle state, Euler motion, wall reflection
//! - `collision` - pairwise elastic resolution
//! - `placement` - non-overlapping initial layout

pub mod body;
pub mod collision;
pub mod placement;
