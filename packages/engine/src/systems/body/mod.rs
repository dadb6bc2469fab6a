//! Body - a circle moving through the arena
//!
//! Bodies are plain data. Motion and wall reflection live on `Body`;
//! body-to-body contact lives in `systems::collision`.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::Body;
