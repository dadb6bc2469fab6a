//! Browser integration
//!
//! - `canvas` - `Surface` over a 2D canvas context
//! - `app`    - self-driving page loop: resize, click-to-spawn, requestAnimationFrame

pub mod app;
pub mod canvas;
