//! Domain settings: simulation configuration and drawing style.

pub mod config;

pub use config::{BodyStyle, SimConfig};
