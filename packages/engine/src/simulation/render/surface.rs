use crate::body::Vec2;
use crate::domain::BodyStyle;

/// A 2D drawing target sized in arena units.
///
/// The browser implementation is `api::canvas::CanvasSurface`; tests use
/// recording surfaces.
pub trait Surface {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Erase the rectangle at (x, y) with size (w, h)
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Filled and stroked circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &BodyStyle);
}
