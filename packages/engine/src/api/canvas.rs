use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::body::Vec2;
use crate::domain::BodyStyle;
use crate::simulation::Surface;

/// `Surface` backed by an `HtmlCanvasElement` and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| format!("getContext('2d') failed: {e:?}"))?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context is not a CanvasRenderingContext2d".to_string())?;
        Ok(Self { canvas, context })
    }

    /// Look up a `<canvas>` by element id
    pub fn from_element_id(window: &Window, id: &str) -> Result<Self, String> {
        let document = window
            .document()
            .ok_or_else(|| "window has no document".to_string())?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| format!("no element with id '{id}'"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("element '{id}' is not a <canvas>"))?;
        Self::new(canvas)
    }

    /// Size the canvas backing store to the window's inner size.
    /// Returns the new (width, height) in pixels.
    pub fn fit_to_window(&self, window: &Window) -> Result<(u32, u32), String> {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| "window.innerWidth unavailable".to_string())?;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| "window.innerHeight unavailable".to_string())?;

        let (width, height) = (width.max(0.0) as u32, height.max(0.0) as u32);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok((width, height))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.context.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &BodyStyle) {
        let ctx = &self.context;
        ctx.begin_path();
        // arc() only throws for a negative radius, which bodies never have.
        if ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        ctx.set_fill_style_str(&style.fill);
        ctx.fill();
        ctx.set_line_width(style.stroke_width as f64);
        ctx.set_stroke_style_str(&style.stroke);
        ctx.stroke();
    }
}
