use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use super::canvas::CanvasSurface;
use crate::domain::SimConfig;
use crate::simulation::WorldCore;

/// World plus the canvas it draws to, shared by the frame loop and listeners
struct App {
    world: WorldCore,
    surface: CanvasSurface,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Run the simulation full-window on the `<canvas>` with id `canvas_id`.
///
/// Wires three host events:
/// - `resize`: canvas refit to the window, world rebuilt from scratch
/// - `click`: one body spawned at the pointer
/// - `requestAnimationFrame`: step + redraw, then reschedule
///
/// Runs until the page is torn down.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    start_with_config(canvas_id, None)
}

/// Like `start`, with a JSON config (see `SimConfig`)
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let mut config = match config_json {
        Some(json) => SimConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => SimConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u32);
    }

    let surface = CanvasSurface::from_element_id(&window, canvas_id).map_err(|e| JsValue::from_str(&e))?;
    let (width, height) = surface.fit_to_window(&window).map_err(|e| JsValue::from_str(&e))?;
    let world = WorldCore::with_config(width as f32, height as f32, config);

    let app = Rc::new(RefCell::new(App { world, surface }));

    listen_resize(&window, app.clone())?;
    listen_click(&window, app.clone())?;
    run_frame_loop(app)?;

    engine_log!("canvas '{}' running at {}x{}", canvas_id, width, height);
    Ok(())
}

fn listen_resize(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let target = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let mut app = app.borrow_mut();
        let fitted = app.surface.fit_to_window(&target);
        match fitted {
            Ok((width, height)) => app.world.resize(width as f32, height as f32),
            Err(e) => engine_warn!("resize ignored: {}", e),
        }
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_resize.forget();
    Ok(())
}

fn listen_click(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        app.borrow_mut()
            .world
            .spawn_at(event.client_x() as f32, event.client_y() as f32);
    });
    window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn run_frame_loop(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        {
            let mut app = app.borrow_mut();
            let App { world, surface } = &mut *app;
            world.tick(surface);
        }
        if let Some(frame) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(frame) {
                engine_warn!("frame loop stopped: {:?}", e);
            }
        }
    }));

    let scheduled = match callback.borrow().as_ref() {
        Some(frame) => request_animation_frame(frame),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    scheduled.map(|_| ())
}

fn request_animation_frame(frame: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global window"))?
        .request_animation_frame(frame.as_ref().unchecked_ref())
}
