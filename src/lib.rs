#![cfg(target_arch = "wasm32")]
use crate::constants::{GLOBAL_INIT, GLOBAL_WELCOME};
use instant::Instant;
use orrery_core::{default_system, SolarSystemController, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod entry;
mod events;
mod frame;
mod overlay;
mod render;

type SharedController = Rc<RefCell<SolarSystemController>>;

thread_local! {
    static SCENE: RefCell<Option<SharedController>> = const { RefCell::new(None) };
    // welcome requested by a page script before the scene existed
    static WELCOME_PENDING: Cell<bool> = const { Cell::new(false) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, controller: &SharedController) {
    let canvas_resize = canvas.clone();
    let controller = controller.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        controller.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn publish_globals(window: &web::Window) {
    let init = Closure::wrap(Box::new(|| {
        if let Err(e) = init_solar_system() {
            log::error!("[init] {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    if js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_INIT), init.as_ref()).is_err() {
        log::warn!("[init] could not publish window.{}", GLOBAL_INIT);
    }
    init.forget();

    let welcome = Closure::wrap(Box::new(start_welcome_sequence) as Box<dyn FnMut()>);
    if js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_WELCOME), welcome.as_ref()).is_err()
    {
        log::warn!("[init] could not publish window.{}", GLOBAL_WELCOME);
    }
    welcome.forget();
}

fn boot_with_welcome() {
    if let Err(e) = init_solar_system() {
        log::error!("[init] {:?}", e);
        return;
    }
    start_welcome_sequence();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orrery-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    publish_globals(&window);
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if !entry::wire_takeoff(&document, boot_with_welcome) {
        log::info!("[init] no entry overlay; booting scene");
        boot_with_welcome();
    }
    Ok(())
}

/// Build the scene once. Later calls are no-ops.
#[wasm_bindgen(js_name = initSolarSystem)]
pub fn init_solar_system() -> Result<(), JsValue> {
    if SCENE.with(|s| s.borrow().is_some()) {
        return Ok(());
    }
    let controller = build_scene().map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    SCENE.with(|s| *s.borrow_mut() = Some(controller.clone()));
    if WELCOME_PENDING.with(|p| p.replace(false)) {
        controller.borrow_mut().start_welcome_sequence();
    }
    Ok(())
}

/// Overview, hold, then focus the first planet. Queued if the scene is not
/// built yet.
#[wasm_bindgen(js_name = startWelcomeSequence)]
pub fn start_welcome_sequence() {
    let scene = SCENE.with(|s| s.borrow().clone());
    match scene {
        Some(controller) => controller.borrow_mut().start_welcome_sequence(),
        None => WELCOME_PENDING.with(|p| p.set(true)),
    }
}

fn build_scene() -> anyhow::Result<SharedController> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::get_or_create_canvas(&document)?;
    let (w, h) = dom::sync_canvas_backing_size(&canvas);

    let registry = default_system()?;
    log::info!("[init] {} bodies, canvas {}x{}", registry.len(), w, h);
    let controller = Rc::new(RefCell::new(SolarSystemController::new(
        registry,
        Viewport::new(w as f32, h as f32),
    )));

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        card: Rc::new(RefCell::new(overlay::Card::attach(&document))),
        hover_label: Rc::new(overlay::HoverLabel::attach(&document)),
    };
    events::wire_input_handlers(wiring.clone());
    events::wire_global_keydown(wiring.clone());
    events::wire_wheel(wiring.clone());
    wire_canvas_resize(&canvas, &controller);

    // the loop starts once the renderer settles; overlays run without it
    spawn_local(async move {
        let gpu = frame::init_gpu(&canvas).await;
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            wiring,
            gpu,
            last_instant: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
    });
    Ok(controller)
}
