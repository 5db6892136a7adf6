use crate::constants::{CANVAS_FALLBACK_ID, CANVAS_FALLBACK_STYLE, CANVAS_ID, MAX_DEVICE_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        return true;
    }
    false
}

/// Find the scene canvas, or append a fixed full-window one.
pub fn get_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let existing = document
        .get_element_by_id(CANVAS_ID)
        .or_else(|| document.get_element_by_id(CANVAS_FALLBACK_ID));
    if let Some(el) = existing {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e));
    }

    log::warn!("[dom] no #{}; creating one", CANVAS_ID);
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", CANVAS_FALLBACK_STYLE);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Find `id`, or create a `<div>` with it under `<body>`.
pub fn get_or_create_div(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(id) {
        return el.dyn_into::<web::HtmlElement>().ok();
    }
    let el = document.create_element("div").ok()?;
    el.set_id(id);
    let body = document.body()?;
    body.append_child(&el).ok()?;
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Match the canvas backing store to its CSS size. Returns the new size in
/// device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Ratio from canvas backing pixels to CSS pixels, for positioning overlays.
pub fn css_scale(canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    let w = canvas.width().max(1) as f32;
    (rect.width() as f32 / w).max(0.0)
}

pub fn navigate(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("[nav] failed to open {}: {:?}", url, e);
        }
    }
}
