use super::InputWiring;
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_click(&w);
    wire_pageshow(&w);
}

/// Pointer position in the canvas' backing-store pixels, which is the space
/// the controller's viewport is measured in.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Some(Vec2::new(sx, sy))
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(pos) = pointer_canvas_px(&ev, &w.canvas) else {
            return;
        };
        let change = w.controller.borrow_mut().on_pointer_move(pos.x, pos.y);
        w.apply_hover(change);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let change = w.controller.borrow_mut().on_pointer_leave();
        w.apply_hover(change);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Clicking empty space does nothing; only a hovered planet navigates.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // refresh hover from this exact position; touch taps arrive without a prior move
        if let Some(pos) = pointer_canvas_px(&ev, &w.canvas) {
            let change = w.controller.borrow_mut().on_pointer_move(pos.x, pos.y);
            w.apply_hover(change);
        }
        let nav = w.controller.borrow_mut().on_click();
        if let Some(nav) = nav {
            log::info!("[click] open {}", nav.url);
            dom::navigate(&nav.url);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Returning through the back/forward cache restores a page that already navigated.
fn wire_pageshow(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        w.controller.borrow_mut().clear_navigation();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
