use super::InputWiring;
use crate::dom;
use orrery_core::Response;
use wasm_bindgen::JsCast;
use web_sys as web;

// Key presses are already rate-limited by OS key repeat, so no debounce here.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.default_prevented() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let response = w.controller.borrow_mut().on_key(&key);
    match response {
        Response::Ignored => {}
        Response::Focus(change) => {
            w.apply_focus(&change);
            ev.prevent_default();
        }
        Response::Navigate(nav) => {
            log::info!("[keys] open {}", nav.url);
            dom::navigate(&nav.url);
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(w: InputWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
