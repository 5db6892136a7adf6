use super::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

// Registered non-passive so the page itself doesn't scroll under the tour.
pub fn wire_wheel(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let change = w
            .controller
            .borrow_mut()
            .on_wheel(ev.delta_y(), ev.time_stamp());
        if let Some(change) = change {
            log::debug!("[wheel] focus {} -> {}", change.previous, change.index);
            w.apply_focus(&change);
        }
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
