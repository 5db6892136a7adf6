use crate::constants::{ENTRY_ID, ENTRY_START_ID, ENTRY_WORMHOLE_ID, SMOKE_CLASS};
use crate::{dom, frame};
use instant::Instant;
use orrery_core::{TakeoffFrame, TakeoffTimeline};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct EntryDom {
    overlay: web::HtmlElement,
    button: web::HtmlElement,
    wormhole: Option<web::HtmlElement>,
}

impl EntryDom {
    fn find(document: &web::Document) -> Option<Self> {
        let html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        };
        Some(Self {
            overlay: html(ENTRY_ID)?,
            button: html(ENTRY_START_ID)?,
            wormhole: html(ENTRY_WORMHOLE_ID),
        })
    }

    fn apply(&self, f: &TakeoffFrame) {
        let transform = format!(
            "translate({:.1}px, {:.1}px) rotate({:.1}deg) scale({:.3})",
            f.offset_px.x, f.offset_px.y, f.rotation_deg, f.scale
        );
        _ = self.button.style().set_property("transform", &transform);
        _ = self
            .overlay
            .style()
            .set_property("opacity", &format!("{:.3}", f.overlay_alpha));
        let cl = self.button.class_list();
        if f.emit_smoke {
            _ = cl.add_1(SMOKE_CLASS);
        } else {
            _ = cl.remove_1(SMOKE_CLASS);
        }
        // the wormhole shader reads its brightness from this custom property
        if let Some(w) = &self.wormhole {
            _ = w
                .style()
                .set_property("--wormhole-intensity", &format!("{:.2}", f.wormhole_intensity));
        }
    }

    fn dismiss(&self) {
        _ = self.overlay.style().set_property("display", "none");
        _ = self.overlay.style().set_property("visibility", "hidden");
    }
}

/// Hook the saucer button. Returns false when the page has no entry overlay,
/// in which case the caller should boot the scene straight away.
pub fn wire_takeoff(document: &web::Document, on_handoff: impl FnOnce() + 'static) -> bool {
    let Some(entry) = EntryDom::find(document) else {
        return false;
    };
    let entry = Rc::new(entry);
    let timeline = Rc::new(RefCell::new(TakeoffTimeline::new()));
    let on_handoff = Rc::new(RefCell::new(Some(on_handoff)));

    dom::add_click_listener(document, ENTRY_START_ID, move || {
        // repeated clicks while the saucer is already flying are ignored
        if !timeline.borrow_mut().start() {
            return;
        }
        log::info!("[entry] takeoff");
        let entry = entry.clone();
        let timeline = timeline.clone();
        let on_handoff = on_handoff.clone();
        let mut last = Instant::now();
        frame::run_frames(move || {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            let f = timeline.borrow_mut().tick(dt);
            entry.apply(&f);
            if f.handoff {
                entry.dismiss();
                if let Some(cb) = on_handoff.borrow_mut().take() {
                    cb();
                }
                return false;
            }
            true
        });
    })
}
