use crate::dom;
use crate::events::InputWiring;
use crate::render;
use instant::Instant;
use orrery_core::ScreenPoint;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub wiring: InputWiring,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let out = self.wiring.controller.borrow_mut().tick(dt_sec);

        if let Some(change) = &out.focus_change {
            self.wiring.apply_focus(change);
        }
        self.wiring.apply_hover(out.hover_change);

        // overlays are positioned in CSS pixels; the controller works in backing pixels
        let canvas = &self.wiring.canvas;
        let rect = canvas.get_bounding_client_rect();
        let scale = dom::css_scale(canvas);
        let to_css = |p: ScreenPoint| {
            (
                rect.left() as f32 + p.x * scale,
                rect.top() as f32 + p.y * scale,
            )
        };
        self.wiring.card.borrow_mut().update(out.card.map(to_css));
        match out.hover_label {
            Some(label) => {
                let (x, y) = to_css(label.at);
                self.wiring.hover_label.move_to(x, y);
            }
            None => self.wiring.hover_label.hide(),
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(canvas.width(), canvas.height());
            if let Err(e) = g.render(dt_sec, out.view_projection, out.eye, &out.bodies) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            // overlays and navigation keep working without a renderer
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    run_frames(move || {
        frame_ctx.borrow_mut().frame();
        true
    });
}

/// Drive `step` from `requestAnimationFrame` until it returns false.
pub fn run_frames(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // stop re-arming; the closure can't be dropped from inside its own call
        if !step() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
