pub mod keyboard;
pub mod pointer;
pub mod wheel;

use crate::overlay;
use orrery_core::{FocusChange, HoverChange, SolarSystemController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;
pub use wheel::wire_wheel;

/// Handles every input listener needs.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<SolarSystemController>>,
    pub card: Rc<RefCell<overlay::Card>>,
    pub hover_label: Rc<overlay::HoverLabel>,
}

impl InputWiring {
    /// Push a focus change out to the overlay card.
    pub fn apply_focus(&self, change: &FocusChange) {
        self.card.borrow().set_content(&change.card);
    }

    /// Show or hide the hover label and pointer cursor after a hover transition.
    pub fn apply_hover(&self, change: HoverChange) {
        let entered = match change {
            HoverChange::Unchanged => return,
            HoverChange::Left(_) => None,
            HoverChange::Entered(i) | HoverChange::Moved { to: i, .. } => Some(i),
        };
        match entered {
            Some(i) => {
                let text = self
                    .controller
                    .borrow()
                    .registry()
                    .get(i)
                    .map(|b| b.label.clone())
                    .unwrap_or_default();
                self.hover_label.show(&text);
                _ = self.canvas.style().set_property("cursor", "pointer");
            }
            None => {
                self.hover_label.hide();
                _ = self.canvas.style().set_property("cursor", "");
            }
        }
    }
}
