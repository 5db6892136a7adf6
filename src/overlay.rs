use crate::constants::{
    CARD_ID, CARD_LIFT_PX, CARD_LINK_ID, CARD_SUBTITLE_ID, CARD_TITLE_ID, HIDDEN_CLASS,
    HOVER_LABEL_ID,
};
use crate::dom;
use orrery_core::CardContent;
use web_sys as web;

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(HIDDEN_CLASS);
    } else {
        _ = cl.remove_1(HIDDEN_CLASS);
    }
}

#[inline]
fn place(el: &web::HtmlElement, x_css: f32, y_css: f32) {
    let style = el.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("left", &format!("{:.1}px", x_css));
    _ = style.set_property("top", &format!("{:.1}px", y_css));
    _ = style.set_property("transform", "translate(-50%, -100%)");
}

/// Overlay card above the focused body. Missing elements are created so the
/// scene never depends on the page markup being complete.
pub struct Card {
    root: Option<web::HtmlElement>,
    title: Option<web::Element>,
    subtitle: Option<web::Element>,
    link: Option<web::Element>,
    visible: bool,
}

impl Card {
    pub fn attach(document: &web::Document) -> Self {
        let root = dom::get_or_create_div(document, CARD_ID);
        let child = |id: &str, tag: &str| -> Option<web::Element> {
            if let Some(el) = document.get_element_by_id(id) {
                return Some(el);
            }
            let el = document.create_element(tag).ok()?;
            el.set_id(id);
            _ = root.as_ref()?.append_child(&el);
            Some(el)
        };
        let title = child(CARD_TITLE_ID, "h3");
        let subtitle = child(CARD_SUBTITLE_ID, "p");
        let link = document.get_element_by_id(CARD_LINK_ID);
        if root.is_none() {
            log::warn!("[overlay] card unavailable; running without it");
        }
        // start visible so the first hide() applies the class
        let mut card = Self {
            root,
            title,
            subtitle,
            link,
            visible: true,
        };
        card.hide();
        card
    }

    pub fn set_content(&self, content: &CardContent) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(&content.title));
        }
        if let Some(el) = &self.subtitle {
            el.set_text_content(Some(&content.subtitle));
        }
        if let Some(el) = &self.link {
            match &content.url {
                Some(url) => {
                    _ = el.set_attribute("href", url);
                    set_hidden(el, false);
                }
                None => set_hidden(el, true),
            }
        }
    }

    /// Pin at `(x, y)` in CSS pixels, or hide when there is no anchor.
    pub fn update(&mut self, at_css: Option<(f32, f32)>) {
        match at_css {
            Some((x, y)) => {
                if let Some(root) = &self.root {
                    place(root, x, y - CARD_LIFT_PX);
                }
                self.show();
            }
            None => self.hide(),
        }
    }

    fn show(&mut self) {
        if self.visible {
            return;
        }
        if let Some(root) = &self.root {
            set_hidden(root, false);
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        if !self.visible {
            return;
        }
        if let Some(root) = &self.root {
            set_hidden(root, true);
        }
        self.visible = false;
    }
}

/// Small label that follows the hovered planet.
pub struct HoverLabel {
    el: Option<web::HtmlElement>,
}

impl HoverLabel {
    pub fn attach(document: &web::Document) -> Self {
        let el = dom::get_or_create_div(document, HOVER_LABEL_ID);
        if let Some(el) = &el {
            set_hidden(el, true);
        }
        Self { el }
    }

    pub fn show(&self, text: &str) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(text));
            set_hidden(el, false);
        }
    }

    pub fn hide(&self) {
        if let Some(el) = &self.el {
            set_hidden(el, true);
        }
    }

    pub fn move_to(&self, x_css: f32, y_css: f32) {
        if let Some(el) = &self.el {
            place(el, x_css, y_css);
        }
    }
}
