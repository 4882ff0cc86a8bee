use crate::constants::{ID_BLOW_HINT, ID_TOAST, ID_WISH_HINT, ID_WISH_RESULT, TOAST_VISIBLE_MS};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
}

/// Transient message; a new message restarts the hide timer.
#[derive(Clone)]
pub struct Toast {
    el: Option<web::HtmlElement>,
    timer: Rc<Cell<i32>>,
}

impl Toast {
    pub fn find(document: &web::Document) -> Self {
        Self {
            el: dom::html_element(document, ID_TOAST),
            timer: Rc::new(Cell::new(0)),
        }
    }

    pub fn show(&self, text: &str) {
        let Some(el) = &self.el else {
            return;
        };
        dom::clear_timeout(self.timer.get());
        el.set_text_content(Some(text));
        _ = el.class_list().add_1("show");
        let el_hide = el.clone();
        let handle = dom::set_timeout(TOAST_VISIBLE_MS, move || {
            _ = el_hide.class_list().remove_1("show");
        });
        self.timer.set(handle);
    }
}

fn set_display_by_id(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = dom::html_element(document, id) {
        dom::set_display(&el, value);
    }
}

/// Swap the "make a wish" hint for the "blow" hint.
pub fn show_blow_hint(document: &web::Document) {
    set_display_by_id(document, ID_WISH_HINT, "none");
    set_display_by_id(document, ID_BLOW_HINT, "block");
}

/// Hide both hints and show the result panel.
pub fn reveal_wish(document: &web::Document) {
    set_display_by_id(document, ID_WISH_HINT, "none");
    set_display_by_id(document, ID_BLOW_HINT, "none");
    set_display_by_id(document, ID_WISH_RESULT, "block");
}
