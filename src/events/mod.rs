pub mod landing;
pub mod wish;

use card_core::{Clock, PageClock, TapGuard};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stop mobile browsers from zooming on a quick second tap anywhere on the page.
pub fn wire_double_tap_guard(document: &web::Document, clock: PageClock) {
    let guard = RefCell::new(TapGuard::default());
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if guard.borrow_mut().on_touch_end(clock.now_ms()) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
