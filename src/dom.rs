use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

/// Run `handler` on click, and on touchend with the synthetic click suppressed.
pub fn add_tap_listener(target: &web::EventTarget, handler: impl FnMut() + 'static) {
    let handler: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(handler));

    let on_click = handler.clone();
    let click = Closure::wrap(Box::new(move || (&mut *on_click.borrow_mut())()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let on_touch = handler;
    let touch = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        (&mut *on_touch.borrow_mut())();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("touchend", touch.as_ref().unchecked_ref());
    touch.forget();
}

#[inline]
pub fn add_tap_listener_by_id(document: &web::Document, id: &str, handler: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(id) {
        add_tap_listener(&el, handler);
    }
}

/// Passive window resize listener, kept for the page's lifetime.
pub fn on_resize(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

/// One-shot timer; returns the handle for `clear_timeout`, or 0 without a window.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> i32 {
    let Some(window) = web::window() else {
        return 0;
    };
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .unwrap_or(0)
}

#[inline]
pub fn clear_timeout(handle: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(handle);
    }
}

/// Repeating timer that is never cleared.
pub fn set_interval(period_ms: i32, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        );
    }
    closure.forget();
}

/// Keep calling `frame` once per animation frame until it returns false.
pub fn animation_loop(mut frame: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

#[inline]
pub fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(url: &str) {
    if let Some(w) = web::window() {
        _ = w.location().set_href(url);
    }
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
