use crate::audio::{self, BackgroundMusic};
use crate::constants::*;
use crate::dom;
use crate::events::wire_double_tap_guard;
use crate::frame::ConfettiLoop;
use crate::overlay::{self, Toast};
use card_core::{
    celebration_plan, format_date, page_link, CardText, PageClock, Theme, INTRO_BURST_AMOUNT,
    INTRO_BURST_ANCHOR, INTRO_BURST_DELAY_MS,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init_landing(document: &web::Document, text: &CardText, clock: PageClock) {
    apply_card_text(document, text);
    wire_double_tap_guard(document, clock);

    let toast = Toast::find(document);
    wire_theme(document, toast.clone());
    wire_music(document);

    let canvas = document
        .get_element_by_id(ID_CONFETTI_CANVAS)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let confetti = ConfettiLoop::new(canvas);

    let celebrate = confetti.clone();
    dom::add_tap_listener_by_id(document, ID_BTN_CELEBRATE, move || {
        celebrate.play(&celebration_plan(&mut rand::thread_rng()));
        audio::vibrate_pattern(&CELEBRATE_VIBRATION);
        toast.show(CELEBRATE_TOAST);
    });

    dom::add_tap_listener_by_id(document, ID_BTN_CANDLE, || {
        dom::navigate(&page_link(PAGE_WISH, &dom::location_search()));
    });

    dom::set_timeout(INTRO_BURST_DELAY_MS, move || {
        confetti.burst_at(INTRO_BURST_ANCHOR, INTRO_BURST_AMOUNT);
    });
}

fn apply_card_text(document: &web::Document, text: &CardText) {
    let title = text.display_title();
    dom::set_text(document, ID_TITLE, &title);
    document.set_title(&title);
    dom::set_text(document, ID_SUBTITLE, text.subtitle());

    if !text.msg.is_empty() {
        if let Some(container) = document.get_element_by_id(ID_MSG) {
            container.set_text_content(None);
            for line in text.paragraphs() {
                if let Ok(p) = document.create_element("p") {
                    p.set_text_content(Some(line));
                    _ = container.append_child(&p);
                }
            }
        }
    }

    let signature = text.signature();
    if let Some(from) = dom::html_element(document, ID_FROM) {
        from.set_text_content(signature.as_deref());
        dom::set_display(&from, if signature.is_some() { "" } else { "none" });
    }
    if let Ok(Some(sep)) = document.query_selector(SEL_SIGNATURE_SEP) {
        if let Some(sep) = sep.dyn_ref::<web::HtmlElement>() {
            dom::set_display(sep, if signature.is_some() { "" } else { "none" });
        }
    }

    dom::set_text(document, ID_DATE, &text.display_date(&today()));
}

fn today() -> String {
    let d = js_sys::Date::new_0();
    format_date(d.get_full_year(), d.get_month() + 1, d.get_date())
}

// ---------------- Theme ----------------

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn initial_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let prefers_dark = web::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);
    Theme::initial(stored.as_deref(), prefers_dark)
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        match theme.root_attribute() {
            Some(value) => _ = root.set_attribute(THEME_ATTRIBUTE, value),
            None => _ = root.remove_attribute(THEME_ATTRIBUTE),
        }
    }
    if let Some(storage) = local_storage() {
        _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn wire_theme(document: &web::Document, toast: Toast) {
    let theme = Rc::new(Cell::new(initial_theme()));
    apply_theme(document, theme.get());

    let doc = document.clone();
    dom::add_tap_listener_by_id(document, ID_BTN_THEME, move || {
        let next = theme.get().toggled();
        theme.set(next);
        apply_theme(&doc, next);
        toast.show(next.switched_toast());
    });
}

// ---------------- Music ----------------

fn wire_music(document: &web::Document) {
    let audio_el = document
        .get_element_by_id(ID_BG_MUSIC)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
    let button = dom::html_element(document, ID_BTN_MUSIC);
    let (Some(audio_el), Some(button)) = (audio_el, button) else {
        return;
    };
    let music = BackgroundMusic::new(audio_el, button.clone(), dom::html_element(document, ID_MUSIC_UNLOCK));

    if let Some(cover) = music.unlock_overlay().cloned() {
        // one-shot: the cover hides itself, so later taps never reach it
        let m = music.clone();
        let used = Cell::new(false);
        dom::add_tap_listener(&cover.clone(), move || {
            if used.replace(true) {
                return;
            }
            m.start();
            overlay::hide(&cover);
        });
    }

    dom::add_tap_listener(&button, move || music.toggle());
}
