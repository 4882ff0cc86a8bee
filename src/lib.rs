#![cfg(target_arch = "wasm32")]
use card_core::{CardText, PageClock, QueryParams};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{ID_CANDLES, QUERY_KEYS};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("greeting-card starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(run);
        document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn read_query() -> QueryParams {
    let search = dom::location_search();
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return QueryParams::default();
    };
    QueryParams::from_pairs(
        QUERY_KEYS
            .iter()
            .filter_map(|&key| params.get(key).map(|value| (key, value))),
    )
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let clock = PageClock::start();
    let query = read_query();

    if document.get_element_by_id(ID_CANDLES).is_some() {
        log::info!("[page] wish");
        events::wish::init_wish(&document, &query, clock);
    } else {
        log::info!("[page] landing");
        let text = CardText::from_query(&query);
        events::landing::init_landing(&document, &text, clock);
    }
    Ok(())
}
