use crate::audio;
use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::overlay;
use card_core::{
    page_link, wish_heading, CandleCeremony, CeremonyEffect, CeremonyError, Clock, Effects,
    PageClock, QueryParams, CANDLE_COUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct WishState {
    ceremony: CandleCeremony,
    candles: Vec<web::Element>,
    timer: i32,
}

/// Candle page controller. Clones share the ceremony.
#[derive(Clone)]
struct WishPage {
    state: Rc<RefCell<WishState>>,
    document: web::Document,
    clock: PageClock,
}

pub fn init_wish(document: &web::Document, query: &QueryParams, clock: PageClock) {
    let stars = document
        .get_element_by_id(ID_STARS_CANVAS)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    frame::start_starfield(stars);

    dom::set_text(document, ID_CANDLE_TITLE, &wish_heading(query.get("to")));

    let candles = match document.get_element_by_id(ID_CANDLES) {
        Some(container) => build_candles(document, &container),
        None => Vec::new(),
    };

    let page = WishPage {
        state: Rc::new(RefCell::new(WishState {
            ceremony: CandleCeremony::new(clock.now_ms()),
            candles,
            timer: 0,
        })),
        document: document.clone(),
        clock,
    };

    let elements = page.state.borrow().candles.clone();
    for (i, el) in elements.iter().enumerate() {
        let p = page.clone();
        dom::add_tap_listener(el, move || p.blow(i));
    }

    let p = page.clone();
    dom::add_tap_listener_by_id(document, ID_BTN_BLOW, move || p.blow_all());

    for id in [ID_BTN_BACK, ID_BTN_NEXT] {
        dom::add_tap_listener_by_id(document, id, || {
            dom::navigate(&page_link(PAGE_LANDING, &dom::location_search()));
        });
    }

    page.reschedule();
}

fn build_candles(document: &web::Document, container: &web::Element) -> Vec<web::Element> {
    container.set_text_content(None);
    let mut out = Vec::with_capacity(CANDLE_COUNT);
    for i in 0..CANDLE_COUNT {
        match build_candle(document, i) {
            Ok(el) => {
                _ = container.append_child(&el);
                out.push(el);
            }
            Err(e) => log::warn!("[wish] candle {} not created: {:?}", i, e),
        }
    }
    out
}

fn build_candle(document: &web::Document, index: usize) -> Result<web::Element, wasm_bindgen::JsValue> {
    let item = document.create_element("div")?;
    item.set_class_name("candle-item");
    item.set_attribute("data-index", &index.to_string())?;

    let flame_box = document.create_element("div")?;
    flame_box.set_class_name("flame-container");
    let flame = document.create_element("div")?;
    flame.set_class_name("flame");
    flame_box.append_child(&flame)?;

    let body = document.create_element("div")?;
    body.set_class_name("candle-body");
    let smoke = document.create_element("div")?;
    smoke.set_class_name("smoke");

    item.append_child(&flame_box)?;
    item.append_child(&body)?;
    item.append_child(&smoke)?;
    Ok(item)
}

impl WishPage {
    fn blow(&self, index: usize) {
        let now = self.clock.now_ms();
        let result = self.state.borrow_mut().ceremony.blow(index, now);
        self.apply(result);
        self.reschedule();
    }

    fn blow_all(&self) {
        let now = self.clock.now_ms();
        self.state.borrow_mut().ceremony.blow_all(now);
        self.pump();
    }

    /// Fire every timer that is due, then arm for the next one.
    fn pump(&self) {
        let now = self.clock.now_ms();
        let result = self.state.borrow_mut().ceremony.advance(now);
        self.apply(result);
        self.reschedule();
    }

    fn reschedule(&self) {
        let mut st = self.state.borrow_mut();
        dom::clear_timeout(st.timer);
        st.timer = 0;
        let Some(due) = st.ceremony.next_due() else {
            return;
        };
        let delay = (due - self.clock.now_ms()).max(0.0).ceil() as i32;
        let p = self.clone();
        st.timer = dom::set_timeout(delay, move || p.pump());
    }

    fn apply(&self, result: Result<Effects, CeremonyError>) {
        let effects = match result {
            Ok(effects) => effects,
            Err(e) => {
                log::error!("[wish] {}", e);
                return;
            }
        };
        for effect in effects {
            match effect {
                CeremonyEffect::CandleBlown(i) => {
                    if let Some(el) = self.state.borrow().candles.get(i) {
                        _ = el.class_list().add_1("blown");
                    }
                }
                CeremonyEffect::Vibrate(ms) => audio::vibrate(ms),
                CeremonyEffect::ShowBlowHint => overlay::show_blow_hint(&self.document),
                CeremonyEffect::RevealWish => {
                    overlay::reveal_wish(&self.document);
                    frame::start_shower(self.document.clone(), self.clock);
                    log::info!("[wish] revealed");
                }
            }
        }
    }
}
