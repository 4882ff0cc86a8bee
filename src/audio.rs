use card_core::MusicState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Background track, its toggle button and the optional "tap to enable" cover.
#[derive(Clone)]
pub struct BackgroundMusic {
    audio: web::HtmlAudioElement,
    button: web::HtmlElement,
    unlock: Option<web::HtmlElement>,
}

impl BackgroundMusic {
    pub fn new(
        audio: web::HtmlAudioElement,
        button: web::HtmlElement,
        unlock: Option<web::HtmlElement>,
    ) -> Self {
        let music = Self {
            audio,
            button,
            unlock,
        };
        for event in ["play", "pause"] {
            let m = music.clone();
            let closure = Closure::wrap(Box::new(move || m.sync_button()) as Box<dyn FnMut()>);
            _ = music
                .audio
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        music.sync_button();
        music
    }

    pub fn state(&self) -> MusicState {
        MusicState {
            playing: !self.audio.paused(),
        }
    }

    pub fn unlock_overlay(&self) -> Option<&web::HtmlElement> {
        self.unlock.as_ref()
    }

    pub fn sync_button(&self) {
        let state = self.state();
        let (playing, paused) = state.button_classes();
        let cl = self.button.class_list();
        _ = cl.toggle_with_force("playing", playing);
        _ = cl.toggle_with_force("paused", paused);
        _ = self.button.set_attribute("aria-label", state.button_label());
        if state.playing {
            if let Some(cover) = &self.unlock {
                _ = cover.class_list().add_1("hidden");
            }
        }
    }

    /// Must be called from inside a user gesture for the browser to allow it.
    pub fn start(&self) {
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::debug!("[music] play rejected: {:?}", e);
                return;
            }
        };
        let m = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => m.sync_button(),
                Err(e) => log::debug!("[music] play rejected: {:?}", e),
            }
        });
    }

    pub fn toggle(&self) {
        if self.state().playing {
            _ = self.audio.pause();
            self.sync_button();
        } else {
            self.start();
        }
    }
}

fn navigator_can_vibrate(navigator: &web::Navigator) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("vibrate")).unwrap_or(false)
}

pub fn vibrate(ms: u32) {
    if let Some(nav) = web::window().map(|w| w.navigator()) {
        if navigator_can_vibrate(&nav) {
            _ = nav.vibrate_with_duration(ms);
        }
    }
}

pub fn vibrate_pattern(pattern: &[u32]) {
    if let Some(nav) = web::window().map(|w| w.navigator()) {
        if navigator_can_vibrate(&nav) {
            let arr: js_sys::Array = pattern.iter().map(|&v| JsValue::from(v)).collect();
            _ = nav.vibrate_with_pattern(&arr);
        }
    }
}
