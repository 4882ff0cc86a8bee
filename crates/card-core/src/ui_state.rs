//! Page chrome state kept out of the DOM.
//!
//! The front-end owns one value of each type, updates it through these pure
//! functions and then mirrors the result onto elements.

use crate::constants::DOUBLE_TAP_WINDOW_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "day" => Some(Theme::Day),
            "night" => Some(Theme::Night),
            _ => None,
        }
    }

    /// Stored choice first, then the system color-scheme preference.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored.and_then(Theme::parse) {
            Some(t) => t,
            None if prefers_dark => Theme::Night,
            None => Theme::Day,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// Value for the root `data-theme` attribute; day clears it.
    pub fn root_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Day => None,
            Theme::Night => Some("night"),
        }
    }

    /// Toast shown after switching to this theme.
    pub fn switched_toast(self) -> &'static str {
        match self {
            Theme::Day => "已切换：明亮",
            Theme::Night => "已切换：夜空",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MusicState {
    pub playing: bool,
}

impl MusicState {
    pub fn button_label(self) -> &'static str {
        if self.playing {
            "暂停音乐"
        } else {
            "播放音乐"
        }
    }

    /// (`playing` class, `paused` class)
    pub fn button_classes(self) -> (bool, bool) {
        (self.playing, !self.playing)
    }
}

/// Suppresses the second tap of a double-tap so mobile browsers do not zoom.
#[derive(Clone, Copy, Debug)]
pub struct TapGuard {
    last_touch_end_ms: f64,
}

impl Default for TapGuard {
    fn default() -> Self {
        Self {
            last_touch_end_ms: f64::NEG_INFINITY,
        }
    }
}

impl TapGuard {
    /// Record a `touchend` at `now_ms`; true if its default should be prevented.
    pub fn on_touch_end(&mut self, now_ms: f64) -> bool {
        let suppress = now_ms - self.last_touch_end_ms <= DOUBLE_TAP_WINDOW_MS;
        self.last_touch_end_ms = now_ms;
        suppress
    }
}
