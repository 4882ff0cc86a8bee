//! Personalization text taken from the page's query string.

use fnv::FnvHashMap;

use crate::constants::*;

pub const DEFAULT_TITLE: &str = "生日快乐";
pub const SUBTITLE_NAMED: &str = "愿你新的一岁，事事顺意，天天开心";
pub const SUBTITLE_ANON: &str = "愿你今天被快乐紧紧拥抱";
pub const WISH_HEADING: &str = "许个愿吧";

/// Trim, then cut to `max_chars` characters with a trailing ellipsis.
///
/// Characters are Unicode scalar values, so an emoji outside the BMP counts
/// once here where a JavaScript `length` would count two UTF-16 units.
pub fn clamp_text(s: &str, max_chars: usize) -> String {
    let t = s.trim();
    if t.chars().count() > max_chars {
        let mut out: String = t.chars().take(max_chars).collect();
        out.push('…');
        out
    } else {
        t.to_string()
    }
}

/// Decoded query parameters, last value wins.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    values: FnvHashMap<String, String>,
}

impl QueryParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardText {
    pub to: String,
    pub from: String,
    pub title: String,
    pub msg: String,
    pub date: String,
}

impl CardText {
    pub fn from_query(q: &QueryParams) -> Self {
        Self {
            to: clamp_text(q.get("to"), MAX_TO_CHARS),
            from: clamp_text(q.get("from"), MAX_FROM_CHARS),
            title: clamp_text(q.get("title"), MAX_TITLE_CHARS),
            msg: clamp_text(q.get("msg"), MAX_MSG_CHARS),
            date: clamp_text(q.get("date"), MAX_DATE_CHARS),
        }
    }

    pub fn display_title(&self) -> String {
        if !self.title.is_empty() {
            self.title.clone()
        } else if !self.to.is_empty() {
            format!("{}，{}", self.to, DEFAULT_TITLE)
        } else {
            DEFAULT_TITLE.to_string()
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.to.is_empty() {
            SUBTITLE_ANON
        } else {
            SUBTITLE_NAMED
        }
    }

    /// `— from`, or `None` when the card is unsigned.
    pub fn signature(&self) -> Option<String> {
        (!self.from.is_empty()).then(|| format!("— {}", self.from))
    }

    /// Message split into paragraphs on newline runs; blank lines dropped.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.msg
            .split('\n')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn display_date(&self, today: &str) -> String {
        if self.date.is_empty() {
            today.to_string()
        } else {
            self.date.clone()
        }
    }
}

/// Wish page heading. `to` is only trimmed, never length-clamped.
pub fn wish_heading(to: &str) -> String {
    let to = to.trim();
    if to.is_empty() {
        WISH_HEADING.to_string()
    } else {
        format!("{to}，{WISH_HEADING}")
    }
}

/// `YYYY.MM.DD`, month 1-based.
pub fn format_date(year: u32, month: u32, day: u32) -> String {
    format!("{year}.{month:02}.{day:02}")
}

/// Link to a sibling page that carries the current query string along.
pub fn page_link(page: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        page.to_string()
    } else {
        format!("{page}?{query}")
    }
}
