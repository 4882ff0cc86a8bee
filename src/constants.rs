// Page wiring constants for the web front-end: element ids, storage keys and
// the few timings that only matter to the DOM side.

// Landing page
pub const ID_CONFETTI_CANVAS: &str = "confetti";
pub const ID_TITLE: &str = "title";
pub const ID_SUBTITLE: &str = "subtitle";
pub const ID_MSG: &str = "msg";
pub const ID_FROM: &str = "from";
pub const ID_DATE: &str = "date";
pub const ID_BTN_CELEBRATE: &str = "btnCelebrate";
pub const ID_BTN_CANDLE: &str = "btnCandle";
pub const ID_BTN_THEME: &str = "btnTheme";
pub const ID_BTN_MUSIC: &str = "btnMusic";
pub const ID_BG_MUSIC: &str = "bgMusic";
pub const ID_TOAST: &str = "toast";
pub const ID_MUSIC_UNLOCK: &str = "musicUnlock";
pub const SEL_SIGNATURE_SEP: &str = ".sep";

// Wish page
pub const ID_STARS_CANVAS: &str = "stars";
pub const ID_CANDLES: &str = "candlesContainer";
pub const ID_WISH_HINT: &str = "wishHint";
pub const ID_BLOW_HINT: &str = "blowHint";
pub const ID_WISH_RESULT: &str = "wishResult";
pub const ID_BTN_BLOW: &str = "btnBlow";
pub const ID_BTN_BACK: &str = "btnBack";
pub const ID_BTN_NEXT: &str = "btnNext";
pub const ID_CANDLE_TITLE: &str = "candleTitle";

// Navigation targets
pub const PAGE_LANDING: &str = "index.html";
pub const PAGE_WISH: &str = "candle.html";

// Persistence
pub const THEME_STORAGE_KEY: &str = "birthday_theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Feedback
pub const CELEBRATE_TOAST: &str = "生日快乐！";
pub const CELEBRATE_VIBRATION: [u32; 3] = [20, 30, 20]; // on, off, on (ms)

// Shower flakes
pub const FLAKE_SIZE_PX: u32 = 10;
pub const FLAKE_Z_INDEX: u32 = 9999;

// Personalization keys read from the query string
pub const QUERY_KEYS: [&str; 5] = ["to", "from", "title", "msg", "date"];

// Toast
pub const TOAST_VISIBLE_MS: i32 = 1600;
