// Shared tuning constants for the card engines.

// Canvas surface
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0; // bounds backing-buffer memory on very dense displays

// Confetti launch
pub const CONFETTI_DEFAULT_AMOUNT: usize = 140;
pub const CONFETTI_SPEED_MIN: f32 = 2.2;
pub const CONFETTI_SPEED_SPAN: f32 = 7.0;
pub const CONFETTI_LIFT_MIN: f32 = 1.8; // upward bias subtracted from vy
pub const CONFETTI_LIFT_SPAN: f32 = 3.2;
pub const CONFETTI_SIZE_MIN: f32 = 4.0;
pub const CONFETTI_SIZE_SPAN: f32 = 7.0;
pub const CONFETTI_GRAVITY_MIN: f32 = 0.14;
pub const CONFETTI_GRAVITY_SPAN: f32 = 0.12;
pub const CONFETTI_SPIN_SPAN: f32 = 0.35; // vr in [-span/2, span/2)
pub const CONFETTI_TTL_MIN: u32 = 90;
pub const CONFETTI_TTL_SPAN: u32 = 70;

pub const CONFETTI_PALETTE: [&str; 6] = [
    "#ff4d7d", // rose
    "#ffd166", // saffron
    "#06d6a0", // mint
    "#4ea8de", // sky
    "#b5179e", // magenta
    "#ffffff",
];

// Confetti per-frame integration
pub const CONFETTI_DRAG_X: f32 = 0.992;
pub const CONFETTI_DRAG_Y: f32 = 0.996;
pub const CONFETTI_FADE_START: f32 = 0.75; // fraction of ttl at which fading begins
pub const CONFETTI_CULL_BELOW_PX: f32 = 80.0;
pub const CONFETTI_CULL_SIDE_PX: f32 = 120.0;

// Starfield
pub const STAR_DENSITY: f64 = 0.0003; // stars per square CSS pixel
pub const STAR_RADIUS_MIN: f64 = 0.5;
pub const STAR_RADIUS_SPAN: f64 = 1.5;
pub const STAR_OPACITY_MIN: f64 = 0.5;
pub const STAR_OPACITY_SPAN: f64 = 0.5;
pub const STAR_COLOR: &str = "rgba(255, 255, 255, 0.8)";
pub const STAR_TWINKLE_INTERVAL_MS: u32 = 2000;

// Candle ceremony (milliseconds)
pub const CANDLE_COUNT: usize = 3;
pub const CANDLE_HINT_DELAY_MS: f64 = 3000.0;
pub const CANDLE_BLOW_STAGGER_MS: f64 = 150.0;
pub const CANDLE_REVEAL_DELAY_MS: f64 = 1000.0;
pub const CANDLE_VIBRATE_MS: u32 = 30;

// Wish shower
pub const SHOWER_FLAKE_COUNT: usize = 50;
pub const SHOWER_SPAWN_INTERVAL_MS: f64 = 20.0;
pub const SHOWER_START_Y_PX: f64 = -10.0;
pub const SHOWER_SPEED_MIN: f64 = 2.0;
pub const SHOWER_SPEED_SPAN: f64 = 3.0;
pub const SHOWER_FALL_PX: f64 = 0.5; // constant downward drift per frame
pub const SHOWER_SPIN_SPAN_DEG: f64 = 10.0;
pub const SHOWER_EXIT_MARGIN_PX: f64 = 50.0;
pub const SHOWER_SIDE_MARGIN_PCT: f64 = 10.0;
pub const SHOWER_PALETTE: [&str; 5] = ["#ff4d7d", "#ffd700", "#06d6a0", "#4ea8de", "#ffffff"];

// Landing page choreography
pub const INTRO_BURST_DELAY_MS: i32 = 480;
pub const INTRO_BURST_AMOUNT: usize = 160;
pub const INTRO_BURST_ANCHOR: [f64; 2] = [0.5, 0.35];

// Personalization limits (characters)
pub const MAX_TO_CHARS: usize = 20;
pub const MAX_FROM_CHARS: usize = 20;
pub const MAX_TITLE_CHARS: usize = 26;
pub const MAX_MSG_CHARS: usize = 240;
pub const MAX_DATE_CHARS: usize = 24;

// Touch
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
