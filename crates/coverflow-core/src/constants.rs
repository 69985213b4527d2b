// Layout and timing defaults for the coverflow arc.

// Arc geometry
pub const STEP_SPACING_PX: f32 = 220.0; // horizontal distance between neighbouring items
pub const DEPTH_STEP_PX: f32 = 200.0; // how far each step recedes along Z
pub const ROTATION_STEP_DEG: f32 = 60.0; // rotateY per step away from centre
pub const ROTATION_MAX_DEG: f32 = 60.0; // rotation clamp
pub const OPACITY_STEP: f32 = 0.2;
pub const SCALE_STEP: f32 = 0.1;
pub const BASE_STACK_ORDER: i32 = 100; // z-index of the active item

// Culling
pub const CULL_DISTANCE: u32 = 3; // items further than this are hidden
pub const CULL_TRANSLATE_X_PX: f32 = 800.0; // off-screen parking position

// Timers (milliseconds)
pub const SETTLE_MS: u64 = 600; // guard window after a transition
pub const CAPTION_FADE_DELAY_MS: u64 = 1000; // caption fade-in re-trigger
pub const AUTOPLAY_INTERVAL_MS: u64 = 4000;

// Touch
pub const SWIPE_THRESHOLD_PX: f32 = 30.0; // minimum horizontal travel for a swipe
pub const TOUCH_SCROLL_LOCK_PX: f32 = 10.0; // horizontal travel that suppresses page scroll

// Page chrome
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 500.0;
