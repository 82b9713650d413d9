// Shared page-turn tuning constants used by both web and native frontends.

// Angular easing time constants (seconds); the fold settles faster than the bend.
pub const BEND_EASE_TAU_SEC: f32 = 0.5;
pub const FOLD_EASE_TAU_SEC: f32 = 0.3;

// Curl shape strengths applied to the per-bone target rotation.
pub const INSIDE_CURVE_STRENGTH: f32 = 0.18;
pub const OUTSIDE_CURVE_STRENGTH: f32 = 0.05;
pub const TURNING_CURVE_STRENGTH: f32 = 0.09;

// Bones below this index curl toward the spine; at or past it they counter-curl,
// and only past it does the travelling crease appear.
pub const CURVE_SPLIT_BONE: usize = 8;

// Window of the transient curl after a page flips (milliseconds).
pub const TURN_DURATION_MS: f64 = 400.0;

// Fan-out between stacked pages (degrees per page index) while the book is open.
pub const PAGE_FAN_DEG: f32 = 0.8;

// Crease amplitude near the free edge during an active turn (degrees).
pub const FOLD_CREASE_DEG: f32 = 2.0;

// Hover highlight easing time constant (seconds). The original eased by a
// fixed 1% per frame; at 60 fps that is roughly this tau.
pub const HIGHLIGHT_TAU_SEC: f32 = 1.6;

// Initial emissive emphasis of the picture faces; covers stay dimmer.
pub const COVER_EMISSIVE: f32 = 0.05;
pub const INTERIOR_EMISSIVE: f32 = 0.15;

// Tap classification thresholds
pub const TAP_MAX_DELTA_PX: f32 = 10.0;
pub const TAP_MAX_DURATION_MS: f64 = 300.0;

// Delayed-page walk pacing: fast while far from the target, slow on approach.
pub const STEP_FAR_MS: u64 = 50;
pub const STEP_NEAR_MS: u64 = 150;
pub const STEP_FAR_THRESHOLD: usize = 2;

// Viewport classification breakpoint (CSS pixels).
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
