// DOM ids and camera framing used by the web frontend.

pub const CANVAS_ID: &str = "book-canvas";
pub const PAGE_BUTTONS_ID: &str = "page-buttons";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_BAR_ID: &str = "loading-bar";
pub const ROTATE_ALERT_ID: &str = "rotate-alert";

/// One image per sheet; the loader splits each into a left and right half.
pub const SHEET_URLS: [&str; 7] = [
    "textures/1.jpeg",
    "textures/2.jpeg",
    "textures/3.jpeg",
    "textures/4.jpeg",
    "textures/5.jpeg",
    "textures/6.jpeg",
    "textures/7.jpeg",
];

pub const CAMERA_EYE_X: f32 = -0.5;
pub const CAMERA_EYE_Y: f32 = 1.0;
/// The camera backs away on narrow windows so the whole book stays framed.
pub const CAMERA_EYE_Z_WIDE: f32 = 4.0;
pub const CAMERA_EYE_Z_NARROW: f32 = 9.0;
pub const NARROW_VIEW_BREAKPOINT_PX: f32 = 800.0;

pub const CAMERA_FOV_Y_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Static tilt of the whole book toward the camera.
pub const BOOK_TILT_RAD: f32 = -std::f32::consts::PI / 64.0;
