use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

use crate::constants::{
    CAMERA_EYE_X, CAMERA_EYE_Y, CAMERA_EYE_Z_NARROW, CAMERA_EYE_Z_WIDE, CAMERA_FAR,
    CAMERA_FOV_Y_RAD, CAMERA_NEAR, NARROW_VIEW_BREAKPOINT_PX,
};

/// Fixed camera position, chosen once from the CSS window width.
pub fn eye(viewport_css_width: f32) -> Vec3 {
    let z = if viewport_css_width <= NARROW_VIEW_BREAKPOINT_PX {
        CAMERA_EYE_Z_NARROW
    } else {
        CAMERA_EYE_Z_WIDE
    };
    Vec3::new(CAMERA_EYE_X, CAMERA_EYE_Y, z)
}

pub fn view_proj(eye: Vec3, aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y_RAD, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    eye: Vec3,
) -> (Vec3, Vec3) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let inv = view_proj(eye, aspect).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    (eye, (far - eye).normalize())
}
