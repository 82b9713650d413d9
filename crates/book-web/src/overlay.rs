//! Loading overlay and the mobile-portrait rotate alert.

use book_core::Viewport;
use web_sys as web;

use crate::constants::{LOADING_BAR_ID, LOADING_OVERLAY_ID, ROTATE_ALERT_ID};

pub fn set_progress(document: &web::Document, fraction: f32) {
    if let Some(el) = document.get_element_by_id(LOADING_BAR_ID) {
        let pct = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
        let _ = el.set_attribute("style", &format!("width:{}%", pct));
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn fail_loading(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        el.set_text_content(Some(message));
    }
}

pub fn update_rotate_alert(document: &web::Document, viewport: Viewport) {
    if let Some(el) = document.get_element_by_id(ROTATE_ALERT_ID) {
        let style = if viewport.needs_rotate_alert() {
            ""
        } else {
            "display:none"
        };
        let _ = el.set_attribute("style", style);
    }
}
