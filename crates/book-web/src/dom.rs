use book_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Viewport classification from CSS pixel window size.
pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    Viewport { width, height }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store sized to its CSS box, and re-evaluate the
/// rotate-your-device alert, whenever the window resizes.
pub fn wire_resize(window: &web::Window, document: &web::Document, canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas);
        if let Some(w) = web::window() {
            crate::overlay::update_rotate_alert(&document, viewport(&w));
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_pointer_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    let _ = canvas.set_attribute("style", if pointer { "cursor:pointer" } else { "" });
}
