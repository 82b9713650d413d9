//! Pointer wiring: hover picking for mouse pointers and tap-vs-drag
//! classification for page turns.

use std::cell::RefCell;
use std::rc::Rc;

use book_core::{ray_page_rect, tap_target, Gesture, PointerKind, TapTracker};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::Scene;
use crate::sequencer_host::{request_page, SharedAudio, SharedWalk};
use crate::{audio, camera};

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub walk: SharedWalk,
    pub hover: Rc<RefCell<Option<usize>>>,
    pub scene: Rc<RefCell<Scene>>,
    pub audio_ctx: SharedAudio,
}

/// Client (CSS px) to canvas backing-store coordinates.
fn to_canvas_coords(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Cast a pick ray and return the nearest page it hits, if any.
fn pick_page(canvas: &web::HtmlCanvasElement, scene: &Scene, sx: f32, sy: f32) -> Option<usize> {
    let (ro, rd) = camera::screen_to_world_ray(canvas, sx, sy, scene.eye);
    let mut best: Option<(usize, f32)> = None;
    for (i, model) in scene.models.iter().enumerate() {
        let inv = model.inverse();
        let local_origin = inv.transform_point3(ro);
        let local_dir = inv.transform_vector3(rd);
        if let Some(t) = ray_page_rect(local_origin, local_dir, scene.dims.width, scene.dims.height)
        {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

pub fn wire_pointer_handlers(wiring: PointerWiring) {
    let tracker = Rc::new(RefCell::new(TapTracker::default()));

    // Pointer move: hover highlight for mouse pointers only.
    {
        let canvas = wiring.canvas.clone();
        let hover = wiring.hover.clone();
        let scene = wiring.scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let kind = PointerKind::from_dom(&ev.pointer_type());
            if !kind.hovers() {
                return;
            }
            let pos = to_canvas_coords(&canvas, ev.client_x() as f32, ev.client_y() as f32);
            *hover.borrow_mut() = pick_page(&canvas, &scene.borrow(), pos.x, pos.y);
        }) as Box<dyn FnMut(_)>);
        let _ = wiring
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Pointer down: record the press; also the user gesture that may create
    // the audio context.
    {
        let tracker = tracker.clone();
        let audio_ctx = wiring.audio_ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            audio::ensure_context(&mut audio_ctx.borrow_mut());
            tracker.borrow_mut().press(
                ev.client_x() as f32,
                ev.client_y() as f32,
                js_sys::Date::now(),
                PointerKind::from_dom(&ev.pointer_type()),
            );
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = wiring
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Pointer up: a qualifying tap on a page turns it; drags fall through.
    {
        let tracker = tracker.clone();
        let canvas = wiring.canvas.clone();
        let document = wiring.document.clone();
        let walk = wiring.walk.clone();
        let scene = wiring.scene.clone();
        let audio_ctx = wiring.audio_ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let gesture = tracker.borrow_mut().release(
                ev.client_x() as f32,
                ev.client_y() as f32,
                js_sys::Date::now(),
            );
            if gesture != Some(Gesture::Tap) {
                return;
            }
            let pos = to_canvas_coords(&canvas, ev.client_x() as f32, ev.client_y() as f32);
            let hit = pick_page(&canvas, &scene.borrow(), pos.x, pos.y);
            if let Some(page) = hit {
                let opened = walk.borrow().opened(page);
                request_page(&document, &walk, &audio_ctx, tap_target(opened, page));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = wiring
            .canvas
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // A cancelled pointer (e.g. the browser claims the gesture for
    // scrolling) must not turn a page on the next release.
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            tracker.borrow_mut().clear();
        }) as Box<dyn FnMut(_)>);
        let _ = wiring
            .canvas
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
