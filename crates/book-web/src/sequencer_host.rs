//! Timer host for the page walk. The core state machine decides the step
//! and the delay; this module turns each `next_in` into a `setTimeout` and
//! drops callbacks whose generation stamp has gone stale.

use std::cell::RefCell;
use std::rc::Rc;

use book_core::{PageWalk, Tick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{audio, ui};

pub type SharedWalk = Rc<RefCell<PageWalk>>;
pub type SharedAudio = Rc<RefCell<Option<web::AudioContext>>>;

/// Point the walk at `target` and start a fresh tick chain if it moved.
/// Re-requesting the current target leaves any running walk alone.
pub fn request_page(
    document: &web::Document,
    walk: &SharedWalk,
    audio_ctx: &SharedAudio,
    target: usize,
) {
    let (started, target, page_count) = {
        let mut w = walk.borrow_mut();
        let started = w.request(target);
        (started, w.target(), w.page_count())
    };
    ui::highlight_active(document, target, page_count);
    if started {
        let generation = walk.borrow().generation();
        step_walk(walk.clone(), audio_ctx.clone(), generation);
    }
}

/// One step of the walk; reschedules itself until the core reports `Done`.
/// The first step of a chain runs immediately, so a single-page turn starts
/// without timer latency.
fn step_walk(walk: SharedWalk, audio_ctx: SharedAudio, generation: u64) {
    if walk.borrow().generation() != generation {
        return;
    }
    let tick = walk.borrow_mut().tick();
    match tick {
        Tick::Done => {}
        Tick::Stepped { next_in, .. } => {
            if let Some(ctx) = audio_ctx.borrow().as_ref() {
                audio::play_flip(ctx);
            }
            let callback = Closure::once_into_js(move || {
                step_walk(walk, audio_ctx, generation);
            });
            if let Some(window) = web::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    next_in.as_millis() as i32,
                );
            }
        }
    }
}
