//! Per-frame driver: advances every page animator, rebuilds the joint
//! matrices, and hands the scene to the renderer from a
//! `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

use book_core::{BoneChain, PageAnimator, PageDimensions, PageFlags, PageGeometry};
use glam::{Mat4, Vec3};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::BOOK_TILT_RAD;
use crate::render::GpuState;
use crate::sequencer_host::SharedWalk;
use crate::{camera, dom};

/// State the pointer handlers read while the frame loop writes it.
pub struct Scene {
    pub models: Vec<Mat4>,
    pub eye: Vec3,
    pub dims: PageDimensions,
}

/// Spine-on view of the book, slightly tilted toward the camera.
pub fn book_transform() -> Mat4 {
    Mat4::from_rotation_x(BOOK_TILT_RAD) * Mat4::from_rotation_y(-FRAC_PI_2)
}

pub struct FrameContext {
    pub walk: SharedWalk,
    pub hover: Rc<RefCell<Option<usize>>>,
    pub scene: Rc<RefCell<Scene>>,
    pub animators: Vec<PageAnimator>,
    pub chains: Vec<BoneChain>,
    pub gpu: GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    last_instant: Instant,
    joints: Vec<Vec<Mat4>>,
    emissives: Vec<f32>,
}

impl FrameContext {
    pub fn new(
        walk: SharedWalk,
        hover: Rc<RefCell<Option<usize>>>,
        scene: Rc<RefCell<Scene>>,
        animators: Vec<PageAnimator>,
        chains: Vec<BoneChain>,
        gpu: GpuState<'static>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let page_count = animators.len();
        Self {
            walk,
            hover,
            scene,
            animators,
            chains,
            gpu,
            canvas,
            last_instant: Instant::now(),
            joints: vec![Vec::new(); page_count],
            emissives: vec![0.0; page_count],
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.check_layout();

        let (delayed, book_closed) = {
            let walk = self.walk.borrow();
            (walk.delayed(), walk.book_closed())
        };
        let hover = *self.hover.borrow();
        let book = book_transform();

        let mut scene = self.scene.borrow_mut();
        let depth = scene.dims.depth;
        for (i, animator) in self.animators.iter_mut().enumerate() {
            let flags = PageFlags {
                opened: delayed > i,
                book_closed,
            };
            animator.set_highlighted(hover == Some(i));
            animator.update(&mut self.chains[i], flags, now, dt);

            // The root bone's rotation and the stack offset ride on the
            // page's model matrix; the joints only cover bones 1..n.
            let (bend, fold) = self.chains[i].root_rotation();
            let stack_z = (delayed as f32 - i as f32) * depth;
            scene.models[i] = book
                * Mat4::from_translation(Vec3::new(0.0, 0.0, stack_z))
                * Mat4::from_rotation_x(fold)
                * Mat4::from_rotation_y(bend);
            self.emissives[i] = animator.emissive();
            self.chains[i].skinning_matrices(&mut self.joints[i]);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let view_proj = camera::view_proj(scene.eye, self.gpu.aspect());
        if let Err(e) = self
            .gpu
            .render(view_proj, &scene.models, &self.joints, &self.emissives)
        {
            log::error!("render error: {:?}", e);
        }
        dom::set_pointer_cursor(&self.canvas, hover.is_some());
    }

    /// Rebuild the page mesh and bone chains when a resize crosses a layout
    /// breakpoint. The animators keep their open/turn state and re-ease the
    /// fresh chains into place.
    fn check_layout(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let desired = PageDimensions::for_viewport(dom::viewport(&window));
        let current = self.scene.borrow().dims;
        if desired == current {
            return;
        }
        match PageGeometry::build(&desired) {
            Ok(geometry) => {
                self.gpu.replace_geometry(&geometry);
                for chain in &mut self.chains {
                    if let Ok(fresh) = BoneChain::new(desired.segments, desired.segment_width()) {
                        *chain = fresh;
                    }
                }
                self.scene.borrow_mut().dims = desired;
                log::info!("layout switched to {:?}", desired);
            }
            Err(e) => log::error!("layout rebuild error: {}", e),
        }
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame`.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
