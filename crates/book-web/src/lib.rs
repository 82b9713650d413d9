#![cfg(target_arch = "wasm32")]

//! Browser frontend for the photo book: loads and splits the sheet images,
//! builds the skinned page meshes, and wires DOM input to the page walk.

use std::cell::RefCell;
use std::rc::Rc;

use book_core::{
    assemble_pages, AnimationTuning, BoneChain, PageAnimator, PageDimensions, PageGeometry,
    PageLoad, PageWalk,
};
use glam::Mat4;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod sequencer_host;
mod textures;
mod ui;

use constants::{CANVAS_ID, SHEET_URLS};
use frame::{FrameContext, Scene};
use render::GpuState;
use textures::SheetImage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("book-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some((_, document)) = dom::window_document() {
                overlay::fail_loading(&document, "Failed to load the book.");
            }
        }
    });
    Ok(())
}

/// Load everything, then swap the overlay for the rendered book. The page
/// set goes from `Pending` to `Ready` in one move, so the render loop never
/// sees a half-loaded book.
async fn load_pages(document: &web::Document) -> PageLoad<SheetImage> {
    let progress_doc = document.clone();
    let sheets = match textures::load_sheets(document, &SHEET_URLS, move |loaded, total| {
        let state = PageLoad::<SheetImage>::Pending { loaded, total };
        overlay::set_progress(&progress_doc, state.progress());
    })
    .await
    {
        Ok(sheets) => sheets,
        Err(e) => return PageLoad::Failed(e.to_string()),
    };
    match assemble_pages(&sheets) {
        Ok(records) => PageLoad::Ready(records),
        Err(e) => PageLoad::Failed(e.to_string()),
    }
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(&window, &document, &canvas);

    let viewport = dom::viewport(&window);
    overlay::update_rotate_alert(&document, viewport);
    let dims = PageDimensions::for_viewport(viewport);

    let records = match load_pages(&document).await {
        PageLoad::Ready(records) => records,
        PageLoad::Failed(message) => return Err(anyhow::anyhow!("page load failed: {message}")),
        PageLoad::Pending { .. } => unreachable!("load_pages always resolves"),
    };
    let page_count = records.len();
    log::info!(
        "loaded {} sheets into {} pages",
        SHEET_URLS.len(),
        page_count
    );

    let geometry = PageGeometry::build(&dims)?;
    let chains = (0..page_count)
        .map(|_| BoneChain::new(dims.segments, dims.segment_width()))
        .collect::<Result<Vec<_>, _>>()?;
    let animators = (0..page_count)
        .map(|i| PageAnimator::new(i, page_count, AnimationTuning::default()))
        .collect::<Vec<_>>();

    // The surface borrows the canvas; leak a clone to get 'static.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = GpuState::new(leaked_canvas, &geometry, &records).await?;

    let walk: sequencer_host::SharedWalk = Rc::new(RefCell::new(PageWalk::new(page_count)));
    let hover: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));
    let audio_ctx: sequencer_host::SharedAudio = Rc::new(RefCell::new(None));
    let scene = Rc::new(RefCell::new(Scene {
        models: vec![Mat4::IDENTITY; page_count],
        eye: camera::eye(viewport.width),
        dims,
    }));

    {
        let document_ui = document.clone();
        let walk_ui = walk.clone();
        let audio_ui = audio_ctx.clone();
        ui::build_page_buttons(
            &document,
            page_count,
            Rc::new(move |target| {
                sequencer_host::request_page(&document_ui, &walk_ui, &audio_ui, target);
            }),
        );
    }

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        walk: walk.clone(),
        hover: hover.clone(),
        scene: scene.clone(),
        audio_ctx,
    });

    overlay::hide_loading(&document);

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        walk, hover, scene, animators, chains, gpu, canvas,
    )));
    frame::start_loop(ctx);
    Ok(())
}
