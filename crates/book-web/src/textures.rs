//! Async sheet loading. Each source image holds a two-page spread; the
//! loader decodes it, splits it down the middle with a 2D canvas, and hands
//! back raw RGBA pixels ready for texture upload.

use book_core::SheetHalves;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded half-sheet pixels, tightly packed RGBA8.
#[derive(Clone)]
pub struct SheetImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

fn js_err(context: &str, e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", context, e)
}

/// Load and split every sheet, reporting progress after each one.
pub async fn load_sheets(
    document: &web::Document,
    urls: &[&str],
    mut on_progress: impl FnMut(usize, usize),
) -> anyhow::Result<Vec<SheetHalves<SheetImage>>> {
    let mut sheets = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        let img = load_image(url).await.map_err(|e| js_err(url, e))?;
        sheets.push(split_sheet(document, &img).map_err(|e| js_err(url, e))?);
        on_progress(i + 1, urls.len());
    }
    Ok(sheets)
}

async fn load_image(url: &str) -> Result<web::HtmlImageElement, JsValue> {
    let img = web::HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode()).await?;
    Ok(img)
}

fn split_sheet(
    document: &web::Document,
    img: &web::HtmlImageElement,
) -> Result<SheetHalves<SheetImage>, JsValue> {
    let full_width = img.natural_width();
    let height = img.natural_height().max(1);
    let half_width = (full_width / 2).max(1);

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into::<web::HtmlCanvasElement>()?;
    canvas.set_width(half_width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()?;

    let mut crop = |src_x: f64| -> Result<SheetImage, JsValue> {
        ctx.clear_rect(0.0, 0.0, half_width as f64, height as f64);
        ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            img,
            src_x,
            0.0,
            half_width as f64,
            height as f64,
            0.0,
            0.0,
            half_width as f64,
            height as f64,
        )?;
        let data = ctx.get_image_data(0.0, 0.0, half_width as f64, height as f64)?;
        Ok(SheetImage {
            width: half_width,
            height,
            pixels: data.data().0,
        })
    };

    Ok(SheetHalves {
        left: crop(0.0)?,
        right: crop(half_width as f64)?,
    })
}
