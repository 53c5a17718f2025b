//! Client-side image downscaling and re-encoding.
//!
//! Listings upload images as data URLs, so oversized camera photos are
//! shrunk in the browser before they ever hit the wire: proportional
//! downscale to at most 800px wide, then JPEG at quality 0.7. The size
//! math is pure; the canvas pipeline requires a browser and is gated
//! behind the `hydrate` feature.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// Maximum width of an uploaded image after downscaling.
pub const MAX_IMAGE_WIDTH: u32 = 800;

/// JPEG encoder quality for re-encoded uploads.
pub const JPEG_QUALITY: f64 = 0.7;

/// Cap on staged images per listing.
pub const MAX_IMAGES_PER_LISTING: usize = 8;

/// Target dimensions for an image of `width` x `height` constrained to
/// `max_width`. Never upscales; height is scaled proportionally and
/// rounded to the nearest pixel (at least 1 for non-empty images).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scale = f64::from(max_width) / f64::from(width);
    let scaled_height = (f64::from(height) * scale).round() as u32;
    (max_width, scaled_height.max(1))
}

#[cfg(feature = "hydrate")]
pub use browser::compress_image;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{JPEG_QUALITY, MAX_IMAGE_WIDTH, scaled_dimensions};

    /// Read, downscale, and re-encode one selected file. Returns a JPEG
    /// data URL ready for staging.
    pub async fn compress_image(file: &web_sys::File) -> Result<String, String> {
        let data_url = read_as_data_url(file).await?;
        let img = load_image(&data_url).await?;
        let (width, height) =
            scaled_dimensions(img.natural_width(), img.natural_height(), MAX_IMAGE_WIDTH);
        reencode(&img, width, height)
    }

    /// Read a `File` into a data URL via `FileReader`.
    async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
        let reader =
            web_sys::FileReader::new().map_err(|_| "FileReader unavailable".to_owned())?;
        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let reader_for_result = reader.clone();
        let tx_loadend = Rc::clone(&tx);
        let onloadend = Closure::once(move |_: web_sys::ProgressEvent| {
            let result = reader_for_result
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "failed to read file".to_owned());
            if let Some(tx) = tx_loadend.borrow_mut().take() {
                let _ = tx.send(result);
            }
        });
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

        reader
            .read_as_data_url(file)
            .map_err(|_| "failed to start file read".to_owned())?;

        let result = rx.await.map_err(|_| "file read interrupted".to_owned())?;
        reader.set_onloadend(None);
        result
    }

    /// Decode a data URL into an `HtmlImageElement`.
    async fn load_image(src: &str) -> Result<web_sys::HtmlImageElement, String> {
        let img =
            web_sys::HtmlImageElement::new().map_err(|_| "image element unavailable".to_owned())?;
        let (tx, rx) = oneshot::channel::<Result<(), String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_load = Rc::clone(&tx);
        let onload = Closure::once(move |_: web_sys::Event| {
            if let Some(tx) = tx_load.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        });
        let tx_error = Rc::clone(&tx);
        let onerror = Closure::once(move |_: web_sys::Event| {
            if let Some(tx) = tx_error.borrow_mut().take() {
                let _ = tx.send(Err("image failed to decode".to_owned()));
            }
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        img.set_src(src);

        rx.await
            .map_err(|_| "image load interrupted".to_owned())??;
        img.set_onload(None);
        img.set_onerror(None);
        Ok(img)
    }

    /// Draw the image onto a canvas at the target size and export JPEG.
    fn reencode(
        img: &web_sys::HtmlImageElement,
        width: u32,
        height: u32,
    ) -> Result<String, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let canvas = document
            .create_element("canvas")
            .map_err(|_| "canvas unavailable".to_owned())?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| "canvas unavailable".to_owned())?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| "2d context unavailable".to_owned())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "2d context unavailable".to_owned())?;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .map_err(|_| "failed to draw image".to_owned())?;

        canvas
            .to_data_url_with_type_and_encoder_options(
                "image/jpeg",
                &wasm_bindgen::JsValue::from_f64(JPEG_QUALITY),
            )
            .map_err(|_| "failed to encode image".to_owned())
    }
}
