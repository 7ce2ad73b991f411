use leptos::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// Start loading an image and expose it once decoded.
///
/// The signal stays `None` until `onload` fires, then holds the element.
/// There is no timeout: an image that never loads simply stays `None`.
pub fn use_image(src: &'static str) -> ReadSignal<Option<HtmlImageElement>> {
    let (image, set_image) = create_signal(None::<HtmlImageElement>);

    if let Err(e) = load_image(src, move |img| set_image.set(Some(img))) {
        log::warn!("Failed to start image load: {:?}", e);
    }

    image
}

fn load_image(
    src: &str,
    on_load: impl FnOnce(HtmlImageElement) + 'static,
) -> Result<(), JsValue> {
    let img = HtmlImageElement::new()?;
    let loaded = img.clone();

    let closure = Closure::once(move || {
        log::info!("Image loaded ({}x{})", loaded.natural_width(), loaded.natural_height());
        on_load(loaded);
    });

    img.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    img.set_src(src);
    Ok(())
}
