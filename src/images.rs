use crate::constants::{IMAGE_LOADING_CLASS, REFLECTION_SELECTOR};
use crate::dom;
use crate::lifecycle::ImageStatus;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook image load/error on every item.
///
/// A loaded image clears the loading marker on its wrapper and becomes the
/// reflection background; a failed one marks the item as loading so the
/// stylesheet can show its placeholder. Images that finished before the
/// module ran are handled immediately.
pub fn wire_image_fallbacks(items: &[web::HtmlElement]) {
    for item in items {
        let Some(img) = item
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            continue;
        };
        let reflection = item
            .query_selector(REFLECTION_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

        // the marker lives on the image's own wrapper
        let host: web::Element = img
            .parent_element()
            .unwrap_or_else(|| item.clone().into());

        let on_load = {
            let host = host.clone();
            let img = img.clone();
            let reflection = reflection.clone();
            Closure::wrap(Box::new(move || {
                mark_loaded(&host, &img, reflection.as_ref());
            }) as Box<dyn FnMut()>)
        };
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        let on_error = {
            let host = host.clone();
            let src = img.src();
            Closure::wrap(Box::new(move || {
                log::warn!("[images] failed to load {}", src);
                dom::set_class(&host, IMAGE_LOADING_CLASS, true);
            }) as Box<dyn FnMut()>)
        };
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        // finished before the handlers were attached
        match ImageStatus::of(img.complete(), img.natural_width()) {
            ImageStatus::Pending => {}
            ImageStatus::Loaded => mark_loaded(&host, &img, reflection.as_ref()),
            ImageStatus::Failed => {
                log::warn!("[images] failed to load {}", img.src());
                dom::set_class(&host, IMAGE_LOADING_CLASS, true);
            }
        }
    }
}

fn mark_loaded(
    host: &web::Element,
    img: &web::HtmlImageElement,
    reflection: Option<&web::HtmlElement>,
) {
    dom::set_class(host, IMAGE_LOADING_CLASS, false);
    if let Some(reflection) = reflection {
        let url = format!("url({})", img.src());
        dom::set_style(reflection, "--bg-image", &url);
        dom::set_style(reflection, "background-image", &url);
        dom::set_style(reflection, "background-size", "cover");
        dom::set_style(reflection, "background-position", "center");
    }
}
