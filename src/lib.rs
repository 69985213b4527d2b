#![cfg(target_arch = "wasm32")]
use coverflow_core::{Carousel, CoverflowParams, SlideDeck, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod chrome;
mod constants;
mod dom;
mod events;
mod frame;
mod images;
mod input;
mod lifecycle;
mod view;
mod widget;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coverflow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            // page keeps its static markup
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    // page chrome does not depend on the carousel coming up
    chrome::wire_page_chrome(&window, &document);

    let container: web::HtmlElement = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CONTAINER_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let params = read_params(&container)?;
    let deck = read_slides(&document)?;

    let view = view::CoverflowView::build(&document, &container, deck)?;
    images::wire_image_fallbacks(view.items());
    let carousel = Carousel::new(view.item_count(), params.clone())?;
    log::info!("[carousel] {} items", view.item_count());

    let widget = widget::Widget::new(carousel, view);
    events::wire_global_keydown(&document, widget.clone());
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        container: container.clone(),
        widget: widget.clone(),
        swipe: Rc::new(RefCell::new(SwipeTracker::new(
            params.swipe_threshold_px,
            params.touch_scroll_lock_px,
        ))),
    });
    wire_teardown(&window, widget.clone());

    widget.start();
    _ = container.focus();
    frame::start_loop(widget);
    Ok(())
}

/// Resolves once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn read_params(container: &web::HtmlElement) -> anyhow::Result<CoverflowParams> {
    match container.get_attribute(PARAMS_ATTRIBUTE) {
        Some(json) => Ok(CoverflowParams::from_json(&json)?),
        None => Ok(CoverflowParams::default()),
    }
}

fn read_slides(document: &web::Document) -> anyhow::Result<SlideDeck> {
    match document
        .get_element_by_id(SLIDES_SCRIPT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => Ok(SlideDeck::from_json(&json)?),
        None => {
            log::info!("[carousel] no #{} block, using built-in slides", SLIDES_SCRIPT_ID);
            Ok(SlideDeck::default())
        }
    }
}

fn wire_teardown(window: &web::Window, widget: widget::Widget) {
    dom::add_listener(window, "pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        let exit = lifecycle::PageExit::from_persisted(persisted);
        if exit.tears_down() {
            widget.teardown();
        } else {
            log::debug!("[carousel] page cached, keeping widget alive");
        }
    });
}
