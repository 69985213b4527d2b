use crate::constants::*;
use crate::dom;
use coverflow_core::chrome::{active_section, header_scrolled, scroll_top_visible, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-driven menu/header state, the scroll-to-top button, and the
/// contact form. Independent of the carousel.
pub fn wire_page_chrome(window: &web::Window, document: &web::Document) {
    wire_scroll_tracking(window, document);
    wire_scroll_to_top(window, document);
    wire_contact_form(window, document);
}

fn wire_scroll_tracking(window: &web::Window, document: &web::Document) {
    let sections: Vec<web::HtmlElement> = dom::query_all_in_document(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let menu_items = dom::query_all_in_document(document, MENU_ITEM_SELECTOR);
    let header = document.get_element_by_id(HEADER_ID);
    let scroll_top = document.get_element_by_id(SCROLL_TOP_ID);

    let win = window.clone();
    let update = move || {
        let y = win.scroll_y().unwrap_or(0.0);
        // measured on every scroll; sections can resize as images load
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds {
                top: s.offset_top() as f64,
                height: s.client_height() as f64,
            })
            .collect();
        if let Some(active) = active_section(y, &bounds) {
            highlight_menu_item(&menu_items, active);
        }
        if let Some(h) = &header {
            dom::set_class(h, SCROLLED_CLASS, header_scrolled(y));
        }
        if let Some(btn) = &scroll_top {
            dom::set_class(btn, VISIBLE_CLASS, scroll_top_visible(y));
        }
    };
    update();
    dom::add_listener(window, "scroll", move |_| update());
}

fn highlight_menu_item(menu_items: &[web::Element], active: usize) {
    let internal = |el: &web::Element| !el.class_list().contains(EXTERNAL_CLASS);
    for item in menu_items.iter().filter(|el| internal(*el)) {
        dom::set_class(item, ACTIVE_CLASS, false);
    }
    if let Some(item) = menu_items.get(active).filter(|el| internal(*el)) {
        dom::set_class(item, ACTIVE_CLASS, true);
    }
}

fn wire_scroll_to_top(window: &web::Window, document: &web::Document) {
    let Some(btn) = document.get_element_by_id(SCROLL_TOP_ID) else {
        return;
    };
    let win = window.clone();
    dom::add_click_listener(&btn, move || {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    });
}

fn wire_contact_form(window: &web::Window, document: &web::Document) {
    let Some(form) = document
        .query_selector(CONTACT_FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let win = window.clone();
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        _ = win.alert_with_message(CONTACT_ACK_MESSAGE);
        target.reset();
        log::info!("[chrome] contact form acknowledged");
    });
}
