use crate::constants::*;
use crate::dom;
use crate::input;
use crate::widget::Widget;
use coverflow_core::{Intent, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub widget: Widget,
    pub swipe: Rc<RefCell<SwipeTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // item and dot clicks
    for (i, item) in w.widget.view().items().iter().enumerate() {
        let widget = w.widget.clone();
        dom::add_click_listener(item, move || widget.dispatch(Intent::Click(i)));
    }
    for (i, dot) in w.widget.view().dots().iter().enumerate() {
        let widget = w.widget.clone();
        dom::add_click_listener(dot, move || widget.dispatch(Intent::DotSelect(i)));
    }

    // prev/next buttons
    {
        let widget = w.widget.clone();
        dom::add_click_listener_by_selector(&w.document, PREV_BUTTON_SELECTOR, move || {
            widget.dispatch(Intent::PrevButton)
        });
        let widget = w.widget.clone();
        dom::add_click_listener_by_selector(&w.document, NEXT_BUTTON_SELECTOR, move || {
            widget.dispatch(Intent::NextButton)
        });
    }

    // play/pause
    {
        let widget = w.widget.clone();
        dom::add_click_listener_by_selector(&w.document, PLAY_PAUSE_SELECTOR, move || {
            widget.toggle_autoplay()
        });
    }

    // touchstart
    {
        let swipe = w.swipe.clone();
        dom::add_listener_passive(&w.container, "touchstart", true, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            if let Some(at) = input::touch_point(ev) {
                swipe.borrow_mut().begin(at);
            }
        });
    }

    // touchmove: not passive, may cancel page scroll
    {
        let swipe = w.swipe.clone();
        dom::add_listener_passive(&w.container, "touchmove", false, move |ev| {
            let Some(touch) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            if let Some(at) = input::touch_point(touch) {
                if swipe.borrow().moved(at) {
                    ev.prevent_default();
                }
            }
        });
    }

    // touchend
    {
        let swipe = w.swipe.clone();
        let widget = w.widget.clone();
        dom::add_listener_passive(&w.container, "touchend", true, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let Some(at) = input::touch_point(ev) else {
                swipe.borrow_mut().cancel();
                return;
            };
            let resolved = swipe.borrow_mut().end(at);
            if let Some(dir) = resolved {
                widget.dispatch(Intent::Swipe(dir));
            }
        });
    }

    // touchcancel
    {
        let swipe = w.swipe.clone();
        dom::add_listener_passive(&w.container, "touchcancel", true, move |_| {
            swipe.borrow_mut().cancel();
        });
    }
}
