use crate::input;
use crate::widget::Widget;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, widget: &Widget) {
    if let Some(intent) = input::intent_for_key(&ev.key()) {
        log::debug!("[keys] {:?}", intent);
        widget.dispatch(intent);
    }
}

pub fn wire_global_keydown(document: &web::Document, widget: Widget) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        super::keyboard::handle_global_keydown(&ev, &widget);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
