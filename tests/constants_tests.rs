// Host-side tests for DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn ids_are_bare_and_selectors_are_selectors() {
    for id in [DOTS_ID, TITLE_ID, DESCRIPTION_ID, SLIDES_SCRIPT_ID, HEADER_ID, SCROLL_TOP_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
    }
    for sel in [
        CONTAINER_SELECTOR,
        ITEM_SELECTOR,
        PREV_BUTTON_SELECTOR,
        NEXT_BUTTON_SELECTOR,
        PLAY_PAUSE_SELECTOR,
        PLAY_ICON_SELECTOR,
        PAUSE_ICON_SELECTOR,
        REFLECTION_SELECTOR,
        SECTION_SELECTOR,
        MENU_ITEM_SELECTOR,
        CONTACT_FORM_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
}

#[test]
fn class_names_have_no_selector_prefix() {
    for class in [
        ACTIVE_CLASS,
        DOT_CLASS,
        IMAGE_LOADING_CLASS,
        EXTERNAL_CLASS,
        SCROLLED_CLASS,
        VISIBLE_CLASS,
    ] {
        assert!(!class.is_empty());
        assert!(!class.contains(' ') && !class.starts_with('.'), "{class}");
    }
}

#[test]
fn params_attribute_is_a_data_attribute() {
    assert!(PARAMS_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn caption_fade_animation_is_one_shot() {
    assert!(CAPTION_FADE_ANIMATION.starts_with("fadeIn"));
    assert!(CAPTION_FADE_ANIMATION.contains("forwards"));
}
