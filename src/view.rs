//! DOM side of the carousel: applies controller effects to item styles,
//! dots, the caption, and the play/pause icons.

use crate::constants::*;
use crate::dom;
use coverflow_core::{Effect, ItemPlacement, SlideDeck};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CoverflowView {
    items: Vec<web::HtmlElement>,
    dots: Vec<web::Element>,
    title: Option<web::HtmlElement>,
    description: Option<web::HtmlElement>,
    play_icon: Option<web::HtmlElement>,
    pause_icon: Option<web::HtmlElement>,
    deck: SlideDeck,
}

impl CoverflowView {
    /// Collects the rendered items and creates one dot per item.
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        deck: SlideDeck,
    ) -> anyhow::Result<Self> {
        let items: Vec<web::HtmlElement> = dom::query_all(container, ITEM_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        deck.check_matches(items.len())?;

        let dots_host = document
            .get_element_by_id(DOTS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", DOTS_ID))?;
        let mut dots = Vec::with_capacity(items.len());
        for _ in 0..items.len() {
            let dot = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            dot.set_class_name(DOT_CLASS);
            dots_host
                .append_child(&dot)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            dots.push(dot);
        }

        Ok(Self {
            items,
            dots,
            title: dom::html_element_by_id(document, TITLE_ID),
            description: dom::html_element_by_id(document, DESCRIPTION_ID),
            play_icon: dom::html_element_by_selector(document, PLAY_ICON_SELECTOR),
            pause_icon: dom::html_element_by_selector(document, PAUSE_ICON_SELECTOR),
            deck,
        })
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn items(&self) -> &[web::HtmlElement] {
        &self.items
    }

    #[inline]
    pub fn dots(&self) -> &[web::Element] {
        &self.dots
    }

    pub fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Layout(layout) => self.apply_layout(layout),
                Effect::Caption(index) => self.show_caption(*index),
                Effect::CaptionFadeIn => self.set_caption_animation(CAPTION_FADE_ANIMATION),
                Effect::Settled => {}
                Effect::Autoplay(playing) => self.show_autoplay(*playing),
            }
        }
    }

    fn apply_layout(&self, layout: &[ItemPlacement]) {
        for (item, p) in self.items.iter().zip(layout) {
            dom::set_style(item, "transform", &p.css_transform());
            dom::set_style(item, "opacity", &p.opacity.to_string());
            dom::set_style(item, "z-index", &p.stack_order.to_string());
            dom::set_class(item, ACTIVE_CLASS, p.active);
        }
        for (dot, p) in self.dots.iter().zip(layout) {
            dom::set_class(dot, ACTIVE_CLASS, p.active);
        }
    }

    fn show_caption(&self, index: usize) {
        let Some(slide) = self.deck.get(index) else {
            log::warn!("[carousel] no caption for item {}", index);
            return;
        };
        if let Some(title) = &self.title {
            title.set_text_content(Some(&slide.title));
        }
        if let Some(description) = &self.description {
            description.set_text_content(Some(&slide.description));
        }
        self.set_caption_animation("none");
    }

    fn set_caption_animation(&self, animation: &str) {
        for el in [&self.title, &self.description].into_iter().flatten() {
            dom::set_style(el, "animation", animation);
        }
    }

    fn show_autoplay(&self, playing: bool) {
        if let Some(play) = &self.play_icon {
            dom::set_style(play, "display", if playing { "none" } else { "block" });
        }
        if let Some(pause) = &self.pause_icon {
            dom::set_style(pause, "display", if playing { "block" } else { "none" });
        }
    }
}
