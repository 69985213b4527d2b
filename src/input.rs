use coverflow_core::Intent;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" => Some(Intent::KeyLeft),
        "ArrowRight" => Some(Intent::KeyRight),
        _ => None,
    }
}

/// Screen position of the first changed touch of a touch event.
#[inline]
pub fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.changed_touches()
        .get(0)
        .map(|t| Vec2::new(t.screen_x() as f32, t.screen_y() as f32))
}
