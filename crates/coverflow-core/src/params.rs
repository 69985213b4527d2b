use crate::constants::*;
use crate::error::{CoverflowError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Arc geometry used by [`crate::layout::compute_layout_with`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub step_spacing_px: f32,
    pub depth_step_px: f32,
    pub rotation_step_deg: f32,
    pub rotation_max_deg: f32,
    pub opacity_step: f32,
    pub scale_step: f32,
    pub cull_distance: u32,
    pub cull_translate_x_px: f32,
    pub base_stack_order: i32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            step_spacing_px: STEP_SPACING_PX,
            depth_step_px: DEPTH_STEP_PX,
            rotation_step_deg: ROTATION_STEP_DEG,
            rotation_max_deg: ROTATION_MAX_DEG,
            opacity_step: OPACITY_STEP,
            scale_step: SCALE_STEP,
            cull_distance: CULL_DISTANCE,
            cull_translate_x_px: CULL_TRANSLATE_X_PX,
            base_stack_order: BASE_STACK_ORDER,
        }
    }
}

/// Everything a page can tune about the widget.
///
/// Deserialized from the container's `data-coverflow` attribute; any field
/// left out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverflowParams {
    pub layout: LayoutParams,
    pub settle_ms: u64,
    pub caption_fade_delay_ms: u64,
    pub autoplay_interval_ms: u64,
    pub autoplay_on_start: bool,
    pub swipe_threshold_px: f32,
    pub touch_scroll_lock_px: f32,
}

impl Default for CoverflowParams {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            settle_ms: SETTLE_MS,
            caption_fade_delay_ms: CAPTION_FADE_DELAY_MS,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            autoplay_on_start: true,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            touch_scroll_lock_px: TOUCH_SCROLL_LOCK_PX,
        }
    }
}

impl CoverflowParams {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CoverflowError::InvalidParams)
    }

    #[inline]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    #[inline]
    pub fn caption_fade_delay(&self) -> Duration {
        Duration::from_millis(self.caption_fade_delay_ms)
    }

    #[inline]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}
