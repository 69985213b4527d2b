//! Placement of every item along the coverflow arc.
//!
//! The layout is a pure function of the selected index and the item count.
//! Nothing else feeds into it, so the web view can recompute and rewrite all
//! item styles on every selection change without tracking previous values.

use crate::params::LayoutParams;

/// Visual parameters for one item relative to the current selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    pub index: usize,
    /// Signed circular distance from the selected item, shorter arc.
    pub offset: i32,
    pub translate_x: f32,
    pub translate_z: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub stack_order: i32,
    pub active: bool,
}

impl ItemPlacement {
    #[inline]
    pub fn distance(&self) -> u32 {
        self.offset.unsigned_abs()
    }

    #[inline]
    pub fn is_culled(&self) -> bool {
        self.opacity == 0.0
    }

    /// CSS `transform` value for this placement.
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.translate_x, self.translate_z, self.rotate_y, self.scale
        )
    }
}

/// Shortest signed distance from `current` to `index` on a ring of `count`.
///
/// Comparisons are strict, so an item exactly half way round (even counts)
/// keeps the sign of its raw offset: it sits on the right when it follows the
/// selection and on the left when it precedes it.
#[inline]
pub fn circular_offset(index: usize, current: usize, count: usize) -> i32 {
    let n = count as i32;
    let mut offset = index as i32 - current as i32;
    // offset > n / 2 without losing the half on odd counts
    if offset * 2 > n {
        offset -= n;
    } else if offset * 2 < -n {
        offset += n;
    }
    offset
}

pub fn place_item(
    params: &LayoutParams,
    index: usize,
    current: usize,
    count: usize,
) -> ItemPlacement {
    let offset = circular_offset(index, current, count);
    let distance = offset.unsigned_abs();
    let abs = distance as f32;
    let sign = offset.signum() as f32;

    let mut translate_x = offset as f32 * params.step_spacing_px;
    // subtract from zero so the active item gets +0.0 rather than -0.0
    let translate_z = 0.0 - abs * params.depth_step_px;
    let rotate_y = 0.0 - sign * (abs * params.rotation_step_deg).min(params.rotation_max_deg);
    let mut opacity = 1.0 - abs * params.opacity_step;
    let scale = 1.0 - abs * params.scale_step;

    if distance > params.cull_distance {
        opacity = 0.0;
        translate_x = sign * params.cull_translate_x_px;
    }

    ItemPlacement {
        index,
        offset,
        translate_x,
        translate_z,
        rotate_y,
        scale,
        opacity,
        stack_order: params.base_stack_order - distance as i32,
        active: index == current,
    }
}

/// Placements for all `count` items with the default arc geometry.
pub fn compute_layout(current: usize, count: usize) -> Vec<ItemPlacement> {
    compute_layout_with(&LayoutParams::default(), current, count)
}

pub fn compute_layout_with(
    params: &LayoutParams,
    current: usize,
    count: usize,
) -> Vec<ItemPlacement> {
    (0..count)
        .map(|index| place_item(params, index, current, count))
        .collect()
}
