//! Scroll-driven page chrome around the carousel.
//!
//! None of this touches carousel state; it only decides which classes the
//! page header, menu, and scroll-to-top button should carry.

use crate::constants::{
    HEADER_SCROLLED_AFTER_PX, SCROLL_TOP_VISIBLE_AFTER_PX, SECTION_LOOKAHEAD_PX,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Index of the section under the look-ahead line, if any.
///
/// Sections are checked in order and the last one containing the line wins,
/// which matters only when the page lays sections out overlapping.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<usize> {
    let line = scroll_y + SECTION_LOOKAHEAD_PX;
    sections
        .iter()
        .enumerate()
        .filter(|(_, s)| line >= s.top && line < s.top + s.height)
        .map(|(i, _)| i)
        .last()
}

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER_PX
}
