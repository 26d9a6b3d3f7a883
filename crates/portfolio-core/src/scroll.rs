//! Anchor scrolling and header state.

use crate::constants::{HEADER_FALLBACK_HEIGHT_PX, HEADER_SCROLLED_THRESHOLD_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        }
    }
}

/// Where the window should scroll so `element_top` lands just below the header.
///
/// `element_top` is relative to the document, not the viewport. A missing or
/// zero-height header falls back to the fixed default.
pub fn target_offset(element_top: f64, header_height: Option<f64>) -> f64 {
    let header = match header_height {
        Some(h) if h > 0.0 => h,
        _ => HEADER_FALLBACK_HEIGHT_PX,
    };
    element_top - header
}

/// Element id for an in-page link, or `None` when the href is not an anchor
/// worth handling (`#` alone, empty, or pointing elsewhere).
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD_PX
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTicker {
    pending: bool,
}

impl ScrollTicker {
    /// Returns true when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
