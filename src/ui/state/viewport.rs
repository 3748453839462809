// SPDX-License-Identifier: MPL-2.0
//! Page geometry management
//!
//! Tracks where the current page sits on screen: its size, its top-left
//! offset, and the size of the screen it is shown on. Every change ends with
//! [`clamp_vertical_offset`], so a short page stays centered and a tall page
//! never scrolls past its edges.

use crate::config::{ControlsConfig, DisplayConfig};

/// Integer size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Integer screen position of the page's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelOffset {
    pub x: i32,
    pub y: i32,
}

/// Applies the vertical clamp/center rule.
///
/// `content_height` is the page height, `viewport_height` the screen height
/// and `offset` the proposed top edge. The steps run in order and the last
/// one wins for pages shorter than the screen.
#[must_use]
pub fn clamp_vertical_offset(content_height: i32, viewport_height: i32, offset: i32) -> i32 {
    let mut y = offset;
    if content_height < viewport_height.saturating_sub(y) {
        y = viewport_height - content_height;
    }
    if y > 0 {
        y = 0;
    }
    if content_height < viewport_height {
        y = (viewport_height - content_height) / 2;
    }
    y
}

/// Page size and position on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    screen: PixelSize,
    size: PixelSize,
    offset: PixelOffset,
    zoom_step: PixelSize,
    scroll_step: i32,
    min_size: PixelSize,
    /// No resize or scroll since the last reset.
    untouched: bool,
}

impl PageGeometry {
    /// Creates a geometry covering the whole `screen`.
    pub fn new(screen: PixelSize, controls: &ControlsConfig, display: &DisplayConfig) -> Self {
        let controls = controls.sanitized();
        Self {
            screen,
            size: screen,
            offset: PixelOffset::default(),
            zoom_step: PixelSize::new(controls.zoom_step_width, controls.zoom_step_height),
            scroll_step: controls.scroll_step,
            min_size: PixelSize::new(display.min_page_width.max(1), display.min_page_height.max(1)),
            untouched: true,
        }
    }

    pub fn screen(&self) -> PixelSize {
        self.screen
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn offset(&self) -> PixelOffset {
        self.offset
    }

    /// Restores the full-screen size at the origin.
    pub fn reset(&mut self) {
        self.size = self.screen;
        self.offset = PixelOffset::default();
        self.untouched = true;
    }

    /// Re-applies the clamp rule to the top edge (0), pinning the page to the
    /// top of the screen or centering it if it is shorter.
    pub fn recenter(&mut self) {
        self.offset.y = clamp_vertical_offset(self.size.height, self.screen.height, 0);
    }

    /// Resizes by `factor * direction` zoom steps around the horizontal center.
    ///
    /// Returns `false` without changing anything if the result would be
    /// smaller than the minimum page size.
    pub fn change_size(&mut self, direction: i32, factor: i32) -> bool {
        let steps = factor.saturating_mul(direction);
        let width = self
            .size
            .width
            .saturating_add(steps.saturating_mul(self.zoom_step.width));
        let height = self
            .size
            .height
            .saturating_add(steps.saturating_mul(self.zoom_step.height));

        if width < self.min_size.width || height < self.min_size.height {
            return false;
        }

        let shift = steps.saturating_mul(self.zoom_step.width / 2);
        self.size = PixelSize::new(width, height);
        self.untouched = false;
        self.offset.x = self.offset.x.saturating_sub(shift);
        self.offset.y = clamp_vertical_offset(height, self.screen.height, self.offset.y);
        true
    }

    /// Moves the page vertically by `factor * direction` scroll steps.
    ///
    /// Positive directions move the page down (revealing its top).
    pub fn scroll(&mut self, direction: i32, factor: i32) {
        let delta = factor
            .saturating_mul(direction)
            .saturating_mul(self.scroll_step);
        let proposed = self.offset.y.saturating_add(delta);
        self.untouched = false;
        self.offset.y = clamp_vertical_offset(self.size.height, self.screen.height, proposed);
    }

    /// Updates the screen size (window open or resize) and re-clamps the page.
    ///
    /// A page that was not resized or scrolled since the last reset follows
    /// the new screen size.
    pub fn set_screen(&mut self, screen: PixelSize) {
        self.screen = screen;
        if self.untouched {
            self.reset();
            self.recenter();
        } else {
            self.offset.y = clamp_vertical_offset(self.size.height, screen.height, self.offset.y);
        }
    }
}
