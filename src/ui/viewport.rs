// SPDX-License-Identifier: MPL-2.0
//! Classification of the window width.
//!
//! Two thresholds apply: below [`DRAWER_BREAKPOINT`] the sidebar becomes an
//! overlay drawer that closes after navigating; below [`MOBILE_BREAKPOINT`]
//! page content switches to a single-column layout.

/// Widths strictly below this value (logical pixels) are treated as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Widths strictly below this value show the sidebar as an overlay drawer.
pub const DRAWER_BREAKPOINT: f32 = 1024.0;

/// Tracks the window width and its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    is_mobile: bool,
    is_drawer: bool,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            is_mobile: width < MOBILE_BREAKPOINT,
            is_drawer: width < DRAWER_BREAKPOINT,
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Whether the sidebar overlays the page instead of sitting beside it.
    #[must_use]
    pub fn is_drawer(&self) -> bool {
        self.is_drawer
    }

    /// Records a new width. Returns `true` when either classification flipped.
    pub fn resize(&mut self, width: f32) -> bool {
        let before = (self.is_mobile, self.is_drawer);
        *self = Self::new(width);
        before != (self.is_mobile, self.is_drawer)
    }
}
