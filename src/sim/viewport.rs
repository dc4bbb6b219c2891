//! Logical window size and the coordinate spaces derived from it
//!
//! Three spaces are in play:
//! - device: window pixels, origin top-left, y down (what the host reports)
//! - board: pixels, origin at the window center, y up (what the game uses)
//! - NDC: board space divided by the half extents, visible range is [-1, 1]

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Apply a resize notification. Degenerate sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        } else {
            log::debug!("Ignoring degenerate resize to {}x{}", width, height);
        }
    }

    /// Convert device coordinates to board-centered coordinates
    #[inline]
    pub fn to_board(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.width / 2.0, self.height - y - self.height / 2.0)
    }

    /// Convert board-centered coordinates back to device coordinates
    #[inline]
    pub fn to_device(&self, point: Vec2) -> (f32, f32) {
        (point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Convert board coordinates to normalized device coordinates
    #[inline]
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x / (self.width / 2.0), point.y / (self.height / 2.0))
    }
}
