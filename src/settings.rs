//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BoardGeometry, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid side length of the first board
    pub start_difficulty: usize,
    /// Ticks between a win and the next, larger board
    pub win_cooldown_ticks: u32,
    /// Board pixel size
    pub board_extent: [f32; 2],
    /// Board center relative to the screen center
    pub board_offset: [f32; 2],
    /// Clicks left of this x (board space) belong to the side panel
    pub panel_boundary_x: f32,
    /// Initial logical window size
    pub viewport: [f32; 2],
    /// Shuffle moves per cell
    pub shuffle_factor: usize,
    /// Fixed RNG seed; `None` picks a fresh one per run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_difficulty: START_DIFFICULTY,
            win_cooldown_ticks: WIN_COOLDOWN_TICKS,
            board_extent: [BOARD_EXTENT, BOARD_EXTENT],
            board_offset: [BOARD_OFFSET_X, 0.0],
            panel_boundary_x: PANEL_BOUNDARY_X,
            viewport: [VIEWPORT_WIDTH, VIEWPORT_HEIGHT],
            shuffle_factor: 1,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would leave the board or viewport degenerate
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.start_difficulty = self.start_difficulty.max(1);
        if self.board_extent.iter().any(|v| *v <= 0.0) {
            self.board_extent = defaults.board_extent;
        }
        if self.viewport.iter().any(|v| *v <= 0.0) {
            self.viewport = defaults.viewport;
        }
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport[0], self.viewport[1])
    }

    /// Geometry of a square board at the given difficulty
    pub fn board_geometry(&self, difficulty: usize) -> BoardGeometry {
        BoardGeometry::new(
            Vec2::from_array(self.board_extent),
            Vec2::from_array(self.board_offset),
            difficulty,
            difficulty,
        )
    }

    /// Number of shuffle moves for a new board
    pub fn shuffle_count(&self, difficulty: usize) -> usize {
        self.shuffle_factor * difficulty * difficulty
    }
}
