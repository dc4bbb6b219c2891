//! Vertex types for the per-frame primitive list

use bytemuck::{Pod, Zeroable};

/// Vertex with a 3D position (z is always 0) and an RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PANEL_FRAME: [f32; 3] = [0.2, 0.2, 0.25];
    pub const PROGRESS_FILL: [f32; 3] = [0.3, 0.8, 0.4];
    pub const BUTTON: [f32; 3] = [0.45, 0.45, 0.5];
    pub const BUTTON_FLASH: [f32; 3] = [0.8, 0.8, 0.3];
    pub const UNDO_ICON: [f32; 3] = [0.9, 0.5, 0.2];
    pub const REMAKE_ICON: [f32; 3] = [0.3, 0.6, 1.0];
}
