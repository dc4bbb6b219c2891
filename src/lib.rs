//! Lights Out - a checkerboard toggle puzzle with growing difficulty
//!
//! Core modules:
//! - `sim`: Deterministic puzzle state (board, controller, side panel)
//! - `renderer`: Per-frame vertex/index output for the host to draw
//! - `settings`: JSON-configurable tuning

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{FrameBuffer, Vertex};
pub use settings::Settings;
pub use sim::{Game, GameEvent, TickInput};

/// Game configuration constants
pub mod consts {
    /// Default logical window size
    pub const VIEWPORT_WIDTH: f32 = 960.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Board pixel size (square)
    pub const BOARD_EXTENT: f32 = 600.0;
    /// Board center sits right of the screen center to leave room for the panel
    pub const BOARD_OFFSET_X: f32 = 100.0;
    /// Fraction of a cell covered by its piece
    pub const PIECE_FILL: f32 = 0.9;

    /// Piece gray level in the positive state
    pub const PIECE_BASE_COLOR: f32 = 0.9;
    /// Per-channel color shift applied on each toggle
    pub const PIECE_COLOR_PITCH: f32 = 0.8;

    /// Grid side length of the first board
    pub const START_DIFFICULTY: usize = 3;
    /// Ticks between a win and the next board (1 second at 60 Hz)
    pub const WIN_COOLDOWN_TICKS: u32 = 60;

    /// Clicks at or left of this x belong to the side panel
    pub const PANEL_BOUNDARY_X: f32 = -250.0;
    pub const PANEL_CENTER_X: f32 = -365.0;

    /// Progress bar
    pub const PROGRESS_BOTTOM: f32 = -250.0;
    pub const PROGRESS_TOP: f32 = 250.0;
    pub const PROGRESS_HALF_WIDTH: f32 = 20.0;

    /// Buttons
    pub const BUTTON_Y: f32 = -310.0;
    pub const UNDO_BUTTON_X: f32 = -400.0;
    pub const REMAKE_BUTTON_X: f32 = -330.0;
    pub const BUTTON_HALF_WIDTH: f32 = 30.0;
    pub const BUTTON_HALF_HEIGHT: f32 = 20.0;
}
