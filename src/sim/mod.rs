//! Deterministic puzzle simulation
//!
//! All gameplay logic lives here. This module must stay free of platform
//! dependencies:
//! - Seeded RNG only
//! - Tick-counted timers only
//! - Drawing goes through a caller-owned `FrameBuffer`

pub mod board;
pub mod controls;
pub mod game;
pub mod unit;
pub mod viewport;

pub use board::{BoardGeometry, Cell, Checkerboard, Outcome};
pub use controls::{Button, ButtonKind, ProgressBar};
pub use game::{Game, GameEvent, Phase, TickInput};
pub use unit::{Piece, PieceFlag, Polarity, Unit};
pub use viewport::Viewport;
