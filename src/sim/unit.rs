//! Drawable units and the toggleable pieces built on them

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{PIECE_BASE_COLOR, PIECE_COLOR_PITCH};
use crate::renderer::{FrameBuffer, shapes};
use crate::sim::Viewport;

/// A positioned, colored polygon with simple linear motion.
///
/// The outline is relative to `pos` and must be star-shaped from it; it is
/// drawn as a fan rooted at `pos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub pos: Vec2,
    /// Channels may leave [0, 1]; the renderer clamps
    pub color: Vec3,
    pub vel: Vec2,
    pub accel: Vec2,
    pub outline: Vec<Vec2>,
    pub ticks: u64,
}

impl Unit {
    pub fn new(pos: Vec2, color: Vec3, outline: Vec<Vec2>) -> Self {
        Self {
            pos,
            color,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            outline,
            ticks: 0,
        }
    }

    /// Axis-aligned rectangle centered on `pos`
    pub fn rect(pos: Vec2, half: Vec2, color: Vec3) -> Self {
        Self::new(pos, color, shapes::rect_outline(half))
    }

    /// Integrate one tick of motion
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel += self.accel;
        self.ticks += 1;
    }

    /// Append this unit's fan to the frame
    pub fn emit(&self, out: &mut FrameBuffer, viewport: &Viewport) {
        shapes::fan(out, self.pos, &self.outline, self.color, viewport);
    }

    /// Per-axis half extents of the outline
    pub fn half_extent(&self) -> Vec2 {
        self.outline
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc.max(p.abs()))
    }

    /// Per-axis bounding box test (strict)
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.pos).abs();
        let half = self.half_extent();
        d.x < half.x && d.y < half.y
    }
}

/// Binary piece state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    pub fn sign(self) -> f32 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Per-cell property, reserved for special cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PieceFlag {
    #[default]
    Normal,
}

/// A board cell: a unit with a polarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub unit: Unit,
    pub polarity: Polarity,
    pub flag: PieceFlag,
}

impl Piece {
    pub fn new(pos: Vec2, half: Vec2) -> Self {
        Self {
            unit: Unit::rect(pos, half, Vec3::splat(PIECE_BASE_COLOR)),
            polarity: Polarity::Positive,
            flag: PieceFlag::Normal,
        }
    }

    /// Flip polarity and shift the color by the new sign.
    /// Two toggles restore both.
    pub fn toggle(&mut self) -> PieceFlag {
        self.polarity = self.polarity.flipped();
        self.unit.color += Vec3::splat(self.polarity.sign() * PIECE_COLOR_PITCH);
        self.flag
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.unit.pos
    }
}
