//! Side panel widgets: progress bar and the undo/remake buttons

use glam::{Vec2, Vec3};

use super::unit::Unit;
use super::viewport::Viewport;
use crate::renderer::vertex::colors;
use crate::renderer::{FrameBuffer, shapes};

/// Fraction of the remaining distance the displayed level covers per tick
const PROGRESS_EASE: f32 = 0.2;
/// Ticks a pressed button stays highlighted
const BUTTON_FLASH_TICKS: u32 = 8;

/// Vertical bar that fills between two fixed bounds
#[derive(Debug, Clone)]
pub struct ProgressBar {
    frame: Unit,
    /// Anchored at the bottom bound; outline grows upward
    fill: Unit,
    half_width: f32,
    bottom: f32,
    top: f32,
    max: usize,
    /// Target fill in [0, 1]
    target: f32,
    /// Displayed fill in [0, 1], eased toward `target`
    level: f32,
}

impl ProgressBar {
    pub fn new(x: f32, bottom: f32, top: f32, half_width: f32, max: usize) -> Self {
        let margin = 4.0;
        let frame = Unit::rect(
            Vec2::new(x, (bottom + top) / 2.0),
            Vec2::new(half_width + margin, (top - bottom) / 2.0 + margin),
            Vec3::from_array(colors::PANEL_FRAME),
        );
        let fill = Unit::new(
            Vec2::new(x, bottom),
            Vec3::from_array(colors::PROGRESS_FILL),
            Vec::new(),
        );

        Self {
            frame,
            fill,
            half_width,
            bottom,
            top,
            max,
            target: 0.0,
            level: 0.0,
        }
    }

    /// Change the value that counts as full. Current progress is kept.
    pub fn set_max(&mut self, max: usize) {
        self.max = max;
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Set the target value; clamped to `0..=max`
    pub fn set_value(&mut self, value: usize) {
        self.target = if self.max == 0 {
            0.0
        } else {
            value.min(self.max) as f32 / self.max as f32
        };
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn advance(&mut self) {
        self.level += (self.target - self.level) * PROGRESS_EASE;
        if (self.target - self.level).abs() < 1e-3 {
            self.level = self.target;
        }
        let height = (self.top - self.bottom) * self.level;
        self.fill.outline = shapes::bar_outline(self.half_width, height);
        self.frame.advance();
        self.fill.advance();
    }

    pub fn emit(&self, out: &mut FrameBuffer, viewport: &Viewport) {
        self.frame.emit(out, viewport);
        self.fill.emit(out, viewport);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Undo,
    Remake,
}

/// Rectangular button with an icon
#[derive(Debug, Clone)]
pub struct Button {
    base: Unit,
    icon: Unit,
    flash: u32,
}

impl Button {
    pub fn new(kind: ButtonKind, pos: Vec2, half: Vec2) -> Self {
        let radius = half.x.min(half.y) * 0.7;
        let icon = match kind {
            // Left-pointing triangle
            ButtonKind::Undo => Unit::new(
                pos,
                Vec3::from_array(colors::UNDO_ICON),
                shapes::regular_outline(radius, 3, std::f32::consts::PI),
            ),
            ButtonKind::Remake => Unit::new(
                pos,
                Vec3::from_array(colors::REMAKE_ICON),
                shapes::regular_outline(radius, 6, 0.0),
            ),
        };

        Self {
            base: Unit::rect(pos, half, Vec3::from_array(colors::BUTTON)),
            icon,
            flash: 0,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.base.contains(point)
    }

    /// Highlight the button for a few ticks
    pub fn press(&mut self) {
        self.flash = BUTTON_FLASH_TICKS;
        self.base.color = Vec3::from_array(colors::BUTTON_FLASH);
    }

    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }

    pub fn advance(&mut self) {
        if self.flash > 0 {
            self.flash -= 1;
            if self.flash == 0 {
                self.base.color = Vec3::from_array(colors::BUTTON);
            }
        }
        self.base.advance();
        self.icon.advance();
    }

    pub fn emit(&self, out: &mut FrameBuffer, viewport: &Viewport) {
        self.base.emit(out, viewport);
        self.icon.emit(out, viewport);
    }
}
