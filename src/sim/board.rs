//! The checkerboard: a grid of pieces and the cross-toggle rule
//!
//! Activating a cell flips it and its orthogonal neighbours. The move is its
//! own inverse, so shuffling, playing and undoing all go through the same
//! operation.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::unit::{Piece, Polarity};
use super::viewport::Viewport;
use crate::consts::PIECE_FILL;
use crate::renderer::FrameBuffer;

/// Grid address. `col` grows with x, `row` grows with y; (0, 0) is bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Every cell shares the polarity of cell (0, 0)
    Win,
}

/// Pixel placement of the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Full pixel size of the board
    pub extent: Vec2,
    /// Board center relative to the screen center
    pub offset: Vec2,
    pub rows: usize,
    pub cols: usize,
}

impl BoardGeometry {
    pub fn new(extent: Vec2, offset: Vec2, rows: usize, cols: usize) -> Self {
        Self {
            extent,
            offset,
            rows,
            cols,
        }
    }

    /// Size of one cell
    #[inline]
    pub fn pitch(&self) -> Vec2 {
        Vec2::new(self.extent.x / self.cols as f32, self.extent.y / self.rows as f32)
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        let pitch = self.pitch();
        let origin = self.offset - self.extent / 2.0;
        origin + Vec2::new(pitch.x * (cell.col as f32 + 0.5), pitch.y * (cell.row as f32 + 0.5))
    }

    /// Strict per-axis test against the board's bounding box
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.offset).abs();
        d.x < self.extent.x / 2.0 && d.y < self.extent.y / 2.0
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkerboard {
    geometry: BoardGeometry,
    /// Row-major, `rows * cols` entries
    pieces: Vec<Piece>,
    /// Per-cell press parity since construction
    pressed: Vec<bool>,
}

impl Checkerboard {
    pub fn new(geometry: BoardGeometry) -> Self {
        let half = geometry.pitch() * PIECE_FILL / 2.0;
        let mut pieces = Vec::with_capacity(geometry.cell_count());
        for row in 0..geometry.rows {
            for col in 0..geometry.cols {
                pieces.push(Piece::new(geometry.cell_center(Cell::new(row, col)), half));
            }
        }

        Self {
            geometry,
            pressed: vec![false; pieces.len()],
            pieces,
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn rows(&self) -> usize {
        self.geometry.rows
    }

    pub fn cols(&self) -> usize {
        self.geometry.cols
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows() && cell.col < self.cols()).then(|| cell.row * self.cols() + cell.col)
    }

    pub fn piece(&self, cell: Cell) -> Option<&Piece> {
        self.index(cell).map(|i| &self.pieces[i])
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Row-major snapshot of every cell's polarity
    pub fn polarities(&self) -> Vec<Polarity> {
        self.pieces.iter().map(|p| p.polarity).collect()
    }

    pub fn count(&self, polarity: Polarity) -> usize {
        self.pieces.iter().filter(|p| p.polarity == polarity).count()
    }

    /// Every cell whose half-cell box contains `point`.
    ///
    /// The per-axis bounds are strict, so a point exactly on a shared cell
    /// edge matches nothing.
    pub fn cells_at(&self, point: Vec2) -> Vec<Cell> {
        if !self.geometry.contains(point) {
            return Vec::new();
        }
        let reach = self.geometry.pitch() / 2.0;
        let mut hits = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = Cell::new(row, col);
                let d = (self.geometry.cell_center(cell) - point).abs();
                if d.x < reach.x && d.y < reach.y {
                    hits.push(cell);
                }
            }
        }
        hits
    }

    pub fn hit_test(&self, point: Vec2) -> Option<Cell> {
        self.cells_at(point).into_iter().next()
    }

    /// Cross-toggle every cell under `point`, then evaluate the board
    pub fn activate(&mut self, point: Vec2) -> Outcome {
        for cell in self.cells_at(point) {
            self.toggle_cross(cell);
        }
        self.outcome()
    }

    /// Cross-toggle a known cell, then evaluate the board. Out-of-range cells
    /// change nothing.
    pub fn activate_cell(&mut self, cell: Cell) -> Outcome {
        self.toggle_cross(cell);
        self.outcome()
    }

    fn toggle_cross(&mut self, cell: Cell) {
        let Some(index) = self.index(cell) else {
            return;
        };
        self.pressed[index] = !self.pressed[index];

        self.toggle(cell);
        if cell.row > 0 {
            self.toggle(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col > 0 {
            self.toggle(Cell::new(cell.row, cell.col - 1));
        }
        if cell.row + 1 < self.rows() {
            self.toggle(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col + 1 < self.cols() {
            self.toggle(Cell::new(cell.row, cell.col + 1));
        }
    }

    fn toggle(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.pieces[i].toggle();
        }
    }

    fn outcome(&self) -> Outcome {
        if self.is_solved() {
            Outcome::Win
        } else {
            Outcome::Continue
        }
    }

    /// All cells share the polarity of cell (0, 0)
    pub fn is_solved(&self) -> bool {
        match self.pieces.first() {
            Some(first) => self.count(first.polarity) == self.len(),
            None => true,
        }
    }

    /// Apply `times` activations at uniformly drawn cells.
    /// Returns the cells in the order they were applied.
    pub fn shuffle<R: Rng>(&mut self, times: usize, rng: &mut R) -> Vec<Cell> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity(times);
        for _ in 0..times {
            let cell = Cell::new(
                rng.random_range(0..self.rows()),
                rng.random_range(0..self.cols()),
            );
            self.toggle_cross(cell);
            moves.push(cell);
        }
        moves
    }

    /// Cells pressed an odd number of times. Pressing each once more returns
    /// the board to all-positive.
    pub fn solution(&self) -> Vec<Cell> {
        self.pressed
            .iter()
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .map(|(i, _)| Cell::new(i / self.cols(), i % self.cols()))
            .collect()
    }

    pub fn advance(&mut self) {
        for piece in &mut self.pieces {
            piece.unit.advance();
        }
    }

    pub fn emit(&self, out: &mut FrameBuffer, viewport: &Viewport) {
        for piece in &self.pieces {
            piece.unit.emit(out, viewport);
        }
    }
}
