//! Game controller: input routing, undo history and difficulty progression
//!
//! Solving a board locks input for a fixed number of ticks; the tick on which
//! the lock runs out replaces the board with one a size larger.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::board::{Cell, Checkerboard, Outcome};
use super::controls::{Button, ButtonKind, ProgressBar};
use super::unit::Polarity;
use super::viewport::Viewport;
use crate::consts::*;
use crate::renderer::FrameBuffer;
use crate::settings::Settings;

/// Input gathered by the host for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer press in device coordinates (origin top-left, y down)
    pub click: Option<(f32, f32)>,
    /// Undo key
    pub undo: bool,
    /// Reshuffle key
    pub remake: bool,
    /// New logical window size
    pub resize: Option<(f32, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input
    Playable,
    /// Board solved; the next board arrives when `remaining` reaches zero
    Locked { remaining: u32 },
}

/// Things that happened during the latest tick, for the host to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Toggled { cell: Cell },
    Missed { point: Vec2 },
    Solved { difficulty: usize, moves: u32 },
    LevelUp { difficulty: usize },
    Undone { point: Vec2 },
    Remade { difficulty: usize, shuffles: usize },
}

pub struct Game {
    settings: Settings,
    viewport: Viewport,
    seed: u64,
    rng: Pcg32,
    /// Grid side length of the current board
    difficulty: usize,
    board: Checkerboard,
    /// Board-space coordinates of past activations, newest last
    history: Vec<Vec2>,
    /// Cells applied by the last shuffle
    scramble: Vec<Cell>,
    /// Cells hit by the player on the current board, net of undos
    moves: u32,
    /// Ticks left in the post-win lock
    cooldown: u32,
    progress: ProgressBar,
    undo_button: Button,
    remake_button: Button,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let seed = settings.seed.unwrap_or_else(rand::random);
        let difficulty = settings.start_difficulty;
        let board = Checkerboard::new(settings.board_geometry(difficulty));
        let progress = ProgressBar::new(
            PANEL_CENTER_X,
            PROGRESS_BOTTOM,
            PROGRESS_TOP,
            PROGRESS_HALF_WIDTH,
            board.len(),
        );
        let button_half = Vec2::new(BUTTON_HALF_WIDTH, BUTTON_HALF_HEIGHT);

        log::info!("New game: difficulty {}, seed {}", difficulty, seed);

        let mut game = Self {
            viewport: settings.viewport(),
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            board,
            history: Vec::new(),
            scramble: Vec::new(),
            moves: 0,
            cooldown: 0,
            progress,
            undo_button: Button::new(
                ButtonKind::Undo,
                Vec2::new(UNDO_BUTTON_X, BUTTON_Y),
                button_half,
            ),
            remake_button: Button::new(
                ButtonKind::Remake,
                Vec2::new(REMAKE_BUTTON_X, BUTTON_Y),
                button_half,
            ),
            events: Vec::new(),
        };
        game.remake(None);
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn board(&self) -> &Checkerboard {
        &self.board
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &[Vec2] {
        &self.history
    }

    pub fn scramble(&self) -> &[Cell] {
        &self.scramble
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    pub fn phase(&self) -> Phase {
        if self.cooldown > 0 {
            Phase::Locked {
                remaining: self.cooldown,
            }
        } else {
            Phase::Playable
        }
    }

    pub fn is_locked(&self) -> bool {
        self.cooldown > 0
    }

    /// Take the events queued since the last tick began.
    ///
    /// `tick` discards anything left undrained, so the queue only ever holds
    /// one tick's worth; drain after each `tick` to see them all.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// One update step: apply input, then advance every entity
    pub fn tick(&mut self, input: &TickInput) {
        self.events.clear();

        if let Some((width, height)) = input.resize {
            self.viewport.resize(width, height);
        }

        if let Some((x, y)) = input.click {
            self.activate(x, y);
        }

        if !self.is_locked() {
            if input.undo {
                self.undo_button.press();
                self.undo();
            }
            if input.remake {
                self.remake_button.press();
                self.remake(None);
            }
        }

        self.advance();
    }

    /// Route a pointer press given in device coordinates.
    ///
    /// Presses right of the panel boundary go to the board and are recorded
    /// whether or not they hit a cell. Ignored while locked.
    pub fn activate(&mut self, x: f32, y: f32) {
        if self.is_locked() {
            log::debug!("Ignoring click at ({}, {}) while locked", x, y);
            return;
        }

        let point = self.viewport.to_board(x, y);
        log::debug!("Click at ({:.1}, {:.1})", point.x, point.y);

        if point.x > self.settings.panel_boundary_x {
            self.history.push(point);
            match self.board.hit_test(point) {
                Some(cell) => {
                    self.moves += 1;
                    self.events.push(GameEvent::Toggled { cell });
                }
                None => self.events.push(GameEvent::Missed { point }),
            }
            let outcome = self.board.activate(point);
            self.handle_outcome(outcome);
        }

        if self.undo_button.contains(point) {
            self.undo_button.press();
            self.undo();
        }
        if self.remake_button.contains(point) {
            self.remake_button.press();
            self.remake(None);
        }
    }

    /// Replay the most recent activation, which reverts it.
    /// Returns the replayed point, or `None` when locked or there is nothing to undo.
    pub fn undo(&mut self) -> Option<Vec2> {
        if self.is_locked() {
            log::debug!("Ignoring undo while locked");
            return None;
        }
        let point = self.history.pop()?;
        if self.board.hit_test(point).is_some() {
            self.moves = self.moves.saturating_sub(1);
        }
        let outcome = self.board.activate(point);
        self.events.push(GameEvent::Undone { point });
        self.handle_outcome(outcome);
        Some(point)
    }

    /// Replace the board with a freshly shuffled one.
    ///
    /// `difficulty` overrides the grid size; `None` keeps the current one.
    pub fn remake(&mut self, difficulty: Option<usize>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty.max(1);
        }

        self.board = Checkerboard::new(self.settings.board_geometry(self.difficulty));
        self.progress.set_max(self.board.len());

        let shuffles = self.settings.shuffle_count(self.difficulty);
        self.scramble = self.board.shuffle(shuffles, &mut self.rng);
        self.history.clear();
        self.moves = 0;
        self.cooldown = 0;

        log::info!(
            "Remade {}x{} board with {} shuffles",
            self.difficulty,
            self.difficulty,
            shuffles
        );
        self.events.push(GameEvent::Remade {
            difficulty: self.difficulty,
            shuffles,
        });
    }

    fn handle_outcome(&mut self, outcome: Outcome) {
        if outcome != Outcome::Win {
            return;
        }

        log::info!(
            "Solved {}x{} in {} moves",
            self.difficulty,
            self.difficulty,
            self.moves
        );
        self.events.push(GameEvent::Solved {
            difficulty: self.difficulty,
            moves: self.moves,
        });

        if self.settings.win_cooldown_ticks == 0 {
            self.level_up();
        } else {
            self.cooldown = self.settings.win_cooldown_ticks;
        }
    }

    fn level_up(&mut self) {
        let next = self.difficulty + 1;
        log::info!("Advancing to difficulty {}", next);
        self.events.push(GameEvent::LevelUp { difficulty: next });
        self.remake(Some(next));
    }

    /// Advance timers and every entity by one tick
    pub fn advance(&mut self) {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            if self.cooldown == 0 {
                self.level_up();
            }
        }

        self.board.advance();
        self.progress.set_value(self.board.count(Polarity::Positive));
        self.progress.advance();
        self.undo_button.advance();
        self.remake_button.advance();
    }

    /// A cell worth pressing next, if the board is not back at all-positive
    pub fn hint(&self) -> Option<Cell> {
        self.board.solution().into_iter().next()
    }

    /// Device coordinates of a cell center, e.g. for scripted input
    pub fn cell_device_pos(&self, cell: Cell) -> (f32, f32) {
        self.viewport.to_device(self.board.geometry().cell_center(cell))
    }

    /// Append every drawable to the frame
    pub fn render(&self, out: &mut FrameBuffer) {
        self.board.emit(out, &self.viewport);
        self.progress.emit(out, &self.viewport);
        self.undo_button.emit(out, &self.viewport);
        self.remake_button.emit(out, &self.viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings(difficulty: usize, shuffle_factor: usize) -> Settings {
        Settings {
            start_difficulty: difficulty,
            shuffle_factor,
            seed: Some(12345),
            ..Settings::default()
        }
    }

    fn click_cell(game: &mut Game, row: usize, col: usize) {
        let (x, y) = game.cell_device_pos(Cell::new(row, col));
        game.activate(x, y);
    }

    #[test]
    fn test_new_game_is_shuffled() {
        let game = Game::new(settings(3, 1));
        assert_eq!(game.difficulty(), 3);
        assert_eq!(game.board().len(), 9);
        assert_eq!(game.scramble().len(), 9);
        assert!(game.history().is_empty());
        assert_eq!(game.phase(), Phase::Playable);
    }

    #[test]
    fn test_click_center_flips_cross() {
        let mut game = Game::new(settings(3, 0));
        // Board offset puts the center cell at device (580, 360)
        game.activate(580.0, 360.0);

        assert_eq!(game.board().count(Polarity::Negative), 5);
        for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(
                game.board().piece(Cell::new(row, col)).unwrap().polarity,
                Polarity::Positive
            );
        }
        assert_eq!(game.history(), &[Vec2::new(100.0, 0.0)]);
        assert_eq!(game.moves(), 1);
        assert!(!game.is_locked());
    }

    #[test]
    fn test_miss_right_of_panel_is_recorded() {
        let mut game = Game::new(settings(3, 0));
        let before = game.board().polarities();

        // Right of the board edge at x = 400
        game.activate(930.0, 360.0);
        assert_eq!(game.board().polarities(), before);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.moves(), 0);

        // Undoing the miss is also a no-op on the board
        assert_eq!(game.undo(), Some(Vec2::new(450.0, 0.0)));
        assert_eq!(game.board().polarities(), before);
    }

    #[test]
    fn test_panel_click_is_not_recorded() {
        let mut game = Game::new(settings(3, 0));
        game.activate(180.0, 360.0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_reverts_last_move() {
        let mut game = Game::new(settings(4, 1));
        let shuffled = game.board().polarities();

        click_cell(&mut game, 1, 2);
        click_cell(&mut game, 3, 3);
        assert_ne!(game.board().polarities(), shuffled);

        assert!(game.undo().is_some());
        assert!(game.undo().is_some());
        assert_eq!(game.board().polarities(), shuffled);
        assert_eq!(game.undo(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_undo_button_click() {
        let mut game = Game::new(settings(3, 0));
        click_cell(&mut game, 1, 1);
        assert_eq!(game.board().count(Polarity::Negative), 5);

        let (x, y) = game.viewport().to_device(Vec2::new(UNDO_BUTTON_X, BUTTON_Y));
        game.activate(x, y);
        assert_eq!(game.board().count(Polarity::Positive), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_remake_button_click_reshuffles() {
        let mut game = Game::new(settings(3, 1));
        click_cell(&mut game, 0, 0);
        let (x, y) = game.viewport().to_device(Vec2::new(REMAKE_BUTTON_X, BUTTON_Y));
        game.activate(x, y);

        assert!(game.history().is_empty());
        assert_eq!(game.difficulty(), 3);
        assert!(
            game.drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Remade { .. }))
                .count()
                >= 2
        );
    }

    #[test]
    fn test_single_cell_win_locks_then_advances() {
        let mut game = Game::new(Settings {
            win_cooldown_ticks: 60,
            ..settings(1, 0)
        });
        click_cell(&mut game, 0, 0);
        assert_eq!(game.phase(), Phase::Locked { remaining: 60 });

        // Input is ignored while locked
        let history = game.history().len();
        click_cell(&mut game, 0, 0);
        assert_eq!(game.history().len(), history);

        for _ in 0..59 {
            game.advance();
        }
        assert_eq!(game.phase(), Phase::Locked { remaining: 1 });
        assert_eq!(game.difficulty(), 1);

        game.advance();
        assert_eq!(game.phase(), Phase::Playable);
        assert_eq!(game.difficulty(), 2);
        assert!(game.drain_events().contains(&GameEvent::LevelUp { difficulty: 2 }));

        // Exactly one advance
        for _ in 0..200 {
            game.advance();
        }
        assert_eq!(game.difficulty(), 2);
    }

    #[test]
    fn test_undo_ignored_while_locked() {
        let mut game = Game::new(settings(1, 0));
        click_cell(&mut game, 0, 0);
        assert_eq!(game.phase(), Phase::Locked { remaining: 60 });
        let solved = game.board().polarities();

        assert_eq!(game.undo(), None);
        assert_eq!(game.board().polarities(), solved);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.phase(), Phase::Locked { remaining: 60 });

        for _ in 0..60 {
            game.advance();
        }
        assert_eq!(game.difficulty(), 2);
    }

    #[test]
    fn test_events_hold_only_latest_tick() {
        let mut game = Game::new(settings(3, 1));
        assert!(!game.board().is_solved());
        let (x, y) = game.cell_device_pos(Cell::new(0, 0));
        for _ in 0..1000 {
            game.tick(&TickInput {
                click: Some((930.0, 360.0)),
                ..Default::default()
            });
        }
        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Missed { .. }));

        game.tick(&TickInput {
            click: Some((x, y)),
            ..Default::default()
        });
        let events = game.drain_events();
        assert_eq!(
            events[0],
            GameEvent::Toggled {
                cell: Cell::new(0, 0)
            }
        );
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Missed { .. })));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_keys_gated_while_locked() {
        let mut game = Game::new(settings(1, 0));
        click_cell(&mut game, 0, 0);
        assert!(game.is_locked());

        let polarities = game.board().polarities();
        game.tick(&TickInput {
            undo: true,
            remake: true,
            ..Default::default()
        });
        assert_eq!(game.board().polarities(), polarities);
        assert_eq!(game.difficulty(), 1);
    }

    #[test]
    fn test_win_then_remake_four_by_four() {
        let mut game = Game::new(settings(3, 1));
        while !game.is_locked() {
            // An all-positive shuffle has no hint; any press unsolves it
            let cell = game.hint().unwrap_or(Cell::new(0, 0));
            let (x, y) = game.cell_device_pos(cell);
            game.tick(&TickInput {
                click: Some((x, y)),
                ..Default::default()
            });
        }
        while game.is_locked() {
            game.tick(&TickInput::default());
        }

        assert_eq!(game.difficulty(), 4);
        assert_eq!(game.board().len(), 16);
        assert_eq!(game.scramble().len(), 16);
        assert!(game.history().is_empty());

        // Replaying the scramble on a fresh board reproduces the shuffled state
        let mut fresh = Checkerboard::new(*game.board().geometry());
        for cell in game.scramble() {
            fresh.activate_cell(*cell);
        }
        assert_eq!(fresh.polarities(), game.board().polarities());
    }

    #[test]
    fn test_resize_changes_click_mapping() {
        let mut game = Game::new(settings(3, 0));
        game.tick(&TickInput {
            resize: Some((1200.0, 800.0)),
            click: Some((700.0, 400.0)),
            ..Default::default()
        });
        assert_eq!(game.history(), &[Vec2::new(100.0, 0.0)]);
        assert_eq!(game.board().count(Polarity::Negative), 5);
    }

    #[test]
    fn test_render_emits_every_unit() {
        let mut game = Game::new(settings(3, 0));
        game.tick(&TickInput::default());
        let mut out = FrameBuffer::default();
        game.render(&mut out);

        // 9 pieces, progress frame + fill, two buttons with icons
        let board_vertices = 9 * 5;
        let progress_vertices = 5 + 5;
        let button_vertices = (5 + 4) + (5 + 7);
        assert_eq!(
            out.vertices.len(),
            board_vertices + progress_vertices + button_vertices
        );
        assert!(out.indices.iter().all(|i| (*i as usize) < out.vertices.len()));
    }

    proptest! {
        #[test]
        fn prop_undo_all_restores_shuffled_board(
            n in 1usize..6,
            clicks in prop::collection::vec((0usize..6, 0usize..6), 0..20),
        ) {
            let mut game = Game::new(settings(n, 1));
            let start = game.board().polarities();
            let mut count = 0;
            for (row, col) in clicks {
                click_cell(&mut game, row % n, col % n);
                count += 1;
                if game.is_locked() {
                    // Solved; history stays frozen until the next board
                    return Ok(());
                }
            }
            for _ in 0..count {
                prop_assert!(game.undo().is_some());
            }
            prop_assert_eq!(game.board().polarities(), start);
        }
    }
}
