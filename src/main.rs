//! Lights Out headless driver
//!
//! Runs the game loop without a window: a scripted player follows hints,
//! frames are rendered into a buffer and discarded, events are logged.
//! Usage: `lights-out [settings.json] [levels]`

use std::path::Path;

use lights_out::sim::{Cell, Game, GameEvent, TickInput};
use lights_out::{FrameBuffer, Settings};

/// Frames between scripted clicks
const CLICK_INTERVAL: u64 = 10;
/// Give up after this many frames
const MAX_FRAMES: u64 = 100_000;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Lights Out (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    let levels: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let mut game = Game::new(settings);
    let target = game.difficulty() + levels;
    // Cells plus the side panel: five vertices and four triangles per quad
    let quads = target * target + 4;
    let mut frame = FrameBuffer::with_capacity(quads * 5 + 16, quads * 12 + 48);

    for frame_index in 0..MAX_FRAMES {
        let mut input = TickInput::default();
        if !game.is_locked() && frame_index % CLICK_INTERVAL == 0 {
            // An all-positive board already counts as solved, so pressing
            // anything is enough to get play going again
            let cell = game.hint().unwrap_or(Cell::new(0, 0));
            input.click = Some(game.cell_device_pos(cell));
        }

        game.tick(&input);
        game.render(&mut frame);
        log::trace!(
            "Frame {}: {} vertices, {} triangles",
            frame_index,
            frame.vertices.len(),
            frame.triangle_count()
        );
        frame.clear();

        for event in game.drain_events() {
            match event {
                GameEvent::Solved { difficulty, moves } => {
                    println!("Solved {difficulty}x{difficulty} in {moves} moves");
                }
                GameEvent::LevelUp { difficulty } => {
                    println!("Level up: {difficulty}x{difficulty}");
                }
                other => log::debug!("{:?}", other),
            }
        }

        if game.difficulty() >= target {
            println!("Reached {}x{} after {} frames", target, target, frame_index + 1);
            return;
        }
    }

    log::warn!("Stopped after {} frames at difficulty {}", MAX_FRAMES, game.difficulty());
}
