//! Ocean Guardians: a 2D trash-sorting game
//!
//! Swim the diver around the sea, pick up floating trash and drop each
//! piece in the bin for its material before the round clock runs out.
//! - Correct bin: +100, wrong bin: -50
//! - Reach 2000 to win; the best score is kept for the session

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod ui;
mod input;
mod game;
mod assets;
mod audio;
mod render;

use macroquad::prelude::*;
use macroquad::logging::info;
use assets::GameAssets;
use audio::AudioBank;
use config::GameConfig;
use game::{GameEvent, GameSession};
use input::InputState;
use render::FrameView;

fn window_conf() -> Conf {
    // Logged properly once main runs; here only the window size matters
    let config = GameConfig::embedded().unwrap_or_default();
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        // Hitboxes live in fixed screen coordinates
        window_resizable: false,
        sample_count: config.msaa_samples,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    info!("=== Ocean Guardians v{} ===", VERSION);

    let config = GameConfig::load_or_default();
    let target_frame_time = config.frame_time();
    let music_volume = config.music_volume;
    let sfx_volume = config.sfx_volume;

    let assets = GameAssets::load().await;
    let mut audio = AudioBank::load(music_volume, sfx_volume).await;

    let mut input = InputState::new();
    if input.has_gamepad() {
        info!("Gamepad detected");
    }

    let seed = (miniquad::date::now() * 1000.0) as u64;
    let mut session = GameSession::new(config, seed);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        let frame_input = input.poll();
        session.update(&frame_input, get_frame_time());

        for event in session.events.drain() {
            audio.handle(&event);
            log_event(&event);
        }

        let view = FrameView {
            assets: &assets,
            mouse: &frame_input.mouse,
            has_gamepad: input.has_gamepad(),
        };
        render::draw_frame(&session, &view);

        // FPS limiting
        let remaining = target_frame_time - (get_time() - frame_start);
        if remaining > 0.0 {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
            // WASM: just spin-wait (no thread::sleep available)
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
        }

        next_frame().await;
    }
}

/// Gameplay events worth a log line. Mode changes and best scores are logged by the session.
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::TrashDisposed { kind, bin, points } => {
            info!("{} into {} bin: {:+}", kind.label(), bin.label(), points);
        }
        GameEvent::PoolFull => info!("Trash pool full, spawn skipped"),
        GameEvent::ModeChanged { .. }
        | GameEvent::TrashSpawned { .. }
        | GameEvent::TrashPickedUp { .. }
        | GameEvent::NewBestScore(_) => {}
    }
}
