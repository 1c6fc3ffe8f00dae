//! Brick Breaker entry point
//!
//! Spawns the fixed-timestep mechanics thread and runs the egui window on
//! the main thread. Input and state snapshots are shared through RwLocks;
//! all game-state mutation happens on the mechanics thread.

use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Instant;

use brick_breaker::app::BrickBreakerApp;
use brick_breaker::audio::{AudioManager, SoundEffect};
use brick_breaker::consts::{FIELD_HEIGHT, FIELD_WIDTH, TICK_INTERVAL};
use brick_breaker::settings::Settings;
use brick_breaker::sim::{tick, GameState, TickEvent, TickInput};

/// Snapshot the shared input and clear the one-shot flags, so each
/// pause/restart key edge drives exactly one tick.
fn take_input(game_input: &Arc<RwLock<TickInput>>) -> TickInput {
    let mut handle = game_input.write().unwrap();
    let input = *handle;
    handle.pause = false;
    handle.restart = false;
    input
}

fn mechanics_thread(
    game_input: Arc<RwLock<TickInput>>,
    game_state: Arc<RwLock<GameState>>,
    settings: Settings,
    egui_ctx: egui::Context,
) {
    // The audio output stream is not Send, so the manager lives on this
    // thread for its whole life.
    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut state = GameState::new();
    let mut next_step_time = Instant::now() + TICK_INTERVAL;
    let sleep_time = TICK_INTERVAL / 5;

    loop {
        if Instant::now() >= next_step_time {
            next_step_time += TICK_INTERVAL;

            let input = take_input(&game_input);
            if input.exit {
                break;
            }

            for event in tick(&mut state, &input) {
                match event {
                    TickEvent::PaddleHit => audio.play(SoundEffect::PaddleHit),
                    TickEvent::BrickDestroyed { index } => {
                        log::debug!("Brick {index} destroyed, score {}", state.score);
                        audio.play(SoundEffect::BrickBreak);
                    }
                    TickEvent::BallLost => {
                        log::info!("Ball lost - final score {}", state.score);
                    }
                    TickEvent::FieldCleared => {
                        log::info!("Field cleared - final score {}", state.score);
                    }
                }
            }

            *game_state.write().unwrap() = state.clone();
            egui_ctx.request_repaint();
        }
        thread::sleep(sleep_time);
    }

    log::info!("Mechanics thread stopped");
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = Settings::load();

    let game_input = Arc::new(RwLock::new(TickInput::default()));
    let game_state = Arc::new(RwLock::new(GameState::new()));

    let m_game_input = Arc::clone(&game_input);
    let m_game_state = Arc::clone(&game_state);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::Vec2::new(FIELD_WIDTH as f32, FIELD_HEIGHT as f32)),
        resizable: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Brick Breaker",
        native_options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let mechanics_join_handle = thread::spawn(move || {
                mechanics_thread(m_game_input, m_game_state, settings, egui_ctx)
            });
            Box::new(BrickBreakerApp::new(
                cc,
                game_input,
                game_state,
                mechanics_join_handle,
            ))
        }),
    )
}
