//! Brick Breaker - a classic paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `audio`: Fire-and-forget sound effect playback
//! - `app` / `drawer`: egui window host and shape drawing
//! - `settings`: Audio preferences with JSON persistence

pub mod app;
pub mod audio;
pub mod drawer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (100 Hz)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

    /// Logical drawing surface, origin at the top-left corner
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_START_X: i32 = 400;
    pub const PADDLE_Y: i32 = 550;
    /// Horizontal paddle speed in pixels per tick
    pub const PADDLE_SPEED: i32 = 5;

    /// Ball defaults - velocity components are always exactly +-1
    pub const BALL_DIAMETER: i32 = 20;
    pub const BALL_START_X: i32 = 400;
    pub const BALL_START_Y: i32 = 300;

    /// Brick field: 5 rows x 6 columns laid out on a fixed grid
    pub const BRICK_WIDTH: i32 = 80;
    pub const BRICK_HEIGHT: i32 = 30;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 6;
    pub const BRICK_GRID_OFFSET_X: i32 = 30;
    pub const BRICK_GRID_OFFSET_Y: i32 = 50;
    pub const BRICK_COL_SPACING: i32 = 100;
    pub const BRICK_ROW_SPACING: i32 = 40;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;
}
