//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer arithmetic only
//! - No rendering, audio or platform dependencies
//!
//! Side effects (sound playback) are requested through [`TickEvent`]s that
//! the host consumes after each tick.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, Steer};
pub use tick::{tick, TickEvent, TickInput};
