//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one timestep. The
//! host clears the one-shot input flags after each tick so that every
//! key edge is consumed exactly once.

use super::state::{GamePhase, GameState, Steer};
use crate::consts::*;

/// Input state for a single tick
///
/// `left`/`right` mirror the held key state; `pause` and `restart` are
/// edge-triggered one-shots; `exit` asks the host loop to stop.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub pause: bool,
    pub restart: bool,
    pub exit: bool,
}

impl TickInput {
    fn steer(&self) -> Steer {
        match (self.left, self.right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::None,
        }
    }
}

/// Side effects requested by a tick, consumed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was destroyed this tick
    BrickDestroyed { index: usize },
    /// Ball fell past the bottom edge
    BallLost,
    /// The last brick was destroyed
    FieldCleared,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the side-effect events of this tick in the order they occurred.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<TickEvent> {
    let mut events = Vec::new();

    // Pause toggles independently of everything else, but terminal phases
    // ignore it.
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    // Restart is only honored once the game has ended.
    if input.restart && state.phase.is_terminal() {
        *state = GameState::new();
        return events;
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.paddle.set_direction(input.steer());
    state.paddle.advance();
    state.ball.advance();

    let ball_rect = state.ball.rect();

    // Paddle bounce. The ball is not pushed out of the paddle, so an
    // overlap that survives into the next tick triggers again.
    if ball_rect.intersects(&state.paddle.rect()) {
        state.ball.reverse_vertical();
        events.push(TickEvent::PaddleHit);
    }

    // Brick hits. Every overlapping brick is processed, no early exit, so
    // two bricks hit in the same tick flip the velocity twice.
    for (index, brick) in state.bricks.iter_mut().enumerate() {
        if !brick.destroyed && ball_rect.intersects(&brick.rect()) {
            state.ball.reverse_vertical();
            brick.destroyed = true;
            state.score += BRICK_SCORE;
            events.push(TickEvent::BrickDestroyed { index });
        }
    }

    // Loss before win: if the last brick dies in the same tick the ball
    // drops out, the game is lost.
    if state.ball.pos.y > FIELD_HEIGHT {
        state.phase = GamePhase::GameOver;
        events.push(TickEvent::BallLost);
    } else if state.all_bricks_destroyed() {
        state.phase = GamePhase::Won;
        events.push(TickEvent::FieldCleared);
    }

    events
}
