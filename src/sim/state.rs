//! Game state and core simulation types
//!
//! Everything the render host needs each frame lives here; the host only
//! ever sees clones of [`GameState`], never a mutable reference.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
///
/// A single enum instead of separate paused/game-over/won flags, which makes
/// the terminal phases mutually exclusive by construction. Terminal phases
/// persist until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Physics, collisions and scoring are suspended
    Paused,
    /// Ball fell past the paddle
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// True for GameOver and Won, the phases that accept a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Horizontal steering input for the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
    #[default]
    None,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    /// Horizontal velocity in pixels per tick, set from input
    pub vel_x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: IVec2::new(PADDLE_START_X, PADDLE_Y),
            vel_x: 0,
        }
    }
}

impl Paddle {
    /// Translate held key state into a velocity for the next advance
    pub fn set_direction(&mut self, steer: Steer) {
        self.vel_x = match steer {
            Steer::Left => -PADDLE_SPEED,
            Steer::Right => PADDLE_SPEED,
            Steer::None => 0,
        };
    }

    /// Move one tick forward, clamped to the field
    pub fn advance(&mut self) {
        self.pos.x = (self.pos.x + self.vel_x).clamp(0, FIELD_WIDTH - PADDLE_WIDTH);
    }

    /// Bounding rectangle for collision detection
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, IVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }
}

/// The ball, a disc tracked by the top-left corner of its bounding square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    /// Velocity vector; each component is always exactly +-1
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new(BALL_START_X, BALL_START_Y),
            vel: IVec2::new(1, -1),
        }
    }
}

impl Ball {
    /// Move one tick forward, bouncing off the side and top walls.
    ///
    /// The bottom edge is deliberately open: falling past it is the loss
    /// condition and is detected by the tick loop, not here.
    pub fn advance(&mut self) {
        self.pos += self.vel;

        if self.pos.x < 0 || self.pos.x > FIELD_WIDTH - BALL_DIAMETER {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Flip the vertical velocity (paddle and brick bounces)
    pub fn reverse_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Bounding rectangle for collision detection
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, IVec2::splat(BALL_DIAMETER))
    }
}

/// One destroyable brick at a fixed grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, assigned once at grid layout
    pub pos: IVec2,
    /// Latches true on the first hit and stays true until restart
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            destroyed: false,
        }
    }

    /// Bounding rectangle for collision detection
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, IVec2::new(BRICK_WIDTH, BRICK_HEIGHT))
    }
}

/// Complete game state, cloned out to the render host each tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: centered ball heading up-right, full brick grid, score 0
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: GamePhase::Running,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: brick_grid(),
        }
    }

    /// Win condition oracle
    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}

/// Fixed layout generator: BRICK_ROWS x BRICK_COLS bricks on the grid
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick::new(IVec2::new(
                col as i32 * BRICK_COL_SPACING + BRICK_GRID_OFFSET_X,
                row as i32 * BRICK_ROW_SPACING + BRICK_GRID_OFFSET_Y,
            )));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_matches_start_scenario() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ball.pos, IVec2::new(400, 300));
        assert_eq!(state.ball.vel, IVec2::new(1, -1));
        assert_eq!(state.paddle.pos, IVec2::new(400, 550));
        assert_eq!(state.bricks.len(), 30);
        assert!(state.bricks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn brick_grid_positions() {
        let bricks = brick_grid();
        // first brick of the first row
        assert_eq!(bricks[0].pos, IVec2::new(30, 50));
        // last brick of the first row (column 5)
        assert_eq!(bricks[5].pos, IVec2::new(530, 50));
        // first brick of the second row
        assert_eq!(bricks[6].pos, IVec2::new(30, 90));
        // last brick of the grid (row 4, column 5)
        assert_eq!(bricks[29].pos, IVec2::new(530, 210));
    }

    #[test]
    fn paddle_clamps_to_left_edge() {
        let mut paddle = Paddle {
            pos: IVec2::new(2, PADDLE_Y),
            vel_x: 0,
        };
        paddle.set_direction(Steer::Left);
        paddle.advance();
        assert_eq!(paddle.pos.x, 0);
        paddle.advance();
        assert_eq!(paddle.pos.x, 0);
    }

    #[test]
    fn paddle_clamps_to_right_edge() {
        let mut paddle = Paddle {
            pos: IVec2::new(698, PADDLE_Y),
            vel_x: 0,
        };
        paddle.set_direction(Steer::Right);
        paddle.advance();
        assert_eq!(paddle.pos.x, FIELD_WIDTH - PADDLE_WIDTH);
        paddle.advance();
        assert_eq!(paddle.pos.x, FIELD_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn paddle_stops_without_input() {
        let mut paddle = Paddle::default();
        paddle.set_direction(Steer::Right);
        paddle.advance();
        assert_eq!(paddle.pos.x, PADDLE_START_X + PADDLE_SPEED);
        paddle.set_direction(Steer::None);
        paddle.advance();
        assert_eq!(paddle.pos.x, PADDLE_START_X + PADDLE_SPEED);
    }

    #[test]
    fn ball_bounces_off_top_wall() {
        let mut ball = Ball {
            pos: IVec2::new(100, 0),
            vel: IVec2::new(1, -1),
        };
        ball.advance();
        assert_eq!(ball.pos, IVec2::new(101, -1));
        assert_eq!(ball.vel, IVec2::new(1, 1));
    }

    #[test]
    fn ball_bounces_off_side_walls() {
        let mut ball = Ball {
            pos: IVec2::new(0, 100),
            vel: IVec2::new(-1, 1),
        };
        ball.advance();
        assert_eq!(ball.vel, IVec2::new(1, 1));

        let mut ball = Ball {
            pos: IVec2::new(FIELD_WIDTH - BALL_DIAMETER, 100),
            vel: IVec2::new(1, 1),
        };
        ball.advance();
        assert_eq!(ball.vel, IVec2::new(-1, 1));
    }

    #[test]
    fn ball_falls_through_bottom_edge() {
        let mut ball = Ball {
            pos: IVec2::new(100, FIELD_HEIGHT - 1),
            vel: IVec2::new(1, 1),
        };
        ball.advance();
        ball.advance();
        // no bounce: velocity unchanged, position keeps sinking
        assert_eq!(ball.vel, IVec2::new(1, 1));
        assert_eq!(ball.pos.y, FIELD_HEIGHT + 1);
    }
}
