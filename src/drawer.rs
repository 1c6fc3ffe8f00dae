//! Shape drawing for the game window
//!
//! Turns a [`GameState`] snapshot into egui shapes. Model coordinates
//! (800x600, origin top-left) scale to whatever canvas the window gives us.

use egui::epaint::{CircleShape, RectShape};
use egui::{Color32, Pos2, Rect, Rounding, Shape, Vec2};

use crate::consts::*;
use crate::sim::{Ball, Brick, GameState, Paddle};

pub struct GameDrawer {
    canvas_size: Vec2,
    game_state: GameState,
}

impl GameDrawer {
    pub fn new(canvas_size: Vec2, game_state: GameState) -> Self {
        Self {
            canvas_size,
            game_state,
        }
    }

    /// model pos / FIELD = canvas pos / canvas_size
    fn scale(&self, x: i32, y: i32) -> Pos2 {
        Pos2::new(
            x as f32 * self.canvas_size.x / FIELD_WIDTH as f32,
            y as f32 * self.canvas_size.y / FIELD_HEIGHT as f32,
        )
    }

    fn scale_x(&self, len: i32) -> f32 {
        len as f32 * self.canvas_size.x / FIELD_WIDTH as f32
    }

    /// All geometry for one frame, background first
    pub fn shapes(&self) -> Vec<Shape> {
        let mut result = Vec::with_capacity(self.game_state.bricks.len() + 3);
        result.push(self.background());
        result.extend(
            self.game_state
                .bricks
                .iter()
                .filter(|b| !b.destroyed)
                .map(|b| self.draw_brick(b)),
        );
        result.push(self.draw_ball(&self.game_state.ball));
        result.push(self.draw_paddle(&self.game_state.paddle));
        result
    }

    fn background(&self) -> Shape {
        RectShape::filled(
            Rect::from_min_size(Pos2::ZERO, self.canvas_size),
            Rounding::none(),
            Color32::BLACK,
        )
        .into()
    }

    fn draw_paddle(&self, paddle: &Paddle) -> Shape {
        RectShape::filled(
            Rect::from_two_pos(
                self.scale(paddle.pos.x, paddle.pos.y),
                self.scale(paddle.pos.x + PADDLE_WIDTH, paddle.pos.y + PADDLE_HEIGHT),
            ),
            Rounding::none(),
            Color32::GREEN,
        )
        .into()
    }

    fn draw_ball(&self, ball: &Ball) -> Shape {
        let radius = self.scale_x(BALL_DIAMETER) / 2.0;
        let center = self.scale(
            ball.pos.x + BALL_DIAMETER / 2,
            ball.pos.y + BALL_DIAMETER / 2,
        );
        CircleShape::filled(center, radius, Color32::YELLOW).into()
    }

    fn draw_brick(&self, brick: &Brick) -> Shape {
        RectShape::filled(
            Rect::from_two_pos(
                self.scale(brick.pos.x, brick.pos.y),
                self.scale(brick.pos.x + BRICK_WIDTH, brick.pos.y + BRICK_HEIGHT),
            ),
            Rounding::none(),
            Color32::RED,
        )
        .into()
    }
}
