//! egui window host
//!
//! The UI thread owns the window: it translates keyboard state into the
//! shared [`TickInput`] every frame and paints the latest [`GameState`]
//! snapshot published by the tick thread. Held keys overwrite the input
//! each frame; pause/restart are ORed in so a key edge survives until the
//! next tick consumes it.

use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;

use egui::{Align2, Color32, Context, FontId, Id, Key, LayerId, Order, Painter, Pos2};

use crate::drawer::GameDrawer;
use crate::sim::{GamePhase, GameState, TickInput};

pub struct BrickBreakerApp {
    game_input: Arc<RwLock<TickInput>>,
    game_state: Arc<RwLock<GameState>>,
    mechanics_join_handle: JoinHandle<()>,
}

impl BrickBreakerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        game_input: Arc<RwLock<TickInput>>,
        game_state: Arc<RwLock<GameState>>,
        mechanics_join_handle: JoinHandle<()>,
    ) -> Self {
        Self {
            game_input,
            game_state,
            mechanics_join_handle,
        }
    }

    fn collect_input(&self, ctx: &Context) {
        let mut input = self.game_input.write().unwrap();
        input.left = ctx.input(|i| i.key_down(Key::ArrowLeft));
        input.right = ctx.input(|i| i.key_down(Key::ArrowRight));
        // one-shots stay set until the tick thread clears them
        if ctx.input(|i| i.key_pressed(Key::P)) {
            input.pause = true;
        }
        if ctx.input(|i| i.key_pressed(Key::R)) {
            input.restart = true;
        }
        if ctx.input(|i| i.key_down(Key::Escape)) {
            input.exit = true;
        }
    }

    fn read_game_state(&self) -> GameState {
        self.game_state.read().unwrap().clone()
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min;
        let canvas_size = painter.clip_rect().size();

        let game_state = self.read_game_state();
        let drawer = GameDrawer::new(canvas_size, game_state.clone());
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset.to_vec2());
            painter.add(shape);
        }

        self.draw_hud(painter, &game_state, paint_offset, canvas_size);
    }

    fn draw_hud(
        &self,
        painter: &Painter,
        game_state: &GameState,
        paint_offset: Pos2,
        canvas_size: egui::Vec2,
    ) {
        painter.text(
            paint_offset + egui::vec2(10.0, 10.0),
            Align2::LEFT_TOP,
            format!("Score: {}", game_state.score),
            FontId::monospace(16.0),
            Color32::WHITE,
        );

        let center = paint_offset + canvas_size / 2.0;
        match game_state.phase {
            GamePhase::Running => {}
            GamePhase::Paused => {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "Paused",
                    FontId::proportional(24.0),
                    Color32::YELLOW,
                );
            }
            GamePhase::GameOver => {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "Game Over! Press R to Restart.",
                    FontId::proportional(24.0),
                    Color32::RED,
                );
            }
            GamePhase::Won => {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "You Won! Press R to Restart.",
                    FontId::proportional(24.0),
                    Color32::GREEN,
                );
            }
        }
    }
}

impl eframe::App for BrickBreakerApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        if self.mechanics_join_handle.is_finished() {
            frame.close();
        }
        frame.set_window_size(egui::Vec2::new(
            crate::consts::FIELD_WIDTH as f32,
            crate::consts::FIELD_HEIGHT as f32,
        ));

        self.collect_input(ctx);

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.game_input.write().unwrap().exit = true;
    }
}
