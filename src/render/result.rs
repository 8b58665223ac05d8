//! Won / Lost overlay drawn over the frozen playfield

use macroquad::prelude::*;
use crate::game::{GameMode, GameSession};
use crate::ui::{
    draw_button, draw_label_centered, draw_outline, Rect,
    FONT_SIZE_BUTTON, FONT_SIZE_HUD, LOSE_COLOR, OVERLAY_DIM, RESULT_PANEL, TEXT_COLOR, WIN_COLOR,
};
use super::FrameView;

const HEADLINE_SIZE: f32 = 60.0;

pub fn draw_result(session: &GameSession, view: &FrameView) {
    let config = &session.config;
    let screen = config.screen_rect();
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, OVERLAY_DIM);

    let (headline, accent) = match session.mode {
        GameMode::Won => ("OCEAN SAVED!", WIN_COLOR),
        GameMode::Lost => ("TIME'S UP", LOSE_COLOR),
        GameMode::Idle | GameMode::Playing => return,
    };

    let cx = screen.center_x();
    let panel = Rect::new(cx - 220.0, 130.0, 440.0, 360.0);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, RESULT_PANEL);
    draw_outline(&panel, 4.0, accent);

    let font = view.assets.title_font.as_ref();
    draw_label_centered(headline, cx, panel.y + 85.0, HEADLINE_SIZE, accent, font);

    let score = format!("Score: {}", session.player.score);
    draw_label_centered(&score, cx, panel.y + 160.0, FONT_SIZE_BUTTON, TEXT_COLOR, None);

    let best = format!("Best: {}", session.player.best_score);
    draw_label_centered(&best, cx, panel.y + 205.0, FONT_SIZE_HUD, TEXT_COLOR, None);

    draw_button(view.mouse, &config.menu_button, "MENU", None);
}
