//! Start screen

use macroquad::prelude::*;
use crate::game::GameSession;
use crate::input::Action;
use crate::ui::{
    draw_button, draw_label, draw_label_centered, label_width, Rect,
    BADGE_BG, CREDITS_TEXT, FONT_SIZE_CREDITS, FONT_SIZE_HELP, FONT_SIZE_TITLE,
    MENU_TINT, PANEL_BG, TEXT_COLOR,
};
use super::{draw_background, draw_sprite, FrameView};

const CREDITS: &str = "Made by second-semester computer science students";
const HELP_ROW_HEIGHT: f32 = 20.0;

pub fn draw_menu(session: &GameSession, view: &FrameView) {
    let config = &session.config;
    let (w, h) = (config.screen_width, config.screen_height);
    let font = view.assets.title_font.as_ref();

    draw_background(session, view.assets, MENU_TINT);

    // Title, top of the glyphs at y = 100
    draw_label_centered(&config.window_title, w * 0.5, 100.0 + FONT_SIZE_TITLE * 0.75, FONT_SIZE_TITLE, TEXT_COLOR, font);

    draw_button(view.mouse, &config.start_button, "START", None);

    // Controls help
    let rows = Action::HELP.len() as f32;
    let panel = Rect::new(w * 0.5 - 175.0, h * 0.5 + 75.0, 370.0, 20.0 + rows * HELP_ROW_HEIGHT);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL_BG);
    for (i, action) in Action::HELP.iter().enumerate() {
        let line = format!("{:<6} {}", action.key_hint(), action.description());
        let y = panel.y + 25.0 + i as f32 * HELP_ROW_HEIGHT;
        draw_label(&line, panel.x + 25.0, y, FONT_SIZE_HELP, TEXT_COLOR, None);
    }

    draw_best_badge(session, view, h);

    if view.has_gamepad {
        let text = "Gamepad connected";
        let tw = label_width(text, FONT_SIZE_HELP, None);
        draw_label(text, w - tw - 10.0, 25.0, FONT_SIZE_HELP, TEXT_COLOR, None);
    }

    draw_label(CREDITS, 10.0, h - 20.0 + FONT_SIZE_CREDITS * 0.75, FONT_SIZE_CREDITS, CREDITS_TEXT, None);
}

/// Best score over the fire sprite, left of the start button
fn draw_best_badge(session: &GameSession, view: &FrameView, h: f32) {
    let badge = Rect::new(5.0, h * 0.5 - 110.0, 250.0, 190.0);
    match view.assets.fire.as_ref() {
        Some(fire) => draw_sprite(Some(fire), &badge, WHITE, BADGE_BG),
        // Flat stand-in sized to the text rather than the whole flame
        None => draw_rectangle(60.0, h * 0.5 - 40.0, 130.0, 75.0, BADGE_BG),
    }

    draw_label("Best", 75.0, h * 0.5 - 20.0, FONT_SIZE_HELP, TEXT_COLOR, None);
    draw_label("Score:", 75.0, h * 0.5 - 5.0, FONT_SIZE_HELP, TEXT_COLOR, None);
    let best = session.player.best_score.to_string();
    draw_label(&best, 105.0, h * 0.5 + 20.0, FONT_SIZE_HELP, TEXT_COLOR, None);
}
