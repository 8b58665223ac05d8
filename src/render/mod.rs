//! Drawing
//!
//! Reads a `GameSession` after its update and draws one frame. Nothing in
//! here mutates game state. All coordinates are in the fixed logical screen
//! space from `GameConfig`, the same space the hitboxes live in.

mod menu;
mod gameplay;
mod result;

use macroquad::prelude::*;
use crate::assets::GameAssets;
use crate::game::{GameMode, GameSession};
use crate::ui::{MouseState, Rect, BG_COLOR};

/// Per-frame context beyond the session itself
pub struct FrameView<'a> {
    pub assets: &'a GameAssets,
    pub mouse: &'a MouseState,
    pub has_gamepad: bool,
}

/// Draw the whole frame for the current mode
pub fn draw_frame(session: &GameSession, view: &FrameView) {
    clear_background(BG_COLOR);

    match session.mode {
        GameMode::Idle => menu::draw_menu(session, view),
        GameMode::Playing => gameplay::draw_gameplay(session, view),
        GameMode::Won | GameMode::Lost => {
            gameplay::draw_gameplay(session, view);
            result::draw_result(session, view);
        }
    }
}

/// Stretch a texture over `dest`, or fill it with `fallback` when the texture is missing
pub(crate) fn draw_sprite(texture: Option<&Texture2D>, dest: &Rect, tint: Color, fallback: Color) {
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            dest.x,
            dest.y,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(dest.x, dest.y, dest.w, dest.h, fallback),
    }
}

/// Full-screen background
pub(crate) fn draw_background(session: &GameSession, assets: &GameAssets, tint: Color) {
    let screen = session.config.screen_rect();
    draw_sprite(assets.background.as_ref(), &screen, tint, BG_COLOR);
}

/// `MM:SS` for the round clock. Partial seconds are dropped; negative time shows as zero.
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Source rectangle of one frame in a horizontal sprite strip
pub fn strip_frame(frame: usize, frame_count: usize, sheet_w: f32, sheet_h: f32) -> Rect {
    let count = frame_count.max(1);
    let frame_w = sheet_w / count as f32;
    Rect::new((frame % count) as f32 * frame_w, 0.0, frame_w, sheet_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(180.0), "03:00");
        assert_eq!(format_clock(179.99), "02:59");
        assert_eq!(format_clock(61.5), "01:01");
        assert_eq!(format_clock(9.0), "00:09");
        assert_eq!(format_clock(0.4), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn test_strip_frame() {
        assert_eq!(strip_frame(0, 4, 400.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(strip_frame(3, 4, 400.0, 100.0), Rect::new(300.0, 0.0, 100.0, 100.0));
        // Out-of-range frames wrap
        assert_eq!(strip_frame(5, 4, 400.0, 100.0).x, 100.0);
        // A single-frame sheet is the whole texture
        assert_eq!(strip_frame(0, 1, 64.0, 32.0), Rect::new(0.0, 0.0, 64.0, 32.0));
    }
}
