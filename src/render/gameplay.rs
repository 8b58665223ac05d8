//! Round in progress: playfield and HUD

use macroquad::prelude::*;
use crate::game::GameSession;
use crate::ui::{
    draw_label, draw_label_centered, draw_outline, kind_color, Rect,
    DIVER_COLOR, FONT_SIZE_CLOCK, FONT_SIZE_HUD, HUD_TEXT, SLOT_BG, SLOT_BORDER,
};
use super::{draw_background, draw_sprite, format_clock, strip_frame, FrameView};

pub fn draw_gameplay(session: &GameSession, view: &FrameView) {
    draw_background(session, view.assets, WHITE);
    draw_hud(session, view);
    draw_items(session, view);
    draw_bins(session, view);
    draw_player(session, view);
}

// =============================================================================
// HUD
// =============================================================================

fn draw_hud(session: &GameSession, view: &FrameView) {
    let w = session.config.screen_width;

    let score = session.player.score.to_string();
    draw_label(&score, 20.0, 17.5 + FONT_SIZE_HUD * 0.75, FONT_SIZE_HUD, HUD_TEXT, None);

    let clock = format_clock(session.time_left);
    draw_label_centered(&clock, w * 0.5, 15.0 + FONT_SIZE_CLOCK * 0.75, FONT_SIZE_CLOCK, HUD_TEXT, None);

    draw_held_item(session, view, w);
}

/// Frame in the top-right corner showing what the diver carries, or an empty hand
fn draw_held_item(session: &GameSession, view: &FrameView, w: f32) {
    let assets = view.assets;
    let frame = Rect::new(w - 75.0, 10.0, 55.0, 55.0);
    match assets.frame.as_ref() {
        Some(tex) => draw_sprite(Some(tex), &frame, WHITE, SLOT_BG),
        None => {
            draw_rectangle(frame.x, frame.y, frame.w, frame.h, SLOT_BG);
            draw_outline(&frame, 3.0, SLOT_BORDER);
        }
    }

    match session.player.carrying {
        Some(kind) => {
            draw_sprite(assets.item(kind), &frame.pad(10.0), WHITE, kind_color(kind));
        }
        None => {
            // No flat stand-in for the hand: an empty frame already reads as empty
            if let Some(hand) = assets.hand.as_ref() {
                draw_sprite(Some(hand), &frame.pad(11.0), WHITE, SLOT_BG);
            }
        }
    }
}

// =============================================================================
// Playfield
// =============================================================================

fn draw_items(session: &GameSession, view: &FrameView) {
    let size = session.trash.item_size();
    for (_, item) in session.trash.active() {
        draw_sprite(view.assets.item(item.kind), &item.rect(size), WHITE, kind_color(item.kind));
    }
}

fn draw_bins(session: &GameSession, view: &FrameView) {
    for bin in session.bins.iter() {
        let color = kind_color(bin.accepts);
        match view.assets.bin(bin.accepts) {
            Some(tex) => draw_sprite(Some(tex), &bin.rect, WHITE, color),
            None => {
                // Hollow so a bin never hides an item drawn under it
                draw_outline(&bin.rect, 4.0, color);
                let label = bin.accepts.label();
                draw_label_centered(label, bin.rect.center_x(), bin.rect.bottom() - 8.0, 16.0, color, None);
            }
        }
    }
}

fn draw_player(session: &GameSession, view: &FrameView) {
    let player = &session.player;
    let dest = player.rect();
    let flip_x = player.anim.facing.flip_x();

    match view.assets.player.as_ref() {
        Some(sheet) => {
            let src = strip_frame(player.anim.frame, session.config.anim_frames, sheet.width(), sheet.height());
            draw_texture_ex(
                sheet,
                dest.x,
                dest.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(dest.w, dest.h)),
                    source: Some(macroquad::math::Rect::new(src.x, src.y, src.w, src.h)),
                    flip_x,
                    ..Default::default()
                },
            );
        }
        None => {
            draw_rectangle(dest.x, dest.y + dest.h * 0.3, dest.w, dest.h * 0.4, DIVER_COLOR);
            // Mask on the facing side, bobbing with the swim frame
            let bob = (player.anim.frame % 2) as f32 * 4.0;
            let mask_x = if flip_x { dest.x + 10.0 } else { dest.right() - 10.0 };
            draw_circle(mask_x, dest.center_y() - bob, 12.0, SLOT_BORDER);
        }
    }
}
