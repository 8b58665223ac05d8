//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, MouseState, BUTTON_BG, BUTTON_HOVER, TEXT_COLOR, FONT_SIZE_BUTTON};

/// Draw text with its baseline at `y`, in `font` when one is loaded
pub fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color, font: Option<&Font>) {
    // Round to integer pixels to avoid blurry subpixel rendering
    draw_text_ex(
        text,
        x.round(),
        y.round(),
        TextParams {
            font,
            font_size: size as u16,
            color,
            ..Default::default()
        },
    );
}

/// Width of `text` at `size` in `font`
pub fn label_width(text: &str, size: f32, font: Option<&Font>) -> f32 {
    measure_text(text, font, size as u16, 1.0).width
}

/// Draw text horizontally centered on `center_x`, baseline at `y`
pub fn draw_label_centered(text: &str, center_x: f32, y: f32, size: f32, color: Color, font: Option<&Font>) {
    let w = label_width(text, size, font);
    draw_label(text, center_x - w * 0.5, y, size, color, font);
}

/// Draw text centered in both axes inside `rect`
pub fn draw_label_in(text: &str, rect: &Rect, size: f32, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size as u16, 1.0);
    let x = rect.center_x() - dims.width * 0.5;
    // offset_y is the distance from the top of the glyphs to the baseline
    let y = rect.center_y() - dims.height * 0.5 + dims.offset_y;
    draw_label(text, x, y, size, color, font);
}

/// Draw a flat text button, lighter while hovered. Click handling lives in the game session.
pub fn draw_button(mouse: &MouseState, rect: &Rect, label: &str, font: Option<&Font>) {
    let bg = if mouse.inside(rect) { BUTTON_HOVER } else { BUTTON_BG };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_label_in(label, rect, FONT_SIZE_BUTTON, TEXT_COLOR, font);
}

/// Draw a rectangle outline
pub fn draw_outline(rect: &Rect, thickness: f32, color: Color) {
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
}
