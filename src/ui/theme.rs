//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;
use crate::game::TrashKind;

// =============================================================================
// Base Colors
// =============================================================================

/// Clear color behind everything
pub const BG_COLOR: Color = Color::new(0.05, 0.27, 0.45, 1.0);

/// Primary text on dark panels
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// HUD text drawn straight over the sea background
pub const HUD_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Credits line at the bottom of the menu
pub const CREDITS_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Menu background tint (slightly see-through)
pub const MENU_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.9);

/// Dims the playfield behind the result panel
pub const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// =============================================================================
// Buttons / Panels
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.0, 0.47, 0.95, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.2, 0.6, 1.0, 1.0);
pub const PANEL_BG: Color = Color::new(0.0, 0.47, 0.95, 1.0);
pub const RESULT_PANEL: Color = Color::new(0.03, 0.15, 0.3, 0.95);

/// Result panel accents
pub const WIN_COLOR: Color = Color::new(0.35, 0.85, 0.4, 1.0);
pub const LOSE_COLOR: Color = Color::new(0.95, 0.35, 0.3, 1.0);

/// Best-score badge (drawn when the fire texture is missing)
pub const BADGE_BG: Color = Color::new(0.9, 0.45, 0.1, 1.0);

/// Held-item frame (drawn when the frame texture is missing)
pub const SLOT_BG: Color = Color::new(0.95, 0.9, 0.75, 1.0);
pub const SLOT_BORDER: Color = Color::new(0.45, 0.3, 0.15, 1.0);

/// Diver (drawn when the sprite sheet is missing)
pub const DIVER_COLOR: Color = Color::new(1.0, 0.8, 0.1, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 100.0;
pub const FONT_SIZE_BUTTON: f32 = 30.0;
pub const FONT_SIZE_HUD: f32 = 30.0;
pub const FONT_SIZE_CLOCK: f32 = 40.0;
pub const FONT_SIZE_HELP: f32 = 20.0;
pub const FONT_SIZE_CREDITS: f32 = 19.0;

// =============================================================================
// Trash kinds
// =============================================================================

/// Flat color standing in for a kind's item or bin sprite
pub fn kind_color(kind: TrashKind) -> Color {
    match kind {
        TrashKind::Plastic => Color::new(0.95, 0.25, 0.2, 1.0),
        TrashKind::Glass => Color::new(0.2, 0.75, 0.3, 1.0),
        TrashKind::Metal => Color::new(0.95, 0.8, 0.1, 1.0),
        TrashKind::Paper => Color::new(0.15, 0.4, 0.95, 1.0),
    }
}
