//! Small immediate-mode UI toolkit for menus and the HUD
//!
//! - `Rect`: layout and hit-testing rectangle (also the game's hitbox type)
//! - `MouseState`: per-frame mouse snapshot with click helpers
//! - theme colors and font sizes
//! - text and button drawing helpers

mod rect;
mod input;
mod theme;
mod widgets;

pub use rect::*;
pub use input::*;
pub use theme::*;
pub use widgets::*;
