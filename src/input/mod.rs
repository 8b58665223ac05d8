//! Input handling with gamepad support
//!
//! Keyboard/mouse come from macroquad, gamepads from gilrs (native only).
//! Both feed one action-based `FrameInput` per frame.

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button, STICK_THRESHOLD};
pub use state::*;
