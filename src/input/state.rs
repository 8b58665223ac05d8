//! Input state management
//!
//! Polls keyboard/mouse (macroquad) and the gamepad once per frame and folds
//! them into a `FrameInput`: a plain value the game session consumes. The
//! session never touches macroquad input directly, so it runs headless in tests.

use macroquad::prelude::*;
use crate::ui::MouseState;
use super::{Action, Gamepad, button, STICK_THRESHOLD};

/// Directions held this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Movement {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Edge-triggered actions fired this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    pub interact: bool,
    pub discard: bool,
    pub spawn_trash: bool,
    pub confirm: bool,
    pub drain_timer: bool,
}

impl Triggers {
    #[cfg(test)]
    pub fn fired(&self, action: Action) -> bool {
        match action {
            Action::Interact => self.interact,
            Action::Discard => self.discard,
            Action::SpawnTrash => self.spawn_trash,
            Action::Confirm => self.confirm,
            Action::DrainTimer => self.drain_timer,
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => false,
        }
    }

    fn set(&mut self, action: Action, value: bool) {
        match action {
            Action::Interact => self.interact = value,
            Action::Discard => self.discard = value,
            Action::SpawnTrash => self.spawn_trash = value,
            Action::Confirm => self.confirm = value,
            Action::DrainTimer => self.drain_timer = value,
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => {}
        }
    }
}

/// Everything the session needs from the player for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub movement: Movement,
    pub triggers: Triggers,
    pub mouse: MouseState,
}

impl FrameInput {
    #[cfg(test)]
    /// Nothing pressed, mouse parked at the origin
    pub fn idle() -> Self {
        Self::default()
    }

    #[cfg(test)]
    /// A left click at a screen position
    pub fn click(x: f32, y: f32) -> Self {
        Self {
            mouse: MouseState { x, y, left_down: true, left_pressed: true },
            ..Self::default()
        }
    }

    #[cfg(test)]
    /// Directions held, nothing else
    pub fn moving(movement: Movement) -> Self {
        Self { movement, ..Self::default() }
    }

    #[cfg(test)]
    /// A single action: movement actions are held, the rest fire once
    pub fn action(action: Action) -> Self {
        let mut input = Self::default();
        match action {
            Action::MoveLeft => input.movement.left = true,
            Action::MoveRight => input.movement.right = true,
            Action::MoveUp => input.movement.up = true,
            Action::MoveDown => input.movement.down = true,
            other => input.triggers.set(other, true),
        }
        input
    }
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Sample all devices. Call once per frame, before the session update.
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();

        let (stick_x, stick_y) = self.gamepad.left_stick();
        let movement = Movement {
            left: self.keyboard_down(Action::MoveLeft)
                || self.gamepad.is_button_down(button::DPAD_LEFT)
                || stick_x <= -STICK_THRESHOLD,
            right: self.keyboard_down(Action::MoveRight)
                || self.gamepad.is_button_down(button::DPAD_RIGHT)
                || stick_x >= STICK_THRESHOLD,
            up: self.keyboard_down(Action::MoveUp)
                || self.gamepad.is_button_down(button::DPAD_UP)
                || stick_y <= -STICK_THRESHOLD,
            down: self.keyboard_down(Action::MoveDown)
                || self.gamepad.is_button_down(button::DPAD_DOWN)
                || stick_y >= STICK_THRESHOLD,
        };

        let mut triggers = Triggers::default();
        for action in Action::TRIGGERS {
            let fired = self.keyboard_pressed(action) || self.gamepad_pressed(action);
            triggers.set(action, fired);
        }

        let (x, y) = mouse_position();
        let mouse = MouseState {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        };

        FrameInput { movement, triggers, mouse }
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::MoveUp => is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            Action::MoveDown => is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            _ => false,
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Interact => is_key_pressed(KeyCode::E),
            Action::Discard => is_key_pressed(KeyCode::Q),
            Action::SpawnTrash => is_key_pressed(KeyCode::G),
            Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
            Action::DrainTimer => is_key_pressed(KeyCode::T),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Interact => self.gamepad.is_button_pressed(button::A),
            Action::Discard => self.gamepad.is_button_pressed(button::B),
            Action::SpawnTrash => self.gamepad.is_button_pressed(button::Y),
            Action::Confirm => self.gamepad.is_button_pressed(button::START),
            _ => false,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
