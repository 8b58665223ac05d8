//! Game action definitions
//!
//! Bindings are fixed:
//! - WASD / arrow keys / D-pad / left stick = swim
//! - E / A (South) = pick up trash
//! - Q / B (East) = drop trash in the bin under the diver
//! - G / Y (North) = spawn an extra piece of trash
//! - Enter / Start = start a round, return to the menu
//! - T = empty the round timer (debug builds only)

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Gameplay (edge-triggered)
    Interact,
    Discard,
    SpawnTrash,

    // Menus
    Confirm,

    // Debug
    DrainTimer,
}

impl Action {
    pub const TRIGGERS: [Action; 5] = [
        Action::Interact,
        Action::Discard,
        Action::SpawnTrash,
        Action::Confirm,
        Action::DrainTimer,
    ];

    /// Rows of the menu's controls help, in display order
    pub const HELP: [Action; 5] = [
        Action::MoveUp,
        Action::Interact,
        Action::Discard,
        Action::SpawnTrash,
        Action::Confirm,
    ];

    /// What the action does, for the controls help panel
    pub fn description(self) -> &'static str {
        match self {
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => "Swim",
            Action::Interact => "Pick up trash",
            Action::Discard => "Drop trash in a bin",
            Action::SpawnTrash => "Release more trash",
            Action::Confirm => "Start / back to menu",
            Action::DrainTimer => "End the round (debug)",
        }
    }

    /// Key names for the controls help panel
    pub fn key_hint(self) -> &'static str {
        match self {
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => "WASD",
            Action::Interact => "E",
            Action::Discard => "Q",
            Action::SpawnTrash => "G",
            Action::Confirm => "Enter",
            Action::DrainTimer => "T",
        }
    }
}
