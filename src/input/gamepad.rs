//! Gamepad support
//!
//! Native: gilrs. WASM: no gamepad backend, every query reports "nothing held".
//! Buttons are sampled once per `poll` into a bitmask so "just pressed" is a
//! clean edge between two frames.

// Standard gamepad button indices (Xbox layout names)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const B: u32 = 1;           // East
    pub const Y: u32 = 3;           // North
    pub const START: u32 = 9;
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Left stick deflection that counts as a held direction
pub const STICK_THRESHOLD: f32 = 0.5;

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> (f32, f32) {
            (0.0, 0.0)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Gilrs, Button as GilrsButton, Axis};
    use macroquad::logging::{info, warn};
    use super::button;

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
        stick: (f32, f32),
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => {
                    info!("Gamepad backend ready");
                    Some(gilrs)
                }
                Err(e) => {
                    warn!("Gamepad backend unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                buttons: 0,
                last_buttons: 0,
                stick: (0.0, 0.0),
            }
        }

        /// Sample the first connected gamepad. Call once per frame.
        pub fn poll(&mut self) {
            self.last_buttons = self.buttons;
            self.buttons = 0;
            self.stick = (0.0, 0.0);

            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Drain events so gilrs updates its cached state
            while gilrs.next_event().is_some() {}

            let Some((_, gp)) = gilrs.gamepads().next() else { return };

            let mapping = [
                (GilrsButton::South, button::A),
                (GilrsButton::East, button::B),
                (GilrsButton::North, button::Y),
                (GilrsButton::Start, button::START),
                (GilrsButton::DPadUp, button::DPAD_UP),
                (GilrsButton::DPadDown, button::DPAD_DOWN),
                (GilrsButton::DPadLeft, button::DPAD_LEFT),
                (GilrsButton::DPadRight, button::DPAD_RIGHT),
            ];
            for (gilrs_button, bit) in mapping {
                if gp.is_pressed(gilrs_button) {
                    self.buttons |= 1 << bit;
                }
            }

            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY); // screen Y grows downwards
            self.stick = super::apply_deadzone(x, y, self.deadzone);
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .map_or(false, |g| g.gamepads().next().is_some())
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            let bit = 1 << button;
            (self.buttons & bit) != 0 && (self.last_buttons & bit) == 0
        }

        /// Left stick after deadzone, y positive = down
        pub fn left_stick(&self) -> (f32, f32) {
            self.stick
        }
    }
}

/// Apply radial deadzone with linear rescaling
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> (f32, f32) {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return (0.0, 0.0);
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    (x * scale, y * scale)
}

pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}
