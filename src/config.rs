//! Game tuning values
//!
//! Everything that shapes a round (screen size, round length, score rules,
//! pool capacity, sizes and speeds) lives in `GameConfig`. The shipped values
//! are compiled into the binary from `assets/config/tuning.ron`; there is no
//! runtime config file.

use serde::{Serialize, Deserialize};
use macroquad::logging::{info, warn};
use crate::game::TrashKind;
use crate::ui::Rect;

/// Tuning file baked into the binary
const EMBEDDED_TUNING: &str = include_str!("../assets/config/tuning.ron");

/// Sanity limits for tuning values
pub mod limits {
    /// Largest trash pool we accept (linear slot scans stay trivial)
    pub const MAX_TRASH_CAPACITY: usize = 256;
    /// Largest window dimension we accept
    pub const MAX_SCREEN_DIM: f32 = 8192.0;
}

/// Error type for tuning loading
#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Inclusive integer area where new trash may appear (top-left corner of the item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Distance from each screen edge that spawned trash keeps clear.
/// Resolved against the screen size by `GameConfig::spawn_area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnMargins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// All tuning for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title
    pub window_title: String,
    /// World/screen width in pixels
    pub screen_width: f32,
    /// World/screen height in pixels
    pub screen_height: f32,
    /// Frame cap
    pub target_fps: u32,
    /// MSAA sample count requested for the window
    pub msaa_samples: i32,

    /// Round length in seconds
    pub round_seconds: f32,
    /// Score that wins the round (score is clamped to it)
    pub win_score: i32,
    /// Points for a correct disposal
    pub correct_points: i32,
    /// Points lost for a wrong disposal
    pub wrong_penalty: i32,

    /// Trash pool capacity
    pub max_trash: usize,
    /// Items spawned when a round starts
    pub initial_trash: usize,
    /// Side length of a trash item's square hitbox
    pub trash_size: f32,
    /// Where spawned trash may land, relative to the screen edges
    pub spawn_margins: SpawnMargins,

    /// Bin hitbox width
    pub bin_width: f32,
    /// Bin hitbox height
    pub bin_height: f32,
    /// Horizontal gap between bins
    pub bin_gap: f32,
    /// X of the first bin
    pub bin_left: f32,
    /// Space between the bins and the bottom of the screen
    pub bin_bottom_margin: f32,

    /// Player hitbox width
    pub player_width: f32,
    /// Player hitbox height
    pub player_height: f32,
    /// Movement speed (pixels per second, per axis)
    pub player_speed: f32,
    /// Frames in the swim cycle sprite sheet
    pub anim_frames: usize,
    /// Seconds each swim frame stays on screen
    pub anim_frame_time: f32,

    /// Menu start button
    pub start_button: Rect,
    /// Return-to-menu button on the result screens
    pub menu_button: Rect,

    /// Looping background music volume (0..1)
    pub music_volume: f32,
    /// Sound effect volume (0..1)
    pub sfx_volume: f32,

    /// Enables the timer accelerant key. Never read from the tuning file.
    #[serde(skip, default = "debug_keys_default")]
    pub debug_keys: bool,
}

fn debug_keys_default() -> bool {
    cfg!(debug_assertions)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Ocean Guardians".to_string(),
            screen_width: 800.0,
            screen_height: 600.0,
            target_fps: 60,
            msaa_samples: 4,
            round_seconds: 180.0,
            win_score: 2000,
            correct_points: 100,
            wrong_penalty: 50,
            max_trash: 20,
            initial_trash: 1,
            trash_size: 40.0,
            spawn_margins: SpawnMargins { left: 50, right: 50, top: 200, bottom: 50 },
            bin_width: 70.0,
            bin_height: 100.0,
            bin_gap: 100.0,
            bin_left: 100.0,
            bin_bottom_margin: 20.0,
            player_width: 100.0,
            player_height: 100.0,
            player_speed: 200.0,
            anim_frames: 4,
            anim_frame_time: 0.15,
            start_button: Rect::new(310.0, 267.0, 180.0, 50.0),
            menu_button: Rect::new(300.0, 420.0, 200.0, 50.0),
            music_volume: 0.5,
            sfx_volume: 1.0,
            debug_keys: debug_keys_default(),
        }
    }
}

impl GameConfig {
    /// Parse tuning from RON text and validate it
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Tuning compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_ron(EMBEDDED_TUNING)
    }

    /// Embedded tuning, or the built-in defaults if it does not parse
    pub fn load_or_default() -> Self {
        match Self::embedded() {
            Ok(config) => {
                info!("Loaded tuning: {}s rounds, win at {}", config.round_seconds, config.win_score);
                config
            }
            Err(e) => {
                warn!("Bad embedded tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::ValidationError(msg));

        for (name, dim) in [("screen_width", self.screen_width), ("screen_height", self.screen_height)] {
            if !(dim > 0.0 && dim <= limits::MAX_SCREEN_DIM) {
                return fail(format!("{} out of range ({})", name, dim));
            }
        }
        if self.target_fps == 0 {
            return fail("target_fps must be positive".to_string());
        }
        if !(self.round_seconds > 0.0 && self.round_seconds.is_finite()) {
            return fail(format!("round_seconds must be positive ({})", self.round_seconds));
        }
        if self.win_score <= 0 {
            return fail(format!("win_score must be positive ({})", self.win_score));
        }
        if self.correct_points <= 0 || self.wrong_penalty < 0 {
            return fail("correct_points must be positive and wrong_penalty non-negative".to_string());
        }
        if self.max_trash == 0 || self.max_trash > limits::MAX_TRASH_CAPACITY {
            return fail(format!("max_trash out of range ({})", self.max_trash));
        }
        if self.initial_trash > self.max_trash {
            return fail(format!(
                "initial_trash ({}) exceeds max_trash ({})", self.initial_trash, self.max_trash
            ));
        }
        if !(self.trash_size > 0.0) {
            return fail(format!("trash_size must be positive ({})", self.trash_size));
        }

        let screen = self.screen_rect();
        let area = self.spawn_area();
        if area.min_x < 0 || area.min_y < 0 || area.min_x > area.max_x || area.min_y > area.max_y {
            return fail(format!("empty or off-screen spawn area {:?}", area));
        }
        let far_corner = Rect::new(area.max_x as f32, area.max_y as f32, self.trash_size, self.trash_size);
        if !far_corner.fits_inside(&screen) {
            return fail(format!("trash spawned at {:?} can leave the screen", area));
        }
        if self.player_width > self.screen_width || self.player_height > self.screen_height {
            return fail("player does not fit on screen".to_string());
        }
        for index in 0..TrashKind::ALL.len() {
            if !self.bin_rect(index).fits_inside(&screen) {
                return fail(format!("bin {} does not fit on screen", index));
            }
        }
        for (name, button) in [("start_button", &self.start_button), ("menu_button", &self.menu_button)] {
            if !button.fits_inside(&screen) {
                return fail(format!("{} does not fit on screen", name));
            }
        }
        if self.anim_frames == 0 || self.anim_frame_time <= 0.0 {
            return fail("animation needs at least one frame and a positive frame time".to_string());
        }
        for (name, vol) in [("music_volume", self.music_volume), ("sfx_volume", self.sfx_volume)] {
            if !(0.0..=1.0).contains(&vol) {
                return fail(format!("{} must be within 0..1 ({})", name, vol));
            }
        }
        Ok(())
    }

    /// Spawn area in screen coordinates, inclusive on every edge
    pub fn spawn_area(&self) -> SpawnArea {
        let m = &self.spawn_margins;
        SpawnArea {
            min_x: m.left,
            max_x: self.screen_width as i32 - m.right,
            min_y: m.top,
            max_y: self.screen_height as i32 - m.bottom,
        }
    }

    /// The world bounds
    pub fn screen_rect(&self) -> Rect {
        Rect::screen(self.screen_width, self.screen_height)
    }

    /// Where the diver starts a round and returns after it ends
    pub fn player_start(&self) -> (f32, f32) {
        (self.screen_width / 2.0 - 40.0, self.screen_height / 2.0 - 60.0)
    }

    /// Hitbox of the bin at `index` (left to right)
    pub fn bin_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.bin_left + index as f32 * (self.bin_width + self.bin_gap),
            self.screen_height - self.bin_height - self.bin_bottom_margin,
            self.bin_width,
            self.bin_height,
        )
    }

    /// Seconds per frame at the frame cap
    pub fn frame_time(&self) -> f64 {
        1.0 / self.target_fps as f64
    }
}
