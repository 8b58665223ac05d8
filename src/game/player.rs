//! The diver: movement, screen clamping, swim animation and what it carries
//!
//! Movement is digital. Each held direction adds `speed * dt` on its own
//! axis, so holding two directions moves faster diagonally than along an
//! axis. That is how the game has always played and is kept on purpose.

use crate::config::GameConfig;
use crate::input::Movement;
use crate::ui::Rect;
use super::trash::TrashKind;

/// Which way the sprite faces (the sheet is drawn facing right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Whether the sprite must be mirrored horizontally
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// Swim cycle state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwimAnimation {
    /// Current sprite sheet frame
    pub frame: usize,
    /// Time accumulated towards the next frame
    pub timer: f32,
    /// Any movement input held this frame
    pub moving: bool,
    pub facing: Facing,
}

impl SwimAnimation {
    /// Advance while moving, snap back to the first frame when idle
    pub fn tick(&mut self, moving: bool, dt: f32, frame_count: usize, frame_time: f32) {
        self.moving = moving;
        if !moving {
            self.frame = 0;
            self.timer = 0.0;
            return;
        }
        self.timer += dt;
        if self.timer >= frame_time {
            self.timer -= frame_time;
            self.frame = (self.frame + 1) % frame_count.max(1);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Pixels per second along each axis
    pub speed: f32,
    /// Kind currently in hand, if any
    pub carrying: Option<TrashKind>,
    pub score: i32,
    /// Best score of this process run
    pub best_score: i32,
    pub anim: SwimAnimation,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start();
        Self {
            x,
            y,
            w: config.player_width,
            h: config.player_height,
            speed: config.player_speed,
            carrying: None,
            score: 0,
            best_score: 0,
            anim: SwimAnimation::default(),
        }
    }

    /// Hitbox
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Back to the start position, standing still
    pub fn reset_position(&mut self, config: &GameConfig) {
        let (x, y) = config.player_start();
        self.x = x;
        self.y = y;
        self.anim = SwimAnimation {
            facing: self.anim.facing,
            ..SwimAnimation::default()
        };
    }

    /// Fresh round: empty hands, zero score. Best score survives.
    pub fn reset_round(&mut self, config: &GameConfig) {
        self.reset_position(config);
        self.carrying = None;
        self.score = 0;
    }

    /// Record the current score as best if it beats it. Returns true on a new record.
    pub fn commit_best_score(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
            true
        } else {
            false
        }
    }

    /// Apply one frame of directional input, clamp to `bounds`, and animate
    pub fn update(&mut self, movement: &Movement, dt: f32, bounds: &Rect, config: &GameConfig) {
        let step = self.speed * dt;

        // Left is handled before right: holding both ends up facing right
        if movement.left {
            self.x -= step;
            self.anim.facing = Facing::Left;
        }
        if movement.right {
            self.x += step;
            self.anim.facing = Facing::Right;
        }
        if movement.up {
            self.y -= step;
        }
        if movement.down {
            self.y += step;
        }

        let clamped = self.rect().clamped_inside(bounds);
        self.x = clamped.x;
        self.y = clamped.y;

        self.anim.tick(movement.any(), dt, config.anim_frames, config.anim_frame_time);
    }
}
