//! Game session: the mode state machine and everything it owns
//!
//! `GameSession` is the single owner of mutable game state (player, trash
//! pool, bins, round timer). The frame loop hands it one `FrameInput` and
//! the frame delta; the renderer reads it back afterwards.
//!
//! Legal transitions:
//! - Idle -> Playing: start button clicked (or Confirm)
//! - Playing -> Won: score reaches the win threshold
//! - Playing -> Lost: timer runs out below the threshold
//! - Won/Lost -> Idle: menu button clicked (or Confirm)

use macroquad::logging::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::GameConfig;
use crate::input::FrameInput;
use super::bin::BinSet;
use super::event::{EventQueue, GameEvent};
use super::interaction::{try_discard, try_pickup, ScoreRules};
use super::player::Player;
use super::trash::TrashPool;

/// Longest step fed to movement and animation. A stalled frame (window drag,
/// debugger) must not teleport the diver. The round clock always takes the full delta.
pub const MAX_MOVE_STEP: f32 = 0.1;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Menu / start screen
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Idle => "Idle",
            GameMode::Playing => "Playing",
            GameMode::Won => "Won",
            GameMode::Lost => "Lost",
        }
    }
}

pub struct GameSession {
    pub config: GameConfig,
    pub mode: GameMode,
    pub player: Player,
    pub trash: TrashPool,
    pub bins: BinSet,
    /// Seconds left in the round
    pub time_left: f32,
    /// Events produced by updates, drained by the frame loop
    pub events: EventQueue<GameEvent>,
    rng: StdRng,
}

impl GameSession {
    /// New session in the menu. `seed` drives trash placement and kinds.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            mode: GameMode::Idle,
            player: Player::new(&config),
            trash: TrashPool::new(config.max_trash, config.trash_size),
            bins: BinSet::from_config(&config),
            time_left: config.round_seconds,
            events: EventQueue::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Run one frame
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        match self.mode {
            GameMode::Idle => self.update_idle(input),
            GameMode::Playing => self.update_playing(input, dt),
            GameMode::Won | GameMode::Lost => self.update_round_over(input),
        }
    }

    fn score_rules(&self) -> ScoreRules {
        ScoreRules {
            correct_points: self.config.correct_points,
            wrong_penalty: self.config.wrong_penalty,
        }
    }

    fn set_mode(&mut self, to: GameMode) {
        let from = self.mode;
        self.mode = to;
        info!("Mode {} -> {} (score {}, best {})", from.label(), to.label(), self.player.score, self.player.best_score);
        self.events.send(GameEvent::ModeChanged { from, to });
    }

    // =========================================================================
    // Idle
    // =========================================================================

    fn update_idle(&mut self, input: &FrameInput) {
        if input.mouse.clicked(&self.config.start_button) || input.triggers.confirm {
            self.start_round();
        }
    }

    /// Idle -> Playing
    fn start_round(&mut self) {
        self.time_left = self.config.round_seconds;
        self.player.reset_round(&self.config);
        self.trash.clear();
        self.set_mode(GameMode::Playing);
        for _ in 0..self.config.initial_trash {
            self.spawn_trash();
        }
    }

    // =========================================================================
    // Playing
    // =========================================================================

    fn update_playing(&mut self, input: &FrameInput, dt: f32) {
        if self.config.debug_keys && input.triggers.drain_timer {
            self.time_left = 0.0;
        }

        self.time_left -= dt;
        if self.time_left <= 0.0 && self.player.score < self.config.win_score {
            self.finish_round(GameMode::Lost);
            return;
        }

        let bounds = self.config.screen_rect();
        self.player.update(&input.movement, dt.min(MAX_MOVE_STEP), &bounds, &self.config);

        if input.triggers.interact {
            if let Some((slot, kind)) = try_pickup(&mut self.player, &mut self.trash) {
                self.events.send(GameEvent::TrashPickedUp { slot, kind });
            }
        }

        if input.triggers.discard {
            let rules = self.score_rules();
            if let Some(disposal) = try_discard(&mut self.player, &self.bins, &rules) {
                self.events.send(GameEvent::TrashDisposed {
                    kind: disposal.kind,
                    bin: disposal.bin,
                    points: disposal.points,
                });
                self.spawn_trash();
                if self.player.score >= self.config.win_score {
                    self.player.score = self.config.win_score;
                    self.finish_round(GameMode::Won);
                    return;
                }
            }
        }

        if input.triggers.spawn_trash {
            self.spawn_trash();
        }
    }

    /// Fill one free pool slot, if any
    pub fn spawn_trash(&mut self) -> Option<usize> {
        match self.trash.spawn(&mut self.rng, &self.config.spawn_area()) {
            Some(slot) => {
                if let Some(item) = self.trash.get(slot) {
                    self.events.send(GameEvent::TrashSpawned { slot, kind: item.kind });
                }
                Some(slot)
            }
            None => {
                self.events.send(GameEvent::PoolFull);
                None
            }
        }
    }

    /// Playing -> Won / Lost
    fn finish_round(&mut self, outcome: GameMode) {
        if self.player.commit_best_score() {
            info!("New best score: {}", self.player.best_score);
            self.events.send(GameEvent::NewBestScore(self.player.best_score));
        }
        if outcome == GameMode::Lost {
            self.time_left = 0.0;
        }
        self.player.reset_position(&self.config);
        self.set_mode(outcome);
    }

    // =========================================================================
    // Won / Lost
    // =========================================================================

    fn update_round_over(&mut self, input: &FrameInput) {
        if input.mouse.clicked(&self.config.menu_button) || input.triggers.confirm {
            self.return_to_menu();
        }
    }

    /// Won/Lost -> Idle
    fn return_to_menu(&mut self) {
        self.player.reset_round(&self.config);
        self.time_left = self.config.round_seconds;
        self.trash.clear();
        self.set_mode(GameMode::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, Movement};
    use crate::game::trash::TrashKind;

    const DT: f32 = 1.0 / 60.0;

    fn test_config() -> GameConfig {
        GameConfig { debug_keys: true, ..GameConfig::default() }
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new(test_config(), 11);
        session.update(&FrameInput::action(Action::Confirm), DT);
        assert_eq!(session.mode, GameMode::Playing);
        session.events.clear();
        session
    }

    /// Swim until the diver's hitbox overlaps `target`, one frame at a time
    fn swim_to(session: &mut GameSession, target: crate::ui::Rect) {
        for _ in 0..2000 {
            if session.player.rect().overlaps(&target) {
                return;
            }
            let p = session.player.rect();
            let movement = Movement {
                left: p.center_x() > target.center_x() + 1.0,
                right: p.center_x() < target.center_x() - 1.0,
                up: p.center_y() > target.center_y() + 1.0,
                down: p.center_y() < target.center_y() - 1.0,
            };
            session.update(&FrameInput::moving(movement), DT);
        }
        panic!("never reached {:?}", target);
    }

    fn modes(session: &mut GameSession) -> Vec<(GameMode, GameMode)> {
        session
            .events
            .drain()
            .filter_map(|e| match e {
                GameEvent::ModeChanged { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starts_idle() {
        let session = GameSession::new(test_config(), 0);
        assert_eq!(session.mode, GameMode::Idle);
        assert_eq!(session.trash.active_count(), 0);
    }

    #[test]
    fn test_idle_ignores_clicks_outside_start_button() {
        let mut session = GameSession::new(test_config(), 0);
        session.update(&FrameInput::click(10.0, 10.0), DT);
        session.update(&FrameInput::action(Action::Interact), DT);
        assert_eq!(session.mode, GameMode::Idle);
        assert!(session.events.is_empty());
    }

    #[test]
    fn test_full_round_scenario() {
        let mut session = GameSession::new(test_config(), 5);

        // Click the start button
        session.update(&FrameInput::click(400.0, 290.0), DT);
        assert_eq!(session.mode, GameMode::Playing);
        assert_eq!(session.time_left, 180.0);
        assert_eq!(session.trash.active_count(), 1);

        // Swim onto the item and pick it up
        let (slot, item) = session.trash.active().map(|(s, i)| (s, *i)).next().unwrap();
        let target = item.rect(session.trash.item_size());
        swim_to(&mut session, target);
        session.update(&FrameInput::action(Action::Interact), DT);
        assert_eq!(session.player.carrying, Some(item.kind));
        assert!(!session.trash.get(slot).unwrap().active);
        assert_eq!(session.trash.active_count(), 0);

        // Swim to the matching bin and drop it
        let bin = session.bins.for_kind(item.kind).rect;
        swim_to(&mut session, bin);
        assert_eq!(
            session.bins.first_overlapping(&session.player.rect()).map(|b| b.accepts),
            Some(item.kind),
        );
        session.update(&FrameInput::action(Action::Discard), DT);
        assert_eq!(session.player.score, 100);
        assert_eq!(session.player.carrying, None);
        assert_eq!(session.trash.active_count(), 1);
        assert!(session.time_left < 180.0);
    }

    #[test]
    fn test_wrong_bin_costs_points() {
        let mut session = playing_session();
        session.player.score = 300;
        session.player.carrying = Some(TrashKind::Paper);
        let bin = session.bins.for_kind(TrashKind::Plastic).rect;
        session.player.x = bin.x;
        session.player.y = bin.y - 50.0;

        session.update(&FrameInput::action(Action::Discard), DT);
        assert_eq!(session.player.score, 250);
        assert_eq!(session.player.carrying, None);
        assert_eq!(session.trash.active_count(), 2, "a wrong drop still spawns");
        assert!(session.events.iter().any(|e| matches!(e, GameEvent::TrashDisposed { points: -50, .. })));
    }

    #[test]
    fn test_reaching_threshold_wins_and_clamps() {
        let mut session = playing_session();
        session.player.score = 1900;
        session.player.carrying = Some(TrashKind::Metal);
        let bin = session.bins.for_kind(TrashKind::Metal).rect;
        session.player.x = bin.x;
        session.player.y = bin.y;

        session.update(&FrameInput::action(Action::Discard), DT);
        assert_eq!(session.mode, GameMode::Won);
        assert_eq!(session.player.score, 2000);
        assert_eq!(session.player.best_score, 2000);
        assert_eq!((session.player.x, session.player.y), session.config.player_start());
    }

    #[test]
    fn test_overshooting_threshold_is_clamped() {
        let mut session = GameSession::new(
            GameConfig { correct_points: 300, ..test_config() },
            3,
        );
        session.update(&FrameInput::action(Action::Confirm), DT);
        session.player.score = 1900;
        session.player.carrying = Some(TrashKind::Glass);
        let bin = session.bins.for_kind(TrashKind::Glass).rect;
        session.player.x = bin.x;
        session.player.y = bin.y;

        session.update(&FrameInput::action(Action::Discard), DT);
        assert_eq!(session.mode, GameMode::Won);
        assert_eq!(session.player.score, 2000);
    }

    #[test]
    fn test_timer_runs_out() {
        let mut session = playing_session();
        session.player.score = 400;
        session.time_left = 0.5 * DT;

        session.update(&FrameInput::idle(), DT);
        assert_eq!(session.mode, GameMode::Lost);
        assert_eq!(session.time_left, 0.0);
        assert_eq!(session.player.best_score, 400);
        assert_eq!(modes(&mut session), vec![(GameMode::Playing, GameMode::Lost)]);

        // Further frames at zero do nothing
        for _ in 0..10 {
            session.update(&FrameInput::idle(), DT);
        }
        assert_eq!(session.mode, GameMode::Lost);
        assert!(modes(&mut session).is_empty());
        assert_eq!(session.time_left, 0.0);
    }

    #[test]
    fn test_accelerant_forces_loss() {
        let mut session = playing_session();
        session.player.best_score = 500;
        session.player.score = 200;

        session.update(&FrameInput::action(Action::DrainTimer), DT);
        assert_eq!(session.mode, GameMode::Lost);
        assert_eq!(session.player.best_score, 500, "best only moves up");
        assert!(!session.events.iter().any(|e| matches!(e, GameEvent::NewBestScore(_))));
    }

    #[test]
    fn test_accelerant_updates_best_when_exceeded() {
        let mut session = playing_session();
        session.player.best_score = 100;
        session.player.score = 700;

        session.update(&FrameInput::action(Action::DrainTimer), DT);
        assert_eq!(session.mode, GameMode::Lost);
        assert_eq!(session.player.best_score, 700);
        assert!(session.events.iter().any(|e| *e == GameEvent::NewBestScore(700)));
    }

    #[test]
    fn test_accelerant_disabled_without_debug_keys() {
        let mut session = GameSession::new(GameConfig { debug_keys: false, ..GameConfig::default() }, 1);
        session.update(&FrameInput::action(Action::Confirm), DT);
        session.update(&FrameInput::action(Action::DrainTimer), DT);
        assert_eq!(session.mode, GameMode::Playing);
    }

    #[test]
    fn test_return_to_menu_resets_round() {
        let mut session = playing_session();
        session.player.score = 600;
        session.player.carrying = Some(TrashKind::Glass);
        session.spawn_trash();
        session.update(&FrameInput::action(Action::DrainTimer), DT);
        assert_eq!(session.mode, GameMode::Lost);

        // Click outside the menu button: stay
        session.update(&FrameInput::click(5.0, 5.0), DT);
        assert_eq!(session.mode, GameMode::Lost);

        let button = session.config.menu_button;
        session.update(&FrameInput::click(button.center_x(), button.center_y()), DT);
        assert_eq!(session.mode, GameMode::Idle);
        assert_eq!(session.player.score, 0);
        assert_eq!(session.player.carrying, None);
        assert_eq!(session.player.best_score, 600);
        assert_eq!(session.time_left, 180.0);
        assert_eq!(session.trash.active_count(), 0);
    }

    #[test]
    fn test_menu_after_win_resets_round() {
        let mut session = playing_session();
        session.player.score = 1950;
        session.player.carrying = Some(TrashKind::Paper);
        let bin = session.bins.for_kind(TrashKind::Paper).rect;
        session.player.x = bin.x;
        session.player.y = bin.y;
        session.update(&FrameInput::action(Action::Discard), DT);
        assert_eq!(session.mode, GameMode::Won);
        assert_eq!(session.player.score, 2000);
        assert!(session.trash.active_count() > 0);

        let button = session.config.menu_button;
        session.update(&FrameInput::click(button.center_x(), button.center_y()), DT);
        assert_eq!(session.mode, GameMode::Idle);
        assert_eq!(session.player.score, 0);
        assert_eq!(session.player.carrying, None);
        assert_eq!(session.player.best_score, 2000);
        assert_eq!(session.time_left, 180.0);
        assert_eq!(session.trash.active_count(), 0);
        assert_eq!(modes(&mut session).last(), Some(&(GameMode::Won, GameMode::Idle)));
    }

    #[test]
    fn test_long_frame_runs_full_clock_but_short_swim() {
        let mut session = playing_session();
        let start_x = session.player.x;

        session.update(&FrameInput::action(Action::MoveRight), 0.5);
        assert_eq!(session.mode, GameMode::Playing);
        assert!((session.time_left - 179.5).abs() < 1e-4, "clock takes the whole delta");
        let moved = session.player.x - start_x;
        assert!((moved - session.config.player_speed * MAX_MOVE_STEP).abs() < 1e-3);
    }

    #[test]
    fn test_second_round_keeps_best_score() {
        let mut session = playing_session();
        session.player.score = 900;
        session.update(&FrameInput::action(Action::DrainTimer), DT);
        session.update(&FrameInput::action(Action::Confirm), DT);
        session.update(&FrameInput::action(Action::Confirm), DT);

        assert_eq!(session.mode, GameMode::Playing);
        assert_eq!(session.player.score, 0);
        assert_eq!(session.player.best_score, 900);
        assert_eq!(session.trash.active_count(), 1);
    }

    #[test]
    fn test_manual_spawn_until_full() {
        let mut session = playing_session();
        for _ in 0..40 {
            session.update(&FrameInput::action(Action::SpawnTrash), DT);
        }
        assert_eq!(session.trash.active_count(), 20);
        assert!(session.events.iter().any(|e| *e == GameEvent::PoolFull));
    }

    #[test]
    fn test_round_over_ignores_gameplay_input() {
        let mut session = playing_session();
        session.update(&FrameInput::action(Action::DrainTimer), DT);
        let before = (session.player.x, session.player.y);
        let active = session.trash.active_count();
        session.update(&FrameInput::action(Action::MoveRight), 1.0);
        session.update(&FrameInput::action(Action::SpawnTrash), DT);
        assert_eq!((session.player.x, session.player.y), before);
        assert_eq!(session.trash.active_count(), active, "pool is left untouched until the menu");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::default(), GameMode::Idle);
        assert_eq!(GameMode::Lost.label(), "Lost");
    }
}
