//! Sound effects and background music
//!
//! The session never plays sounds itself. Each frame main drains the
//! session's event queue through `AudioBank::handle`, which maps events
//! to one-shot cues and starts or stops the music on mode changes.

use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};
use macroquad::logging::{info, warn};
use crate::game::{GameEvent, GameMode};

const SOUND_DIR: &str = "assets/sounds";
const MUSIC_NAME: &str = "music";

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Pickup,
    Correct,
    Incorrect,
    Victory,
    Defeat,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Click,
        SoundCue::Pickup,
        SoundCue::Correct,
        SoundCue::Incorrect,
        SoundCue::Victory,
        SoundCue::Defeat,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// File stem under `assets/sounds/`
    pub fn file_stem(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Pickup => "pickup",
            SoundCue::Correct => "correct",
            SoundCue::Incorrect => "incorrect",
            SoundCue::Victory => "victory",
            SoundCue::Defeat => "defeat",
        }
    }

    /// Cue played for a session event, if any
    pub fn for_event(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::ModeChanged { to: GameMode::Won, .. } => Some(SoundCue::Victory),
            GameEvent::ModeChanged { to: GameMode::Lost, .. } => Some(SoundCue::Defeat),
            // Start and menu buttons
            GameEvent::ModeChanged { .. } => Some(SoundCue::Click),
            GameEvent::TrashPickedUp { .. } => Some(SoundCue::Pickup),
            e @ GameEvent::TrashDisposed { .. } => {
                if e.is_correct_disposal() {
                    Some(SoundCue::Correct)
                } else {
                    Some(SoundCue::Incorrect)
                }
            }
            GameEvent::TrashSpawned { .. } | GameEvent::PoolFull | GameEvent::NewBestScore(_) => None,
        }
    }
}

/// Whether the background loop plays in a mode. Result screens are silent
/// apart from their cue.
pub fn music_plays_in(mode: GameMode) -> bool {
    match mode {
        GameMode::Idle | GameMode::Playing => true,
        GameMode::Won | GameMode::Lost => false,
    }
}

/// Loaded sounds. Missing files leave a silent slot.
pub struct AudioBank {
    cues: [Option<Sound>; 6],
    music: Option<Sound>,
    music_volume: f32,
    music_playing: bool,
    sfx_volume: f32,
}

impl AudioBank {
    /// Load every cue plus the music track, and start the menu music
    pub async fn load(music_volume: f32, sfx_volume: f32) -> Self {
        let mut cues: [Option<Sound>; 6] = [None, None, None, None, None, None];
        for cue in SoundCue::ALL {
            cues[cue.index()] = load_optional(cue.file_stem()).await;
        }
        let music = load_optional(MUSIC_NAME).await;

        let loaded = cues.iter().filter(|c| c.is_some()).count();
        info!("Loaded {}/{} sound effects, music {}", loaded, SoundCue::ALL.len(),
            if music.is_some() { "on" } else { "missing" });

        let mut bank = Self { cues, music, music_volume, music_playing: false, sfx_volume };
        bank.set_music(music_plays_in(GameMode::Idle));
        bank
    }

    fn set_music(&mut self, on: bool) {
        if on == self.music_playing {
            return;
        }
        if let Some(m) = self.music.as_ref() {
            if on {
                play_sound(m, PlaySoundParams { looped: true, volume: self.music_volume });
            } else {
                stop_sound(m);
            }
        }
        self.music_playing = on;
    }

    pub fn play(&self, cue: SoundCue) {
        if let Some(sound) = self.cues[cue.index()].as_ref() {
            if self.sfx_volume >= 1.0 {
                play_sound_once(sound);
            } else {
                play_sound(sound, PlaySoundParams { looped: false, volume: self.sfx_volume });
            }
        }
    }

    /// Play whatever cue the event calls for, and follow mode changes with the music
    pub fn handle(&mut self, event: &GameEvent) {
        if let GameEvent::ModeChanged { to, .. } = event {
            self.set_music(music_plays_in(*to));
        }
        if let Some(cue) = SoundCue::for_event(event) {
            self.play(cue);
        }
    }
}

impl Drop for AudioBank {
    fn drop(&mut self) {
        self.set_music(false);
    }
}

/// Try `.ogg` then `.wav`
async fn load_optional(stem: &str) -> Option<Sound> {
    for ext in ["ogg", "wav"] {
        let path = format!("{}/{}.{}", SOUND_DIR, stem, ext);
        if let Ok(sound) = load_sound(&path).await {
            return Some(sound);
        }
    }
    warn!("Failed to load sound {}/{}.(ogg|wav), cue will be silent", SOUND_DIR, stem);
    None
}
