//! Game core
//!
//! Everything here is plain data and logic, no drawing and no device input:
//! - trash: item kinds and the fixed-capacity item pool
//! - bin: the four disposal bins
//! - player: diver movement, clamping and swim animation
//! - interaction: pickup and disposal rules
//! - event: per-frame event queue read by audio and logging
//! - session: the Idle/Playing/Won/Lost state machine that owns it all

pub mod trash;
pub mod bin;
pub mod player;
pub mod interaction;
pub mod event;
pub mod session;

pub use trash::TrashKind;
pub use event::GameEvent;
pub use session::{GameMode, GameSession};
