pub mod engine;
pub mod speed;
pub mod timer;

pub use engine::PlaybackEngine;
pub use speed::{SpeedMapping, SpeedReading};
pub use timer::{timer_period, Ticker};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Running,
}

/// How frame positions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// One index for every track, wrapping at `total_frames`
    Shared { total_frames: usize },
    /// Each track keeps its own counter and wraps at its own frame count
    PerTrack,
}
