pub mod bindings;
pub mod panel;

pub use bindings::ControlBindings;
pub use panel::{Transition, TransportPanel};
#[cfg(test)]
pub use panel::PlayPauseMarker;

use crate::playback::SpeedReading;

/// Transport buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    FastBackward,
    Backward,
    PlayPause,
    Forward,
    FastForward,
}

/// Buttons disabled while playing
pub const STEP_BUTTONS: [Button; 4] = [
    Button::FastBackward,
    Button::Backward,
    Button::Forward,
    Button::FastForward,
];

/// Anything a selector can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Button(Button),
    Speed,
}

/// Event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    Click { selector: String },
    Change { selector: String, reading: SpeedReading },
}

impl ControlEvent {
    pub fn selector(&self) -> &str {
        match self {
            ControlEvent::Click { selector } | ControlEvent::Change { selector, .. } => selector,
        }
    }
}
