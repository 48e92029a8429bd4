use crate::controls::{Button, STEP_BUTTONS};
use crate::input::ControlsConfig;

/// Marker class on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseMarker {
    /// `_play`: clicking starts playback
    Play,
    /// `_pause`: clicking stops playback
    Pause,
}

impl PlayPauseMarker {
    pub fn class_name(&self) -> &'static str {
        match self {
            PlayPauseMarker::Play => "_play",
            PlayPauseMarker::Pause => "_pause",
        }
    }
}

/// What a play/pause click asks the player to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Play,
    Pause,
}

/// UI state of the transport buttons
#[derive(Debug, Clone, PartialEq)]
pub struct TransportPanel {
    play_class: String,
    pause_class: String,
    marker: PlayPauseMarker,
    icon_class: String,
    disabled: [bool; 4],
}

impl TransportPanel {
    pub fn new(controls: &ControlsConfig) -> Self {
        Self {
            play_class: controls.play_class.clone(),
            pause_class: controls.pause_class.clone(),
            marker: PlayPauseMarker::Play,
            icon_class: controls.play_class.clone(),
            disabled: [false; 4],
        }
    }

    pub fn marker(&self) -> PlayPauseMarker {
        self.marker
    }

    /// Class currently on the play/pause icon
    pub fn icon_class(&self) -> &str {
        &self.icon_class
    }

    pub fn is_disabled(&self, button: Button) -> bool {
        step_slot(button).map_or(false, |slot| self.disabled[slot])
    }

    /// Enable or disable one button. The play/pause button is never disabled.
    pub fn set_disabled(&mut self, button: Button, disabled: bool) {
        if let Some(slot) = step_slot(button) {
            self.disabled[slot] = disabled;
        }
    }

    /// Flip the play/pause button
    ///
    /// Going to `_pause` disables the four step buttons. Going back to
    /// `_play` enables all four, whatever their state was.
    pub fn toggle(&mut self) -> Transition {
        match self.marker {
            PlayPauseMarker::Play => {
                self.marker = PlayPauseMarker::Pause;
                self.icon_class = self.pause_class.clone();
                self.disabled = [true; 4];
                Transition::Play
            }
            PlayPauseMarker::Pause => {
                self.marker = PlayPauseMarker::Play;
                self.icon_class = self.play_class.clone();
                self.disabled = [false; 4];
                Transition::Pause
            }
        }
    }
}

fn step_slot(button: Button) -> Option<usize> {
    STEP_BUTTONS.iter().position(|&b| b == button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Selectors;

    fn panel() -> TransportPanel {
        TransportPanel::new(&ControlsConfig {
            sel: Selectors {
                fbackward: "#first".to_string(),
                backward: "#back".to_string(),
                play_pause: "#play".to_string(),
                forward: "#fwd".to_string(),
                fforward: "#last".to_string(),
                speed: "#speed".to_string(),
            },
            play_class: "icon-play".to_string(),
            pause_class: "icon-pause".to_string(),
            slider: None,
        })
    }

    #[test]
    fn test_initial_panel() {
        let panel = panel();
        assert_eq!(panel.marker(), PlayPauseMarker::Play);
        assert_eq!(panel.icon_class(), "icon-play");
        assert!(STEP_BUTTONS.iter().all(|&b| !panel.is_disabled(b)));
    }

    #[test]
    fn test_toggle_swaps_marker_icon_and_buttons() {
        let mut panel = panel();

        assert_eq!(panel.toggle(), Transition::Play);
        assert_eq!(panel.marker().class_name(), "_pause");
        assert_eq!(panel.icon_class(), "icon-pause");
        assert!(STEP_BUTTONS.iter().all(|&b| panel.is_disabled(b)));
        assert!(!panel.is_disabled(Button::PlayPause));

        assert_eq!(panel.toggle(), Transition::Pause);
        assert_eq!(panel.marker().class_name(), "_play");
        assert_eq!(panel.icon_class(), "icon-play");
        assert!(STEP_BUTTONS.iter().all(|&b| !panel.is_disabled(b)));
    }

    #[test]
    fn test_pause_enables_buttons_disabled_before_play() {
        let mut panel = panel();
        panel.set_disabled(Button::Forward, true);

        panel.toggle();
        panel.toggle();

        assert!(!panel.is_disabled(Button::Forward));
    }

    #[test]
    fn test_play_pause_cannot_be_disabled() {
        let mut panel = panel();
        panel.set_disabled(Button::PlayPause, true);
        assert!(!panel.is_disabled(Button::PlayPause));
    }
}
