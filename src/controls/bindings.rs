use crate::controls::{Button, Control};
use crate::input::Selectors;

/// Selector to control table, in binding order
#[derive(Debug, Clone, Default)]
pub struct ControlBindings {
    handlers: Vec<(String, Control)>,
}

impl ControlBindings {
    /// Bind the five buttons and the speed control
    pub fn bind(sel: &Selectors) -> Self {
        let mut bindings = Self::default();
        bindings.add(&sel.fbackward, Control::Button(Button::FastBackward));
        bindings.add(&sel.backward, Control::Button(Button::Backward));
        bindings.add(&sel.play_pause, Control::Button(Button::PlayPause));
        bindings.add(&sel.forward, Control::Button(Button::Forward));
        bindings.add(&sel.fforward, Control::Button(Button::FastForward));
        bindings.add(&sel.speed, Control::Speed);
        bindings
    }

    pub fn add(&mut self, selector: &str, control: Control) {
        self.handlers.push((selector.to_string(), control));
    }

    /// Controls bound to `selector`, in the order they were bound
    pub fn resolve<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = Control> + 'a {
        self.handlers
            .iter()
            .filter(move |(bound, _)| bound == selector)
            .map(|(_, control)| *control)
    }
}
