use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::controls::{Button, Control, ControlBindings, ControlEvent, Transition, TransportPanel};
use crate::input::PlayerConfig;
use crate::playback::{
    timer_period, IndexMode, PlaybackEngine, PlaybackState, SpeedMapping, SpeedReading, Ticker,
};
use crate::render::Renderer;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("a player must be created inside a tokio runtime")]
    NoRuntime,
}

/// Requests a player handles
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Play,
    Pause,
    Toggle,
    First,
    Last,
    Back,
    Forward,
    Speed { value: f64, max: f64, min: f64 },
}

impl From<Button> for Action {
    fn from(button: Button) -> Self {
        match button {
            Button::FastBackward => Action::First,
            Button::Backward => Action::Back,
            Button::PlayPause => Action::Toggle,
            Button::Forward => Action::Forward,
            Button::FastForward => Action::Last,
        }
    }
}

struct PlayerInner<R> {
    engine: PlaybackEngine<R>,
    panel: Option<TransportPanel>,
    bindings: ControlBindings,
    mapping: SpeedMapping,
    ticker: Option<Ticker>,
    generation: u64,
}

/// An image-sequence player
///
/// Every player owns its own state and at most one running ticker.
/// Step and speed operations complete before returning. Ticks run on
/// the tokio runtime the player was created in.
pub struct Player<R: Renderer + 'static> {
    inner: Arc<Mutex<PlayerInner<R>>>,
    runtime: Handle,
}

impl<R: Renderer + 'static> Player<R> {
    /// Build a player, show frame 0 on every track and apply the speed control.
    ///
    /// Without a control surface nothing could ever start playback, so
    /// such a player starts playing right away.
    pub fn init(config: PlayerConfig, renderer: R) -> Result<Self, PlayerError> {
        let runtime = Handle::try_current().map_err(|_| PlayerError::NoRuntime)?;

        let mode = config.index_mode();
        let track_count = config.images_data.len();
        let engine = PlaybackEngine::new(
            config.images_data,
            mode,
            config.timing.time_interval,
            renderer,
        );

        let (panel, bindings, slider) = match config.controls {
            Some(controls) => (
                Some(TransportPanel::new(&controls)),
                ControlBindings::bind(&controls.sel),
                controls.slider,
            ),
            None => (None, ControlBindings::default(), None),
        };
        let autoplay = panel.is_none();

        let player = Self {
            inner: Arc::new(Mutex::new(PlayerInner {
                engine,
                panel,
                bindings,
                mapping: config.timing.into(),
                ticker: None,
                generation: 0,
            })),
            runtime,
        };

        info!("Player initialized: {} tracks, {:?}", track_count, mode);

        player.step_first();
        if let Some(reading) = slider {
            player.set_speed_reading(&reading);
        }
        if autoplay {
            player.play();
        }

        Ok(player)
    }

    /// Start the ticker. No-op while running.
    pub fn play(&self) {
        self.perform(Action::Play);
    }

    /// Stop the ticker. No-op while stopped.
    pub fn pause(&self) {
        self.perform(Action::Pause);
    }

    /// Play/pause button behavior
    pub fn toggle(&self) {
        self.perform(Action::Toggle);
    }

    pub fn step_first(&self) {
        self.perform(Action::First);
    }

    pub fn step_last(&self) {
        self.perform(Action::Last);
    }

    pub fn step_back(&self) {
        self.perform(Action::Back);
    }

    pub fn step_forward(&self) {
        self.perform(Action::Forward);
    }

    /// Map a speed control value to a new tick interval.
    ///
    /// A running ticker is replaced by one at the new interval and the
    /// frame index is kept.
    pub fn set_speed(&self, value: f64, max: f64, min: f64) {
        self.perform(Action::Speed { value, max, min });
    }

    /// `set_speed` from the control's raw attributes
    pub fn set_speed_reading(&self, reading: &SpeedReading) {
        let mut inner = self.lock();
        let interval = reading.interval_with(&inner.mapping);
        self.apply_interval(&mut inner, interval);
    }

    /// Route a host event to the controls bound to its selector
    pub fn dispatch(&self, event: ControlEvent) {
        let mut inner = self.lock();
        let controls: Vec<Control> = inner.bindings.resolve(event.selector()).collect();

        if controls.is_empty() {
            warn!("No control bound to {}", event.selector());
            return;
        }

        for control in controls {
            match (&event, control) {
                (ControlEvent::Click { .. }, Control::Button(button)) => {
                    let disabled = inner
                        .panel
                        .as_ref()
                        .map_or(false, |panel| panel.is_disabled(button));
                    if disabled {
                        debug!("Ignoring click on disabled {:?}", button);
                        continue;
                    }
                    self.apply(&mut inner, button.into());
                }
                (ControlEvent::Change { reading, .. }, Control::Speed) => {
                    let interval = reading.interval_with(&inner.mapping);
                    self.apply_interval(&mut inner, interval);
                }
                _ => {}
            }
        }
    }

    /// Current frame index
    pub fn index(&self) -> usize {
        self.lock().engine.position()
    }

    /// Current frame index of every track
    pub fn track_indices(&self) -> Vec<usize> {
        self.lock().engine.track_positions()
    }

    pub fn state(&self) -> PlaybackState {
        if self.lock().ticker.is_some() {
            PlaybackState::Running
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    /// Current tick interval in ms, possibly NaN
    pub fn interval_ms(&self) -> f64 {
        self.lock().engine.interval_ms()
    }

    pub fn index_mode(&self) -> IndexMode {
        self.lock().engine.mode()
    }

    /// Snapshot of the transport buttons, if the player has them
    pub fn panel(&self) -> Option<TransportPanel> {
        self.lock().panel.clone()
    }

    /// Enable or disable a transport button from the host side
    pub fn set_button_disabled(&self, button: Button, disabled: bool) {
        if let Some(panel) = self.lock().panel.as_mut() {
            panel.set_disabled(button, disabled);
        }
    }

    /// Run `f` with the renderer
    ///
    /// The player stays locked while `f` runs, so `f` must not call back
    /// into this player or it deadlocks.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(self.lock().engine.renderer())
    }

    fn lock(&self) -> MutexGuard<'_, PlayerInner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn perform(&self, action: Action) {
        let mut inner = self.lock();
        self.apply(&mut inner, action);
    }

    fn apply(&self, inner: &mut PlayerInner<R>, action: Action) {
        match action {
            Action::Play => self.start(inner),
            Action::Pause => Self::stop(inner),
            Action::Toggle => {
                let transition = match inner.panel.as_mut() {
                    Some(panel) => panel.toggle(),
                    None if inner.ticker.is_some() => Transition::Pause,
                    None => Transition::Play,
                };
                match transition {
                    Transition::Play => self.start(inner),
                    Transition::Pause => Self::stop(inner),
                }
            }
            Action::First => inner.engine.step_first(),
            Action::Last => inner.engine.step_last(),
            Action::Back => {
                inner.engine.step_back();
            }
            Action::Forward => {
                inner.engine.step_forward();
            }
            Action::Speed { value, max, min } => {
                let interval = inner.mapping.interval_for(value, max, min);
                self.apply_interval(inner, interval);
            }
        }
    }

    fn apply_interval(&self, inner: &mut PlayerInner<R>, interval: f64) {
        inner.engine.set_interval_ms(interval);
        info!("Setting delay to {} ms", interval);

        if inner.ticker.is_some() {
            Self::stop(inner);
            self.start(inner);
        }
    }

    fn start(&self, inner: &mut PlayerInner<R>) {
        if inner.ticker.is_some() {
            return;
        }

        inner.generation += 1;
        let generation = inner.generation;
        let period = timer_period(inner.engine.interval_ms());
        let weak = Arc::downgrade(&self.inner);

        inner.ticker = Some(Ticker::spawn(&self.runtime, generation, period, move || {
            let Some(shared) = weak.upgrade() else {
                return false;
            };
            let mut inner = shared.lock().unwrap_or_else(PoisonError::into_inner);
            // A replaced ticker may still wake once after being cancelled
            if inner.ticker.as_ref().map(Ticker::generation) != Some(generation) {
                return false;
            }
            inner.engine.tick();
            true
        }));

        debug!("Playback started (ticker {}, every {:?})", generation, period);
    }

    fn stop(inner: &mut PlayerInner<R>) {
        if let Some(ticker) = inner.ticker.take() {
            debug!(
                "Playback stopped (ticker {}, every {:?})",
                ticker.generation(),
                ticker.period()
            );
            ticker.cancel();
        }
    }
}
