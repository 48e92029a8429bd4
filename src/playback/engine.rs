use crate::core::Track;
use crate::playback::IndexMode;
use crate::render::{render, Renderer};

/// Frame stepping and rendering for a set of tracks
///
/// The engine knows nothing about timers: `tick` is called by whoever
/// schedules playback, and every other operation renders synchronously.
pub struct PlaybackEngine<R> {
    tracks: Vec<Track>,
    mode: IndexMode,
    current_image: usize,
    track_images: Vec<usize>,
    interval_ms: f64,
    renderer: R,
}

impl<R: Renderer> PlaybackEngine<R> {
    pub fn new(tracks: Vec<Track>, mode: IndexMode, interval_ms: f64, renderer: R) -> Self {
        let track_images = vec![0; tracks.len()];
        Self {
            tracks,
            mode,
            current_image: 0,
            track_images,
            interval_ms,
            renderer,
        }
    }

    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    /// Current frame index
    ///
    /// With per-track counters this is the first track's counter.
    pub fn position(&self) -> usize {
        match self.mode {
            IndexMode::Shared { .. } => self.current_image,
            IndexMode::PerTrack => self.track_images.first().copied().unwrap_or(0),
        }
    }

    /// Current frame index of every track
    pub fn track_positions(&self) -> Vec<usize> {
        match self.mode {
            IndexMode::Shared { .. } => vec![self.current_image; self.tracks.len()],
            IndexMode::PerTrack => self.track_images.clone(),
        }
    }

    /// Tick interval in ms, possibly NaN
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render the current frame, then move to the next one, wrapping at the end
    pub fn tick(&mut self) {
        self.render_current();
        match self.mode {
            IndexMode::Shared { total_frames } => {
                self.current_image = wrap(self.current_image + 1, total_frames);
            }
            IndexMode::PerTrack => {
                for (counter, track) in self.track_images.iter_mut().zip(&self.tracks) {
                    *counter = wrap(*counter + 1, frame_count(track));
                }
            }
        }
    }

    /// Jump to frame 0
    pub fn step_first(&mut self) {
        self.current_image = 0;
        self.track_images.iter_mut().for_each(|c| *c = 0);
        self.render_current();
    }

    /// Jump to the last frame
    pub fn step_last(&mut self) {
        match self.mode {
            IndexMode::Shared { total_frames } => {
                self.current_image = total_frames.saturating_sub(1);
            }
            IndexMode::PerTrack => {
                for (counter, track) in self.track_images.iter_mut().zip(&self.tracks) {
                    *counter = frame_count(track).saturating_sub(1);
                }
            }
        }
        self.render_current();
    }

    /// Go back one frame unless already at frame 0
    pub fn step_back(&mut self) -> bool {
        match self.mode {
            IndexMode::Shared { .. } => {
                if self.current_image == 0 {
                    return false;
                }
                self.current_image -= 1;
                self.render_current();
                true
            }
            IndexMode::PerTrack => self.step_each(|counter, _| {
                (counter > 0).then(|| counter - 1)
            }),
        }
    }

    /// Go forward one frame unless already at the last frame
    pub fn step_forward(&mut self) -> bool {
        match self.mode {
            IndexMode::Shared { total_frames } => {
                if self.current_image >= total_frames.saturating_sub(1) {
                    return false;
                }
                self.current_image += 1;
                self.render_current();
                true
            }
            IndexMode::PerTrack => self.step_each(|counter, frames| {
                (counter < frames.saturating_sub(1)).then(|| counter + 1)
            }),
        }
    }

    /// Render every track at its current frame
    pub fn render_current(&mut self) {
        match self.mode {
            IndexMode::Shared { .. } => {
                for track in &self.tracks {
                    render(&mut self.renderer, track, self.current_image);
                }
            }
            IndexMode::PerTrack => {
                for (track, &counter) in self.tracks.iter().zip(&self.track_images) {
                    render(&mut self.renderer, track, counter);
                }
            }
        }
    }

    /// Move each per-track counter with `step`, rendering only the tracks that moved
    fn step_each<F>(&mut self, step: F) -> bool
    where
        F: Fn(usize, usize) -> Option<usize>,
    {
        let mut moved = false;
        for (track, counter) in self.tracks.iter().zip(self.track_images.iter_mut()) {
            if let Some(next) = step(*counter, frame_count(track)) {
                *counter = next;
                render(&mut self.renderer, track, next);
                moved = true;
            }
        }
        moved
    }
}

fn frame_count(track: &Track) -> usize {
    track.num_images.unwrap_or(0)
}

/// `index % total`, with an empty sequence pinned at 0
fn wrap(index: usize, total: usize) -> usize {
    index.checked_rem(total).unwrap_or(0)
}
