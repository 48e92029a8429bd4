use crate::render::Renderer;
use std::sync::{Arc, Mutex, PoisonError};

/// One recorded source change
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub target: String,
    pub path: String,
}

/// Fake renderer for tests
///
/// Clones share one log, so a test can keep a clone after handing the
/// renderer to a player and inspect what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<Vec<RenderedFrame>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<RenderedFrame> {
        std::mem::take(&mut *self.log.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Drain and keep only the paths
    pub fn take_paths(&self) -> Vec<String> {
        self.take().into_iter().map(|f| f.path).collect()
    }

    /// Paths recorded for one target, without draining
    pub fn paths_for(&self, target: &str) -> Vec<String> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|f| f.target == target)
            .map(|f| f.path.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Renderer for RecordingRenderer {
    fn set_image_source(&mut self, target: &str, path: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RenderedFrame {
                target: target.to_string(),
                path: path.to_string(),
            });
    }
}
