pub mod log;
#[cfg(test)]
pub mod recorder;

pub use log::TracingRenderer;
#[cfg(test)]
pub use recorder::RecordingRenderer;

use crate::core::Track;

/// Capability to display a frame on an image element
///
/// This is the only way the player touches its host. Implementations:
/// - `TracingRenderer` for the console host
/// - `RecordingRenderer` for tests
pub trait Renderer: Send {
    /// Set the image source of element `target` to `path`
    fn set_image_source(&mut self, target: &str, path: &str);
}

/// Show frame `index` of `track`
pub fn render<R: Renderer + ?Sized>(renderer: &mut R, track: &Track, index: usize) {
    let path = track.source_for(index);
    renderer.set_image_source(&track.id, &path);
}
