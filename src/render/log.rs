use crate::render::Renderer;
use std::collections::HashMap;
use tracing::debug;

/// Renderer for hosts without image elements: logs every source change
/// and remembers the current source of each target.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    sources: HashMap<String, String>,
    updates: u64,
}

impl TracingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current source of `target`, if it was ever set
    pub fn source(&self, target: &str) -> Option<&str> {
        self.sources.get(target).map(String::as_str)
    }

    /// Number of source changes so far
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Renderer for TracingRenderer {
    fn set_image_source(&mut self, target: &str, path: &str) {
        debug!("#{} src={}", target, path);
        self.updates += 1;
        self.sources.insert(target.to_string(), path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Track;
    use crate::render::render;

    #[test]
    fn test_tracing_renderer_keeps_last_source() {
        let mut renderer = TracingRenderer::new();
        let track = Track::new("clouds", "c_", "img");

        render(&mut renderer, &track, 3);
        render(&mut renderer, &track, 4);

        assert_eq!(renderer.source("clouds"), Some("img/c_0004.png"));
        assert_eq!(renderer.source("missing"), None);
        assert_eq!(renderer.updates(), 2);
    }
}
