use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Track;
use crate::playback::{IndexMode, SpeedReading};

/// Everything a player needs at initialization
///
/// Matches the page-level JSON:
/// ```json
/// {
///   "num_images": 48,
///   "images_data": [{"id": "map", "image_prefix": "map_", "image_dir": "img"}],
///   "controls": {
///     "sel": {"fbackward": "#first", "backward": "#back", "play_pause": "#play",
///             "forward": "#fwd", "fforward": "#last", "speed": "#speed"},
///     "play_class": "icon-play", "pause_class": "icon-pause"
///   }
/// }
/// ```
/// Nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Shared frame count. Absent means every track counts on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_images: Option<usize>,

    #[serde(default)]
    pub images_data: Vec<Track>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlsConfig>,

    #[serde(default)]
    pub timing: TimingConfig,
}

/// Control-surface wiring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    pub sel: Selectors,

    /// Icon class shown while paused
    pub play_class: String,

    /// Icon class shown while playing
    pub pause_class: String,

    /// Attributes of the speed control as the page declares them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider: Option<SpeedReading>,
}

/// Selectors of the five transport buttons and the speed control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selectors {
    pub fbackward: String,
    pub backward: String,
    pub play_pause: String,
    pub forward: String,
    pub fforward: String,
    pub speed: String,
}

/// Tick interval bounds, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fastest interval, reached at the speed control's maximum
    pub min_time_interval: f64,
    /// Slowest interval, reached at the speed control's minimum
    pub max_time_interval: f64,
    /// Interval used until a speed reading arrives
    pub time_interval: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_time_interval: 100.0,
            max_time_interval: 2000.0,
            time_interval: 500.0,
        }
    }
}

impl PlayerConfig {
    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid player config")
    }

    /// How the frame index is kept for this config
    pub fn index_mode(&self) -> IndexMode {
        match self.num_images {
            Some(total_frames) => IndexMode::Shared { total_frames },
            None => IndexMode::PerTrack,
        }
    }
}

/// Load a player config from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<PlayerConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    PlayerConfig::from_json(&text).with_context(|| format!("Failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICH: &str = r##"{
        "num_images": 48,
        "images_data": [
            {"id": "map", "image_prefix": "map_", "image_dir": "img/map"},
            {"id": "graph", "image_prefix": "graph_", "image_dir": "img/graph"}
        ],
        "controls": {
            "sel": {"fbackward": "#first", "backward": "#back", "play_pause": "#play",
                    "forward": "#fwd", "fforward": "#last", "speed": "#speed"},
            "play_class": "icon-play",
            "pause_class": "icon-pause",
            "slider": {"value": "50", "min": "0", "max": "100"}
        }
    }"##;

    #[test]
    fn test_parse_rich_config() {
        let config = PlayerConfig::from_json(RICH).unwrap();
        assert_eq!(config.index_mode(), IndexMode::Shared { total_frames: 48 });
        assert_eq!(config.images_data.len(), 2);
        assert_eq!(config.images_data[1].image_dir, "img/graph");

        let controls = config.controls.unwrap();
        assert_eq!(controls.sel.play_pause, "#play");
        assert_eq!(controls.pause_class, "icon-pause");
        assert_eq!(controls.slider.unwrap().value, "50");
        assert_eq!(config.timing, TimingConfig::default());
    }

    #[test]
    fn test_parse_per_track_config() {
        let config = PlayerConfig::from_json(
            r#"{"images_data": [
                {"id": "a", "image_prefix": "a_", "image_dir": "img", "num_images": 10},
                {"id": "b", "image_prefix": "b_", "image_dir": "img", "num_images": 3}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.index_mode(), IndexMode::PerTrack);
        assert!(config.controls.is_none());
        assert_eq!(config.images_data[1].num_images, Some(3));
    }

    #[test]
    fn test_partial_timing_keeps_defaults() {
        let config = PlayerConfig::from_json(
            r#"{"num_images": 2, "images_data": [], "timing": {"max_time_interval": 4000}}"#,
        )
        .unwrap();
        assert_eq!(config.timing.max_time_interval, 4000.0);
        assert_eq!(config.timing.min_time_interval, 100.0);
        assert_eq!(config.timing.time_interval, 500.0);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/seqplay.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
