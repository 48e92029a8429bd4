pub mod config;
pub mod console;

pub use config::{load_config, ControlsConfig, PlayerConfig, Selectors, TimingConfig};
pub use console::{parse_command, HostCommand};
