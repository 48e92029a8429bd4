mod controls;
mod core;
mod input;
mod playback;
mod player;
mod render;

use anyhow::{Context, Result};
use controls::ControlEvent;
use input::{load_config, parse_command, HostCommand, PlayerConfig};
use playback::SpeedReading;
use player::Player;
use render::TracingRenderer;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Speed control attributes when the config declares none
fn default_slider() -> SpeedReading {
    SpeedReading::new("50", "0", "100")
}

/// The console's speed control, also written into the config so the
/// player starts from the same reading later change events report
fn host_slider(config: &mut PlayerConfig) -> SpeedReading {
    match config.controls.as_mut() {
        Some(controls) => controls.slider.get_or_insert_with(default_slider).clone(),
        None => default_slider(),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: seqplay <config.json>")?;
    let config = load_config(&path)?;

    // Create tokio runtime for the playback timers
    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(run(config))
}

/// Console host: each stdin line is a click or change event on the page
async fn run(mut config: PlayerConfig) -> Result<()> {
    let mut slider = host_slider(&mut config);
    let first_track = config.images_data.first().map(|track| track.id.clone());

    let player = Player::init(config, TracingRenderer::new())?;
    info!("Commands: click <selector> | change <selector> <value> | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(HostCommand::Click(selector)) => player.dispatch(ControlEvent::Click { selector }),
            Ok(HostCommand::Change { selector, value }) => {
                slider.value = value;
                player.dispatch(ControlEvent::Change {
                    selector,
                    reading: slider.clone(),
                });
            }
            Ok(HostCommand::Quit) => break,
            Ok(HostCommand::Nothing) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        }

        let showing = first_track
            .as_deref()
            .and_then(|id| player.with_renderer(|r| r.source(id).map(str::to_string)));
        info!(
            "frame {} ({:?}, {} ms){}",
            player.index(),
            player.state(),
            player.interval_ms(),
            showing.map(|src| format!(" showing {}", src)).unwrap_or_default()
        );
        if let Some(panel) = player.panel() {
            debug!(
                "play/pause button: {} (icon {})",
                panel.marker().class_name(),
                panel.icon_class()
            );
        }
    }

    player.pause();
    info!("{} frame updates", player.with_renderer(|r| r.updates()));
    Ok(())
}
