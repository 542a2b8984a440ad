//! Headless orrery run.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orrery-app -- --focus jupiter --frames 150` to watch
//! a camera transition in the log.

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use orrery_app::{FrameClock, Orrery, PlatformDirs, sbdb};
use orrery_config::{CliArgs, Config};
use tracing::{debug, error, info, warn};

/// Simulated display refresh rate for the headless loop.
const FRAME_RATE: f64 = 60.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => match PlatformDirs::resolve_and_create() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to initialize platform directories: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let at = match args.date.as_deref().map(DateTime::parse_from_rfc3339) {
        None => Utc::now(),
        Some(Ok(date)) => date.with_timezone(&Utc),
        Some(Err(e)) => {
            error!("Invalid --date: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut orrery = Orrery::new(&config, at);

    // Fall back to the cached catalogue when none is given.
    let cached = dirs.catalogue_path();
    let catalogue = match &args.small_bodies {
        Some(path) => Some(path.clone()),
        None => cached.is_file().then_some(cached),
    };
    if let Some(path) = &catalogue {
        match sbdb::load_catalogue(path) {
            Ok(bodies) => orrery.add_small_bodies(bodies),
            Err(e) => warn!("Skipping small bodies from {}: {e}", path.display()),
        }
    }

    if let Some(name) = &args.focus {
        orrery.focus(name);
    }

    let frames = args
        .frames
        .unwrap_or_else(|| (f64::from(config.animation.duration_s) * FRAME_RATE).ceil() as u32 + 1);

    info!(
        "Orrery at {} | {} bodies | {}x{} | {} frames",
        orrery.time(),
        orrery.bodies().len(),
        config.window.width,
        config.window.height,
        frames
    );

    let mut clock = FrameClock::new();
    let mut labels = Vec::new();
    for frame in 0..=frames {
        let delta = clock.tick(f64::from(frame) / FRAME_RATE);
        labels = orrery.frame(delta);
        debug!(
            frame,
            fov = orrery.rig().fov_deg(),
            distance_au = orrery.camera_distance_au(),
            "frame"
        );
    }

    let rig = orrery.rig();
    info!(
        "Camera: target ({:.3}, {:.3}, {:.3}) | distance {:.6} AU | fov {:.1}° | animating: {}",
        rig.target.x,
        rig.target.y,
        rig.target.z,
        orrery.camera_distance_au(),
        rig.fov_deg(),
        orrery.is_animating()
    );
    if let Some(body) = orrery.focused() {
        info!("Focused: {}", body.name);
    }
    for label in labels.iter().filter(|l| l.projection.interactive) {
        info!(
            "Label {:<12} at ({:>7.1}, {:>7.1}) opacity {:.2}",
            label.name, label.projection.x, label.projection.y, label.projection.opacity
        );
    }

    ExitCode::SUCCESS
}
