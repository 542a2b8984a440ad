//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, MotionKind};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Solar system orrery")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulation instant as RFC 3339 (defaults to now).
    #[arg(long)]
    pub date: Option<String>,

    /// Body to focus once the scene is built.
    #[arg(long)]
    pub focus: Option<String>,

    /// Number of frames to simulate before exiting.
    #[arg(long)]
    pub frames: Option<u32>,

    /// SBDB query result (JSON) with small bodies to add.
    #[arg(long)]
    pub small_bodies: Option<PathBuf>,

    /// Use the warp path for target transitions.
    #[arg(long)]
    pub warp: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.warp {
            self.animation.motion = MotionKind::Warp;
        }
    }
}
