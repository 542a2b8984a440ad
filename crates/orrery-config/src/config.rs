//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewport settings.
    pub window: WindowConfig,
    /// Camera transition timing and path.
    pub animation: AnimationConfig,
    /// Camera lens and zoom limits.
    pub camera: CameraConfig,
    /// Body label layout.
    pub labels: LabelConfig,
    /// Scene unit scale.
    pub scale: ScaleConfig,
    /// Orbit solving.
    pub orbits: OrbitConfig,
    /// Orbit trail settings.
    pub trails: TrailConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
}

/// Path the look-at target takes between bodies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MotionKind {
    /// Smooth eased blend.
    #[default]
    Blend,
    /// Fixed-reach departure and arrival legs.
    Warp,
}

/// Camera animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Transition length in seconds.
    pub duration_s: f32,
    /// Cubic Bézier control values `[p0, p1, p2, p3]` of the easing curve.
    pub easing: [f32; 4],
    /// Look-at target path.
    pub motion: MotionKind,
    /// Eased factor where a warp switches from departure to arrival.
    pub warp_threshold: f32,
    /// Warp departure reach in scene units.
    pub warp_departure: f32,
    /// Warp arrival reach in scene units.
    pub warp_arrival: f32,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Resting vertical field of view in degrees.
    pub min_fov_deg: f32,
    /// Widest field of view during a transition.
    pub max_fov_deg: f32,
    /// Largest zoom distance in scene units.
    pub max_distance: f32,
    /// Framing distance as a multiple of the subject's largest extent.
    pub framing_factor: f32,
    /// Initial distance from the Sun in scene units.
    pub distance: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

/// Label configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    /// Show body labels at all.
    pub visible: bool,
    /// Keep labels inside the viewport.
    pub clamp_to_viewport: bool,
    /// Half label width and height in pixels.
    pub half_label_size: [f32; 2],
    /// Edge margin in pixels.
    pub margin: f32,
    /// Falloff above which labels accept pointer input.
    pub interactive_threshold: f32,
}

/// Scene scale configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScaleConfig {
    /// Scene units per astronomical unit.
    pub world_units_per_au: f64,
}

/// Orbit solver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Solve at the fractional Julian day instead of the calendar day's
    /// Julian Day Number, so bodies move smoothly within a day.
    pub continuous_time: bool,
}

/// Orbit trail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    /// Build trails behind planets.
    pub enabled: bool,
    /// Start each trail at the planet's surface rather than its centre.
    pub clamp_to_surface: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_s: 2.0,
            easing: [0.0, 0.0, 1.0, 1.0],
            motion: MotionKind::Blend,
            warp_threshold: 0.5,
            warp_departure: 3.0,
            warp_arrival: 3.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_fov_deg: 50.0,
            max_fov_deg: 120.0,
            max_distance: 200.0,
            framing_factor: 1.5,
            distance: 30.0,
            near: 0.01,
            far: 50_000.0,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            visible: true,
            clamp_to_viewport: true,
            half_label_size: [40.0, 12.0],
            margin: 8.0,
            interactive_threshold: 0.2,
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            world_units_per_au: 20.0,
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clamp_to_surface: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join("config.ron");
        let write_error = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .struct_names(false)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join("config.ron"))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
