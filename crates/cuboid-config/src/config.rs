//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level rig configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Rig geometry settings.
    pub rig: RigConfig,
    /// Capture output settings.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Rig geometry configuration.
///
/// Any edit must be followed by a geometry re-application before the rig
/// is next observed; persistence itself never touches the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    /// Display name; face nodes are named `"<name> <tag>"`.
    pub name: String,
    /// Box width (X) in world units.
    pub width: f32,
    /// Box height (Y) in world units.
    pub height: f32,
    /// Box depth (Z) in world units.
    pub depth: f32,
    /// Vertical split between the up and down faces, in [-0.5, 0.5].
    pub horizon_level: f32,
    /// Near clip distance as a multiple of each face's half-depth.
    pub near_clip_factor: f32,
    /// Far clip distance as a multiple of each face's half-depth.
    pub far_clip_factor: f32,
    /// Which faces participate in capture planning.
    pub faces: FaceMask,
    /// How face cameras route their output.
    pub output_mode: OutputMode,
}

/// Per-face enable mask for capture planning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FaceMask {
    pub front: bool,
    pub right: bool,
    pub back: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl FaceMask {
    /// The mask as an array in capture order
    /// (front, right, back, left, up, down).
    pub fn as_array(&self) -> [bool; 6] {
        [
            self.front, self.right, self.back, self.left, self.up, self.down,
        ]
    }
}

impl Default for FaceMask {
    fn default() -> Self {
        Self {
            front: true,
            right: true,
            back: true,
            left: true,
            up: true,
            down: true,
        }
    }
}

/// How the six face cameras route their rendered output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputMode {
    /// All faces composite onto one shared surface, stacked by face index.
    #[default]
    SharedTarget,
    /// Each face renders to its own dedicated surface.
    PerFaceTargets,
}

/// Capture output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Requested horizontal resolution (0 = infer from aspect ratios).
    pub resolution_x: u32,
    /// Requested vertical resolution (0 = infer from aspect ratios).
    pub resolution_y: u32,
    /// Requested depth-axis resolution (0 = infer from aspect ratios).
    pub resolution_z: u32,
    /// Root folder for recorded frame sequences.
    pub folder: String,
    /// Capture frame rate shared by all faces.
    pub frame_rate: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            name: "Cuboid Rig".to_string(),
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            horizon_level: 0.0,
            near_clip_factor: 1.0,
            far_clip_factor: 10.0,
            faces: FaceMask::default(),
            output_mode: OutputMode::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resolution_x: 0,
            resolution_y: 1080,
            resolution_z: 0,
            folder: "CuboidRecordings".to_string(),
            frame_rate: 30.0,
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
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let mut config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.normalize();
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
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let mut new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.normalize();

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Enforce configuration-level constraints after deserialization.
    ///
    /// The horizon level is clamped here rather than in the geometry math,
    /// which assumes its inputs already satisfy the [-0.5, 0.5] constraint.
    pub fn normalize(&mut self) {
        self.rig.horizon_level = self.rig.horizon_level.clamp(-0.5, 0.5);
    }
}
