//! Command-line argument parsing for the cuboid rig tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Cuboid rig command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cuboid", about = "Cuboid camera rig")]
pub struct CliArgs {
    /// Box width in world units.
    #[arg(long)]
    pub width: Option<f32>,

    /// Box height in world units.
    #[arg(long)]
    pub height: Option<f32>,

    /// Box depth in world units.
    #[arg(long)]
    pub depth: Option<f32>,

    /// Horizon level in [-0.5, 0.5].
    #[arg(long)]
    pub horizon: Option<f32>,

    /// Requested vertical output resolution in pixels.
    #[arg(long)]
    pub output_height: Option<u32>,

    /// Root folder for recorded frame sequences.
    #[arg(long)]
    pub folder: Option<String>,

    /// Capture frame rate.
    #[arg(long)]
    pub frame_rate: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.rig.width = w;
        }
        if let Some(h) = args.height {
            self.rig.height = h;
        }
        if let Some(d) = args.depth {
            self.rig.depth = d;
        }
        if let Some(level) = args.horizon {
            self.rig.horizon_level = level;
        }
        if let Some(py) = args.output_height {
            self.output.resolution_y = py;
        }
        if let Some(ref folder) = args.folder {
            self.output.folder = folder.clone();
        }
        if let Some(rate) = args.frame_rate {
            self.output.frame_rate = rate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(3.0),
            depth: Some(5.0),
            output_height: Some(720),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.rig.width, 3.0);
        assert_eq!(config.rig.depth, 5.0);
        assert_eq!(config.output.resolution_y, 720);
        // Non-overridden fields retain defaults
        assert_eq!(config.rig.height, 1.0);
        assert_eq!(config.output.frame_rate, 30.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_horizon_is_clamped() {
        let mut config = Config::default();
        let args = CliArgs {
            horizon: Some(-2.0),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.rig.horizon_level, -0.5);
    }
}
