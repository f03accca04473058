//! Demo binary that assembles a cuboid rig in an in-memory scene, applies
//! its projection geometry, and records a short synthetic frame sequence
//! per face.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p cuboid-demo -- --width 3 --height 2
//! --depth 5` to capture a non-cubic box.

use clap::Parser;
use tracing::{info, warn};

use cuboid_capture::{plan_capture_targets, CaptureTarget, RecorderSession};
use cuboid_config::{CliArgs, Config};
use cuboid_geom::{
    resolve_output_dimensions, Face, OutputResolutionRequest, ResolvedResolution, FACES,
};
use cuboid_rig::CuboidRig;
use cuboid_scene::{MemoryScene, SceneGraph};

/// Frames recorded per face before the horizon edit, and again after.
const FRAMES_PER_PHASE: u32 = 2;

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("cuboid-rig")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    cuboid_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    run(config);
}

fn run(config: Config) {
    let mut scene = MemoryScene::new(&config.rig.name);
    let mut rig = CuboidRig::new(scene.root(), config.rig.clone());

    if let Err(e) = rig.initialize(&mut scene) {
        tracing::error!("rig initialization failed: {e}");
        return;
    }
    log_face_geometry(&scene, &rig);

    // Resolve the output resolution triple; fall back to a fixed square
    // default when the request leaves every axis unset.
    let request = OutputResolutionRequest::new(
        config.output.resolution_x,
        config.output.resolution_y,
        config.output.resolution_z,
    );
    let resolution = resolve_output_dimensions(rig.sensor_dimensions(), request)
        .unwrap_or_else(|| {
            warn!("output resolution request is undefined, falling back to 256^3");
            ResolvedResolution {
                x: 256,
                y: 256,
                z: 256,
            }
        });
    info!(
        x = resolution.x,
        y = resolution.y,
        z = resolution.z,
        "resolved output resolution"
    );

    let targets = plan_capture_targets(
        config.rig.faces.as_array(),
        rig.sensor_dimensions(),
        resolution,
    );
    for target in &targets {
        info!(
            tag = target.tag,
            width = target.pixel_width,
            height = target.pixel_height,
            index = target.face_index,
            "planned capture target"
        );
    }

    let mut session = RecorderSession::new(
        &config.output.folder,
        config.output.frame_rate,
        targets.clone(),
    );
    if let Err(e) = session.start() {
        tracing::error!("failed to start recorder session: {e}");
        return;
    }

    record_phase(&mut session, &targets);

    // Raise the horizon mid-session; geometry re-applies on the next tick.
    let mut edited = rig.config().clone();
    edited.horizon_level = 0.25;
    rig.set_config(edited);
    match rig.tick(&mut scene) {
        Ok(applied) => info!(applied, "host tick after horizon edit"),
        Err(e) => warn!("tick failed: {e}"),
    }
    log_face_geometry(&scene, &rig);

    record_phase(&mut session, &targets);
    session.stop();
}

/// Record one synthetic frame per planned target.
fn record_phase(session: &mut RecorderSession, targets: &[CaptureTarget]) {
    for _ in 0..FRAMES_PER_PHASE {
        for target in targets {
            let pixels = synthetic_frame(target);
            if let Err(e) = session.record_frame(target.tag, &pixels) {
                warn!(tag = target.tag, "dropped frame: {e}");
            }
        }
    }
}

/// Flat-color RGBA frame, one distinct color per face so sequences are
/// easy to tell apart when inspected.
fn synthetic_frame(target: &CaptureTarget) -> Vec<u8> {
    let color = face_color(target.face);
    let pixel_count = target.pixel_width as usize * target.pixel_height as usize;
    let mut pixels = Vec::with_capacity(pixel_count * 4);
    for _ in 0..pixel_count {
        pixels.extend_from_slice(&color);
    }
    pixels
}

fn face_color(face: Face) -> [u8; 4] {
    match face {
        Face::Front => [220, 60, 60, 255],
        Face::Right => [60, 220, 60, 255],
        Face::Back => [60, 60, 220, 255],
        Face::Left => [220, 220, 60, 255],
        Face::Up => [220, 60, 220, 255],
        Face::Down => [60, 220, 220, 255],
    }
}

fn log_face_geometry(scene: &MemoryScene, rig: &CuboidRig) {
    for face in FACES {
        let Some(slot) = rig.slot(face) else {
            continue;
        };
        let Ok(cam) = scene.camera(slot.node) else {
            continue;
        };
        info!(
            tag = face.tag(),
            fov = format!("{:.2}", cam.fov_y_degrees),
            near = cam.near_clip,
            far = cam.far_clip,
            "face geometry"
        );
    }
}
