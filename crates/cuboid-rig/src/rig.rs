use glam::Vec3;
use tracing::{debug, info, warn};

use cuboid_config::{OutputMode, RigConfig};
use cuboid_geom::{compute_face_projection, Face, SensorDimensions, FACES};
use cuboid_scene::{GateFit, NodeId, OutputRouting, SceneGraph};

use crate::RigError;

/// Reference gate the face aspect is scaled onto, in millimeters. Camera
/// sensor sizes are conventionally expressed against a 36mm gate.
pub const SENSOR_GATE_MM: f32 = 36.0;

/// Lifecycle state of the rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigState {
    /// No face slots exist yet.
    Uninitialized,
    /// Six face slots exist and carry applied geometry.
    Ready,
}

/// One owned face slot: a tagged child node with a camera attached.
#[derive(Clone, Copy, Debug)]
pub struct FaceSlot {
    /// Which face this slot renders.
    pub face: Face,
    /// The scene node owning the face's camera.
    pub node: NodeId,
}

/// Orchestrator owning the six face slots of a cuboid camera rig.
///
/// The rig exclusively owns its slots end-to-end: [`initialize`]
/// destroys any prior slots and recreates all six, invalidating external
/// references to the old nodes. All methods assume a single-threaded host
/// update loop; the host must serialize initialization against reads.
///
/// [`initialize`]: CuboidRig::initialize
pub struct CuboidRig {
    root: NodeId,
    config: RigConfig,
    state: RigState,
    slots: [Option<FaceSlot>; 6],
    pending_reinitialize: bool,
    geometry_dirty: bool,
}

impl CuboidRig {
    /// Create an uninitialized rig under the given root node.
    pub fn new(root: NodeId, config: RigConfig) -> Self {
        Self {
            root,
            config,
            state: RigState::Uninitialized,
            slots: [None; 6],
            pending_reinitialize: false,
            geometry_dirty: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RigState {
        self.state
    }

    /// The rig's active configuration.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// The slot for a face, if the rig is initialized.
    pub fn slot(&self, face: Face) -> Option<&FaceSlot> {
        self.slots[face.index()].as_ref()
    }

    /// Number of live face slots (0 or 6).
    pub fn slot_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Sensor dimensions from the active configuration.
    pub fn sensor_dimensions(&self) -> SensorDimensions {
        SensorDimensions::new(self.config.width, self.config.height, self.config.depth)
    }

    /// Replace the rig configuration. Geometry is re-applied on the next
    /// [`tick`](CuboidRig::tick); the scene is not touched here so this is
    /// safe to call from inside an edit callback.
    pub fn set_config(&mut self, mut config: RigConfig) {
        config.horizon_level = config.horizon_level.clamp(-0.5, 0.5);
        self.config = config;
        self.geometry_dirty = true;
    }

    /// Edit just the sensor dimensions. Same deferral rules as
    /// [`set_config`](CuboidRig::set_config).
    pub fn set_dimensions(&mut self, width: f32, height: f32, depth: f32) {
        self.config.width = width;
        self.config.height = height;
        self.config.depth = depth;
        self.geometry_dirty = true;
    }

    /// Mark the rig for a full teardown-and-rebuild on the next tick.
    pub fn request_reinitialize(&mut self) {
        self.pending_reinitialize = true;
    }

    /// Process a pending reinitialize and any dirty geometry. Call once
    /// per host frame, outside of any in-progress edit callback. Returns
    /// true if the scene was touched.
    pub fn tick(&mut self, scene: &mut dyn SceneGraph) -> Result<bool, RigError> {
        if self.pending_reinitialize {
            self.pending_reinitialize = false;
            match self.initialize(scene) {
                Ok(()) => return Ok(true),
                // A refused rebuild must not delay dirty geometry a frame;
                // fall through so pending config edits still apply now.
                Err(RigError::ReinitializeRefused) => {}
                Err(e) => return Err(e),
            }
        }
        if self.geometry_dirty && self.state == RigState::Ready {
            self.apply_geometry(scene)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Destroy any existing face slots and create all six anew, then apply
    /// geometry. Re-entrant: calling this while `Ready` tears down and
    /// recreates every slot, invalidating external references to the old
    /// nodes.
    ///
    /// Refused (with a warning, rig unchanged) while the root node is a
    /// linked template instance — structural edits under a shared template
    /// would propagate to every linked copy.
    pub fn initialize(&mut self, scene: &mut dyn SceneGraph) -> Result<(), RigError> {
        if scene.is_template_instance(self.root) {
            warn!(rig = %self.config.name, "reinitialize refused on template instance");
            return Err(RigError::ReinitializeRefused);
        }

        info!(rig = %self.config.name, "initializing cuboid rig faces");
        self.teardown(scene);

        for face in FACES {
            let name = format!("{} {}", self.config.name, face.tag());
            let created = scene.create_child(self.root, &name, face.tag(), face.rotation());
            let node = match created {
                Ok(node) => node,
                Err(e) => {
                    // Release the slots already created so a failed
                    // initialize never leaks half a rig.
                    self.teardown(scene);
                    self.state = RigState::Uninitialized;
                    return Err(e.into());
                }
            };
            if let Err(e) = scene.attach_camera(node) {
                let _ = scene.destroy_node(node);
                self.teardown(scene);
                self.state = RigState::Uninitialized;
                return Err(e.into());
            }
            self.slots[face.index()] = Some(FaceSlot { face, node });
        }

        self.state = RigState::Ready;
        self.apply_geometry(scene)
    }

    /// Recompute and apply projection parameters to all six face cameras.
    ///
    /// Idempotent: repeated calls with unchanged inputs write identical
    /// values. When any sensor dimension is non-positive the recomputation
    /// is skipped and every slot keeps its prior valid geometry.
    pub fn apply_geometry(&mut self, scene: &mut dyn SceneGraph) -> Result<(), RigError> {
        if self.state != RigState::Ready {
            return Err(RigError::NotInitialized);
        }

        let dims = self.sensor_dimensions();
        if !dims.is_valid() {
            debug!(?dims, "sensor dimensions undefined; keeping prior geometry");
            self.geometry_dirty = false;
            return Ok(());
        }

        for face in FACES {
            let slot = self.slots[face.index()].ok_or(RigError::NotInitialized)?;
            let Some(proj) = compute_face_projection(
                face,
                dims,
                self.config.horizon_level,
                self.config.near_clip_factor,
                self.config.far_clip_factor,
            ) else {
                continue;
            };

            let routing = match self.config.output_mode {
                OutputMode::SharedTarget => OutputRouting::Shared {
                    draw_order: face.index() as u32,
                },
                OutputMode::PerFaceTargets => OutputRouting::Dedicated {
                    surface_index: face.index() as u32,
                },
            };

            let cam = scene.camera_mut(slot.node)?;
            cam.physical = true;
            cam.gate_fit = GateFit::None;
            cam.sensor_size = proj.aspect * SENSOR_GATE_MM;
            cam.fov_y_degrees = proj.fov_y_degrees;
            cam.lens_shift = proj.lens_shift;
            cam.near_clip = proj.near_clip;
            cam.far_clip = proj.far_clip;
            cam.routing = routing;

            scene.set_local_position(slot.node, Vec3::Y * proj.position_offset)?;
        }

        self.geometry_dirty = false;
        Ok(())
    }

    /// Destroy all existing slots. Destroying an already-destroyed node is
    /// a no-op in the scene seam, so stale handles are harmless here.
    fn teardown(&mut self, scene: &mut dyn SceneGraph) {
        for slot in self.slots.iter_mut() {
            if let Some(s) = slot.take() {
                let _ = scene.destroy_node(s.node);
            }
        }
    }
}
