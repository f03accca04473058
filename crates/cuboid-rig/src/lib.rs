//! Stateful orchestrator for the six-face cuboid camera rig.
//!
//! [`CuboidRig`] owns six face slots inside a host scene graph, drives
//! their (re)initialization, and re-applies the projection geometry from
//! `cuboid-geom` whenever the sensor dimensions or rig configuration
//! change. Structural changes are deferred through a dirty flag so the
//! scene graph is never mutated from inside an edit callback.

mod error;
mod rig;

pub use error::RigError;
pub use rig::{CuboidRig, FaceSlot, RigState, SENSOR_GATE_MM};
