//! Scene-graph and camera collaborator seam for the cuboid rig.
//!
//! The rig only needs a narrow slice of a host engine: create a named,
//! tagged child node with a local orientation, attach a camera-like render
//! source to it, edit that camera's physical projection parameters, and
//! destroy the node again. [`SceneGraph`] captures exactly that slice;
//! [`MemoryScene`] is an in-memory implementation used by the demo and the
//! rig's tests.

mod camera;
mod graph;

pub use camera::{CameraParams, GateFit, OutputRouting};
pub use graph::{MemoryScene, NodeId, SceneError, SceneGraph};
