//! Capture planning and frame-sequence recording for the cuboid rig.
//!
//! [`plan_capture_targets`] turns the rig's face mask and resolved output
//! resolution into one capture-target descriptor per enabled face;
//! [`RecorderSession`] consumes that plan and writes per-face PNG frame
//! sequences under a shared output root.

mod planner;
mod recorder;

pub use planner::{plan_capture_targets, CaptureTarget};
pub use recorder::{CaptureError, RecorderSession};
