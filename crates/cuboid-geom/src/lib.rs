//! Pure face-projection and output-resolution math for the cuboid camera rig.

mod face;
mod projection;
mod resolve;

pub use face::{Axis, Face, FACES};
pub use projection::{
    compute_all_projections, compute_face_projection, FaceProjection, SensorDimensions,
};
pub use resolve::{resolve_output_dimensions, OutputResolutionRequest, ResolvedResolution};
